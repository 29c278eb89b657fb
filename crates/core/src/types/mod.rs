//! Core types for Nokhba.
//!
//! This module provides the data contracts shared by the storefront, the
//! admin surface and the CLI.

pub mod cart_item;
pub mod category;
pub mod customer;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod settings;
pub mod status;

pub use cart_item::CartItem;
pub use category::{Category, CategoryFilter};
pub use customer::CustomerDetails;
pub use id::*;
pub use order::{Order, OrderLine};
pub use price::{CURRENCY_CODE, Price};
pub use product::{DEFAULT_PRODUCT_IMAGE, Product, ProductDraft};
pub use settings::{SettingsPatch, SiteSettings, TrackingPixels};
pub use status::OrderStatus;
