//! Nokhba Core - Domain types and state managers.
//!
//! This crate provides the storefront's domain model, used by:
//! - `storefront` - HTTP storefront and admin API
//! - `cli` - Offline administration tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure state managers - no I/O, no
//! persistence, no HTTP clients. Each manager owns one slice of state and
//! exposes synchronous operations over it; persisting a slice after a
//! mutation is the caller's job.
//!
//! # Modules
//!
//! - [`types`] - Products, cart lines, orders, settings, IDs and prices
//! - [`catalog`] - Product CRUD, category filter and name search
//! - [`cart`] - Cart lines, quantities and totals
//! - [`orders`] - Checkout into orders, status changes, reporting
//! - [`settings`] - The site settings singleton
//! - [`dashboard`] - Admin headline figures
//! - [`seed`] - Starter catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod orders;
pub mod seed;
pub mod settings;
pub mod types;

pub use cart::Cart;
pub use catalog::Catalog;
pub use dashboard::DashboardStats;
pub use error::{DomainError, NotFound, ValidationError};
pub use orders::OrderBook;
pub use settings::Settings;
pub use types::*;
