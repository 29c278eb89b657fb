//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /categories             - Category navigation
//! GET  /tracking               - Configured tracking pixel IDs
//!
//! # Products
//! GET  /products?category=&q=  - Product listing
//! GET  /products/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart contents and total
//! GET  /cart/count             - Cart count badge
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//!
//! # Checkout
//! POST /checkout               - Place an order (201)
//!
//! # Admin
//! /admin/...                   - See [`admin`]
//! ```

pub mod admin;
pub mod cart;
pub mod catalog_meta;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront and admin API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog_meta::categories))
        .route("/tracking", get(catalog_meta::tracking))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::submit))
        // Admin API
        .nest("/admin", admin::routes())
}
