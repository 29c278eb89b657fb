//! Admin JSON API, nested under `/admin`.
//!
//! ```text
//! GET    /dashboard                  - Headline figures and recent orders
//! GET    /products?q=                - Catalog with optional name search
//! POST   /products                   - Create a product
//! PUT    /products/{id}              - Replace a product
//! DELETE /products/{id}              - Delete a product
//! GET    /orders?status=             - Orders, newest first
//! POST   /orders/{id}/status         - Change an order's status
//! GET    /settings                   - Site settings
//! PATCH  /settings                   - Merge a settings patch
//! PUT    /settings/name-servers/{i}  - Edit one name server
//! ```

pub mod dashboard;
pub mod orders;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the admin routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::show))
        .route("/products", get(products::index).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route("/orders", get(orders::index))
        .route("/orders/{id}/status", post(orders::set_status))
        .route("/settings", get(settings::show).patch(settings::update))
        .route(
            "/settings/name-servers/{index}",
            put(settings::set_name_server),
        )
}
