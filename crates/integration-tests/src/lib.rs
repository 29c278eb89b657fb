//! Integration tests for Nokhba.
//!
//! Tests drive the full router in process through `tower::ServiceExt::oneshot`;
//! no server or network is needed except for the webhook delivery tests,
//! which bind a loopback listener.
//!
//! # Test Categories
//!
//! - `storefront_flow` - Catalog, cart and checkout endpoints
//! - `admin_api` - Dashboard, product, order and settings administration
//! - `persistence` - State survives a restart on the file store
//! - `webhook_delivery` - Orders reach the configured webhook

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use nokhba_storefront::services::{LoggingNotifier, LoggingPixelInjector, OrderNotifier};
use nokhba_storefront::shop::Shop;
use nokhba_storefront::state::AppState;
use nokhba_storefront::store::StateStore;
use serde_json::Value;
use tower::ServiceExt;

/// A router over a shop, plus the store it persists to.
pub struct TestApp {
    pub router: Router,
    pub store: StateStore,
}

impl TestApp {
    /// Seeded shop over an in-memory store, logging notifier.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with(StateStore::in_memory(), Arc::new(LoggingNotifier))
    }

    /// Shop over `store` notifying through `notifier`.
    #[must_use]
    pub fn with(store: StateStore, notifier: Arc<dyn OrderNotifier>) -> Self {
        let shop = Shop::load(store.clone(), notifier, Arc::new(LoggingPixelInjector));
        Self {
            router: nokhba_storefront::app(AppState::new(shop)),
            store,
        }
    }

    /// Send one request and decode the JSON response body.
    ///
    /// Non-JSON bodies (such as `/health`) decode as a JSON string.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Add `product_id` to the cart `times` times.
    pub async fn add_to_cart(&self, product_id: &str, times: usize) {
        for _ in 0..times {
            let (status, _) = self
                .post("/cart/add", serde_json::json!({ "productId": product_id }))
                .await;
            assert_eq!(status, StatusCode::OK, "adding {product_id} to cart");
        }
    }

    /// Check out with valid customer details, returning the order JSON.
    pub async fn checkout(&self) -> Value {
        let (status, order) = self
            .post(
                "/checkout",
                serde_json::json!({
                    "customerName": "Ali",
                    "city": "Casablanca",
                    "phone": "0600000000",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "checkout failed: {order}");
        order
    }
}
