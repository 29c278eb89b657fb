//! Nokhba Storefront library.
//!
//! Serves the public storefront and the admin panel as one JSON API over a
//! single in-process [`shop::Shop`]. The binary in `main.rs` wires this up;
//! the CLI and the integration tests reuse the same pieces.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`store`] - JSON key/value persistence (file or memory)
//! - [`shop`] - State managers plus persistence and collaborators
//! - [`services`] - Order webhook and tracking pixel collaborators
//! - [`routes`] - Storefront and admin handlers
//! - [`middleware`] - Request ID
//! - [`state`] - Shared handler state
//! - [`error`] - `AppError` and its HTTP mapping

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod shop;
pub mod state;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use axum::{Router, routing::get};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::config::StorefrontConfig;
use crate::services::{DeliveryError, LoggingPixelInjector};
use crate::shop::Shop;
use crate::state::AppState;
use crate::store::{StateStore, StoreError};

/// Errors that prevent the shop from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Webhook client error: {0}")]
    Webhook(#[from] DeliveryError),
}

/// Open the configured store and load the shop from it.
///
/// # Errors
///
/// Returns `StartupError` if the data directory cannot be created or the
/// webhook HTTP client cannot be built.
pub fn load_shop(config: &StorefrontConfig) -> Result<Shop, StartupError> {
    let store = StateStore::from_config(config)?;
    let notifier = services::notifier_from_config(&config.webhook)?;
    Ok(Shop::load(store, notifier, Arc::new(LoggingPixelInjector)))
}

/// Build the full application router with its middleware stack.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(cors)
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
