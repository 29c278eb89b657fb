//! Checkout route handler.

use axum::{Json, extract::State, http::StatusCode};
use nokhba_core::Order;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Delivery details collected by the checkout form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
}

/// Turn the cart into a pending order.
///
/// Responds `201 Created` with the order; the cart is empty afterwards.
#[instrument(skip(state, input))]
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<CheckoutInput>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = state
        .with_shop(|shop| shop.checkout(&input.customer_name, &input.city, &input.phone))??;
    Ok((StatusCode::CREATED, Json(order)))
}
