//! Admin order management.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use nokhba_core::{Order, OrderId, OrderStatus};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    /// `pending`, `completed` or `cancelled`; absent lists every order.
    pub status: Option<String>,
}

/// Status change request body.
#[derive(Debug, Deserialize)]
pub struct StatusInput {
    pub status: String,
}

fn parse_status(raw: &str) -> Result<OrderStatus> {
    raw.parse().map_err(AppError::BadRequest)
}

/// Orders, newest first.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Vec<Order>>> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    let orders = state.with_shop(|shop| match status {
        Some(status) => shop
            .orders()
            .filter_by_status(status)
            .into_iter()
            .cloned()
            .collect(),
        None => shop.orders().list().to_vec(),
    })?;
    Ok(Json(orders))
}

/// Overwrite an order's status.
#[instrument(skip(state))]
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<StatusInput>,
) -> Result<Json<Order>> {
    let status = parse_status(&input.status)?;
    let id = OrderId::new(id);
    let order = state.with_shop(|shop| shop.set_order_status(&id, status))??;
    Ok(Json(order))
}
