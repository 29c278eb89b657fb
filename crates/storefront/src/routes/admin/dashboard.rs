//! Dashboard route handler.

use axum::{Json, extract::State};
use nokhba_core::DashboardStats;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Revenue, order counts and the most recent orders.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<DashboardStats>> {
    state.with_shop(|shop| shop.dashboard()).map(Json)
}
