//! Admin site settings.

use axum::{
    Json,
    extract::{Path, State},
};
use nokhba_core::{SettingsPatch, SiteSettings};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Name-server edit request body.
#[derive(Debug, Deserialize)]
pub struct NameServerInput {
    pub value: String,
}

/// Current settings.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<SiteSettings>> {
    state.with_shop(|shop| shop.settings().clone()).map(Json)
}

/// Merge the supplied fields into the settings.
#[instrument(skip(state, patch))]
pub async fn update(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<SiteSettings>> {
    state.with_shop(|shop| shop.update_settings(patch)).map(Json)
}

/// Edit one name-server entry in place.
#[instrument(skip(state))]
pub async fn set_name_server(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(input): Json<NameServerInput>,
) -> Result<Json<SiteSettings>> {
    let settings = state.with_shop(|shop| shop.set_name_server(index, input.value))??;
    Ok(Json(settings))
}
