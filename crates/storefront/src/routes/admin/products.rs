//! Admin product management.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use nokhba_core::{Product, ProductDraft, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Delete outcome.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Deleted {
    pub deleted: bool,
}

/// Catalog listing with optional name search.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>> {
    let term = query.q.unwrap_or_default();
    let products = state.with_shop(|shop| {
        shop.catalog()
            .search(&term)
            .into_iter()
            .cloned()
            .collect()
    })?;
    Ok(Json(products))
}

/// Create a product under a fresh ID.
#[instrument(skip(state, draft))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.with_shop(|shop| shop.create_product(draft))??;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace every field of a product except its ID.
#[instrument(skip(state, draft))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let product = state.with_shop(|shop| shop.update_product(&id, draft))??;
    Ok(Json(product))
}

/// Delete a product. Deleting an unknown ID reports `deleted: false`.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>> {
    let id = ProductId::new(id);
    let deleted = state.with_shop(|shop| shop.delete_product(&id))?;
    Ok(Json(Deleted { deleted }))
}
