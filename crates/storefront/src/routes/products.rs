//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use nokhba_core::{CategoryFilter, NotFound, Product, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    /// Category slug, or `all`.
    pub category: Option<String>,
    /// Case-sensitive name substring.
    pub q: Option<String>,
}

/// Parse an optional category slug, treating absence as `all`.
fn parse_category(raw: Option<&str>) -> Result<CategoryFilter> {
    raw.map_or(Ok(CategoryFilter::All), |slug| {
        slug.parse().map_err(AppError::BadRequest)
    })
}

/// Product listing, filtered by category and name.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = parse_category(query.category.as_deref())?;
    let term = query.q.unwrap_or_default();

    let products = state.with_shop(|shop| {
        shop.catalog()
            .filter(filter, &term)
            .into_iter()
            .cloned()
            .collect()
    })?;
    Ok(Json(products))
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .with_shop(|shop| shop.catalog().get(&id).cloned())?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(NotFound::new("product", &id)))
}
