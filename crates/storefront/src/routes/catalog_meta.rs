//! Category navigation and tracking pixel lookups.

use axum::{Json, extract::State};
use nokhba_core::{Category, TrackingPixels};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// One entry of the category navigation.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            slug: category.slug(),
            label: category.label(),
            icon: category.icon(),
        }
    }
}

/// Every category, in display order.
pub async fn categories() -> Json<Vec<CategoryView>> {
    Json(Category::ALL.into_iter().map(CategoryView::from).collect())
}

/// Tracking identifiers the page should install.
#[instrument(skip(state))]
pub async fn tracking(State(state): State<AppState>) -> Result<Json<TrackingPixels>> {
    state.with_shop(|shop| shop.settings().pixels()).map(Json)
}
