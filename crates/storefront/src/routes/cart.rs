//! Cart route handlers.
//!
//! Every mutation answers with the updated cart so the client can redraw the
//! drawer and the badge from one response.

use axum::{Json, extract::State};
use nokhba_core::{Cart, CartItem, DomainError, NotFound, Price, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Cart contents with derived figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: Price,
    /// Sum of quantities.
    pub count: u64,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: cart.total(),
            count: cart.count(),
        }
    }
}

/// Cart badge.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CartCount {
    pub count: u64,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    pub product_id: String,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartInput {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartInput {
    pub product_id: String,
}

/// Current cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartView>> {
    state
        .with_shop(|shop| CartView::from(shop.cart()))
        .map(Json)
}

/// Total quantity in the cart.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Result<Json<CartCount>> {
    state
        .with_shop(|shop| CartCount {
            count: shop.cart().count(),
        })
        .map(Json)
}

/// Add one unit of a product.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<AddToCartInput>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(input.product_id);
    let view = state.with_shop(|shop| {
        shop.add_to_cart(&id)?;
        Ok::<_, NotFound>(CartView::from(shop.cart()))
    })??;
    Ok(Json(view))
}

/// Set the quantity of a line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateCartInput>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(input.product_id);
    let view = state.with_shop(|shop| {
        shop.set_cart_quantity(&id, input.quantity)?;
        Ok::<_, DomainError>(CartView::from(shop.cart()))
    })??;
    Ok(Json(view))
}

/// Remove a line. Removing an absent line is not an error.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(input): Json<RemoveFromCartInput>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(input.product_id);
    state
        .with_shop(|shop| {
            shop.remove_from_cart(&id);
            CartView::from(shop.cart())
        })
        .map(Json)
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Json<CartView>> {
    state
        .with_shop(|shop| {
            shop.clear_cart();
            CartView::from(shop.cart())
        })
        .map(Json)
}
