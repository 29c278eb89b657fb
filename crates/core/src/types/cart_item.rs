//! Cart line items.

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// A product in the cart together with its quantity.
///
/// Serializes as the product's fields plus a `quantity` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create a line for a single unit of `product`.
    #[must_use]
    pub fn single(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// ID of the underlying product.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price × quantity, or `None` if it overflows.
    #[must_use]
    pub fn line_total(&self) -> Option<Price> {
        self.product.price.checked_mul(self.quantity)
    }
}
