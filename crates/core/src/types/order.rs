//! Orders and their line-item snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CartItem, CustomerDetails, OrderId, OrderStatus, Price, ProductId};
use crate::error::ValidationError;

/// A product line captured by value at checkout.
///
/// Later catalog edits or deletions never change an existing line; the
/// product ID is kept for traceability only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl OrderLine {
    /// Copy the order-relevant fields out of a cart line.
    #[must_use]
    pub fn snapshot(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            price: item.product.price,
            quantity: item.quantity,
        }
    }
}

/// A submitted order.
///
/// Everything except `status` is fixed once the order is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub city: String,
    pub phone: String,
    pub items: Vec<OrderLine>,
    /// Sum of `price × quantity` over `items`, computed when the order is built.
    pub total_price: Price,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build a pending order from snapshotted lines.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyCart` if `items` is empty and
    /// `ValidationError::TotalOverflow` if the total does not fit in a [`Price`].
    pub fn new(
        id: OrderId,
        customer: CustomerDetails,
        items: Vec<OrderLine>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        let total_price = lines_total(&items).ok_or(ValidationError::TotalOverflow)?;

        Ok(Self {
            id,
            customer_name: customer.name().to_string(),
            city: customer.city().to_string(),
            phone: customer.phone().to_string(),
            items,
            total_price,
            status: OrderStatus::Pending,
            created_at,
        })
    }

    /// Recompute the total from the stored lines.
    ///
    /// Equal to `total_price` for every order built with [`Order::new`].
    #[must_use]
    pub fn computed_total(&self) -> Option<Price> {
        lines_total(&self.items)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

fn lines_total(items: &[OrderLine]) -> Option<Price> {
    items.iter().try_fold(Price::ZERO, |acc, line| {
        line.price
            .checked_mul(line.quantity)
            .and_then(|line_total| acc.checked_add(line_total))
    })
}
