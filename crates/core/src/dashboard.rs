//! Admin dashboard figures.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::orders::OrderBook;
use crate::types::{Order, OrderStatus, Price};

/// How many orders the dashboard lists under "recent orders".
pub const RECENT_ORDER_COUNT: usize = 5;

/// Headline numbers for the admin landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Revenue from completed orders.
    pub revenue: Price,
    pub pending_orders: usize,
    pub order_count: usize,
    pub product_count: usize,
    pub recent_orders: Vec<Order>,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(catalog: &Catalog, orders: &OrderBook) -> Self {
        Self {
            revenue: orders.aggregate_revenue(),
            pending_orders: orders.count_by_status(OrderStatus::Pending),
            order_count: orders.len(),
            product_count: catalog.len(),
            recent_orders: orders.recent(RECENT_ORDER_COUNT).to_vec(),
        }
    }
}
