//! Order review and status changes.

use nokhba_core::{Order, OrderId, OrderStatus};
use nokhba_storefront::shop::Shop;
use tracing::info;

/// Log orders, newest first, optionally restricted to one status.
///
/// # Errors
///
/// Returns an error message for an unknown status.
pub fn list(shop: &Shop, status: Option<&str>) -> Result<(), String> {
    let orders: Vec<&Order> = match status {
        Some(raw) => shop.orders().filter_by_status(raw.parse()?),
        None => shop.orders().list().iter().collect(),
    };

    for order in &orders {
        info!(
            "{}  {}  {:<10} {:>14}  {} ({}, {})",
            order.id,
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.status,
            order.total_price,
            order.customer_name,
            order.city,
            order.phone,
        );
    }
    info!(count = orders.len(), "Orders listed");
    Ok(())
}

/// Overwrite an order's status.
///
/// # Errors
///
/// Returns an error message for an unknown status or order ID.
pub fn set_status(shop: &mut Shop, id: &str, status: &str) -> Result<Order, String> {
    let status: OrderStatus = status.parse()?;
    let order = shop
        .set_order_status(&OrderId::new(id), status)
        .map_err(|e| e.to_string())?;
    info!(order_id = %order.id, status = %order.status, "Order status updated");
    Ok(order)
}

/// Log revenue and per-status counts.
pub fn stats(shop: &Shop) {
    let orders = shop.orders();
    info!(revenue = %orders.aggregate_revenue(), total = orders.len(), "Order stats");
    for status in OrderStatus::ALL {
        info!(
            status = %status,
            label = status.label(),
            count = orders.count_by_status(status),
        );
    }
}
