//! Saved cart inspection.

use nokhba_storefront::shop::Shop;
use tracing::info;

pub fn show(shop: &Shop) {
    let cart = shop.cart();
    for item in cart.items() {
        info!(
            "{:<34} x{:<4} {:>14}  {}",
            item.id(),
            item.quantity,
            item.product.price,
            item.product.name
        );
    }
    info!(lines = cart.len(), units = cart.count(), total = %cart.total(), "Cart");
}

pub fn clear(shop: &mut Shop) {
    shop.clear_cart();
    info!("Cart cleared");
}
