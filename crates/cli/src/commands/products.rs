//! Catalog browsing.

use nokhba_core::{CategoryFilter, Product};
use nokhba_storefront::shop::Shop;
use tracing::info;

/// Products matching an optional category and name filter.
///
/// # Errors
///
/// Returns an error message for an unknown category slug.
pub fn select<'a>(
    shop: &'a Shop,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<&'a Product>, String> {
    let filter = category.map_or(Ok(CategoryFilter::All), str::parse)?;
    Ok(shop.catalog().filter(filter, search.unwrap_or_default()))
}

/// Log the matching products, one per line.
///
/// # Errors
///
/// Returns an error message for an unknown category slug.
pub fn list(shop: &Shop, category: Option<&str>, search: Option<&str>) -> Result<(), String> {
    let products = select(shop, category, search)?;
    for product in &products {
        info!(
            "{:<34} {:<12} {:>14}  {}",
            product.id, product.category, product.price, product.name
        );
    }
    info!(count = products.len(), "Products listed");
    Ok(())
}
