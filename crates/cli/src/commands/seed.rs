//! Save the starter catalog.

use nokhba_core::Product;
use nokhba_core::seed::seed_products;
use nokhba_storefront::shop::Shop;
use nokhba_storefront::store::{Slice, StateStore, StoreError};
use tracing::{info, warn};

/// What `seed` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Written,
    Replaced,
    Skipped,
}

/// Write the starter catalog unless a catalog is already saved.
///
/// With `force`, a saved catalog is replaced. An unreadable saved catalog is
/// treated as absent.
///
/// # Errors
///
/// Returns `StoreError` if the store itself cannot be read.
pub fn run(store: &StateStore, shop: &mut Shop, force: bool) -> Result<SeedOutcome, StoreError> {
    let saved = match store.try_load::<Vec<Product>>(Slice::Products.key()) {
        Ok(saved) => saved.is_some(),
        Err(StoreError::Corrupted { .. }) => false,
        Err(e) => return Err(e),
    };

    let outcome = match (saved, force) {
        (true, false) => {
            warn!("A catalog is already saved; pass --force to replace it");
            return Ok(SeedOutcome::Skipped);
        }
        (true, true) => SeedOutcome::Replaced,
        (false, _) => SeedOutcome::Written,
    };

    shop.reset_catalog(seed_products());
    info!(products = shop.catalog().len(), ?outcome, "Starter catalog saved");
    Ok(outcome)
}
