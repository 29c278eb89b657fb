//! CLI command implementations.

pub mod cart;
pub mod orders;
pub mod products;
pub mod seed;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use nokhba_storefront::services::{LoggingNotifier, LoggingPixelInjector};
    use nokhba_storefront::shop::Shop;
    use nokhba_storefront::store::StateStore;

    /// A shop over a fresh in-memory store.
    pub fn shop() -> (StateStore, Shop) {
        let store = StateStore::in_memory();
        let shop = Shop::load(
            store.clone(),
            Arc::new(LoggingNotifier),
            Arc::new(LoggingPixelInjector),
        );
        (store, shop)
    }
}
