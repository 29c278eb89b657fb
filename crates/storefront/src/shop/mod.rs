//! The shop: every state manager plus the persistence side channel.
//!
//! # Lifecycle
//!
//! [`Shop::load`] restores each slice from the [`StateStore`], falling back to
//! the seed catalog, an empty order list, default settings and an empty cart.
//! Every mutating method writes the slices it touched before returning, so a
//! restart always sees the latest state. Read accessors never write.
//!
//! # Checkout
//!
//! [`Shop::checkout`] turns the cart into an order, clears the cart and
//! persists both in one call. Callers that share a `Shop` behind a lock
//! therefore observe checkout as a single step. The order webhook, if one is
//! configured, is notified afterwards and cannot affect the result.

use std::sync::Arc;

use chrono::Utc;
use nokhba_core::seed::seed_products;
use nokhba_core::{
    Cart, CartItem, Catalog, DashboardStats, DomainError, NotFound, Order, OrderBook, OrderId,
    OrderStatus, Product, ProductDraft, ProductId, Settings, SettingsPatch, SiteSettings,
    ValidationError,
};

use crate::services::{OrderNotifier, PixelInjector};
use crate::store::{Slice, StateStore};

/// Shop state and its collaborators.
pub struct Shop {
    catalog: Catalog,
    cart: Cart,
    orders: OrderBook,
    settings: Settings,
    store: StateStore,
    notifier: Arc<dyn OrderNotifier>,
    pixels: Arc<dyn PixelInjector>,
}

impl Shop {
    /// Restore every slice from `store` and install the saved pixels.
    pub fn load(
        store: StateStore,
        notifier: Arc<dyn OrderNotifier>,
        pixels: Arc<dyn PixelInjector>,
    ) -> Self {
        let products: Vec<Product> = store.load_or(Slice::Products.key(), seed_products);
        let orders: Vec<Order> = store.load_or(Slice::Orders.key(), Vec::new);
        let settings: SiteSettings = store.load_or(Slice::Settings.key(), SiteSettings::default);
        let cart: Vec<CartItem> = store.load_or(Slice::Cart.key(), Vec::new);

        tracing::info!(
            products = products.len(),
            orders = orders.len(),
            cart_lines = cart.len(),
            "Shop state loaded"
        );

        pixels.inject(&settings.pixels());

        Self {
            catalog: Catalog::new(products),
            cart: Cart::new(cart),
            orders: OrderBook::new(orders),
            settings: Settings::new(settings),
            store,
            notifier,
            pixels,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn orders(&self) -> &OrderBook {
        &self.orders
    }

    #[must_use]
    pub const fn settings(&self) -> &SiteSettings {
        self.settings.get()
    }

    /// Headline figures for the admin dashboard.
    #[must_use]
    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::compute(&self.catalog, &self.orders)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Add a product with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the draft has a blank name.
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<Product, DomainError> {
        let product = self.catalog.create(draft)?;
        self.persist(Slice::Products);
        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Replace every field of an existing product except its ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown ID and
    /// `DomainError::Validation` for a blank name.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<Product, DomainError> {
        let product = self.catalog.update(id, draft)?;
        self.persist(Slice::Products);
        tracing::info!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// Remove a product. Returns whether it existed.
    ///
    /// Cart lines and past orders keep their own copies and are not touched.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let removed = self.catalog.delete(id);
        if removed {
            self.persist(Slice::Products);
            tracing::info!(product_id = %id, "Product deleted");
        }
        removed
    }

    /// Replace the whole catalog.
    pub fn reset_catalog(&mut self, products: Vec<Product>) {
        self.catalog = Catalog::new(products);
        self.persist(Slice::Products);
        tracing::info!(products = self.catalog.len(), "Catalog reset");
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of a catalog product. Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the product is not in the catalog.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<u32, NotFound> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| NotFound::new("product", id))?;
        let quantity = self.cart.add(product);
        self.persist(Slice::Cart);
        tracing::debug!(product_id = %id, quantity, "Added to cart");
        Ok(quantity)
    }

    /// Drop a cart line. Returns whether it existed.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove(id);
        if removed {
            self.persist(Slice::Cart);
        }
        removed
    }

    /// Set the quantity of an existing cart line.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a quantity below 1 and
    /// `DomainError::NotFound` if the product is not in the cart.
    pub fn set_cart_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), DomainError> {
        self.cart.set_quantity(id, quantity)?;
        self.persist(Slice::Cart);
        Ok(())
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist(Slice::Cart);
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Place an order for the current cart contents.
    ///
    /// On success the order is first in the order list, the cart is empty,
    /// both slices are persisted, and the order has been handed to the
    /// notifier if a webhook URL is configured.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty cart or a blank customer field.
    /// Nothing changes in that case.
    pub fn checkout(
        &mut self,
        customer_name: &str,
        city: &str,
        phone: &str,
    ) -> Result<Order, ValidationError> {
        let order = self
            .orders
            .submit(self.cart.items(), customer_name, city, phone, Utc::now())?;
        self.cart.clear();
        self.persist(Slice::Orders);
        self.persist(Slice::Cart);

        tracing::info!(
            order_id = %order.id,
            total = %order.total_price,
            lines = order.items.len(),
            city = %order.city,
            "Order placed"
        );

        if let Some(url) = self.settings.get().webhook_url() {
            self.notifier.notify(url, &order);
        }

        Ok(order)
    }

    /// Overwrite an order's status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no order has this ID.
    pub fn set_order_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, NotFound> {
        let order = self.orders.set_status(id, status)?.clone();
        self.persist(Slice::Orders);
        tracing::info!(order_id = %id, status = %status, "Order status changed");
        Ok(order)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Merge `patch` into the settings and return the result.
    ///
    /// The pixel injector is notified if any tracking ID changed.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> SiteSettings {
        let before = self.settings.get().pixels();
        let updated = self.settings.update(patch).clone();
        self.persist(Slice::Settings);

        let after = updated.pixels();
        if after != before {
            self.pixels.inject(&after);
        }
        tracing::info!("Settings updated");
        updated
    }

    /// Edit one name-server entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `index` is outside the list.
    pub fn set_name_server(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<SiteSettings, NotFound> {
        let updated = self.settings.set_name_server(index, value)?.clone();
        self.persist(Slice::Settings);
        Ok(updated)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist(&self, slice: Slice) {
        let key = slice.key();
        match slice {
            Slice::Products => self.store.save(key, self.catalog.list()),
            Slice::Orders => self.store.save(key, self.orders.list()),
            Slice::Settings => self.store.save(key, self.settings.get()),
            Slice::Cart => self.store.save(key, self.cart.items()),
        };
    }
}
