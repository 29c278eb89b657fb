//! Order manager.
//!
//! Orders are stored newest first. The only mutation after submission is a
//! status change.

use chrono::{DateTime, Utc};

use crate::error::{NotFound, ValidationError};
use crate::types::{CartItem, CustomerDetails, Order, OrderId, OrderLine, OrderStatus, Price};

/// All submitted orders, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Wrap an existing order list (already newest first).
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Turn cart lines into a pending order and record it.
    ///
    /// Lines are snapshotted by value, the total is computed from them, and
    /// the new order is placed at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyCart` for no lines,
    /// `ValidationError::EmptyField` for a blank name, city or phone, and
    /// `ValidationError::TotalOverflow` if the total is out of range. The
    /// order list is unchanged on error.
    pub fn submit(
        &mut self,
        items: &[CartItem],
        customer_name: &str,
        city: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<Order, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        let customer = CustomerDetails::parse(customer_name, city, phone)?;
        let lines = items.iter().map(OrderLine::snapshot).collect();

        let order = Order::new(self.fresh_id(), customer, lines, now)?;
        self.orders.insert(0, order.clone());
        Ok(order)
    }

    /// Overwrite the status of an order.
    ///
    /// Any status may be set from any other; see [`OrderStatus`].
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no order has this ID.
    pub fn set_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<&Order, NotFound> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| NotFound::new("order", id))?;
        order.status = status;
        Ok(order)
    }

    /// All orders, newest first.
    #[must_use]
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// The `n` newest orders.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Order] {
        self.orders
            .get(..n.min(self.orders.len()))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn filter_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.status == status).collect()
    }

    #[must_use]
    pub fn count_by_status(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    /// Sum of `total_price` over completed orders.
    #[must_use]
    pub fn aggregate_revenue(&self) -> Price {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .fold(Price::ZERO, |acc, o| acc.saturating_add(o.total_price))
    }

    fn fresh_id(&self) -> OrderId {
        let mut id = OrderId::generate();
        while self.get(&id).is_some() {
            id = OrderId::generate();
        }
        id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::types::{Category, Product, ProductDraft, ProductId};

    fn product(id: &str, price: u64) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft::new(format!("product {id}"), Price::new(price), Category::Electronics),
        )
    }

    fn submit(book: &mut OrderBook, cart: &Cart) -> Result<Order, ValidationError> {
        book.submit(cart.items(), "Ali", "Casablanca", "0600000000", Utc::now())
    }

    #[test]
    fn test_checkout_scenario() {
        let p1 = product("p1", 100);
        let mut cart = Cart::default();
        cart.add(&p1);
        cart.add(&p1);

        let mut book = OrderBook::default();
        let order = submit(&mut book, &cart).unwrap();

        assert_eq!(order.total_price, Price::new(200));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), cart.len());
        assert_eq!(order.items[0].quantity, 2);
        assert!(order.id.as_str().starts_with(OrderId::PREFIX));
    }

    #[test]
    fn test_total_matches_lines_for_mixed_cart() {
        let mut cart = Cart::default();
        for (id, price) in [("a", 14_500), ("b", 8_500), ("a", 14_500), ("c", 1)] {
            cart.add(&product(id, price));
        }
        let mut book = OrderBook::default();
        let order = submit(&mut book, &cart).unwrap();

        let expected: u64 = order
            .items
            .iter()
            .map(|l| l.price.amount() * u64::from(l.quantity))
            .sum();
        assert_eq!(order.total_price.amount(), expected);
        assert_eq!(order.items.len(), 3);
    }

    #[test]
    fn test_empty_cart_is_rejected_without_side_effects() {
        let mut book = OrderBook::default();
        let err = submit(&mut book, &Cart::default()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyCart);
        assert!(book.is_empty());
    }

    #[test]
    fn test_blank_customer_fields_are_rejected() {
        let mut cart = Cart::default();
        cart.add(&product("a", 1));
        let mut book = OrderBook::default();

        let err = book
            .submit(cart.items(), "Ali", "   ", "0600", Utc::now())
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("city"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_orders_are_newest_first() {
        let mut cart = Cart::default();
        cart.add(&product("a", 1));
        let mut book = OrderBook::default();

        let first = submit(&mut book, &cart).unwrap();
        let second = submit(&mut book, &cart).unwrap();

        assert_eq!(book.list()[0].id, second.id);
        assert_eq!(book.list()[1].id, first.id);
        assert_eq!(book.recent(1).len(), 1);
        assert_eq!(book.recent(10).len(), 2);
    }

    #[test]
    fn test_snapshots_survive_catalog_edits() {
        let mut p = product("a", 100);
        let mut cart = Cart::default();
        cart.add(&p);
        let mut book = OrderBook::default();
        let order = submit(&mut book, &cart).unwrap();

        p.name = "renamed".to_string();
        p.price = Price::new(1);

        let stored = book.get(&order.id).unwrap();
        assert_eq!(stored.items[0].name, "product a");
        assert_eq!(stored.items[0].price, Price::new(100));
    }

    #[test]
    fn test_revenue_follows_status_changes() {
        let mut cart = Cart::default();
        cart.add(&product("a", 250));
        let mut book = OrderBook::default();
        let order = submit(&mut book, &cart).unwrap();
        assert_eq!(book.aggregate_revenue(), Price::ZERO);

        book.set_status(&order.id, OrderStatus::Completed).unwrap();
        assert_eq!(book.aggregate_revenue(), Price::new(250));
        assert_eq!(book.count_by_status(OrderStatus::Completed), 1);

        book.set_status(&order.id, OrderStatus::Cancelled).unwrap();
        assert_eq!(book.aggregate_revenue(), Price::ZERO);
        assert_eq!(book.filter_by_status(OrderStatus::Cancelled).len(), 1);
    }

    #[test]
    fn test_set_status_is_idempotent_and_permissive() {
        let mut cart = Cart::default();
        cart.add(&product("a", 1));
        let mut book = OrderBook::default();
        let order = submit(&mut book, &cart).unwrap();

        book.set_status(&order.id, OrderStatus::Completed).unwrap();
        let once = book.clone();
        book.set_status(&order.id, OrderStatus::Completed).unwrap();
        assert_eq!(book, once);

        let reopened = book.set_status(&order.id, OrderStatus::Pending).unwrap();
        assert_eq!(reopened.status, OrderStatus::Pending);
    }

    #[test]
    fn test_set_status_on_missing_order() {
        let mut book = OrderBook::default();
        let err = book
            .set_status(&OrderId::new("ORD-NOPE"), OrderStatus::Completed)
            .unwrap_err();
        assert_eq!(err.entity, "order");
    }
}
