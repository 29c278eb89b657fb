//! Cart manager.

use crate::error::{DomainError, NotFound, ValidationError};
use crate::types::{CartItem, Price, Product, ProductId};

/// The shopping cart: at most one line per product, in the order products
/// were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Wrap an existing list of lines.
    #[must_use]
    pub const fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of `product`. Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == &product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }
        self.items.push(CartItem::single(product.clone()));
        1
    }

    /// Drop the line for `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        self.items.len() != before
    }

    /// Replace the quantity of an existing line.
    ///
    /// Quantities below 1 are rejected; use [`Cart::remove`] to drop a line.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidQuantity` if `quantity < 1` and
    /// `NotFound` if the product is not in the cart. The cart is unchanged in
    /// both cases.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), DomainError> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(ValidationError::InvalidQuantity(quantity))?;

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or_else(|| NotFound::new("cart item", id))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price × quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().fold(Price::ZERO, |acc, item| {
            acc.saturating_add(item.line_total().unwrap_or(Price::new(u64::MAX)))
        })
    }

    /// Total number of units, as shown on the cart badge.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::types::{Category, ProductDraft};

    fn product(id: &str, price: u64) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft::new(id, Price::new(price), Category::Home),
        )
    }

    #[test]
    fn test_repeated_adds_increment_single_line() {
        let mut cart = Cart::default();
        let a = product("a", 10);
        let b = product("b", 20);

        // a, b, a, a, b
        for p in [&a, &b, &a, &a, &b] {
            cart.add(p);
        }

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].id(), &a.id);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[1].quantity, 2);
        assert_eq!(cart.count(), 5);
        assert_eq!(cart.total(), Price::new(70));
    }

    proptest! {
        #[test]
        fn test_any_add_sequence_keeps_one_line_per_product(
            picks in prop::collection::vec(0usize..4, 0..40),
        ) {
            let catalog: Vec<Product> = ["a", "b", "c", "d"]
                .iter()
                .zip([10, 20, 30, 40])
                .map(|(id, price)| product(id, price))
                .collect();

            let mut cart = Cart::default();
            // (catalog index, adds) in first-added order
            let mut expected: Vec<(usize, u32)> = Vec::new();
            for &pick in &picks {
                cart.add(&catalog[pick]);
                match expected.iter_mut().find(|(i, _)| *i == pick) {
                    Some((_, n)) => *n += 1,
                    None => expected.push((pick, 1)),
                }
            }

            prop_assert_eq!(cart.len(), expected.len());
            for (item, (pick, adds)) in cart.items().iter().zip(&expected) {
                prop_assert_eq!(item.id(), &catalog[*pick].id);
                prop_assert_eq!(item.quantity, *adds);
            }
            prop_assert_eq!(cart.count(), u64::try_from(picks.len()).unwrap());

            let total: u64 = picks.iter().map(|&i| [10, 20, 30, 40][i]).sum();
            prop_assert_eq!(cart.total(), Price::new(total));
        }
    }

    #[test]
    fn test_set_quantity_below_one_is_rejected() {
        let mut cart = Cart::default();
        let a = product("a", 10);
        cart.add(&a);
        cart.add(&a);

        for q in [0, -1, i64::MIN] {
            let err = cart.set_quantity(&a.id, q).unwrap_err();
            assert_eq!(err, ValidationError::InvalidQuantity(q).into());
        }
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_replaces_in_place() {
        let mut cart = Cart::default();
        cart.add(&product("a", 10));
        cart.add(&product("b", 5));

        cart.set_quantity(&ProductId::new("b"), 4).unwrap();
        assert_eq!(cart.items()[1].quantity, 4);
        assert_eq!(cart.total(), Price::new(30));
    }

    #[test]
    fn test_set_quantity_on_missing_line_is_not_found() {
        let mut cart = Cart::default();
        let err = cart.set_quantity(&ProductId::new("x"), 2).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut cart = Cart::default();
        let a = product("a", 10);
        cart.add(&a);
        assert!(cart.remove(&a.id));
        assert!(!cart.remove(&a.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add(&product("a", 10));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
    }
}
