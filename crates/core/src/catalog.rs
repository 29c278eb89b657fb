//! Catalog manager.
//!
//! Owns the product list. Products keep insertion order; new products are
//! appended. Reads borrow from the list, mutations return owned copies so
//! callers can release any lock around the catalog before using them.

use crate::error::{DomainError, NotFound};
use crate::types::{CategoryFilter, Product, ProductDraft, ProductId};

/// The product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap an existing product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a single product.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in the selected category, or all of them for `CategoryFilter::All`.
    #[must_use]
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    /// Products whose name contains `term`.
    ///
    /// Matching is a plain case-sensitive substring test; an empty term
    /// matches every product.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.name.contains(term))
            .collect()
    }

    /// Category filter and name search combined.
    #[must_use]
    pub fn filter(&self, filter: CategoryFilter, term: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.category) && p.name.contains(term))
            .collect()
    }

    /// Add a product under a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the draft has no name.
    pub fn create(&mut self, draft: ProductDraft) -> Result<Product, DomainError> {
        draft.validate()?;

        let mut id = ProductId::generate();
        while self.get(&id).is_some() {
            id = ProductId::generate();
        }

        let product = Product::from_draft(id, draft);
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replace every field except the ID of an existing product.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an invalid draft and
    /// `DomainError::NotFound` if no product has this ID. Neither changes the
    /// catalog.
    pub fn update(&mut self, id: &ProductId, draft: ProductDraft) -> Result<Product, DomainError> {
        draft.validate()?;

        let slot = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| NotFound::new("product", id))?;

        *slot = Product::from_draft(id.clone(), draft);
        Ok(slot.clone())
    }

    /// Remove a product. Returns whether anything was removed.
    pub fn delete(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() != before
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::{Category, Price};

    fn product(id: &str, name: &str, category: Category) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft::new(name, Price::new(100), category),
        )
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            product("1", "Phone Pro", Category::Electronics),
            product("2", "Family SUV", Category::Cars),
            product("3", "Laptop", Category::Electronics),
        ])
    }

    #[test]
    fn test_filter_by_category_returns_exact_matches() {
        let catalog = sample();
        let cars = catalog.filter_by_category(CategoryFilter::Only(Category::Cars));
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0], &product("2", "Family SUV", Category::Cars));
        assert_eq!(catalog.filter_by_category(CategoryFilter::All).len(), 3);
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let catalog = sample();
        assert_eq!(catalog.search("Pro").len(), 1);
        assert!(catalog.search("pro").is_empty());
        assert_eq!(catalog.search("").len(), 3);
    }

    #[test]
    fn test_combined_filter() {
        let catalog = sample();
        let hits = catalog.filter(CategoryFilter::Only(Category::Electronics), "Lap");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId::new("3"));
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let mut catalog = sample();
        let created = catalog
            .create(ProductDraft::new("Sofa", Price::new(8_500), Category::Home))
            .unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.list().last(), Some(&created));
        assert!(!["1", "2", "3"].contains(&created.id.as_str()));
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut catalog = sample();
        let err = catalog
            .create(ProductDraft::new(" ", Price::new(1), Category::Home))
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("name").into());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_update_replaces_fields_but_keeps_id_and_position() {
        let mut catalog = sample();
        let mut draft = ProductDraft::new("Phone Max", Price::new(15_000), Category::Electronics);
        draft.features = vec!["Titanium".to_string()];

        let updated = catalog.update(&ProductId::new("1"), draft).unwrap();
        assert_eq!(updated.id, ProductId::new("1"));
        assert_eq!(catalog.list()[0].name, "Phone Max");
        assert_eq!(catalog.list()[0].features, vec!["Titanium".to_string()]);
    }

    #[test]
    fn test_update_missing_product_is_not_found() {
        let mut catalog = sample();
        let before = catalog.clone();
        let err = catalog
            .update(
                &ProductId::new("nope"),
                ProductDraft::new("X", Price::new(1), Category::Home),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut catalog = sample();
        assert!(catalog.delete(&ProductId::new("2")));
        assert!(!catalog.delete(&ProductId::new("2")));
        assert_eq!(catalog.len(), 2);
    }
}
