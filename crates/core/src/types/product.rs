//! Catalog products.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};
use crate::error::ValidationError;

/// Placeholder image assigned to products created without one.
pub const DEFAULT_PRODUCT_IMAGE: &str = "https://picsum.photos/seed/newproduct/600/400";

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub description: String,
    /// Image URI.
    pub image: String,
    /// Short feature bullets, in display order.
    pub features: Vec<String>,
}

impl Product {
    /// Build a product from an administrator draft.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            description: draft.description,
            image: draft.image,
            features: draft.features,
        }
    }
}

/// Every editable product field; the payload of create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: Price,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_image() -> String {
    DEFAULT_PRODUCT_IMAGE.to_string()
}

impl ProductDraft {
    /// Create a draft with the given required fields and empty extras.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            category,
            description: String::new(),
            image: default_image(),
            features: Vec::new(),
        }
    }

    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the name is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        Ok(())
    }
}
