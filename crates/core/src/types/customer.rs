//! Checkout contact details.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Validated customer contact details captured at checkout.
///
/// ## Constraints
///
/// - `name`, `city` and `phone` are trimmed
/// - none of them may be empty after trimming
///
/// ## Examples
///
/// ```
/// use nokhba_core::CustomerDetails;
///
/// assert!(CustomerDetails::parse("Ali", "Casablanca", "0600000000").is_ok());
/// assert!(CustomerDetails::parse("Ali", "  ", "0600000000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    name: String,
    city: String,
    phone: String,
}

impl CustomerDetails {
    /// Parse and trim raw form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` naming the first blank field.
    pub fn parse(name: &str, city: &str, phone: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("customerName", name)?,
            city: required("city", city)?,
            phone: required("phone", phone)?,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let details = CustomerDetails::parse("  Ali ", "Rabat\n", " 0611 ").unwrap();
        assert_eq!(details.name(), "Ali");
        assert_eq!(details.city(), "Rabat");
        assert_eq!(details.phone(), "0611");
    }

    #[test]
    fn test_each_blank_field_is_reported() {
        assert_eq!(
            CustomerDetails::parse("", "Rabat", "06").unwrap_err(),
            ValidationError::EmptyField("customerName")
        );
        assert_eq!(
            CustomerDetails::parse("Ali", "", "06").unwrap_err(),
            ValidationError::EmptyField("city")
        );
        assert_eq!(
            CustomerDetails::parse("Ali", "Rabat", " \t").unwrap_err(),
            ValidationError::EmptyField("phone")
        );
    }
}
