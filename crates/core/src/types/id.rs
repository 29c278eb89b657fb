//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are opaque
//! strings so that persisted documents stay readable and seed data can use
//! short hand-written identifiers.

use uuid::Uuid;

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use nokhba_core::define_id;
/// define_id!(CouponId);
/// define_id!(InvoiceId);
///
/// let coupon = CouponId::new("summer");
/// let invoice = InvoiceId::new("summer");
///
/// // These are different types, so this won't compile:
/// // let _: CouponId = invoice;
/// assert_eq!(coupon.as_str(), invoice.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);

impl ProductId {
    /// Generate a fresh random product ID (32 lowercase hex digits).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl OrderId {
    /// Prefix carried by every generated order ID.
    ///
    /// Product IDs never start with this prefix, which keeps the two ID
    /// spaces disjoint.
    pub const PREFIX: &'static str = "ORD-";

    /// Generate a fresh random order ID, e.g. `ORD-3F2A...`.
    #[must_use]
    pub fn generate() -> Self {
        let random = Uuid::new_v4().simple().to_string().to_uppercase();
        Self(format!("{}{random}", Self::PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_product_ids_are_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_order_ids_carry_prefix() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with(OrderId::PREFIX));
        assert!(!ProductId::generate().as_str().starts_with(OrderId::PREFIX));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProductId::new("p1");
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("\"p1\""));
        assert_eq!(id.to_string(), "p1");
    }
}
