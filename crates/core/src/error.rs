//! Domain error types.
//!
//! Every error here means "the operation had no effect". None of them are
//! fatal; callers surface validation failures to the user and may treat
//! [`NotFound`] as a no-op.

use thiserror::Error;

/// Errors raised when input fails a required-field or range check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    /// Checkout was attempted with no items in the cart.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
    /// A cart quantity below 1 (or beyond the supported range).
    #[error("quantity must be at least 1 (got {0})")]
    InvalidQuantity(i64),
    /// The order total does not fit in the price range.
    #[error("order total exceeds the supported price range")]
    TotalOverflow,
}

/// A mutation referenced an entity that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity} not found: {id}")]
pub struct NotFound {
    /// Kind of entity that was looked up.
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

impl NotFound {
    /// Create a new not-found error.
    #[must_use]
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}

/// Any error a state manager can return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NotFound(#[from] NotFound),
}
