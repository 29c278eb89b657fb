//! Type-safe price representation.
//!
//! Prices are whole amounts of the store currency (Moroccan dirham). The
//! store has no fractional subunit, so a plain unsigned integer keeps every
//! total exact.

use core::fmt;

use serde::{Deserialize, Serialize};

/// ISO 4217 code of the only currency the store sells in.
pub const CURRENCY_CODE: &str = "MAD";

/// A non-negative price in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole currency units.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, returning `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(quantity)).map(Self)
    }

    /// Add two prices, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Add two prices, clamping at the maximum representable amount.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {CURRENCY_CODE}", self.0)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}
