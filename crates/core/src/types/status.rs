//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The status field is intentionally unconstrained: an administrator may move
/// an order from any status to any other, including reopening a completed or
/// cancelled order as pending. Only checkout produces a fresh order, and it
/// always starts as [`OrderStatus::Pending`]. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting for the store to confirm and deliver.
    #[default]
    Pending,
    /// Delivered and paid; counted towards revenue.
    Completed,
    /// Cancelled by the store or the customer.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Cancelled];

    /// Statuses reachable from `self`.
    ///
    /// Always the full set; see the type-level docs.
    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        &Self::ALL
    }

    /// Customer-facing label as shown in the admin panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "قيد الانتظار",
            Self::Completed => "مكتمل",
            Self::Cancelled => "ملغي",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
