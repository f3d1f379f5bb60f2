//! Order status state machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Status transitions:
/// ```text
/// Processing ──► Shipped ──► Delivered
///     │
///     └──► Canceled
/// ```
///
/// `Shipped`, `Delivered`, and `Canceled` are all terminal with respect to
/// cancellation: once an order has left `Processing`, no operation in this
/// service moves it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order has been placed and not yet shipped.
    #[default]
    Processing,

    /// Order has left the warehouse.
    Shipped,

    /// Order reached the customer (terminal).
    Delivered,

    /// Order was canceled before shipping (terminal).
    Canceled,
}

impl OrderStatus {
    /// Returns true if the order can still be canceled in this status.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Processing)
    }

    /// Returns true if no further status transition is permitted.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Shipped | OrderStatus::Delivered | OrderStatus::Canceled
        )
    }

    /// Returns the status name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
