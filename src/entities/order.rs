//! Order entity - A customer order listed on the admin dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fulfilment state of an order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Shipped to the customer
    Fulfilled,
    /// Awaiting payment or confirmation
    Pending,
    /// Being packed
    Processing,
    /// Any status the admin panel does not know about
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Label shown in the status badge
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fulfilled => "fulfilled",
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Unknown => "unknown",
        }
    }
}

/// A customer order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order reference, e.g. `ORD-001`
    pub id: String,
    /// Customer display name
    pub customer: String,
    /// Order total in dollars
    pub total: f64,
    /// Current status
    pub status: OrderStatus,
    /// Day the order was placed
    pub date: NaiveDate,
}
