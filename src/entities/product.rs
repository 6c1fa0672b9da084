//! Product entity - A catalog item as returned by the storefront API.
//!
//! Products carry a base price and an optional discount descriptor. The displayed
//! price is never stored; it is derived on every render by `core::pricing`.

use serde::{Deserialize, Serialize};

/// Catalog product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for the product
    pub id: i64,
    /// Display title
    pub title: String,
    /// Image reference (URL or data URL), absent when no image was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    /// Base price in dollars
    pub price: f64,
    /// Optional discount applied at display time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Average rating out of 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Discount descriptor attached to a product.
///
/// Normally only one of the two fields is set. If both are set and positive,
/// the percentage wins (see [`crate::core::pricing::effective_price`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Percentage off the base price, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// Fixed amount off the base price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl Discount {
    /// A percentage-only discount
    #[must_use]
    pub const fn percentage(percentage: f64) -> Self {
        Self {
            percentage: Some(percentage),
            amount: None,
        }
    }

    /// A fixed-amount discount
    #[must_use]
    pub const fn amount(amount: f64) -> Self {
        Self {
            percentage: None,
            amount: Some(amount),
        }
    }

    /// Percentage, if set and positive
    #[must_use]
    pub fn active_percentage(&self) -> Option<f64> {
        self.percentage.filter(|p| *p > 0.0)
    }

    /// Amount, if set and positive
    #[must_use]
    pub fn active_amount(&self) -> Option<f64> {
        self.amount.filter(|a| *a > 0.0)
    }

    /// Whether either field actually reduces the price
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_percentage().is_some() || self.active_amount().is_some()
    }
}
