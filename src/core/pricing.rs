//! Pricing calculator - Derives the displayed price of a product from its discount.
//!
//! Prices are recomputed on every render and never stored.

use crate::entities::{Discount, Product};

/// Rounds half up, the way the storefront rounds discounted prices.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Price after applying `discount` to `base`.
///
/// - a positive percentage gives `round(base - base * percentage / 100)`
/// - otherwise a positive amount gives `base - amount`
/// - otherwise the base price is returned
///
/// When both fields are positive the percentage wins. The result is not clamped:
/// an amount larger than the base price yields a negative price.
#[must_use]
pub fn effective_price(base: f64, discount: Option<&Discount>) -> f64 {
    let Some(discount) = discount else {
        return base;
    };

    if let Some(percentage) = discount.active_percentage() {
        round_half_up(base - base * percentage / 100.0)
    } else if let Some(amount) = discount.active_amount() {
        base - amount
    } else {
        base
    }
}

/// Formats a dollar amount the way the storefront's price labels show it: the
/// shortest decimal form, so `96`, `12.5` and `12.99` print as written.
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("${value}")
}

/// Everything a product page needs to show the price of one product.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceTag {
    /// Price the customer pays
    pub effective: f64,
    /// Original price, shown struck through, when any discount applies
    pub original: Option<f64>,
    /// Discount badges, e.g. `-20%` or `-$5`
    pub badges: Vec<String>,
}

impl PriceTag {
    /// Builds the price tag for `product`.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        let discount = product.discount.as_ref();
        let effective = effective_price(product.price, discount);
        let mut badges = Vec::new();

        if let Some(discount) = discount {
            // Both badges are shown when both fields are set, even though only the
            // percentage affects the price.
            if let Some(percentage) = discount.active_percentage() {
                badges.push(format!("-{percentage}%"));
            }
            if let Some(amount) = discount.active_amount() {
                badges.push(format!("-{}", format_price(amount)));
            }
        }

        Self {
            effective,
            original: discount
                .is_some_and(Discount::is_active)
                .then_some(product.price),
            badges,
        }
    }

    /// Effective price as a label
    #[must_use]
    pub fn label(&self) -> String {
        format_price(self.effective)
    }
}

/// Rating label shown next to the stars, e.g. `4.5/5`. Missing or zero ratings show nothing.
#[must_use]
pub fn rating_label(rating: Option<f64>) -> Option<String> {
    rating.filter(|r| *r > 0.0).map(|r| format!("{r:.1}/5"))
}
