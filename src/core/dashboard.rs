//! Dashboard business logic - Stats cards, recent orders and the sales chart.
//!
//! Everything here is derived from the in-memory collections on demand; nothing is
//! cached between renders.

use crate::entities::{Book, Order, OrderStatus, Role, SalesPoint, User};

/// Badge style for an order status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral, filled
    Default,
    /// Needs attention
    Destructive,
    /// In progress
    Secondary,
    /// Unrecognised status
    Outline,
}

impl OrderStatus {
    /// Badge style used in the recent orders table
    #[must_use]
    pub const fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Fulfilled => BadgeVariant::Default,
            Self::Pending => BadgeVariant::Destructive,
            Self::Processing => BadgeVariant::Secondary,
            Self::Unknown => BadgeVariant::Outline,
        }
    }
}

/// The most recent `limit` orders, newest first. Orders placed on the same day keep
/// their original order.
#[must_use]
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Formats dollars with thousands separators, e.g. `$45,231.89`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Headline numbers shown on the dashboard cards
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStats {
    /// Sum of all order totals
    pub total_revenue: f64,
    /// Number of orders
    pub total_orders: usize,
    /// Number of books in the catalog
    pub total_books: usize,
    /// Number of accounts with the customer role
    pub active_users: usize,
    /// Units in stock across all books
    pub units_in_stock: u64,
}

impl DashboardStats {
    /// Computes the dashboard numbers from the current collections.
    #[must_use]
    pub fn compute(orders: &[Order], books: &[Book], users: &[User]) -> Self {
        Self {
            total_revenue: orders.iter().map(|o| o.total).sum(),
            total_orders: orders.len(),
            total_books: books.len(),
            active_users: users.iter().filter(|u| u.role == Role::User).count(),
            units_in_stock: books.iter().map(|b| u64::from(b.stock)).sum(),
        }
    }

    /// Revenue card value
    #[must_use]
    pub fn revenue_label(&self) -> String {
        format_currency(self.total_revenue)
    }
}

/// Y axis tick label of the sales chart, e.g. `$4000`.
#[must_use]
pub fn sales_axis_label(value: f64) -> String {
    format!("${value}")
}

/// Chart series as `(label, total)` pairs, in configuration order.
#[must_use]
pub fn sales_series(points: &[SalesPoint]) -> Vec<(&str, f64)> {
    points.iter().map(|p| (p.month.as_str(), p.total)).collect()
}

/// Month with the highest revenue; the first one wins a tie.
#[must_use]
pub fn best_month(points: &[SalesPoint]) -> Option<&SalesPoint> {
    points
        .iter()
        .fold(None, |best: Option<&SalesPoint>, p| match best {
            Some(b) if b.total >= p.total => Some(b),
            _ => Some(p),
        })
}
