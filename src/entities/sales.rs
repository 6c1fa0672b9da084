//! Sales point - One bucket of the dashboard sales chart.

use serde::{Deserialize, Serialize};

/// Revenue for one period
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Period label, e.g. "Jan"
    pub month: String,
    /// Revenue for the period in dollars
    pub total: f64,
}
