//! Daily price observation.

use serde::{Deserialize, Serialize};

/// A single trading-day observation.
///
/// Price fields are optional: providers emit `null` for days where the
/// exchange published no close, and those gaps are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Unix timestamp (seconds)
    pub timestamp: i64,
    /// Closing price
    pub close: Option<f64>,
    /// Adjusted closing price (accounts for splits/dividends)
    pub adj_close: Option<f64>,
}

impl Quote {
    /// Create a new Quote.
    pub fn new(timestamp: i64, close: Option<f64>, adj_close: Option<f64>) -> Self {
        Self {
            timestamp,
            close,
            adj_close,
        }
    }

    /// A day with no observation at all.
    pub fn gap(timestamp: i64) -> Self {
        Self::new(timestamp, None, None)
    }

    /// Whether the close is missing.
    pub fn is_gap(&self) -> bool {
        self.close.is_none()
    }
}
