//! Data source trait definition.

use crate::error::Result;
use crate::model::Quote;

/// Trait for data sources that can fetch historical price data.
///
/// Dates are `YYYY-MM-DD`. Returned quotes are in chronological order and
/// may contain gaps.
pub trait DataSource: Send + Sync {
    /// Data source name.
    fn name(&self) -> &str;

    /// Fetch daily history synchronously.
    fn fetch_sync(&self, symbol: &str, start_date: &str, end_date: &str) -> Result<Vec<Quote>>;
}
