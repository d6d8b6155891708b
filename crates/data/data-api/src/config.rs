//! Data source configuration types.

use chrono::{Duration, NaiveDate};
use data_spi::{DataError, Result};
use serde::{Deserialize, Serialize};

/// Date format shared by configs and data sources.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Daily price range to fetch from a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Ticker symbol (e.g., "^GSPC", "BTC-USD")
    pub symbol: String,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
}

impl FetchConfig {
    /// Create a new fetch configuration.
    pub fn new(symbol: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    /// Daily configuration covering `lookback_days` calendar days up to `end`.
    pub fn lookback(symbol: &str, lookback_days: u32, end: NaiveDate) -> Self {
        let start = end - Duration::days(i64::from(lookback_days));
        Self::new(
            symbol,
            &start.format(DATE_FORMAT).to_string(),
            &end.format(DATE_FORMAT).to_string(),
        )
    }

    /// Parse both dates and check that the range is not inverted.
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate)> {
        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        if start > end {
            return Err(DataError::InvalidDate(format!(
                "start {} is after end {}",
                self.start_date, self.end_date
            )));
        }
        Ok((start, end))
    }
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|e| DataError::InvalidDate(format!("{}: {}", date, e)))
}
