//! Yahoo Finance chart API client
//!
//! Fetches daily closes from the v8 chart endpoint. Days where Yahoo
//! reports `null` are returned as gap quotes rather than dropped, so the
//! series keeps one entry per trading day.
//!
//! # Example
//!
//! ```rust,no_run
//! use data_core::YahooFinance;
//! use data_spi::{closing_prices, DataSource};
//!
//! let quotes = YahooFinance::new()
//!     .fetch_sync("^GSPC", "2023-01-01", "2024-12-31")
//!     .unwrap();
//! let prices = closing_prices(&quotes);
//! println!("Got {} price points", prices.len());
//! ```

use chrono::{NaiveDate, NaiveTime};
use data_api::DATE_FORMAT;
#[cfg(feature = "fetch")]
use data_api::FetchConfig;
use data_spi::{DataError, DataSource, Quote, Result};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

#[cfg(feature = "fetch")]
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance API response structures
#[derive(Debug, Deserialize)]
struct YahooResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
    adjclose: Option<Vec<AdjClose>>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    adjclose: Vec<Option<f64>>,
}

/// Yahoo Finance client
#[derive(Debug, Clone)]
pub struct YahooFinance {
    base_url: String,
}

impl Default for YahooFinance {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooFinance {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different chart endpoint (mirrors, test servers).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Parse a YYYY-MM-DD date to a Unix timestamp at midnight UTC.
    fn parse_date(date: &str) -> Result<i64> {
        let day = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| DataError::InvalidDate(format!("{}: {}", date, e)))?;
        Ok(day.and_time(NaiveTime::MIN).and_utc().timestamp())
    }

    /// Build the API URL for daily bars
    fn build_url(&self, symbol: &str, start: i64, end: i64) -> String {
        format!(
            "{}/{}?period1={}&period2={}&interval=1d",
            self.base_url,
            encode_symbol(symbol),
            start,
            end
        )
    }

    fn request_url(&self, symbol: &str, start_date: &str, end_date: &str) -> Result<String> {
        let start = Self::parse_date(start_date)?;
        let end = Self::parse_date(end_date)?;
        if start > end {
            return Err(DataError::InvalidDate(format!(
                "start {} is after end {}",
                start_date, end_date
            )));
        }
        Ok(self.build_url(symbol, start, end))
    }

    /// Fetch historical data (blocking)
    #[cfg(feature = "fetch")]
    pub fn fetch_blocking(
        &self,
        symbol: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Quote>> {
        let url = self.request_url(symbol, start_date, end_date)?;
        tracing::info!(symbol, start_date, end_date, "fetching chart");

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        let text = client
            .get(&url)
            .send()
            .map_err(|e| DataError::RequestFailed(e.to_string()))?
            .text()
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        self.parse_response(&text)
    }

    /// Parse Yahoo Finance API response
    fn parse_response(&self, json: &str) -> Result<Vec<Quote>> {
        let response: YahooResponse =
            serde_json::from_str(json).map_err(|e| DataError::ParseError(e.to_string()))?;

        if let Some(error) = response.chart.error {
            return Err(DataError::ApiError {
                code: error.code,
                description: error.description,
            });
        }

        let results = response.chart.result.ok_or(DataError::NoData)?;
        let data = results.first().ok_or(DataError::NoData)?;

        let quote_data = data.indicators.quote.first().ok_or(DataError::NoData)?;
        let adj_close_data = data.indicators.adjclose.as_ref().and_then(|a| a.first());

        let quotes: Vec<Quote> = data
            .timestamp
            .iter()
            .enumerate()
            .map(|(i, &timestamp)| Quote {
                timestamp,
                close: quote_data.close.get(i).copied().flatten(),
                adj_close: adj_close_data
                    .and_then(|a| a.adjclose.get(i))
                    .copied()
                    .flatten(),
            })
            .collect();

        if quotes.iter().all(Quote::is_gap) {
            return Err(DataError::NoData);
        }

        let gaps = quotes.iter().filter(|q| q.is_gap()).count();
        if gaps > 0 {
            tracing::debug!(gaps, total = quotes.len(), "chart contains missing closes");
        }

        Ok(quotes)
    }
}

impl DataSource for YahooFinance {
    fn name(&self) -> &str {
        "yahoo"
    }

    #[cfg(feature = "fetch")]
    fn fetch_sync(&self, symbol: &str, start_date: &str, end_date: &str) -> Result<Vec<Quote>> {
        self.fetch_blocking(symbol, start_date, end_date)
    }

    #[cfg(not(feature = "fetch"))]
    fn fetch_sync(
        &self,
        _symbol: &str,
        _start_date: &str,
        _end_date: &str,
    ) -> Result<Vec<Quote>> {
        Err(DataError::ConfigError(
            "data-core was built without the `fetch` feature".to_string(),
        ))
    }
}

/// Percent-encode the characters Yahoo symbols use that are not URL-safe.
fn encode_symbol(symbol: &str) -> String {
    symbol.replace('^', "%5E").replace('=', "%3D")
}

/// Fetch the quotes described by a [`FetchConfig`] (blocking).
#[cfg(feature = "fetch")]
pub fn fetch_config_sync(source: &dyn DataSource, config: &FetchConfig) -> Result<Vec<Quote>> {
    config.date_range()?;
    source.fetch_sync(&config.symbol, &config.start_date, &config.end_date)
}
