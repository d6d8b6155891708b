//! Integration tests for the data facade

use chrono::NaiveDate;
use data_facade::{
    adj_closing_prices, closing_prices, fetch_config_sync, gap_count, DataError, DataSource,
    FetchConfig, Quote, Result,
};
use std::sync::Mutex;

/// In-memory source that records the requests it receives.
struct RecordingSource {
    quotes: Vec<Quote>,
    requests: Mutex<Vec<(String, String, String)>>,
}

impl RecordingSource {
    fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl DataSource for RecordingSource {
    fn name(&self) -> &str {
        "recording"
    }

    fn fetch_sync(&self, symbol: &str, start_date: &str, end_date: &str) -> Result<Vec<Quote>> {
        self.requests.lock().unwrap().push((
            symbol.to_string(),
            start_date.to_string(),
            end_date.to_string(),
        ));
        if self.quotes.is_empty() {
            return Err(DataError::NoData);
        }
        Ok(self.quotes.clone())
    }
}

fn sample_quotes() -> Vec<Quote> {
    vec![
        Quote::new(1704067200, Some(100.0), Some(99.0)),
        Quote::gap(1704153600),
        Quote::new(1704240000, Some(102.0), None),
        Quote::new(1704326400, Some(104.0), Some(103.0)),
    ]
}

#[test]
fn test_fetch_config_forwards_lookback_range() {
    let source = RecordingSource::new(sample_quotes());
    let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let config = FetchConfig::lookback("^VIX", 180, end);

    let quotes = fetch_config_sync(&source, &config).unwrap();
    assert_eq!(quotes.len(), 4);

    let requests = source.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "^VIX");
    assert_eq!(requests[0].1, "2024-01-02");
    assert_eq!(requests[0].2, "2024-06-30");
}

#[test]
fn test_fetch_config_rejects_bad_dates_before_fetching() {
    let source = RecordingSource::new(sample_quotes());
    let config = FetchConfig::new("^GSPC", "2024-12-31", "2024-01-01");

    let result = fetch_config_sync(&source, &config);
    assert!(matches!(result, Err(DataError::InvalidDate(_))));
    assert!(source.requests.lock().unwrap().is_empty());
}

#[test]
fn test_closing_prices_preserve_gap_positions() {
    let source = RecordingSource::new(sample_quotes());
    let config = FetchConfig::new("^IXIC", "2024-01-01", "2024-01-05");

    let quotes = fetch_config_sync(&source, &config).unwrap();
    let closes = closing_prices(&quotes);

    assert_eq!(closes, vec![Some(100.0), None, Some(102.0), Some(104.0)]);
    assert_eq!(gap_count(&quotes), 1);

    let adjusted = adj_closing_prices(&quotes);
    assert_eq!(adjusted, vec![Some(99.0), None, Some(102.0), Some(103.0)]);
}

#[test]
fn test_source_errors_propagate() {
    let source = RecordingSource::new(Vec::new());
    let config = FetchConfig::new("NOPE", "2024-01-01", "2024-01-05");
    assert!(matches!(
        fetch_config_sync(&source, &config),
        Err(DataError::NoData)
    ));
}
