//! Column extraction helpers.

use super::Quote;

/// Extract closing prices, keeping gaps as `None`.
pub fn closing_prices(quotes: &[Quote]) -> Vec<Option<f64>> {
    quotes.iter().map(|q| q.close).collect()
}

/// Extract adjusted closing prices, falling back to the close when the
/// provider did not report an adjustment.
pub fn adj_closing_prices(quotes: &[Quote]) -> Vec<Option<f64>> {
    quotes.iter().map(|q| q.adj_close.or(q.close)).collect()
}

/// Number of quotes without a close.
pub fn gap_count(quotes: &[Quote]) -> usize {
    quotes.iter().filter(|q| q.is_gap()).count()
}
