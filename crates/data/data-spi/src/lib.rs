//! Data Source Service Provider Interface
//!
//! Defines traits and types for fetching daily price series. Missing
//! observations are kept as explicit gaps (`None`) so that cleaning is
//! left to the preprocessing pipeline.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DataError, Result};
pub use model::{adj_closing_prices, closing_prices, gap_count, Quote};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_resolve() {
        let quotes = vec![
            Quote::new(1, Some(100.0), Some(100.0)),
            Quote::gap(2),
        ];
        assert_eq!(closing_prices(&quotes), vec![Some(100.0), None]);
        assert_eq!(gap_count(&quotes), 1);
    }

    #[test]
    fn test_error_result_alias() {
        let result: Result<Vec<Quote>> = Err(DataError::NoData);
        assert!(matches!(result, Err(DataError::NoData)));
    }
}
