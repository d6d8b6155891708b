//! Data Source Facade
//!
//! Unified re-exports for the data area:
//! - `data_spi` - Traits, quote model, and errors for data sources
//! - `data_api` - Fetch configuration and builders
//! - `data_core` - Implementations (Yahoo Finance)
//!
//! # Example
//!
//! ```rust,no_run
//! use data_facade::{closing_prices, fetch_config_sync, FetchConfig, YahooFinance};
//!
//! let end = chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//! let config = FetchConfig::lookback("BTC-USD", 180, end);
//! let quotes = fetch_config_sync(&YahooFinance::new(), &config).unwrap();
//! let prices = closing_prices(&quotes);
//! println!("Got {} daily closes", prices.len());
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
