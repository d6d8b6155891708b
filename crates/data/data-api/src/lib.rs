//! Data Source API
//!
//! Configuration types for fetching price series.

mod config;

pub use config::{FetchConfig, DATE_FORMAT};
