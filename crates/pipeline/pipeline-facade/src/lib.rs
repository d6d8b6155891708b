//! Pipeline Facade
//!
//! High-level API for turning raw price series into decomposition-ready
//! signals.
//!
//! # Example
//!
//! ```rust
//! use pipeline_facade::{preprocess, PreprocessMode, PriceSeries};
//!
//! let prices = PriceSeries::new(vec![Some(100.0), None, Some(102.0), Some(104.0)]);
//! let signal = preprocess(&prices, 400, PreprocessMode::LogReturn).unwrap();
//! assert_eq!(signal.len(), 3);
//! ```

// Re-export everything from pipeline-api
pub use pipeline_api::*;

// Re-export prelude for convenience
pub use pipeline_api::prelude;
