//! Pipeline step implementations
//!
//! This crate provides the preprocessing steps and the preprocessor built
//! from them:
//!
//! - [`MeanFillStep`]: Replace gaps with the mean of present values
//! - [`LogReturnStep`]: Natural-log returns of consecutive prices
//! - [`StandardizeStep`]: Standardize to zero mean, unit variance
//! - [`TrailingWindowStep`]: Keep the most recent values
//! - [`Preprocessor`] / [`preprocess`]: the configured chain of the above

mod config;
mod gap_fill;
mod log_return;
pub mod ops;
mod presets;
mod preprocessor;
mod standardize;
mod window;

// Re-export from core
pub use pipeline_core::{Pipeline, PipelineError, Result};

// Re-export traits and models from SPI
pub use pipeline_spi::{PipelineStep, PriceSeries, WindowedSignal};

// Re-export implementations
pub use config::{PreprocessConfig, PreprocessConfigBuilder, PreprocessMode};
pub use gap_fill::MeanFillStep;
pub use log_return::LogReturnStep;
pub use ops::{fill_missing_with_mean, log_returns, standardize, trailing_window};
pub use presets::Preset;
pub use preprocessor::{preprocess, Preprocessor};
pub use standardize::StandardizeStep;
pub use window::TrailingWindowStep;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::PipelineStep;
    pub use crate::{LogReturnStep, MeanFillStep, StandardizeStep, TrailingWindowStep};
    pub use crate::{Pipeline, PipelineError, Result};
    pub use crate::{preprocess, PreprocessConfig, PreprocessMode, Preprocessor, Preset};
    pub use crate::{PriceSeries, WindowedSignal};
}
