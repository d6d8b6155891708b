//! Pipeline Service Provider Interface
//!
//! Defines the step trait, the series types that flow through a
//! preprocessing pipeline, and the errors a step can raise.

pub mod contract;
pub mod error;
pub mod model;

pub use contract::PipelineStep;
pub use error::{PipelineError, Result};
pub use model::{PriceSeries, WindowedSignal};
