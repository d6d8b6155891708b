//! Error types for pipeline operations.

mod pipeline_error;

pub use pipeline_error::{PipelineError, Result};
