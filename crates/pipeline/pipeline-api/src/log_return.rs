//! Log-return step

use crate::ops::log_returns;
use pipeline_spi::{PipelineStep, Result};
use serde::{Deserialize, Serialize};

/// Convert clean prices to natural-log returns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LogReturnStep;

impl LogReturnStep {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineStep for LogReturnStep {
    fn fit(&mut self, _data: &[f64]) -> Result<()> {
        Ok(())
    }

    fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        log_returns(data)
    }

    fn name(&self) -> &str {
        "log_return"
    }
}
