//! Trailing-window step

use crate::ops::trailing_window;
use pipeline_spi::{PipelineStep, Result};
use serde::{Deserialize, Serialize};

/// Keep the most recent `length` values; shorter input passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailingWindowStep {
    length: usize,
}

impl TrailingWindowStep {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl PipelineStep for TrailingWindowStep {
    fn fit(&mut self, _data: &[f64]) -> Result<()> {
        Ok(())
    }

    fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        Ok(trailing_window(data, self.length))
    }

    fn name(&self) -> &str {
        "trailing_window"
    }
}
