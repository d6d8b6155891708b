//! Mean gap-fill step

use crate::ops::{checked_present_mean, replace_missing};
use pipeline_spi::{PipelineError, PipelineStep, Result};
use serde::{Deserialize, Serialize};

/// Replace `NaN` gaps with the mean of the present values seen in `fit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeanFillStep {
    mean: Option<f64>,
}

impl MeanFillStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill value learned by the last `fit`.
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }
}

impl PipelineStep for MeanFillStep {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.mean = Some(checked_present_mean(data)?);
        Ok(())
    }

    fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        if !data.iter().any(|v| v.is_nan()) {
            return Ok(data.to_vec());
        }
        let mean = self
            .mean
            .ok_or_else(|| PipelineError::TransformError("mean_fill used before fit".into()))?;
        Ok(replace_missing(data, mean))
    }

    fn name(&self) -> &str {
        "mean_fill"
    }
}
