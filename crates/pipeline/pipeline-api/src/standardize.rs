//! Standardize step

use crate::ops::{apply_standardize, mean_std};
use pipeline_spi::{PipelineStep, Result};
use serde::{Deserialize, Serialize};

/// Standardize data to zero mean and unit variance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardizeStep {
    mean: f64,
    std_dev: f64,
}

impl StandardizeStep {
    pub fn new() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Default for StandardizeStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for StandardizeStep {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        (self.mean, self.std_dev) = mean_std(data)?;
        Ok(())
    }

    fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        Ok(apply_standardize(data, self.mean, self.std_dev))
    }

    fn name(&self) -> &str {
        "standardize"
    }
}
