//! Pipeline Core
//!
//! The step runner shared by every preprocessing mode.

pub use pipeline_spi::{PipelineError, PipelineStep, Result};
use tracing::debug;

/// Ordered sequence of steps applied to a series.
///
/// Each step is fitted on the output of the previous one, so parameters
/// such as a fill mean are always learned from the data the step sees.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn PipelineStep>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(&mut self, step: Box<dyn PipelineStep>) {
        self.steps.push(step);
    }

    /// Builder-style [`Pipeline::add_step`].
    pub fn with_step(mut self, step: impl PipelineStep + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Names of the steps in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn fit_transform(&mut self, data: &[f64]) -> Result<Vec<f64>> {
        let mut result = data.to_vec();
        for step in &mut self.steps {
            let input_len = result.len();
            result = step.fit_transform(&result)?;
            debug!(
                step = step.name(),
                input_len,
                output_len = result.len(),
                "pipeline step applied"
            );
        }
        Ok(result)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.step_names())
            .finish()
    }
}
