//! Pipeline step trait.

use crate::error::Result;

/// Common trait for pipeline transformation steps.
///
/// Missing observations travel through a step as `NaN`. Steps other than
/// gap filling expect their input to contain none.
pub trait PipelineStep: Send + Sync {
    /// Fit the step to data (learn parameters such as a mean).
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Transform data forward. Always returns a freshly allocated vector.
    fn transform(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Name of this step
    fn name(&self) -> &str;

    /// Fit then transform the same data.
    fn fit_transform(&mut self, data: &[f64]) -> Result<Vec<f64>> {
        self.fit(data)?;
        self.transform(data)
    }
}
