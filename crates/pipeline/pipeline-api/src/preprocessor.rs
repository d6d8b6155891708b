//! Return-series preprocessor: gap fill, log-return or z-score, trailing window.

use crate::config::{validate_window, PreprocessConfig, PreprocessMode};
use crate::{LogReturnStep, MeanFillStep, StandardizeStep, TrailingWindowStep};
use pipeline_core::Pipeline;
use pipeline_spi::{PriceSeries, Result, WindowedSignal};
use tracing::{debug, warn};

/// Runs the configured preprocessing mode over raw price series.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    config: PreprocessConfig,
}

impl Preprocessor {
    /// Create a preprocessor; the configuration is validated here.
    pub fn new(config: PreprocessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// The step pipeline for this configuration, freshly constructed.
    pub fn pipeline(&self) -> Pipeline {
        build_pipeline(self.config.mode, self.config.target_length)
    }

    pub fn run(&self, prices: &PriceSeries) -> Result<WindowedSignal> {
        run_pipeline(
            &self.config.symbol,
            prices,
            self.config.target_length,
            self.config.mode,
        )
    }
}

/// Turn raw prices into a windowed signal of at most `window_length` values.
///
/// Output length is `min(window_length, n - 1)` in log-return mode and
/// `min(window_length, n)` in z-score mode. A short window is logged, not
/// rejected.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`PipelineError::InvalidParameter`](pipeline_spi::PipelineError::InvalidParameter) | `window_length` is zero |
/// | [`PipelineError::EmptyInput`](pipeline_spi::PipelineError::EmptyInput) | No present price |
/// | [`PipelineError::NonPositivePrice`](pipeline_spi::PipelineError::NonPositivePrice) | Log-return mode met a price `<= 0` |
pub fn preprocess(
    raw_prices: &PriceSeries,
    window_length: usize,
    mode: PreprocessMode,
) -> Result<WindowedSignal> {
    validate_window(window_length)?;
    run_pipeline("series", raw_prices, window_length, mode)
}

fn build_pipeline(mode: PreprocessMode, window_length: usize) -> Pipeline {
    let pipeline = Pipeline::new().with_step(MeanFillStep::new());
    let pipeline = match mode {
        PreprocessMode::LogReturn => pipeline.with_step(LogReturnStep::new()),
        PreprocessMode::ZScore => pipeline.with_step(StandardizeStep::new()),
    };
    pipeline.with_step(TrailingWindowStep::new(window_length))
}

fn run_pipeline(
    label: &str,
    prices: &PriceSeries,
    window_length: usize,
    mode: PreprocessMode,
) -> Result<WindowedSignal> {
    debug!(
        series = label,
        %mode,
        len = prices.len(),
        missing = prices.missing_count(),
        "preprocessing"
    );

    let mut pipeline = build_pipeline(mode, window_length);
    let values = pipeline.fit_transform(&prices.to_marked())?;
    let signal = WindowedSignal::new(values, window_length);

    if signal.is_short() {
        warn!(
            series = label,
            requested = window_length,
            available = signal.len(),
            "not enough data for the requested window, using the full series"
        );
    }
    Ok(signal)
}
