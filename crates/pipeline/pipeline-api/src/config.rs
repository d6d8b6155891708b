//! Preprocessing configuration.

use pipeline_spi::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How clean prices become the signal. The two modes are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreprocessMode {
    /// Log returns of a price-level series; output is one shorter than the input.
    LogReturn,
    /// Z-scored prices, for bounded index series such as volatility indices.
    ZScore,
}

impl PreprocessMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreprocessMode::LogReturn => "log-return",
            PreprocessMode::ZScore => "z-score",
        }
    }
}

impl fmt::Display for PreprocessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreprocessMode {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "log-return" | "log_return" | "logreturn" | "returns" => Ok(PreprocessMode::LogReturn),
            "z-score" | "z_score" | "zscore" => Ok(PreprocessMode::ZScore),
            other => Err(PipelineError::invalid_parameter(
                "mode",
                format!("unknown mode '{}', expected log-return or z-score", other),
            )),
        }
    }
}

/// Everything needed to go from a ticker to a windowed signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Instrument to fetch (e.g. "^IXIC")
    pub symbol: String,
    /// Calendar days of history to request, ending today
    pub lookback_days: u32,
    /// Length of the trailing window handed to the decomposition
    pub target_length: usize,
    pub mode: PreprocessMode,
}

impl PreprocessConfig {
    pub fn new(symbol: &str, lookback_days: u32, target_length: usize, mode: PreprocessMode) -> Self {
        Self {
            symbol: symbol.to_string(),
            lookback_days,
            target_length,
            mode,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(PipelineError::invalid_parameter("symbol", "must not be empty"));
        }
        if self.lookback_days == 0 {
            return Err(PipelineError::invalid_parameter(
                "lookback_days",
                "must be positive",
            ));
        }
        validate_window(self.target_length)
    }
}

pub(crate) fn validate_window(target_length: usize) -> Result<()> {
    if target_length == 0 {
        return Err(PipelineError::invalid_parameter(
            "target_length",
            "must be positive",
        ));
    }
    Ok(())
}

/// Builder for PreprocessConfig.
#[derive(Debug, Default)]
pub struct PreprocessConfigBuilder {
    symbol: Option<String>,
    lookback_days: Option<u32>,
    target_length: Option<usize>,
    mode: Option<PreprocessMode>,
}

impl PreprocessConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = Some(days);
        self
    }

    pub fn target_length(mut self, length: usize) -> Self {
        self.target_length = Some(length);
        self
    }

    pub fn mode(mut self, mode: PreprocessMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Build and validate. The mode has no default.
    pub fn build(self) -> Result<PreprocessConfig> {
        let config = PreprocessConfig {
            symbol: self
                .symbol
                .ok_or_else(|| PipelineError::invalid_parameter("symbol", "is required"))?,
            lookback_days: self
                .lookback_days
                .ok_or_else(|| PipelineError::invalid_parameter("lookback_days", "is required"))?,
            target_length: self
                .target_length
                .ok_or_else(|| PipelineError::invalid_parameter("target_length", "is required"))?,
            mode: self
                .mode
                .ok_or_else(|| PipelineError::invalid_parameter("mode", "is required"))?,
        };
        config.validate()?;
        Ok(config)
    }
}
