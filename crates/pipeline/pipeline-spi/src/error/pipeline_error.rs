//! Pipeline error types.

use thiserror::Error;

/// Errors that can occur during pipeline operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The series has no present observations to compute a fill value from
    #[error("Empty input: the price series has no present values")]
    EmptyInput,

    /// A price at or below zero reached the log-return step
    #[error("Non-positive price {value} at index {index}: log returns are undefined")]
    NonPositivePrice { index: usize, value: f64 },

    /// An infinite value was found where a finite observation is required
    #[error("Non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Transformation failed
    #[error("Transformation failed: {0}")]
    TransformError(String),
}

impl PipelineError {
    /// Shorthand for [`PipelineError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        assert_eq!(
            PipelineError::EmptyInput.to_string(),
            "Empty input: the price series has no present values"
        );
    }

    #[test]
    fn test_non_positive_price_display() {
        let error = PipelineError::NonPositivePrice {
            index: 3,
            value: 0.0,
        };
        assert_eq!(
            error.to_string(),
            "Non-positive price 0 at index 3: log returns are undefined"
        );
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = PipelineError::invalid_parameter("target_length", "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'target_length': must be positive"
        );
    }

    #[test]
    fn test_errors_are_distinguishable() {
        let err = PipelineError::NonPositivePrice {
            index: 1,
            value: -2.5,
        };
        assert!(matches!(err, PipelineError::NonPositivePrice { index: 1, .. }));
        assert_ne!(err, PipelineError::EmptyInput);
    }
}
