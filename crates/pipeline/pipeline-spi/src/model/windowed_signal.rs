//! Fixed-length trailing window handed to a decomposition.

use serde::{Deserialize, Serialize};

/// The preprocessed signal: at most `requested_length` trailing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedSignal {
    values: Vec<f64>,
    requested_length: usize,
}

impl WindowedSignal {
    pub fn new(values: Vec<f64>, requested_length: usize) -> Self {
        Self {
            values,
            requested_length,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Window length asked for in the configuration.
    pub fn requested_length(&self) -> usize {
        self.requested_length
    }

    /// True when fewer values were available than requested.
    pub fn is_short(&self) -> bool {
        self.values.len() < self.requested_length
    }
}

impl AsRef<[f64]> for WindowedSignal {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_window_is_not_short() {
        let signal = WindowedSignal::new(vec![0.1, 0.2, 0.3], 3);
        assert!(!signal.is_short());
        assert_eq!(signal.len(), 3);
    }

    #[test]
    fn test_short_window() {
        let signal = WindowedSignal::new(vec![0.1], 400);
        assert!(signal.is_short());
        assert_eq!(signal.requested_length(), 400);
        assert_eq!(signal.into_values(), vec![0.1]);
    }
}
