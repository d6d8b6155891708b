//! Diagnostics for additive (mode) decompositions.

use crate::stats::{approx_period, variance, variance_share, zero_crossings};
use decomposition_spi::{DecompositionError, Result};
use serde::{Deserialize, Serialize};

/// Summary of one mode, numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeSummary {
    pub index: usize,
    /// Samples in the mode; wavelet bands shrink with each level
    pub length: usize,
    pub zero_crossings: usize,
    pub approx_period: Option<f64>,
    pub variance: f64,
    /// Percent of the signal's variance
    pub variance_share: f64,
}

/// Summaries for the first `limit` modes.
pub fn summarize_modes(signal: &[f64], modes: &[Vec<f64>], limit: usize) -> Vec<ModeSummary> {
    modes
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, mode)| ModeSummary {
            index: i + 1,
            length: mode.len(),
            zero_crossings: zero_crossings(mode),
            approx_period: approx_period(mode),
            variance: variance(mode),
            variance_share: variance_share(mode, signal),
        })
        .collect()
}

/// Whether every mode has one sample per signal sample, so the modes can
/// be summed back into the signal.
pub fn modes_align(signal: &[f64], modes: &[Vec<f64>]) -> bool {
    !modes.is_empty() && modes.iter().all(|m| m.len() == signal.len())
}

/// Variance of the last, slowest mode (the EMD residual trend).
pub fn residual_variance(modes: &[Vec<f64>]) -> Option<f64> {
    modes.last().map(|m| variance(m))
}

/// Mean absolute error between the signal and the sum of its modes.
pub fn reconstruction_mae(signal: &[f64], modes: &[Vec<f64>]) -> Result<f64> {
    if modes.is_empty() {
        return Err(DecompositionError::EmptyDecomposition);
    }
    if let Some((component, mode)) = modes
        .iter()
        .enumerate()
        .find(|(_, m)| m.len() != signal.len())
    {
        return Err(DecompositionError::LengthMismatch {
            expected: signal.len(),
            component,
            actual: mode.len(),
        });
    }
    if signal.is_empty() {
        return Ok(0.0);
    }

    let total_error: f64 = signal
        .iter()
        .enumerate()
        .map(|(t, &x)| (x - modes.iter().map(|m| m[t]).sum::<f64>()).abs())
        .sum();
    Ok(total_error / signal.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_signal() -> (Vec<f64>, Vec<Vec<f64>>) {
        let fast = vec![1.0, -1.0, 1.0, -1.0];
        let slow = vec![0.5, 0.5, 0.5, 0.5];
        let signal: Vec<f64> = fast.iter().zip(&slow).map(|(a, b)| a + b).collect();
        (signal, vec![fast, slow])
    }

    #[test]
    fn test_exact_reconstruction() {
        let (signal, modes) = split_signal();
        assert_eq!(reconstruction_mae(&signal, &modes).unwrap(), 0.0);
    }

    #[test]
    fn test_reconstruction_error() {
        let (signal, mut modes) = split_signal();
        modes[1] = vec![0.0; 4];
        assert_eq!(reconstruction_mae(&signal, &modes).unwrap(), 0.5);
    }

    #[test]
    fn test_reconstruction_rejects_bad_shapes() {
        let (signal, mut modes) = split_signal();
        assert_eq!(
            reconstruction_mae(&signal, &[]),
            Err(DecompositionError::EmptyDecomposition)
        );
        modes[1].pop();
        assert_eq!(
            reconstruction_mae(&signal, &modes),
            Err(DecompositionError::LengthMismatch {
                expected: 4,
                component: 1,
                actual: 3
            })
        );
    }

    #[test]
    fn test_summaries() {
        let (signal, modes) = split_signal();
        let summary = summarize_modes(&signal, &modes, 5);
        assert_eq!(summary.len(), 2);

        assert_eq!(summary[0].index, 1);
        assert_eq!(summary[0].length, 4);
        assert_eq!(summary[0].zero_crossings, 3);
        assert_eq!(summary[0].approx_period, Some(8.0 / 3.0));
        assert_eq!(summary[0].variance, 1.0);
        assert_eq!(summary[0].variance_share, 100.0);

        assert_eq!(summary[1].zero_crossings, 0);
        assert_eq!(summary[1].approx_period, None);
        assert_eq!(summary[1].variance_share, 0.0);
    }

    #[test]
    fn test_unequal_bands_summarized() {
        // approximation band plus two detail bands of a 16-sample signal
        let signal: Vec<f64> = (0..16).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let bands = vec![vec![2.0, 2.0, 2.0, 4.0], vec![1.0, -1.0, 1.0, -1.0], vec![0.5; 8]];

        assert!(!modes_align(&signal, &bands));
        let summary = summarize_modes(&signal, &bands, 5);
        let lengths: Vec<usize> = summary.iter().map(|m| m.length).collect();
        assert_eq!(lengths, vec![4, 4, 8]);
        assert_eq!(summary[0].variance, 0.75);
        assert_eq!(summary[0].variance_share, 75.0);
    }

    #[test]
    fn test_modes_align() {
        let (signal, modes) = split_signal();
        assert!(modes_align(&signal, &modes));
        assert!(!modes_align(&signal, &[]));
    }

    #[test]
    fn test_residual_variance_uses_last_mode() {
        let modes: Vec<Vec<f64>> = (0..7).map(|k| vec![0.0, f64::from(k)]).collect();
        assert_eq!(residual_variance(&modes), Some(9.0));
        assert_eq!(residual_variance(&[]), None);
    }

    #[test]
    fn test_summary_limit() {
        let (signal, modes) = split_signal();
        assert_eq!(summarize_modes(&signal, &modes, 1).len(), 1);
    }
}
