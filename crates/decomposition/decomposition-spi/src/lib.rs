//! Decomposition Service Provider Interface
//!
//! Decompositions are supplied by external numerical libraries. This crate
//! only fixes the shape of their output so diagnostics and callers can be
//! written once for all of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by decompositions and their diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecompositionError {
    /// The decomposition produced no components
    #[error("Decomposition produced no components")]
    EmptyDecomposition,

    /// A component does not line up with the signal
    #[error("Length mismatch: expected {expected} samples, component {component} has {actual}")]
    LengthMismatch {
        expected: usize,
        component: usize,
        actual: usize,
    },

    /// The underlying transform failed
    #[error("Transform failed: {0}")]
    Transform(String),
}

/// Result type for decomposition operations.
pub type Result<T> = std::result::Result<T, DecompositionError>;

/// The four decomposition families the preprocessing presets target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecompositionKind {
    /// Complete ensemble EMD with adaptive noise
    Ceemdan,
    /// Empirical mode decomposition
    Emd,
    /// Synchrosqueezed continuous wavelet transform
    SynchrosqueezedCwt,
    /// Multilevel discrete wavelet transform
    Dwt,
}

impl DecompositionKind {
    /// Window length the presets feed this decomposition.
    pub fn preferred_window(&self) -> usize {
        match self {
            DecompositionKind::Ceemdan => 400,
            DecompositionKind::Emd => 500,
            DecompositionKind::SynchrosqueezedCwt => 256,
            DecompositionKind::Dwt => 1024,
        }
    }

    /// Whether the output is a set of additive modes.
    pub fn is_additive(&self) -> bool {
        matches!(self, DecompositionKind::Ceemdan | DecompositionKind::Emd)
    }
}

/// Output of a decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decomposition {
    /// Components ordered as the library returns them: IMFs fastest to
    /// slowest, or wavelet coefficient bands approximation first. IMFs
    /// sum back to the signal; wavelet bands are shorter and do not.
    Modes { modes: Vec<Vec<f64>> },
    /// Time-frequency magnitudes: one row per scale or frequency, one
    /// column per sample. `axis` labels the rows.
    Surface {
        magnitudes: Vec<Vec<f64>>,
        axis: Vec<f64>,
    },
}

impl Decomposition {
    /// Number of modes, or rows of the surface.
    pub fn component_count(&self) -> usize {
        match self {
            Decomposition::Modes { modes } => modes.len(),
            Decomposition::Surface { magnitudes, .. } => magnitudes.len(),
        }
    }

    pub fn modes(&self) -> Option<&[Vec<f64>]> {
        match self {
            Decomposition::Modes { modes } => Some(modes.as_slice()),
            Decomposition::Surface { .. } => None,
        }
    }
}

/// A transform from a windowed signal to a [`Decomposition`].
pub trait Decomposer: Send + Sync {
    fn kind(&self) -> DecompositionKind;

    fn name(&self) -> &str;

    fn decompose(&self, signal: &[f64]) -> Result<Decomposition>;
}
