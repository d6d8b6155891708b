//! Decomposition Core
//!
//! Descriptive statistics computed over the output of a [`Decomposer`].

mod modes;
mod stats;
mod surface;

pub use decomposition_spi::{
    Decomposer, Decomposition, DecompositionError, DecompositionKind, Result,
};
pub use modes::{modes_align, reconstruction_mae, residual_variance, summarize_modes, ModeSummary};
pub use stats::{approx_period, variance, variance_share, zero_crossings};
pub use surface::{axis_range, energy_by_time, peak_energy_index};
