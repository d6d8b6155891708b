//! Diagnostics for time-frequency surfaces.

use decomposition_spi::Decomposition;

/// Summed absolute magnitude per time column. Ragged rows are tolerated.
pub fn energy_by_time(magnitudes: &[Vec<f64>]) -> Vec<f64> {
    let width = magnitudes.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|t| {
            magnitudes
                .iter()
                .filter_map(|row| row.get(t))
                .map(|v| v.abs())
                .sum()
        })
        .collect()
}

/// Time index with the most energy; the first one wins ties.
///
/// Returns `None` for mode decompositions and empty surfaces.
pub fn peak_energy_index(decomposition: &Decomposition) -> Option<usize> {
    let Decomposition::Surface { magnitudes, .. } = decomposition else {
        return None;
    };
    energy_by_time(magnitudes)
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (t, e)| match best {
            Some((_, top)) if top >= e => best,
            _ => Some((t, e)),
        })
        .map(|(t, _)| t)
}

/// First and last entries of a surface's row axis, e.g. the frequency
/// range of a synchrosqueezed transform.
pub fn axis_range(decomposition: &Decomposition) -> Option<(f64, f64)> {
    match decomposition {
        Decomposition::Surface { axis, .. } => Some((*axis.first()?, *axis.last()?)),
        Decomposition::Modes { .. } => None,
    }
}
