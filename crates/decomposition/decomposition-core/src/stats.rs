//! Per-series statistics.

/// Population variance; zero for an empty slice.
pub fn variance(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n
}

/// Share of the signal's variance carried by `component`, in percent.
pub fn variance_share(component: &[f64], signal: &[f64]) -> f64 {
    let total = variance(signal);
    if total > 0.0 {
        100.0 * variance(component) / total
    } else {
        0.0
    }
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Number of adjacent pairs whose signs differ. Touching zero counts.
pub fn zero_crossings(xs: &[f64]) -> usize {
    xs.windows(2).filter(|w| sign(w[0]) != sign(w[1])).count()
}

/// Mean oscillation period in samples, `2 * len / crossings`.
///
/// `None` with fewer than two crossings, where a period is meaningless.
pub fn approx_period(xs: &[f64]) -> Option<f64> {
    let crossings = zero_crossings(xs);
    (crossings > 1).then(|| 2.0 * xs.len() as f64 / crossings as f64)
}
