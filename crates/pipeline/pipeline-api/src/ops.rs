//! Pure series operations backing the pipeline steps.
//!
//! Every function returns a new vector and leaves its input untouched.

use pipeline_spi::{PipelineError, Result};

/// Mean of the non-`NaN` values, or `None` if there are none.
pub fn present_mean(data: &[f64]) -> Option<f64> {
    let (sum, count) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), &v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Replace every missing price with the mean of the present ones.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`PipelineError::EmptyInput`] | No present value (includes an empty slice) |
/// | [`PipelineError::NonFiniteValue`] | A present value is infinite |
pub fn fill_missing_with_mean(prices: &[Option<f64>]) -> Result<Vec<f64>> {
    let marked: Vec<f64> = prices.iter().map(|p| p.unwrap_or(f64::NAN)).collect();
    let mean = checked_present_mean(&marked)?;
    Ok(replace_missing(&marked, mean))
}

pub(crate) fn checked_present_mean(data: &[f64]) -> Result<f64> {
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| v.is_infinite()) {
        return Err(PipelineError::NonFiniteValue { index, value });
    }
    present_mean(data).ok_or(PipelineError::EmptyInput)
}

pub(crate) fn replace_missing(data: &[f64], fill: f64) -> Vec<f64> {
    data.iter()
        .map(|&v| if v.is_nan() { fill } else { v })
        .collect()
}

/// Natural-log returns `ln(p[i]) - ln(p[i-1])`; one shorter than the input.
///
/// Fewer than two prices yield an empty series. Every price is validated,
/// including a lone one, so bad data never passes silently.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`PipelineError::NonFiniteValue`] | A price is `NaN` or infinite |
/// | [`PipelineError::NonPositivePrice`] | A price is `<= 0` |
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>> {
    let logs = prices
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if !value.is_finite() {
                Err(PipelineError::NonFiniteValue { index, value })
            } else if value <= 0.0 {
                Err(PipelineError::NonPositivePrice { index, value })
            } else {
                Ok(value.ln())
            }
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(logs.windows(2).map(|w| w[1] - w[0]).collect())
}

/// Population mean and standard deviation (divides by `n`); zeros when empty.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`PipelineError::NonFiniteValue`] | A value is `NaN` or infinite, or the statistics overflow `f64` (names the largest-magnitude value) |
pub fn mean_std(data: &[f64]) -> Result<(f64, f64)> {
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PipelineError::NonFiniteValue { index, value });
    }
    if data.is_empty() {
        return Ok((0.0, 0.0));
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if !mean.is_finite() || !std_dev.is_finite() {
        let (index, &value) = data
            .iter()
            .enumerate()
            .fold((0, &data[0]), |best, (i, v)| {
                if v.abs() > best.1.abs() {
                    (i, v)
                } else {
                    best
                }
            });
        return Err(PipelineError::NonFiniteValue { index, value });
    }
    Ok((mean, std_dev))
}

/// Z-score a series. A constant series maps to all zeros.
///
/// # Errors
///
/// Fails like [`mean_std`].
pub fn standardize(data: &[f64]) -> Result<Vec<f64>> {
    let (mean, std_dev) = mean_std(data)?;
    Ok(apply_standardize(data, mean, std_dev))
}

pub(crate) fn apply_standardize(data: &[f64], mean: f64, std_dev: f64) -> Vec<f64> {
    if std_dev == 0.0 {
        return vec![0.0; data.len()];
    }
    data.iter().map(|&x| (x - mean) / std_dev).collect()
}

/// The last `length` values in order, or all of them when there are fewer.
pub fn trailing_window(data: &[f64], length: usize) -> Vec<f64> {
    let start = data.len().saturating_sub(length);
    data[start..].to_vec()
}
