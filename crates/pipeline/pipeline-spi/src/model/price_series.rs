//! Raw price series with gaps.

use serde::{Deserialize, Serialize};

/// Ordered daily prices as delivered by a data source.
///
/// `None` marks a missing observation. The series is never mutated after
/// construction; every cleaning step produces a new vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    values: Vec<Option<f64>>,
}

impl PriceSeries {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// Build from plain floats, treating `NaN` as missing.
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            values: values
                .iter()
                .map(|&v| if v.is_nan() { None } else { Some(v) })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.len() - self.present_count()
    }

    /// Flatten to `f64`, encoding gaps as `NaN` for the step pipeline.
    pub fn to_marked(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
    }
}

impl From<Vec<Option<f64>>> for PriceSeries {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::new(values)
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(&values)
    }
}

impl FromIterator<Option<f64>> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
