//! JSON reports written by the commands.

use decomposition_core::{
    axis_range, modes_align, peak_energy_index, reconstruction_mae, residual_variance,
    summarize_modes, Decomposition, ModeSummary,
};
use pipeline_facade::{PreprocessMode, PriceSeries, WindowedSignal};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::CliResult;

/// Number of modes summarized, matching the "first five IMFs" convention.
pub const SUMMARY_MODES: usize = 5;

#[derive(Debug, Serialize)]
pub struct SignalReport {
    pub symbol: String,
    pub mode: PreprocessMode,
    pub raw_length: usize,
    pub missing_filled: usize,
    pub requested_length: usize,
    pub length: usize,
    pub values: Vec<f64>,
}

impl SignalReport {
    pub fn new(symbol: &str, mode: PreprocessMode, raw: &PriceSeries, signal: WindowedSignal) -> Self {
        Self {
            symbol: symbol.to_string(),
            mode,
            raw_length: raw.len(),
            missing_filled: raw.missing_count(),
            requested_length: signal.requested_length(),
            length: signal.len(),
            values: signal.into_values(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub signal_length: usize,
    pub component_count: usize,
    /// Only for modes that line up sample-for-sample with the signal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconstruction_mae: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modes: Vec<ModeSummary>,
    /// Variance of the last mode, reported even when it is not summarized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual_variance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_energy_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_range: Option<(f64, f64)>,
}

impl DiagnosticsReport {
    pub fn new(signal: &[f64], decomposition: &Decomposition) -> CliResult<Self> {
        let mut report = Self {
            signal_length: signal.len(),
            component_count: decomposition.component_count(),
            reconstruction_mae: None,
            modes: Vec::new(),
            residual_variance: None,
            peak_energy_index: peak_energy_index(decomposition),
            axis_range: axis_range(decomposition),
        };

        if let Some(modes) = decomposition.modes() {
            if modes_align(signal, modes) {
                let mae = reconstruction_mae(signal, modes).map_err(|e| e.to_string())?;
                report.reconstruction_mae = Some(mae);
            } else {
                tracing::debug!(
                    signal_length = signal.len(),
                    "components differ in length from the signal, skipping reconstruction error"
                );
            }
            report.modes = summarize_modes(signal, modes, SUMMARY_MODES);
            report.residual_variance = residual_variance(modes);
        }
        Ok(report)
    }
}

/// Write a report to `output`, or pretty-print it to stdout.
pub fn write_json<T: Serialize>(report: &T, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            let mut file =
                File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
            serde_json::to_writer_pretty(&mut file, report)
                .map_err(|e| format!("Failed to write JSON: {}", e))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| format!("Failed to encode JSON: {}", e))?;
            println!("{}", json);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline_facade::preprocess;

    #[test]
    fn test_signal_report_counts() {
        let raw = PriceSeries::new(vec![Some(100.0), None, Some(102.0), Some(104.0)]);
        let signal = preprocess(&raw, 2, PreprocessMode::LogReturn).unwrap();
        let report = SignalReport::new("^IXIC", PreprocessMode::LogReturn, &raw, signal);

        assert_eq!(report.raw_length, 4);
        assert_eq!(report.missing_filled, 1);
        assert_eq!(report.requested_length, 2);
        assert_eq!(report.length, 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "log-return");
    }

    #[test]
    fn test_diagnostics_for_modes() {
        let signal = vec![1.5, -0.5, 1.5, -0.5];
        let decomposition = Decomposition::Modes {
            modes: vec![vec![1.0, -1.0, 1.0, -1.0], vec![0.5; 4]],
        };
        let report = DiagnosticsReport::new(&signal, &decomposition).unwrap();
        assert_eq!(report.component_count, 2);
        assert_eq!(report.reconstruction_mae, Some(0.0));
        assert_eq!(report.modes.len(), 2);
        assert_eq!(report.peak_energy_index, None);
    }

    #[test]
    fn test_diagnostics_for_surface() {
        let decomposition = Decomposition::Surface {
            magnitudes: vec![vec![0.0, 3.0, 1.0]],
            axis: vec![1.0],
        };
        let report = DiagnosticsReport::new(&[0.0; 3], &decomposition).unwrap();
        assert_eq!(report.peak_energy_index, Some(1));
        assert!(report.reconstruction_mae.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("modes").is_none());
    }

    #[test]
    fn test_diagnostics_for_wavelet_bands() {
        let signal: Vec<f64> = (0..64).map(|i| if i % 4 < 2 { 0.01 } else { -0.01 }).collect();
        let decomposition = Decomposition::Modes {
            modes: vec![vec![0.02; 22], vec![0.01, -0.01].repeat(11), vec![0.005; 35]],
        };
        let report = DiagnosticsReport::new(&signal, &decomposition).unwrap();

        assert!(report.reconstruction_mae.is_none());
        let lengths: Vec<usize> = report.modes.iter().map(|m| m.length).collect();
        assert_eq!(lengths, vec![22, 22, 35]);
        assert!(report.modes[0].variance < 1e-12);
        assert!((report.modes[1].variance_share - 100.0).abs() < 1e-9);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("reconstruction_mae").is_none());
        assert_eq!(json["modes"][2]["length"], 35);
    }

    #[test]
    fn test_residual_survives_summary_limit() {
        let signal = vec![0.0; 4];
        let modes: Vec<Vec<f64>> = (0..7).map(|k| vec![0.0, 0.0, 0.0, f64::from(k)]).collect();
        let report = DiagnosticsReport::new(&signal, &Decomposition::Modes { modes }).unwrap();

        assert_eq!(report.component_count, 7);
        assert_eq!(report.modes.len(), SUMMARY_MODES);
        // last mode is [0, 0, 0, 6]
        assert_eq!(report.residual_variance, Some(6.75));
        assert_eq!(report.reconstruction_mae, Some(5.25));
    }

    #[test]
    fn test_surface_reports_axis_range() {
        let decomposition = Decomposition::Surface {
            magnitudes: vec![vec![0.0, 1.0], vec![2.0, 0.0], vec![0.0, 0.5]],
            axis: vec![0.5, 0.125, 0.0039],
        };
        let report = DiagnosticsReport::new(&[0.0; 2], &decomposition).unwrap();
        assert_eq!(report.axis_range, Some((0.5, 0.0039)));
        assert!(report.residual_variance.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["axis_range"], serde_json::json!([0.5, 0.0039]));
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&serde_json::json!({"ok": true}), Some(&path)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"ok\": true"));
    }
}
