//! # tsdecomp
//!
//! Command-line interface for building decomposition-ready signals from
//! daily price series.

mod input;
mod report;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use data_facade::{
    adj_closing_prices, closing_prices, fetch_config_sync, FetchConfig, Quote, YahooFinance,
    DATE_FORMAT,
};
use decomposition_core::DecompositionKind;
use pipeline_facade::{PreprocessConfig, PreprocessMode, Preprocessor, Preset, PriceSeries};
use report::{DiagnosticsReport, SignalReport};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "tsdecomp")]
#[command(about = "Prepare price series for signal decomposition", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in presets
    Presets,

    /// Fetch a preset's instrument from Yahoo Finance and preprocess it
    Run {
        /// Preset name (nasdaq-ceemdan, bitcoin-emd, vix-ssq, sp500-dwt)
        #[arg(short, long, required_unless_present = "config")]
        preset: Option<String>,

        /// JSON file with a full preprocessing configuration
        #[arg(long, conflicts_with = "preset")]
        config: Option<PathBuf>,

        /// Last day of the lookback window, YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        end: Option<String>,

        /// Use split/dividend adjusted closes
        #[arg(long)]
        adjusted: bool,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Preprocess prices from a local CSV or JSON file
    Preprocess {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Column name or index holding prices
        #[arg(short, long)]
        column: Option<String>,

        /// Length of the trailing window
        #[arg(short, long)]
        target_length: usize,

        /// Preprocessing mode (log-return, z-score)
        #[arg(short, long)]
        mode: String,

        /// Label written into the report
        #[arg(long, default_value = "local")]
        symbol: String,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a decomposition computed by an external library
    Diagnose {
        /// Signal file written by `run` or `preprocess`
        #[arg(short, long)]
        signal: PathBuf,

        /// Decomposition JSON ({"type": "modes"|"surface", ...})
        #[arg(short, long)]
        decomposition: PathBuf,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct PresetEntry {
    name: &'static str,
    description: &'static str,
    decomposition: DecompositionKind,
    #[serde(flatten)]
    config: PreprocessConfig,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn load_config(path: &Path) -> CliResult<PreprocessConfig> {
    let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
    let config: PreprocessConfig = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse config: {}", e))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn resolve_config(preset: Option<&str>, config: Option<&Path>) -> CliResult<PreprocessConfig> {
    match (preset, config) {
        (_, Some(path)) => load_config(path),
        (Some(name), None) => name
            .parse::<Preset>()
            .map(|p| p.config())
            .map_err(|e| e.to_string()),
        (None, None) => Err("Either --preset or --config is required".to_string()),
    }
}

fn parse_end_date(end: Option<&str>) -> CliResult<NaiveDate> {
    match end {
        Some(date) => NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| format!("Invalid end date '{}': {}", date, e)),
        None => Ok(Utc::now().date_naive()),
    }
}

/// List presets command
fn run_presets() -> CliResult<()> {
    let entries: Vec<PresetEntry> = Preset::ALL
        .iter()
        .map(|p| PresetEntry {
            name: p.name(),
            description: p.description(),
            decomposition: p.kind(),
            config: p.config(),
        })
        .collect();
    report::write_json(&entries, None)
}

fn price_series(quotes: &[Quote], adjusted: bool) -> PriceSeries {
    if adjusted {
        PriceSeries::new(adj_closing_prices(quotes))
    } else {
        PriceSeries::new(closing_prices(quotes))
    }
}

/// Fetch and preprocess command
fn run_fetch(
    preset: Option<String>,
    config: Option<PathBuf>,
    end: Option<String>,
    adjusted: bool,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let config = resolve_config(preset.as_deref(), config.as_deref())?;
    let end = parse_end_date(end.as_deref())?;
    let preprocessor = Preprocessor::new(config).map_err(|e| e.to_string())?;
    let config = preprocessor.config();

    let fetch = FetchConfig::lookback(&config.symbol, config.lookback_days, end);
    let quotes = fetch_config_sync(&YahooFinance::new(), &fetch).map_err(|e| e.to_string())?;
    let raw = price_series(&quotes, adjusted);
    tracing::info!(
        symbol = %config.symbol,
        adjusted,
        observations = raw.len(),
        missing = raw.missing_count(),
        "prices fetched"
    );

    let signal = preprocessor.run(&raw).map_err(|e| e.to_string())?;
    let report = SignalReport::new(&config.symbol, config.mode, &raw, signal);
    report::write_json(&report, output.as_deref())
}

/// Offline preprocess command
fn run_preprocess(
    input: PathBuf,
    column: Option<String>,
    target_length: usize,
    mode: String,
    symbol: String,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let mode = mode
        .parse::<PreprocessMode>()
        .map_err(|e| e.to_string())?;
    let raw = input::load_prices(&input, column.as_deref())?;
    tracing::info!(
        path = %input.display(),
        observations = raw.len(),
        missing = raw.missing_count(),
        "prices loaded"
    );

    let signal =
        pipeline_facade::preprocess(&raw, target_length, mode).map_err(|e| e.to_string())?;
    let report = SignalReport::new(&symbol, mode, &raw, signal);
    report::write_json(&report, output.as_deref())
}

/// Decomposition diagnostics command
fn run_diagnose(signal: PathBuf, decomposition: PathBuf, output: Option<PathBuf>) -> CliResult<()> {
    let signal = input::load_signal(&signal)?;
    let decomposition = input::load_decomposition(&decomposition)?;
    let report = DiagnosticsReport::new(&signal, &decomposition)?;
    report::write_json(&report, output.as_deref())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Presets => run_presets(),

        Commands::Run {
            preset,
            config,
            end,
            adjusted,
            output,
        } => run_fetch(preset, config, end, adjusted, output),

        Commands::Preprocess {
            input,
            column,
            target_length,
            mode,
            symbol,
            output,
        } => run_preprocess(input, column, target_length, mode, symbol, output),

        Commands::Diagnose {
            signal,
            decomposition,
            output,
        } => run_diagnose(signal, decomposition, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_preset() {
        let config = resolve_config(Some("vix-ssq"), None).unwrap();
        assert_eq!(config.symbol, "^VIX");
        assert_eq!(config.mode, PreprocessMode::ZScore);
        assert!(resolve_config(Some("nope"), None).is_err());
        assert!(resolve_config(None, None).is_err());
    }

    #[test]
    fn test_resolve_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"symbol":"ETH-USD","lookback_days":90,"target_length":64,"mode":"log-return"}}"#
        )
        .unwrap();
        let config = resolve_config(None, Some(file.path())).unwrap();
        assert_eq!(config.symbol, "ETH-USD");
        assert_eq!(config.target_length, 64);
    }

    #[test]
    fn test_resolve_config_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"symbol":"ETH-USD","lookback_days":90,"target_length":0,"mode":"z-score"}}"#
        )
        .unwrap();
        let err = resolve_config(None, Some(file.path())).unwrap_err();
        assert!(err.contains("target_length"));
    }

    #[test]
    fn test_adjusted_prices_fall_back_to_close() {
        let quotes = vec![
            Quote::new(1704067200, Some(100.0), Some(98.0)),
            Quote::gap(1704153600),
            Quote::new(1704240000, Some(102.0), None),
        ];
        assert_eq!(
            price_series(&quotes, false).as_slice(),
            &[Some(100.0), None, Some(102.0)]
        );
        assert_eq!(
            price_series(&quotes, true).as_slice(),
            &[Some(98.0), None, Some(102.0)]
        );
    }

    #[test]
    fn test_run_accepts_adjusted_flag() {
        let args = ["tsdecomp", "run", "--preset", "sp500-dwt", "--adjusted"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Commands::Run { adjusted: true, .. }));
    }

    #[test]
    fn test_parse_end_date() {
        assert_eq!(
            parse_end_date(Some("2024-06-30")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
        assert!(parse_end_date(Some("30/06/2024")).is_err());
        assert!(parse_end_date(None).is_ok());
    }

    #[test]
    fn test_preprocess_command_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("prices.csv");
        let output = dir.path().join("signal.json");
        std::fs::write(&input, "Date,Close\nd1,100\nd2,\nd3,102\nd4,104\n").unwrap();

        run_preprocess(
            input,
            None,
            400,
            "log-return".to_string(),
            "^IXIC".to_string(),
            Some(output.clone()),
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["length"], 3);
        assert_eq!(json["missing_filled"], 1);
        assert_eq!(json["values"][1], 0.0);
    }

    #[test]
    fn test_preprocess_command_reports_bad_prices() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("prices.csv");
        std::fs::write(&input, "Close\n100\n0\n").unwrap();

        let err = run_preprocess(
            input,
            None,
            10,
            "log-return".to_string(),
            "x".to_string(),
            None,
        )
        .unwrap_err();
        assert!(err.contains("index 1"));
    }

    #[test]
    fn test_preprocess_command_rejects_unknown_mode() {
        let err = run_preprocess(
            PathBuf::from("unused.csv"),
            None,
            10,
            "minmax".to_string(),
            "x".to_string(),
            None,
        )
        .unwrap_err();
        assert!(err.contains("mode"));
    }

    #[test]
    fn test_diagnose_command() {
        let dir = tempfile::tempdir().unwrap();
        let signal = dir.path().join("signal.json");
        let decomposition = dir.path().join("imfs.json");
        let output = dir.path().join("report.json");
        std::fs::write(&signal, r#"{"values":[1.5,-0.5,1.5,-0.5]}"#).unwrap();
        std::fs::write(
            &decomposition,
            r#"{"type":"modes","modes":[[1.0,-1.0,1.0,-1.0],[0.5,0.5,0.5,0.5]]}"#,
        )
        .unwrap();

        run_diagnose(signal, decomposition, Some(output.clone())).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["component_count"], 2);
        assert_eq!(json["reconstruction_mae"], 0.0);
        assert_eq!(json["modes"][0]["zero_crossings"], 3);
    }
}
