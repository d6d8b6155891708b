//! Loading price series and decomposition output from local files.

use decomposition_core::Decomposition;
use pipeline_facade::PriceSeries;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::CliResult;

/// Header names tried, in order, when no column is given.
const PRICE_COLUMNS: [&str; 4] = ["close", "adj close", "adj_close", "price"];

/// Cell values read as a missing observation.
fn is_missing(cell: &str) -> bool {
    matches!(
        cell.to_ascii_lowercase().as_str(),
        "" | "null" | "nan" | "na" | "n/a" | "-"
    )
}

fn parse_cell(cell: &str, row: usize) -> CliResult<Option<f64>> {
    let cell = cell.trim();
    if is_missing(cell) {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("Row {}: '{}' is not a number", row, cell))
}

/// Load a price column from a CSV file. Blank, `null` and `NaN` cells are gaps.
pub fn load_csv_prices(path: &Path, column: Option<&str>) -> CliResult<PriceSeries> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let col_idx = match column {
        Some(col) => match col.parse::<usize>() {
            Ok(idx) if idx < headers.len() => idx,
            Ok(idx) => return Err(format!("Column index {} out of range", idx)),
            Err(_) => headers
                .iter()
                .position(|h| h.trim() == col)
                .ok_or_else(|| format!("Column '{}' not found", col))?,
        },
        None => PRICE_COLUMNS
            .iter()
            .find_map(|name| {
                headers
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(name))
            })
            .unwrap_or(0),
    };

    let mut prices = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        prices.push(parse_cell(record.get(col_idx).unwrap_or(""), row + 1)?);
    }

    if prices.is_empty() {
        return Err("No rows found in the price file".to_string());
    }
    Ok(PriceSeries::new(prices))
}

fn json_price(value: &serde_json::Value) -> Option<Option<f64>> {
    match value {
        serde_json::Value::Null => Some(None),
        serde_json::Value::Number(n) => n.as_f64().map(Some),
        serde_json::Value::String(s) if is_missing(s.trim()) => Some(None),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().map(Some),
        _ => None,
    }
}

fn json_prices(values: &[serde_json::Value]) -> Option<PriceSeries> {
    values.iter().map(json_price).collect::<Option<Vec<_>>>().map(PriceSeries::new)
}

/// Load prices from JSON: a bare array, an array of objects, or an object
/// holding the array under a well-known key. `null` entries are gaps.
pub fn load_json_prices(path: &Path, column: Option<&str>) -> CliResult<PriceSeries> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    if let Some(arr) = json.as_array() {
        if let Some(series) = json_prices(arr) {
            return Ok(series);
        }

        let keys: Vec<&str> = match column {
            Some(col) => vec![col],
            None => vec!["close", "Close", "adj_close", "price", "value"],
        };
        for key in keys {
            let column: Option<Vec<serde_json::Value>> =
                arr.iter().map(|obj| obj.get(key).cloned()).collect();
            if let Some(series) = column.as_deref().and_then(json_prices) {
                return Ok(series);
            }
        }
    }

    if let Some(obj) = json.as_object() {
        for key in ["prices", "values", "data", "close"] {
            if let Some(series) = obj
                .get(key)
                .and_then(|v| v.as_array())
                .and_then(|arr| json_prices(arr))
            {
                return Ok(series);
            }
        }
    }

    Err("Could not extract a price series from JSON".to_string())
}

/// Load prices from file (auto-detect format)
pub fn load_prices(path: &Path, column: Option<&str>) -> CliResult<PriceSeries> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv_prices(path, column),
        "json" => load_json_prices(path, column),
        _ => load_csv_prices(path, column).or_else(|_| load_json_prices(path, column)),
    }
}

/// Load a windowed signal written by `run`/`preprocess`, or a bare array.
pub fn load_signal(path: &Path) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    let values = json
        .get("values")
        .unwrap_or(&json)
        .as_array()
        .ok_or("Signal file must hold an array or an object with `values`")?;

    values
        .iter()
        .map(|v| v.as_f64().ok_or_else(|| format!("Non-numeric signal value: {}", v)))
        .collect()
}

/// Load a serialized decomposition (`{"type": "modes", ...}` or `{"type": "surface", ...}`).
pub fn load_decomposition(path: &Path) -> CliResult<Decomposition> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse decomposition: {}", e))
}
