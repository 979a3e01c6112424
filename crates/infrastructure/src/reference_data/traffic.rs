//! Traffic averages from CSV

use std::path::Path;

use domain::{TrafficRow, TrafficTable, Weekday};
use tracing::debug;

use super::ReferenceDataError;
use crate::config::TrafficConfig;

fn column_index(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, ReferenceDataError> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| ReferenceDataError::invalid_record(path, format!("missing column `{name}`")))
}

/// Hours are written either as integers or as floats like `8.0`
fn parse_hour(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    raw.parse::<u8>().ok().filter(|h| *h <= 23).or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|h| h.fract() == 0.0 && (0.0..=23.0).contains(h))
            .map(|h| h as u8)
    })
}

/// Load the traffic table using the configured column names
///
/// # Errors
///
/// Fails on unreadable files, missing columns and rows whose hour, weekday
/// or value cannot be parsed.
pub fn load_traffic(config: &TrafficConfig) -> Result<TrafficTable, ReferenceDataError> {
    let path = config.file.as_path();
    let csv_error = |source| ReferenceDataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = reader.headers().map_err(csv_error)?.clone();
    let hour_idx = column_index(&headers, &config.hour_column, path)?;
    let day_idx = column_index(&headers, &config.day_column, path)?;
    let value_idx = column_index(&headers, &config.value_column, path)?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let field = |idx: usize| record.get(idx).unwrap_or_default();
        // header is line 1
        let line = line + 2;

        let hour = parse_hour(field(hour_idx)).ok_or_else(|| {
            ReferenceDataError::invalid_record(
                path,
                format!("line {line}: invalid hour `{}`", field(hour_idx)),
            )
        })?;
        let day_of_week: Weekday = field(day_idx).parse().map_err(|_| {
            ReferenceDataError::invalid_record(
                path,
                format!("line {line}: invalid weekday `{}`", field(day_idx)),
            )
        })?;
        let value: f64 = field(value_idx)
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| {
                ReferenceDataError::invalid_record(
                    path,
                    format!("line {line}: invalid value `{}`", field(value_idx)),
                )
            })?;

        rows.push(TrafficRow {
            hour,
            day_of_week,
            value,
        });
    }

    debug!(count = rows.len(), path = %path.display(), "Loaded traffic rows");
    Ok(TrafficTable::new(rows)?)
}
