//! Measuring station list (GIOŚ `station/findAll` format)

use std::{fs, path::Path};

use domain::{GeoLocation, Station};
use serde::Deserialize;
use tracing::debug;

use super::ReferenceDataError;

/// Numbers in the station list arrive either as JSON numbers or as strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrString {
    fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationRecord {
    id: NumberOrString,
    #[serde(default)]
    station_name: Option<String>,
    gegr_lat: NumberOrString,
    gegr_lon: NumberOrString,
}

/// Load the station list
///
/// # Errors
///
/// Fails on unreadable files, malformed JSON and coordinates that are not
/// valid WGS84 degrees.
pub fn load_stations(path: &Path) -> Result<Vec<Station>, ReferenceDataError> {
    let text = fs::read_to_string(path).map_err(|e| ReferenceDataError::io(path, e))?;
    let records: Vec<StationRecord> =
        serde_json::from_str(&text).map_err(|source| ReferenceDataError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let stations = records
        .into_iter()
        .map(|record| {
            let id = record.id.as_text();
            let location = record
                .gegr_lat
                .as_f64()
                .zip(record.gegr_lon.as_f64())
                .and_then(|(lat, lon)| GeoLocation::new(lat, lon).ok())
                .ok_or_else(|| {
                    ReferenceDataError::invalid_record(
                        path,
                        format!("station {id} has invalid coordinates"),
                    )
                })?;

            let station = Station::new(id, location);
            Ok(match record.station_name {
                Some(name) => station.with_name(name),
                None => station,
            })
        })
        .collect::<Result<Vec<_>, ReferenceDataError>>()?;

    debug!(count = stations.len(), path = %path.display(), "Loaded stations");
    Ok(stations)
}
