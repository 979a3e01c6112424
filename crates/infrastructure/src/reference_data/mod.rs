//! Reference dataset loaders
//!
//! Every dataset is read completely and validated before the server starts
//! answering; any problem aborts the load.

mod stations;
mod traffic;
mod zones;

use std::path::{Path, PathBuf};

use application::ReferenceData;
use domain::DomainError;
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::AppConfig;

pub use stations::load_stations;
pub use traffic::load_traffic;
pub use zones::load_zones;

/// Errors raised while loading reference data
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    /// File could not be read
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Station list is not valid JSON of the expected shape
    #[error("Invalid station list {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Zone file is not a GeoJSON FeatureCollection
    #[error("Invalid GeoJSON {path}: {source}")]
    GeoJson {
        path: PathBuf,
        source: Box<geojson::Error>,
    },

    /// Traffic file is not readable CSV
    #[error("Invalid CSV {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// A record is syntactically fine but semantically unusable
    #[error("Invalid record in {path}: {reason}")]
    InvalidRecord { path: PathBuf, reason: String },

    /// A subzone in the zone file has no configured price
    #[error("No price configured for parking subzone {0}")]
    MissingPrice(String),

    /// Assembled data violates a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ReferenceDataError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn invalid_record(path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Load and validate every dataset named in `config`
///
/// # Errors
///
/// Returns the first loading or validation failure.
#[instrument(skip(config))]
pub fn load_reference_data(config: &AppConfig) -> Result<ReferenceData, ReferenceDataError> {
    let stations = load_stations(&config.air_quality.stations_file)?;
    let zones = load_zones(&config.paid_parking)?;
    let traffic = load_traffic(&config.traffic)?;

    let data = ReferenceData::new(
        stations,
        zones,
        traffic,
        config.transport.clone(),
        config.air_quality.settings(),
        config.defaults,
    )?;

    let summary = data.summary();
    info!(
        stations = summary.stations,
        zones = summary.zones,
        traffic_rows = summary.traffic_rows,
        "Reference data loaded"
    );
    Ok(data)
}
