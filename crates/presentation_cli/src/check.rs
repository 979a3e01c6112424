//! Offline validation of configuration and reference data

use application::{ReferenceData, ReferenceDataSummary};
use domain::{DomainError, GeoLocation, nearest_station};
use infrastructure::{AppConfig, ReferenceDataError, load_reference_data};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Why the datasets could not be checked
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Data(#[from] ReferenceDataError),

    #[error("Cannot resolve probe point: {0}")]
    Probe(#[from] DomainError),
}

/// What the probe point resolves to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    /// Parking subzone containing the point
    pub subzone: Option<String>,
    /// Parking price in PLN, 0 outside every zone
    pub parking_price: f64,
    pub nearest_station: String,
    pub station_distance_km: f64,
}

/// Loaded dataset counts and the optional probe result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataReport {
    pub stations: usize,
    pub zones: usize,
    pub traffic_rows: usize,
    pub zone_crs: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<ProbeReport>,
}

/// Load the configuration and every dataset, then resolve `probe`
///
/// `config_path` overrides `ECOROUTE_CONFIG` and `./config.toml`.
///
/// # Errors
///
/// Fails when the configuration or a dataset does not load, or the probe
/// point is not a finite coordinate.
pub fn check_data(
    config_path: Option<&str>,
    probe: Option<(f64, f64)>,
) -> Result<DataReport, CheckError> {
    let config = match config_path {
        Some(path) => AppConfig::load_from(Some(path))?,
        None => AppConfig::load()?,
    };
    let data = load_reference_data(&config)?;
    let ReferenceDataSummary {
        stations,
        zones,
        traffic_rows,
    } = data.summary();

    let probe = probe
        .map(|(lat, lon)| resolve_probe(&data, &GeoLocation::from_raw(lat, lon)?))
        .transpose()?;

    Ok(DataReport {
        stations,
        zones,
        traffic_rows,
        zone_crs: config.paid_parking.zone_crs,
        probe,
    })
}

fn resolve_probe(data: &ReferenceData, point: &GeoLocation) -> Result<ProbeReport, DomainError> {
    let zone = data.zones().zone_at(point)?;
    let station = nearest_station(point, data.stations()).ok_or_else(|| {
        DomainError::InvalidReferenceData("station list is empty".to_string())
    })?;
    info!(%point, station = %station.id, "Resolved probe point");

    Ok(ProbeReport {
        subzone: zone.map(|z| z.subzone_id.clone()),
        parking_price: zone.map_or(0.0, |z| z.price),
        nearest_station: station.id.clone(),
        station_distance_km: station.distance_km(point),
    })
}
