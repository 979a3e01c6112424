//! Reference dataset locations and formats.

use std::{collections::HashMap, path::PathBuf};

use domain::{Crs, CrsTransform, DomainError};
use serde::{Deserialize, Serialize};

/// Traffic CSV configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficConfig {
    /// CSV with one averaged value per hour and weekday
    #[serde(default = "default_traffic_file")]
    pub file: PathBuf,

    #[serde(default = "default_hour_column")]
    pub hour_column: String,

    #[serde(default = "default_day_column")]
    pub day_column: String,

    #[serde(default = "default_value_column")]
    pub value_column: String,

    /// JSON key of the value in traffic responses
    #[serde(default = "default_result_key")]
    pub result_key: String,
}

fn default_traffic_file() -> PathBuf {
    PathBuf::from("data/average_traffic.csv")
}

fn default_hour_column() -> String {
    "hour".to_string()
}

fn default_day_column() -> String {
    "day_of_week".to_string()
}

fn default_value_column() -> String {
    "traffic".to_string()
}

fn default_result_key() -> String {
    "traffic_result".to_string()
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            file: default_traffic_file(),
            hour_column: default_hour_column(),
            day_column: default_day_column(),
            value_column: default_value_column(),
            result_key: default_result_key(),
        }
    }
}

/// Paid parking zone configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidParkingConfig {
    /// GeoJSON FeatureCollection of subzones
    #[serde(default = "default_zones_file")]
    pub file: PathBuf,

    /// Feature property holding the subzone id
    #[serde(default = "default_zone_property")]
    pub zone_property: String,

    /// Reference system of query coordinates
    #[serde(default = "default_source_crs")]
    pub source_crs: String,

    /// Reference system of the zone geometries
    #[serde(default = "default_zone_crs")]
    pub zone_crs: String,

    /// Price in PLN per subzone id; every subzone in the file needs one
    #[serde(default)]
    pub prices: HashMap<String, f64>,
}

fn default_zones_file() -> PathBuf {
    PathBuf::from("data/paid_parking_zones.geojson")
}

fn default_zone_property() -> String {
    "Podstrefa".to_string()
}

fn default_source_crs() -> String {
    "EPSG:4326".to_string()
}

fn default_zone_crs() -> String {
    "EPSG:2180".to_string()
}

impl Default for PaidParkingConfig {
    fn default() -> Self {
        Self {
            file: default_zones_file(),
            zone_property: default_zone_property(),
            source_crs: default_source_crs(),
            zone_crs: default_zone_crs(),
            prices: HashMap::new(),
        }
    }
}

impl PaidParkingConfig {
    /// Transform from query coordinates into the zone reference system
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown EPSG codes or a projected source.
    pub fn transform(&self) -> Result<CrsTransform, DomainError> {
        let source: Crs = self.source_crs.parse()?;
        let target: Crs = self.zone_crs.parse()?;
        CrsTransform::new(source, target)
    }
}
