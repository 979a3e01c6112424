//! Air-quality lookup configuration.

use std::path::PathBuf;

use application::AirQualitySettings;
use integration_air_quality::AirQualityConfig;
use serde::{Deserialize, Serialize};

/// Air-quality configuration: station list, remote index and scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityAppConfig {
    /// JSON array of measuring stations (`id`, `gegrLat`, `gegrLon`)
    #[serde(default = "default_stations_file")]
    pub stations_file: PathBuf,

    /// Index endpoint; the station id is appended as the last path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Station used when a request carries no coordinates
    #[serde(default = "default_station_id")]
    pub default_station_id: String,

    /// Response key holding the overall index level
    #[serde(default = "default_index_key")]
    pub index_key: String,

    /// Key of the level label inside the index object
    #[serde(default = "default_level_name_key")]
    pub level_name_key: String,

    /// Bonus points per index level id (0-5)
    #[serde(default = "default_extra_points")]
    pub extra_points: Vec<i32>,
}

fn default_stations_file() -> PathBuf {
    PathBuf::from("data/stations.json")
}

fn default_base_url() -> String {
    AirQualityConfig::default().base_url
}

fn default_timeout() -> u64 {
    AirQualityConfig::default().timeout_secs
}

fn default_station_id() -> String {
    AirQualitySettings::default().default_station_id
}

fn default_index_key() -> String {
    AirQualityConfig::default().index_key
}

fn default_level_name_key() -> String {
    AirQualityConfig::default().level_name_key
}

fn default_extra_points() -> Vec<i32> {
    AirQualitySettings::default().extra_points
}

impl Default for AirQualityAppConfig {
    fn default() -> Self {
        Self {
            stations_file: default_stations_file(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            default_station_id: default_station_id(),
            index_key: default_index_key(),
            level_name_key: default_level_name_key(),
            extra_points: default_extra_points(),
        }
    }
}

impl AirQualityAppConfig {
    /// Settings for the HTTP client
    #[must_use]
    pub fn client_config(&self) -> AirQualityConfig {
        AirQualityConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            index_key: self.index_key.clone(),
            level_name_key: self.level_name_key.clone(),
        }
    }

    /// Settings bundled with the reference data
    #[must_use]
    pub fn settings(&self) -> AirQualitySettings {
        AirQualitySettings {
            default_station_id: self.default_station_id.clone(),
            extra_points: self.extra_points.clone(),
        }
    }
}
