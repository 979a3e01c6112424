//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `datasets`: traffic CSV and paid parking GeoJSON
//! - `air_quality`: station list and remote index
//!
//! Sources, lowest priority first: built-in defaults, a TOML file
//! (`config.toml`, or the path in `ECOROUTE_CONFIG`), then `ECOROUTE_*`
//! environment variables with `__` between nested keys
//! (e.g. `ECOROUTE_SERVER__PORT=8080`).

mod air_quality;
mod datasets;
mod server;

use application::RequestDefaults;
use domain::TransportProfiles;
use serde::{Deserialize, Serialize};

pub use air_quality::AirQualityAppConfig;
pub use datasets::{PaidParkingConfig, TrafficConfig};
pub use server::{LogFormat, ServerConfig};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "ECOROUTE_CONFIG";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "ECOROUTE";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Traffic averages
    #[serde(default)]
    pub traffic: TrafficConfig,

    /// Paid parking zones
    #[serde(default)]
    pub paid_parking: PaidParkingConfig,

    /// Air-quality lookup
    #[serde(default)]
    pub air_quality: AirQualityAppConfig,

    /// Per-mode cost constants
    #[serde(default)]
    pub transport: TransportProfiles,

    /// Fallbacks for omitted request parameters
    #[serde(default)]
    pub defaults: RequestDefaults,
}

impl AppConfig {
    /// Load configuration from the default file location and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or does not deserialize,
    /// or if `ECOROUTE_CONFIG` names a file that does not exist.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).ok();
        Self::load_from(path.as_deref())
    }

    /// Load configuration from `path` (required) or `config.*` (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or does not deserialize.
    pub fn load_from(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::with_name(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., ECOROUTE_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
