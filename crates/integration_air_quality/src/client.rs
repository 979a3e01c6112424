//! GIOŚ air-quality client
//!
//! HTTP client for the station index endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::AirQualityIndex;

/// Air-quality client errors
#[derive(Debug, Error)]
pub enum AirQualityError {
    /// Connection to the air-quality service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the air-quality service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// No answer within the configured timeout
    #[error("Request timed out after {0} s")]
    Timeout(u64),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse response from the air-quality service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Index level id outside 0-5
    #[error("Unknown air quality index id: {0}")]
    UnknownIndex(i64),
}

/// Air-quality service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityConfig {
    /// Index endpoint; the station id is appended as the last path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Response key holding the overall index level
    #[serde(default = "default_index_key")]
    pub index_key: String,

    /// Key of the level label inside the index object
    #[serde(default = "default_level_name_key")]
    pub level_name_key: String,
}

fn default_base_url() -> String {
    "https://api.gios.gov.pl/pjp-api/rest/aqindex/getIndex".to_string()
}

const fn default_timeout() -> u64 {
    5
}

fn default_index_key() -> String {
    "stIndexLevel".to_string()
}

fn default_level_name_key() -> String {
    "indexLevelName".to_string()
}

impl Default for AirQualityConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            index_key: default_index_key(),
            level_name_key: default_level_name_key(),
        }
    }
}

/// Air-quality client trait for fetching station indices
#[async_trait]
pub trait AirQualityClient: Send + Sync {
    /// Get the current index of a station
    async fn get_index(&self, station_id: &str) -> Result<AirQualityIndex, AirQualityError>;

    /// Check if the service answers for a known station
    async fn is_healthy(&self, station_id: &str) -> bool;
}

/// GIOŚ HTTP client implementation
#[derive(Debug)]
pub struct GiosClient {
    client: Client,
    config: AirQualityConfig,
}

impl GiosClient {
    /// Create a new GIOŚ client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: AirQualityConfig) -> Result<Self, AirQualityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AirQualityError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, AirQualityError> {
        Self::new(AirQualityConfig::default())
    }

    fn index_url(&self, station_id: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            station_id
        )
    }

    fn map_send_error(&self, error: &reqwest::Error) -> AirQualityError {
        if error.is_timeout() {
            AirQualityError::Timeout(self.config.timeout_secs)
        } else if error.is_connect() {
            AirQualityError::ConnectionFailed(error.to_string())
        } else {
            AirQualityError::RequestFailed(error.to_string())
        }
    }
}

#[async_trait]
impl AirQualityClient for GiosClient {
    #[instrument(skip(self))]
    async fn get_index(&self, station_id: &str) -> Result<AirQualityIndex, AirQualityError> {
        let url = self.index_url(station_id);
        debug!(url = %url, "Fetching air quality index");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AirQualityError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(AirQualityError::RequestFailed(format!("HTTP {status}")));
        }

        let payload: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AirQualityError::Timeout(self.config.timeout_secs)
            } else {
                AirQualityError::ParseError(e.to_string())
            }
        })?;

        AirQualityIndex::from_payload(
            station_id,
            &payload,
            &self.config.index_key,
            &self.config.level_name_key,
        )
    }

    async fn is_healthy(&self, station_id: &str) -> bool {
        self.get_index(station_id).await.is_ok()
    }
}
