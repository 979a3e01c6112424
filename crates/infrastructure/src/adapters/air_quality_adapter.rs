//! Air-quality adapter - Implements AirQualityPort using integration_air_quality

use application::{error::ApplicationError, ports::AirQualityPort};
use async_trait::async_trait;
use domain::{AirQualityLevel, AirQualityReading};
use integration_air_quality::{
    AirQualityClient, AirQualityConfig, AirQualityError, AirQualityIndex, GiosClient,
};
use tracing::{debug, instrument};

use crate::config::AirQualityAppConfig;

/// Adapter for the GIOŚ air-quality index
pub struct AirQualityAdapter {
    client: GiosClient,
    probe_station_id: String,
}

impl std::fmt::Debug for AirQualityAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirQualityAdapter")
            .field("client", &"GiosClient")
            .field("probe_station_id", &self.probe_station_id)
            .finish()
    }
}

impl AirQualityAdapter {
    /// Create from the application configuration
    ///
    /// Availability checks probe the configured default station.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &AirQualityAppConfig) -> Result<Self, ApplicationError> {
        Self::with_config(config.client_config(), config.default_station_id.clone())
    }

    /// Create with custom configuration
    ///
    /// `probe_station_id` is queried by availability checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(
        config: AirQualityConfig,
        probe_station_id: impl Into<String>,
    ) -> Result<Self, ApplicationError> {
        let client =
            GiosClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self {
            client,
            probe_station_id: probe_station_id.into(),
        })
    }

    /// Map integration air-quality error to application error
    ///
    /// Everything the remote side can get wrong is an upstream failure.
    fn map_error(err: AirQualityError) -> ApplicationError {
        ApplicationError::UpstreamFailure(err.to_string())
    }

    fn map_index(index: AirQualityIndex) -> Result<AirQualityReading, ApplicationError> {
        let level = AirQualityLevel::new(index.level.id)
            .map_err(|e| ApplicationError::UpstreamFailure(e.to_string()))?;
        Ok(AirQualityReading {
            station_id: index.station_id,
            label: index.level.label,
            level,
        })
    }
}

#[async_trait]
impl AirQualityPort for AirQualityAdapter {
    #[instrument(skip(self))]
    async fn current_index(&self, station_id: &str) -> Result<AirQualityReading, ApplicationError> {
        let index = self
            .client
            .get_index(station_id)
            .await
            .map_err(Self::map_error)?;
        debug!(level = index.level.id, label = %index.level.label, "Received index");
        Self::map_index(index)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy(&self.probe_station_id).await
    }
}

#[cfg(test)]
mod tests {
    use integration_air_quality::IndexLevel;

    use super::*;

    #[test]
    fn errors_map_to_upstream_failure() {
        let err = AirQualityAdapter::map_error(AirQualityError::Timeout(5));
        assert!(matches!(err, ApplicationError::UpstreamFailure(ref msg) if msg.contains("5 s")));

        let err = AirQualityAdapter::map_error(AirQualityError::UnknownIndex(-1));
        assert!(matches!(err, ApplicationError::UpstreamFailure(_)));
    }

    #[test]
    fn index_maps_to_reading() {
        let reading = AirQualityAdapter::map_index(AirQualityIndex {
            station_id: "10955".to_string(),
            level: IndexLevel {
                id: 2,
                label: "Umiarkowany".to_string(),
            },
            calculated_at: None,
        })
        .unwrap();
        assert_eq!(reading.level.id(), 2);
        assert_eq!(reading.label, "Umiarkowany");
    }

    #[test]
    fn adapter_debug_hides_client() {
        let adapter = AirQualityAdapter::with_config(AirQualityConfig::default(), "10955").unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("GiosClient"));
        assert!(debug.contains("10955"));
    }
}
