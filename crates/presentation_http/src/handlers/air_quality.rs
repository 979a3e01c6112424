//! Air-quality handler

use application::AirQualityReport;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use super::params::optional_location;
use crate::{error::ApiError, state::AppState};

/// Query for `/get_air_quality`
#[derive(Debug, Default, Deserialize)]
pub struct AirQualityQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Air quality at the station nearest to `lat`/`lon`
///
/// Without both coordinates the configured default station is used.
#[instrument(skip(state))]
pub async fn get_air_quality(
    State(state): State<AppState>,
    Query(query): Query<AirQualityQuery>,
) -> Result<Json<AirQualityReport>, ApiError> {
    let location = optional_location(query.lat.as_deref(), query.lon.as_deref())?;
    let report = state.air_quality_service.air_quality(location).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use application::{ApplicationError, ports::AirQualityPort};
    use async_trait::async_trait;
    use domain::{AirQualityLevel, AirQualityReading};

    use super::*;
    use crate::handlers::test_support::test_state_with;

    /// Records the requested station and answers with a fixed level
    #[derive(Default)]
    struct RecordingPort {
        requested: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl AirQualityPort for RecordingPort {
        async fn current_index(
            &self,
            station_id: &str,
        ) -> Result<AirQualityReading, ApplicationError> {
            self.requested.lock().unwrap().push(station_id.to_string());
            if self.fail {
                return Err(ApplicationError::UpstreamFailure("timed out".to_string()));
            }
            Ok(AirQualityReading {
                station_id: station_id.to_string(),
                label: "Dobry".to_string(),
                level: AirQualityLevel::new(1).unwrap(),
            })
        }

        async fn is_available(&self) -> bool {
            !self.fail
        }
    }

    #[tokio::test]
    async fn without_coordinates_uses_default_station() {
        let port = std::sync::Arc::new(RecordingPort::default());
        let state = test_state_with(port.clone());

        let Json(report) = get_air_quality(State(state), Query(AirQualityQuery::default()))
            .await
            .unwrap();

        assert_eq!(report.station_id, "10955");
        assert_eq!(report.air_quality, "Dobry");
        assert_eq!(report.air_quality_id, 1);
        assert_eq!(report.extra_points, 8);
        assert_eq!(*port.requested.lock().unwrap(), vec!["10955".to_string()]);
    }

    #[tokio::test]
    async fn coordinates_select_nearest_station() {
        let port = std::sync::Arc::new(RecordingPort::default());
        let state = test_state_with(port.clone());
        let query = AirQualityQuery {
            lat: Some("50.06".to_string()),
            lon: Some("19.94".to_string()),
        };

        let Json(report) = get_air_quality(State(state), Query(query)).await.unwrap();

        assert_eq!(report.station_id, "401");
    }

    #[tokio::test]
    async fn upstream_failure_is_service_unavailable() {
        let port = std::sync::Arc::new(RecordingPort {
            fail: true,
            ..RecordingPort::default()
        });
        let state = test_state_with(port);

        let err = get_air_quality(State(state), Query(AirQualityQuery::default()))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ServiceUnavailable(_)));
    }
}
