//! Health check handlers

use application::ReferenceDataSummary;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub reference_data: DatasetCounts,
    /// Whether the remote air-quality index answers
    pub air_quality: ServiceStatus,
}

/// Loaded record counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DatasetCounts {
    pub stations: usize,
    pub zones: usize,
    pub traffic_rows: usize,
}

impl From<ReferenceDataSummary> for DatasetCounts {
    fn from(summary: ReferenceDataSummary) -> Self {
        Self {
            stations: summary.stations,
            zones: summary.zones,
            traffic_rows: summary.traffic_rows,
        }
    }
}

/// Status of a remote service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
}

/// Readiness check - are the reference datasets loaded?
///
/// An unreachable air-quality service degrades one endpoint only, so it is
/// reported without failing readiness.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let counts = DatasetCounts::from(state.reference_data.load().summary());
    let ready = counts.stations > 0;
    let air_quality_healthy = state.air_quality_service.is_available().await;

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            reference_data: counts,
            air_quality: ServiceStatus {
                healthy: air_quality_healthy,
            },
        }),
    )
}
