//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Traffic averages
        .route("/get_traffic", get(handlers::traffic::get_traffic))
        .route(
            "/get_current_traffic",
            get(handlers::traffic::get_current_traffic),
        )
        // Cost and CO2 comparison
        .route(
            "/get_saving_for_travel",
            get(handlers::travel::get_saving_for_travel),
        )
        .route("/get_annual_saving", get(handlers::travel::get_annual_saving))
        // Air quality
        .route(
            "/get_air_quality",
            get(handlers::air_quality::get_air_quality),
        )
        // Attach state
        .with_state(state)
}
