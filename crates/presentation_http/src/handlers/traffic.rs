//! Traffic average handlers

use application::TrafficReading;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::instrument;

use super::params::{optional_i64, present};
use crate::{error::ApiError, state::AppState};

/// Query for `/get_traffic`
#[derive(Debug, Default, Deserialize)]
pub struct TrafficQuery {
    /// Hour of day, 0-23
    pub hour: Option<String>,
    /// English weekday name, any case
    pub day_of_week: Option<String>,
}

/// Response body `{ "<result_key>": value }`
fn traffic_body(key: &str, reading: &TrafficReading) -> Json<Value> {
    let mut body = Map::new();
    body.insert(key.to_string(), Value::from(reading.value));
    Json(Value::Object(body))
}

/// Traffic average for a given hour and weekday
#[instrument(skip(state))]
pub async fn get_traffic(
    State(state): State<AppState>,
    Query(query): Query<TrafficQuery>,
) -> Result<Json<Value>, ApiError> {
    let raw_hour = present(query.hour.as_deref()).unwrap_or_default();
    let hour = optional_i64("hour", query.hour.as_deref())?
        .ok_or_else(|| ApiError::missing_param("hour"))?;
    let hour = u32::try_from(hour).map_err(|_| ApiError::invalid_param("hour", raw_hour))?;
    let day = present(query.day_of_week.as_deref())
        .ok_or_else(|| ApiError::missing_param("day_of_week"))?;

    let reading = state.traffic_service.traffic_at(hour, day)?;
    Ok(traffic_body(&state.traffic_result_key, &reading))
}

/// Traffic average for the current local hour and weekday
#[instrument(skip(state))]
pub async fn get_current_traffic(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let reading = state.traffic_service.current_traffic()?;
    Ok(traffic_body(&state.traffic_result_key, &reading))
}
