//! Trip savings and annual projection handlers

use application::{AnnualRequest, AnnualSummary, SavingsRequest};
use axum::{
    Json,
    extract::{Query, State},
};
use domain::Savings;
use serde::Deserialize;
use tracing::instrument;

use super::params::{optional_f64, optional_i64, optional_location};
use crate::{error::ApiError, state::AppState};

/// Query for `/get_saving_for_travel`
#[derive(Debug, Default, Deserialize)]
pub struct SavingsQuery {
    /// Compared mode: 0 walking, 1 bike, 2 scooter, 3 bus
    pub transport_type: Option<String>,
    /// Trip length in km
    pub distance: Option<String>,
    /// Car consumption in l/100 km
    pub avg_consumption: Option<String>,
    /// 0 gasoline, 1 diesel, 2 LPG
    pub fuel_type: Option<String>,
    /// PLN per liter
    pub fuel_price: Option<String>,
    /// Destination, used for the parking price
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Query for `/get_annual_saving`
#[derive(Debug, Default, Deserialize)]
pub struct AnnualQuery {
    pub avg_consumption: Option<String>,
    pub fuel_type: Option<String>,
    pub fuel_price: Option<String>,
    /// Daily commute in km
    pub daily_distance: Option<String>,
}

/// Cost and CO2 saved by not taking the car
#[instrument(skip(state))]
pub async fn get_saving_for_travel(
    State(state): State<AppState>,
    Query(query): Query<SavingsQuery>,
) -> Result<Json<Savings>, ApiError> {
    let defaults = *state.reference_data.load().defaults();
    let request = SavingsRequest {
        transport_type: optional_i64("transport_type", query.transport_type.as_deref())?
            .unwrap_or(defaults.transport_type),
        distance_km: optional_f64("distance", query.distance.as_deref())?
            .unwrap_or(defaults.distance_km),
        avg_consumption: optional_f64("avg_consumption", query.avg_consumption.as_deref())?,
        fuel_type: optional_i64("fuel_type", query.fuel_type.as_deref())?
            .unwrap_or(defaults.fuel_type),
        fuel_price: optional_f64("fuel_price", query.fuel_price.as_deref())?,
        destination: optional_location(query.lat.as_deref(), query.lon.as_deref())?,
    };

    Ok(Json(state.travel_service.savings_for_trip(&request)?))
}

/// Yearly cost and CO2 (kg) of a daily car commute
#[instrument(skip(state))]
pub async fn get_annual_saving(
    State(state): State<AppState>,
    Query(query): Query<AnnualQuery>,
) -> Result<Json<AnnualSummary>, ApiError> {
    let defaults = *state.reference_data.load().defaults();
    let request = AnnualRequest {
        avg_consumption: optional_f64("avg_consumption", query.avg_consumption.as_deref())?,
        fuel_type: optional_i64("fuel_type", query.fuel_type.as_deref())?
            .unwrap_or(defaults.fuel_type),
        fuel_price: optional_f64("fuel_price", query.fuel_price.as_deref())?,
        daily_distance_km: optional_f64("daily_distance", query.daily_distance.as_deref())?
            .unwrap_or(defaults.daily_distance_km),
    };

    Ok(Json(state.travel_service.annual_cost(&request)?))
}
