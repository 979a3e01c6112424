//! Trip savings and annual car cost projections

use std::{fmt, sync::Arc};

use domain::{
    FuelType, GeoLocation, Savings, TransportMode, cost_summary, savings, validate_distance,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ReferenceDataSource};

/// Parameters of a savings comparison, defaults already applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsRequest {
    /// Compared mode id (0 walking, 1 bike, 2 scooter, 3 bus)
    pub transport_type: i64,
    pub distance_km: f64,
    /// Car consumption in l/100 km, profile default when `None`
    pub avg_consumption: Option<f64>,
    pub fuel_type: i64,
    /// PLN per liter, profile default for the fuel type when `None`
    pub fuel_price: Option<f64>,
    /// Where the car would park; priced by the paid-parking zones
    pub destination: Option<GeoLocation>,
}

/// Parameters of an annual projection, defaults already applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualRequest {
    pub avg_consumption: Option<f64>,
    pub fuel_type: i64,
    pub fuel_price: Option<f64>,
    pub daily_distance_km: f64,
}

/// Yearly car cost in PLN and CO2 in kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualSummary {
    pub cost: f64,
    pub co2: f64,
}

/// Compares transport modes against driving
pub struct TravelService {
    data: Arc<dyn ReferenceDataSource>,
}

impl fmt::Debug for TravelService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TravelService").finish_non_exhaustive()
    }
}

impl TravelService {
    pub fn new(data: Arc<dyn ReferenceDataSource>) -> Self {
        Self { data }
    }

    /// Cost and CO2 saved by taking `transport_type` instead of the car
    ///
    /// # Errors
    ///
    /// `NotFound` for a transport type outside 0-3 or an incomplete
    /// comparison, `InvalidInput` (via the domain) for unusable figures.
    #[instrument(skip(self))]
    pub fn savings_for_trip(&self, request: &SavingsRequest) -> Result<Savings, ApplicationError> {
        let mode = TransportMode::from_id(request.transport_type)
            .map_err(|_| ApplicationError::NotFound("Invalid transport type".to_string()))?;
        let distance = validate_distance(request.distance_km)?;
        let fuel = FuelType::from_id(request.fuel_type)?;

        let data = self.data.current();
        let parking_price = match request.destination {
            Some(destination) => {
                let zone = data.zones().zone_at(&destination)?;
                debug!(
                    subzone = zone.map(|z| z.subzone_id.as_str()),
                    "Resolved parking zone"
                );
                zone.map_or(0.0, |z| z.price)
            },
            None => 0.0,
        };

        let car = data
            .profiles()
            .car
            .trip(request.avg_consumption, fuel, request.fuel_price)?
            .with_parking(parking_price);
        let car_summary = cost_summary(&car, distance);
        let other_summary = data.profiles().summary(mode, distance);
        debug!(%mode, ?car_summary, ?other_summary, "Priced both trips");

        savings(&car_summary, &other_summary)
            .ok_or_else(|| ApplicationError::NotFound("Invalid data or missing keys".to_string()))
    }

    /// Yearly cost and CO2 of driving the same distance every day
    ///
    /// # Errors
    ///
    /// `InvalidInput` (via the domain) for unknown fuel types or unusable figures.
    #[instrument(skip(self))]
    pub fn annual_cost(&self, request: &AnnualRequest) -> Result<AnnualSummary, ApplicationError> {
        let fuel = FuelType::from_id(request.fuel_type)?;
        let data = self.data.current();
        let summary = data
            .profiles()
            .car
            .trip(request.avg_consumption, fuel, request.fuel_price)?
            .annual_summary(request.daily_distance_km)?;

        match (summary.cost, summary.co2) {
            (Some(cost), Some(co2)) if cost.is_finite() && co2.is_finite() => {
                Ok(AnnualSummary { cost, co2 })
            },
            _ => Err(ApplicationError::NotFound(
                "Invalid data or missing keys".to_string(),
            )),
        }
    }
}
