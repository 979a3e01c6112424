//! Per-transport cost and CO2 model
//!
//! Every compared mode is priced against a car trip over the same distance.
//! Costs are in PLN, CO2 in grams unless stated otherwise.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

const DAYS_PER_YEAR: f64 = 365.0;
const GRAMS_PER_KG: f64 = 1000.0;

/// Transport modes known to the cost model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TransportMode {
    Walking = 0,
    Bike = 1,
    Scooter = 2,
    Bus = 3,
    /// Baseline for every comparison, never selectable by id
    Car = 4,
}

impl TransportMode {
    /// Modes that can be compared against the car
    pub const COMPARABLE: [Self; 4] = [Self::Walking, Self::Bike, Self::Scooter, Self::Bus];

    /// Resolve a request id to a comparable mode
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for anything but 0-3.
    pub fn from_id(id: i64) -> Result<Self, DomainError> {
        match id {
            0 => Ok(Self::Walking),
            1 => Ok(Self::Bike),
            2 => Ok(Self::Scooter),
            3 => Ok(Self::Bus),
            _ => Err(DomainError::not_found("Transport type", id.to_string())),
        }
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Bike => "bike",
            Self::Scooter => "scooter",
            Self::Bus => "bus",
            Self::Car => "car",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index into the car profile's fuel price and emission tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelType(u8);

impl FuelType {
    pub const GASOLINE: Self = Self(0);
    pub const DIESEL: Self = Self(1);
    pub const LPG: Self = Self(2);

    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or oversized ids. Whether the id is
    /// known is decided by [`CarProfile`].
    pub fn from_id(id: i64) -> Result<Self, DomainError> {
        u8::try_from(id)
            .map(Self)
            .map_err(|_| DomainError::invalid_input(format!("unknown fuel type: {id}")))
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Cost and CO2 of a single trip
pub trait TripCost {
    /// Trip cost in PLN
    fn cost(&self, distance_km: f64) -> f64;

    /// Trip emission in grams of CO2
    fn co2(&self, distance_km: f64) -> f64;
}

/// Cost and CO2 for one trip; a field is `None` when it could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostSummary {
    pub cost: Option<f64>,
    pub co2: Option<f64>,
}

/// Summarise a trip, dropping any non-finite figure
pub fn cost_summary(trip: &impl TripCost, distance_km: f64) -> CostSummary {
    CostSummary {
        cost: Some(trip.cost(distance_km)).filter(|v| v.is_finite()),
        co2: Some(trip.co2(distance_km)).filter(|v| v.is_finite()),
    }
}

/// How much a trip saves compared to the car
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub cost_difference: f64,
    pub co2_difference: f64,
}

/// `car - other` for cost and CO2, `None` if either summary is incomplete
#[must_use]
pub fn savings(car: &CostSummary, other: &CostSummary) -> Option<Savings> {
    Some(Savings {
        cost_difference: car.cost? - other.cost?,
        co2_difference: car.co2? - other.co2?,
    })
}

/// Check that a distance can be priced
///
/// # Errors
///
/// Returns `InvalidInput` for negative or non-finite distances.
pub fn validate_distance(distance_km: f64) -> Result<f64, DomainError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(DomainError::invalid_input(format!(
            "distance must be a non-negative number, got {distance_km}"
        )));
    }
    Ok(distance_km)
}

/// Modes that cost nothing and emit nothing at the point of use
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroCost;

impl TripCost for ZeroCost {
    fn cost(&self, _distance_km: f64) -> f64 {
        0.0
    }

    fn co2(&self, _distance_km: f64) -> f64 {
        0.0
    }
}

/// City bike rental
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BikeProfile {
    /// km/h
    #[serde(default = "default_bike_speed")]
    pub avg_speed: f64,
    /// PLN per started hour of riding
    #[serde(default = "default_bike_price_per_hour")]
    pub price_per_hour: f64,
}

fn default_bike_speed() -> f64 {
    15.0
}

fn default_bike_price_per_hour() -> f64 {
    4.0
}

impl Default for BikeProfile {
    fn default() -> Self {
        Self {
            avg_speed: default_bike_speed(),
            price_per_hour: default_bike_price_per_hour(),
        }
    }
}

impl TripCost for BikeProfile {
    fn cost(&self, distance_km: f64) -> f64 {
        self.price_per_hour * (distance_km / self.avg_speed)
    }

    fn co2(&self, _distance_km: f64) -> f64 {
        0.0
    }
}

/// Shared electric scooter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScooterProfile {
    #[serde(default = "default_scooter_speed")]
    pub avg_speed: f64,
    /// Unlock fee in PLN
    #[serde(default = "default_scooter_start_price")]
    pub start_price: f64,
    #[serde(default = "default_scooter_cost_per_minute")]
    pub cost_per_minute: f64,
    /// kWh per 100 km
    #[serde(default = "default_scooter_energy")]
    pub avg_energy_consumption: f64,
    /// g CO2 per kWh
    #[serde(default = "default_scooter_emission_factor")]
    pub avg_co2_emission_factor: f64,
}

fn default_scooter_speed() -> f64 {
    18.0
}

fn default_scooter_start_price() -> f64 {
    3.0
}

fn default_scooter_cost_per_minute() -> f64 {
    0.69
}

fn default_scooter_energy() -> f64 {
    1.5
}

fn default_scooter_emission_factor() -> f64 {
    698.0
}

impl Default for ScooterProfile {
    fn default() -> Self {
        Self {
            avg_speed: default_scooter_speed(),
            start_price: default_scooter_start_price(),
            cost_per_minute: default_scooter_cost_per_minute(),
            avg_energy_consumption: default_scooter_energy(),
            avg_co2_emission_factor: default_scooter_emission_factor(),
        }
    }
}

impl TripCost for ScooterProfile {
    fn cost(&self, distance_km: f64) -> f64 {
        let driving_time = (distance_km / self.avg_speed) / 60.0;
        self.cost_per_minute.mul_add(driving_time, self.start_price)
    }

    fn co2(&self, distance_km: f64) -> f64 {
        (distance_km / 100.0) * self.avg_energy_consumption * self.avg_co2_emission_factor
    }
}

/// Car baseline; price and emission tables are indexed by [`FuelType`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarProfile {
    /// Liters per 100 km
    #[serde(default = "default_car_consumption")]
    pub default_avg_consumption: f64,
    /// PLN per liter
    #[serde(default = "default_fuel_prices")]
    pub default_fuel_price: Vec<f64>,
    /// g CO2 per km
    #[serde(default = "default_co2_emission")]
    pub co2_emission: Vec<f64>,
}

fn default_car_consumption() -> f64 {
    7.0
}

fn default_fuel_prices() -> Vec<f64> {
    vec![6.49, 6.59, 3.09]
}

fn default_co2_emission() -> Vec<f64> {
    vec![164.0, 155.0, 141.0]
}

impl Default for CarProfile {
    fn default() -> Self {
        Self {
            default_avg_consumption: default_car_consumption(),
            default_fuel_price: default_fuel_prices(),
            co2_emission: default_co2_emission(),
        }
    }
}

impl CarProfile {
    fn lookup(table: &[f64], fuel: FuelType) -> Result<f64, DomainError> {
        table.get(fuel.index()).copied().ok_or_else(|| {
            DomainError::invalid_input(format!("unknown fuel type: {}", fuel.id()))
        })
    }

    /// Default price per liter for `fuel`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the fuel type has no entry.
    pub fn fuel_price(&self, fuel: FuelType) -> Result<f64, DomainError> {
        Self::lookup(&self.default_fuel_price, fuel)
    }

    /// Emission factor in g/km for `fuel`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the fuel type has no entry.
    pub fn emission_factor(&self, fuel: FuelType) -> Result<f64, DomainError> {
        Self::lookup(&self.co2_emission, fuel)
    }

    /// Build a car trip, falling back to profile defaults for missing figures
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown fuel type or a negative or
    /// non-finite consumption or fuel price.
    pub fn trip(
        &self,
        avg_consumption: Option<f64>,
        fuel: FuelType,
        fuel_price: Option<f64>,
    ) -> Result<CarTrip, DomainError> {
        let emission_factor = self.emission_factor(fuel)?;
        let fuel_price = match fuel_price {
            Some(price) => price,
            None => self.fuel_price(fuel)?,
        };
        let avg_consumption = avg_consumption.unwrap_or(self.default_avg_consumption);

        for (name, value) in [("avg_consumption", avg_consumption), ("fuel_price", fuel_price)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::invalid_input(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(CarTrip {
            avg_consumption,
            fuel_price,
            emission_factor,
            parking_price: 0.0,
        })
    }
}

/// A concrete car trip with resolved consumption, prices and parking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarTrip {
    pub avg_consumption: f64,
    pub fuel_price: f64,
    pub emission_factor: f64,
    /// Paid parking at the destination, added once per trip
    pub parking_price: f64,
}

impl CarTrip {
    #[must_use]
    pub const fn with_parking(mut self, parking_price: f64) -> Self {
        self.parking_price = parking_price;
        self
    }

    fn fuel_cost(&self, distance_km: f64) -> f64 {
        (distance_km / 100.0) * self.avg_consumption * self.fuel_price
    }

    /// Yearly cost (PLN) and CO2 (kg) of driving `daily_distance_km` every day
    ///
    /// Parking is not included.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or non-finite distances.
    pub fn annual_summary(&self, daily_distance_km: f64) -> Result<CostSummary, DomainError> {
        let daily_distance_km = validate_distance(daily_distance_km)?;
        let daily_co2 = daily_distance_km * self.emission_factor;
        Ok(CostSummary {
            cost: Some(self.fuel_cost(daily_distance_km) * DAYS_PER_YEAR),
            co2: Some(daily_co2 * DAYS_PER_YEAR / GRAMS_PER_KG),
        })
    }
}

impl TripCost for CarTrip {
    fn cost(&self, distance_km: f64) -> f64 {
        self.fuel_cost(distance_km) + self.parking_price
    }

    fn co2(&self, distance_km: f64) -> f64 {
        distance_km * self.emission_factor
    }
}

/// Constant tables for every transport mode
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransportProfiles {
    #[serde(default)]
    pub bike: BikeProfile,
    #[serde(default)]
    pub scooter: ScooterProfile,
    #[serde(default)]
    pub car: CarProfile,
}

impl TransportProfiles {
    /// Reject tables that would make every computation meaningless
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` describing the first broken figure.
    pub fn validate(&self) -> Result<(), DomainError> {
        let positive = [
            ("bike.avg_speed", self.bike.avg_speed),
            ("scooter.avg_speed", self.scooter.avg_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::InvalidReferenceData(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("bike.price_per_hour", self.bike.price_per_hour),
            ("scooter.start_price", self.scooter.start_price),
            ("scooter.cost_per_minute", self.scooter.cost_per_minute),
            ("scooter.avg_energy_consumption", self.scooter.avg_energy_consumption),
            ("scooter.avg_co2_emission_factor", self.scooter.avg_co2_emission_factor),
            ("car.default_avg_consumption", self.car.default_avg_consumption),
        ];
        let car_tables = self
            .car
            .default_fuel_price
            .iter()
            .map(|v| ("car.default_fuel_price", *v))
            .chain(self.car.co2_emission.iter().map(|v| ("car.co2_emission", *v)));
        for (name, value) in non_negative.into_iter().chain(car_tables) {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidReferenceData(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.car.default_fuel_price.is_empty()
            || self.car.default_fuel_price.len() != self.car.co2_emission.len()
        {
            return Err(DomainError::InvalidReferenceData(
                "car fuel price and emission tables must be non-empty and of equal length"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Cost summary for a compared mode, priced from these profiles
    ///
    /// The car is priced with its defaults and no parking.
    pub fn summary(&self, mode: TransportMode, distance_km: f64) -> CostSummary {
        match mode {
            TransportMode::Walking | TransportMode::Bus => cost_summary(&ZeroCost, distance_km),
            TransportMode::Bike => cost_summary(&self.bike, distance_km),
            TransportMode::Scooter => cost_summary(&self.scooter, distance_km),
            TransportMode::Car => self
                .car
                .trip(None, FuelType::default(), None)
                .map(|trip| cost_summary(&trip, distance_km))
                .unwrap_or_default(),
        }
    }
}
