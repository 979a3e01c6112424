//! Domain entities and reference-data aggregates

mod air_quality;
mod parking_zone;
mod station;
mod traffic;
mod transport;

pub use air_quality::{AirQualityLevel, AirQualityReading};
pub use parking_zone::{ParkingZone, ZoneIndex};
pub use station::{Station, nearest_station};
pub use traffic::{TrafficRow, TrafficTable, Weekday};
pub use transport::{
    BikeProfile, CarProfile, CarTrip, CostSummary, FuelType, Savings, ScooterProfile,
    TransportMode, TransportProfiles, TripCost, ZeroCost, cost_summary, savings, validate_distance,
};
