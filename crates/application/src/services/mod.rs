//! Application services
//!
//! Each service resolves the current reference data per call, so a reload
//! never tears a request in half.

mod air_quality_service;
mod traffic_service;
mod travel_service;

pub use air_quality_service::{AirQualityReport, AirQualityService};
pub use traffic_service::{TrafficReading, TrafficService, round_to_cents};
pub use travel_service::{AnnualRequest, AnnualSummary, SavingsRequest, TravelService};
