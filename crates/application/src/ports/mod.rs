//! Ports (interfaces) for external systems
//!
//! Infrastructure adapters implement these traits.

mod air_quality_port;
mod clock;
mod reference_data_source;

#[cfg(test)]
pub use air_quality_port::MockAirQualityPort;
pub use air_quality_port::AirQualityPort;
pub use clock::{Clock, FixedClock, SystemClock};
pub use reference_data_source::ReferenceDataSource;
