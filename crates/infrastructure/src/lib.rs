//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer, loads configuration
//! and the reference datasets, and sets up tracing.

pub mod adapters;
pub mod config;
pub mod reference_data;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AirQualityAppConfig, AppConfig, LogFormat, PaidParkingConfig, ServerConfig, TrafficConfig,
};
pub use reference_data::{
    ReferenceDataError, load_reference_data, load_stations, load_traffic, load_zones,
};
pub use telemetry::{DEFAULT_LOG_FILTER, init_tracing};
