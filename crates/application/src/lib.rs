//! Application layer - Use cases and orchestration
//!
//! Wires the domain lookups and cost model into request-level services and
//! defines the ports implemented by infrastructure adapters.

pub mod error;
pub mod ports;
pub mod reference_data;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use reference_data::{AirQualitySettings, ReferenceData, ReferenceDataSummary, RequestDefaults};
pub use services::*;
