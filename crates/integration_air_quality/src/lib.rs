//! GIOŚ air-quality integration
//!
//! Client for the air-quality index published by the Polish Chief
//! Inspectorate of Environmental Protection (<https://powietrze.gios.gov.pl>).
//! One `GET {base_url}/{station_id}` returns the current index of a station.

pub mod client;
mod models;

pub use client::{AirQualityClient, AirQualityConfig, AirQualityError, GiosClient};
pub use models::{AirQualityIndex, IndexLevel};
