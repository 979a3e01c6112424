//! Adapters implementing application ports

mod air_quality_adapter;

pub use air_quality_adapter::AirQualityAdapter;
