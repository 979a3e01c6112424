//! Air-quality service port
//!
//! Defines the interface for fetching the current index of a measuring station.

use async_trait::async_trait;
use domain::AirQualityReading;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the remote air-quality index
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AirQualityPort: Send + Sync {
    /// Fetch the current index for a station
    ///
    /// Implementations make a single bounded attempt and report transport or
    /// payload problems as [`ApplicationError::UpstreamFailure`].
    async fn current_index(&self, station_id: &str) -> Result<AirQualityReading, ApplicationError>;

    /// Check if the air-quality service answers at all
    async fn is_available(&self) -> bool;
}
