//! Air-quality index levels

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Index level reported by the air-quality service, 0 (best) to 5 (worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AirQualityLevel(u8);

impl AirQualityLevel {
    pub const BEST: Self = Self(0);
    pub const WORST: Self = Self(5);

    /// Validate a raw index id
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for ids above 5.
    pub fn new(id: u8) -> Result<Self, DomainError> {
        if id > Self::WORST.0 {
            return Err(DomainError::invalid_input(format!(
                "air quality index must be 0-5, got {id}"
            )));
        }
        Ok(Self(id))
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Bonus points for this level from a per-level table
    ///
    /// Levels past the end of the table earn nothing.
    #[must_use]
    pub fn extra_points(self, table: &[i32]) -> i32 {
        table.get(usize::from(self.0)).copied().unwrap_or(0)
    }
}

impl TryFrom<u8> for AirQualityLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AirQualityLevel> for u8 {
    fn from(level: AirQualityLevel) -> Self {
        level.0
    }
}

/// An air-quality reading resolved for a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualityReading {
    /// Station the reading comes from
    pub station_id: String,
    /// Localised label of the index level ("Dobry", "Umiarkowany", ...)
    pub label: String,
    pub level: AirQualityLevel,
}
