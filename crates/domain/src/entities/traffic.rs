//! Historical traffic averages keyed by hour and weekday

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Day of the week, named in English as in the traffic dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Full English name ("Monday")
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(DomainError::invalid_input(format!("unknown weekday: {s}"))),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One averaged traffic measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficRow {
    /// Hour of day, 0-23
    pub hour: u8,
    pub day_of_week: Weekday,
    /// Averaged traffic value
    pub value: f64,
}

/// Read-only table of traffic averages
#[derive(Debug, Clone, Default)]
pub struct TrafficTable {
    rows: Vec<TrafficRow>,
}

impl TrafficTable {
    /// Build a table from parsed rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` for an empty table or a row whose hour is outside 0-23.
    pub fn new(rows: Vec<TrafficRow>) -> Result<Self, DomainError> {
        if rows.is_empty() {
            return Err(DomainError::InvalidReferenceData(
                "traffic table is empty".to_string(),
            ));
        }
        if let Some(row) = rows.iter().find(|row| row.hour > 23) {
            return Err(DomainError::InvalidReferenceData(format!(
                "traffic row has hour {} outside 0-23",
                row.hour
            )));
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Average for the given hour and weekday; the first matching row wins
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `hour` is outside 0-23.
    pub fn average(&self, hour: u32, day: Weekday) -> Result<Option<f64>, DomainError> {
        if hour > 23 {
            return Err(DomainError::invalid_input(format!(
                "hour must be between 0 and 23, got {hour}"
            )));
        }
        Ok(self
            .rows
            .iter()
            .find(|row| u32::from(row.hour) == hour && row.day_of_week == day)
            .map(|row| row.value))
    }
}
