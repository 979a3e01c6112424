//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default server URL
pub const DEFAULT_URL: &str = "http://localhost:5000";

/// EcoRoute CLI
#[derive(Debug, Parser)]
#[command(name = "ecoroute-cli")]
#[command(author, version, about = "EcoRoute travel cost and air quality CLI", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Server URL
    #[arg(short, long, global = true, env = "ECOROUTE_URL", default_value = DEFAULT_URL)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show server readiness and dataset counts
    Status,

    /// Exit non-zero unless the server is ready (for container healthchecks)
    Health,

    /// Traffic average for an hour and weekday, or right now
    Traffic {
        /// Hour of day (0-23); omit with --day for the current time
        #[arg(long, requires = "day")]
        hour: Option<u8>,

        /// English weekday name
        #[arg(long, requires = "hour")]
        day: Option<String>,
    },

    /// Cost and CO2 saved compared to driving
    Savings(SavingsArgs),

    /// Yearly cost and CO2 of a daily car commute
    Annual(AnnualArgs),

    /// Air quality at the nearest station
    AirQuality {
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Load configuration and reference data without a server
    ///
    /// Example: ecoroute-cli check-data --config config.toml --lat 50.04 --lon 22.0
    CheckData {
        /// Config file (defaults to ECOROUTE_CONFIG, then ./config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Resolve the parking zone and nearest station for this point
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}

/// Trip to compare against the car
#[derive(Debug, Clone, Args)]
pub struct SavingsArgs {
    /// 0 walking, 1 bike, 2 scooter, 3 bus
    #[arg(short, long)]
    pub transport_type: Option<i64>,

    /// Trip length in km
    #[arg(short, long)]
    pub distance: Option<f64>,

    /// Car consumption in l/100 km
    #[arg(long)]
    pub avg_consumption: Option<f64>,

    /// 0 gasoline, 1 diesel, 2 LPG
    #[arg(long)]
    pub fuel_type: Option<i64>,

    /// PLN per liter
    #[arg(long)]
    pub fuel_price: Option<f64>,

    /// Destination latitude, for the parking price
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Destination longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

impl SavingsArgs {
    /// Query parameters; unset options are left to the server defaults
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push(&mut query, "transport_type", self.transport_type);
        push(&mut query, "distance", self.distance);
        push(&mut query, "avg_consumption", self.avg_consumption);
        push(&mut query, "fuel_type", self.fuel_type);
        push(&mut query, "fuel_price", self.fuel_price);
        push(&mut query, "lat", self.lat);
        push(&mut query, "lon", self.lon);
        query
    }
}

/// Daily commute by car
#[derive(Debug, Clone, Args)]
pub struct AnnualArgs {
    /// Daily distance in km
    #[arg(short, long)]
    pub daily_distance: Option<f64>,

    #[arg(long)]
    pub avg_consumption: Option<f64>,

    #[arg(long)]
    pub fuel_type: Option<i64>,

    #[arg(long)]
    pub fuel_price: Option<f64>,
}

impl AnnualArgs {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push(&mut query, "daily_distance", self.daily_distance);
        push(&mut query, "avg_consumption", self.avg_consumption);
        push(&mut query, "fuel_type", self.fuel_type);
        push(&mut query, "fuel_price", self.fuel_price);
        query
    }
}

fn push<T: ToString>(query: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<T>) {
    if let Some(value) = value {
        query.push((name, value.to_string()));
    }
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn savings_query_skips_unset_options() {
        let args = SavingsArgs {
            transport_type: Some(1),
            distance: Some(12.5),
            avg_consumption: None,
            fuel_type: None,
            fuel_price: None,
            lat: None,
            lon: None,
        };
        assert_eq!(
            args.query(),
            vec![
                ("transport_type", "1".to_string()),
                ("distance", "12.5".to_string())
            ]
        );
    }

    #[test]
    fn annual_query_orders_parameters() {
        let args = AnnualArgs {
            daily_distance: Some(30.0),
            avg_consumption: Some(6.5),
            fuel_type: Some(2),
            fuel_price: None,
        };
        let names: Vec<_> = args.query().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["daily_distance", "avg_consumption", "fuel_type"]);
    }
}
