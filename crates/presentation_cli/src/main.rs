//! EcoRoute CLI
//!
//! Command-line interface for querying a server and checking datasets.

#![allow(clippy::print_stdout)]

use std::process::ExitCode;

use clap::Parser;
use infrastructure::{LogFormat, init_tracing};
use presentation_cli::{
    ApiClient, ApiResponse, Cli, Commands, check_data, log_filter_from_verbosity,
};

/// Print a server answer; error bodies turn into a failing exit code
fn report(title: &str, response: &ApiResponse) -> anyhow::Result<ExitCode> {
    if response.is_success() {
        println!("{title}");
        println!("{}", serde_json::to_string_pretty(&response.body)?);
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "❌ HTTP {}: {}",
            response.status,
            response.error_message().unwrap_or("no error message")
        );
        Ok(ExitCode::FAILURE)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(LogFormat::Text, log_filter_from_verbosity(cli.verbose))
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let client = ApiClient::new(cli.url.as_str())?;

    match cli.command {
        Commands::Status => {
            let resp = client.get("/ready", &[]).await?;
            report("📊 Server Status:", &resp)
        },

        Commands::Health => match client.get("/ready", &[]).await {
            Ok(resp) if resp.is_success() => {
                println!("✅ Healthy");
                Ok(ExitCode::SUCCESS)
            },
            Ok(resp) => {
                println!("❌ Unhealthy: HTTP {}", resp.status);
                Ok(ExitCode::FAILURE)
            },
            Err(e) => {
                println!("❌ Unhealthy: {e}");
                Ok(ExitCode::FAILURE)
            },
        },

        Commands::Traffic { hour, day } => {
            let resp = match (hour, day) {
                (Some(hour), Some(day)) => {
                    client
                        .get(
                            "/get_traffic",
                            &[("hour", hour.to_string()), ("day_of_week", day)],
                        )
                        .await?
                },
                _ => client.get("/get_current_traffic", &[]).await?,
            };
            report("🚦 Traffic:", &resp)
        },

        Commands::Savings(args) => {
            let resp = client.get("/get_saving_for_travel", &args.query()).await?;
            report("💰 Savings compared to the car:", &resp)
        },

        Commands::Annual(args) => {
            let resp = client.get("/get_annual_saving", &args.query()).await?;
            report("📅 Annual car commute (CO2 in kg):", &resp)
        },

        Commands::AirQuality { lat, lon } => {
            let query: Vec<(&str, String)> = match (lat, lon) {
                (Some(lat), Some(lon)) => vec![("lat", lat.to_string()), ("lon", lon.to_string())],
                _ => Vec::new(),
            };
            let resp = client.get("/get_air_quality", &query).await?;
            report("🌫️  Air Quality:", &resp)
        },

        Commands::CheckData { config, lat, lon } => {
            let config_path = config.map(|p| p.display().to_string());
            let probe = lat.zip(lon);
            match check_data(config_path.as_deref(), probe) {
                Ok(data_report) => {
                    println!("✅ Reference data loaded");
                    println!("{}", serde_json::to_string_pretty(&data_report)?);
                    Ok(ExitCode::SUCCESS)
                },
                Err(e) => {
                    println!("❌ {e}");
                    Ok(ExitCode::FAILURE)
                },
            }
        },
    }
}
