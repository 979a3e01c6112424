//! EcoRoute CLI
//!
//! Queries a running server and validates reference data offline.

pub mod args;
pub mod check;
pub mod client;

pub use args::{AnnualArgs, Cli, Commands, SavingsArgs, log_filter_from_verbosity};
pub use check::{CheckError, DataReport, ProbeReport, check_data};
pub use client::{ApiClient, ApiResponse, endpoint_url};
