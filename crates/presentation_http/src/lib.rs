//! EcoRoute HTTP presentation layer
//!
//! This crate provides the HTTP API for EcoRoute.

pub mod config_reload;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config_reload::{ReferenceDataLoader, ReloadableReferenceData, spawn_reload_handler};
pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;
