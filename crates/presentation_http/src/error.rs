//! API error handling
//!
//! Client mistakes and missing data both answer 404, matching what the
//! mobile client expects. Server-side failures never leak their details.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    /// Parameter that is present but cannot be coerced
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::InvalidInput(format!("parameter '{name}' has invalid value '{value}'"))
    }

    /// Parameter that is required but absent
    pub fn missing_param(name: &str) -> Self {
        Self::InvalidInput(format!("parameter '{name}' is required"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::InvalidInput(msg) => (StatusCode::NOT_FOUND, "invalid_input", msg),
            Self::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            },
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::Domain(e @ DomainError::NotFound { .. }) => {
                Self::NotFound(e.to_string())
            },
            ApplicationError::Domain(DomainError::InvalidInput(msg))
            | ApplicationError::InvalidInput(msg) => Self::InvalidInput(msg),
            ApplicationError::UpstreamFailure(msg) => {
                warn!(error = %msg, "Upstream air-quality request failed");
                Self::ServiceUnavailable("Air quality data is currently unavailable".to_string())
            },
            ApplicationError::Domain(e @ DomainError::InvalidReferenceData(_)) => {
                error!(error = %e, "Reference data rejected a lookup");
                Self::Internal(e.to_string())
            },
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                Self::Internal(msg)
            },
        }
    }
}
