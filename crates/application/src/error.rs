//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Requested data does not exist or the result is not applicable
    #[error("{0}")]
    NotFound(String),

    /// Request parameters could not be used
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The remote air-quality service failed or returned garbage
    #[error("Upstream service failure: {0}")]
    UpstreamFailure(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the caller sent something unusable (as opposed to a server-side failure)
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::InvalidInput(_)
                | Self::Domain(DomainError::NotFound { .. } | DomainError::InvalidInput(_))
        )
    }
}
