//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{IssuanceError, TransportFault};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl From<vs_shared::ConfigError> for DomainError {
    fn from(err: vs_shared::ConfigError) -> Self {
        DomainError::Validation {
            message: err.to_string(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
