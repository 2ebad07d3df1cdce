//! Error types for Caremate.

use thiserror::Error;

/// Primary error type for all Caremate operations.
#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::store::StoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl CompanionError {
    /// Create a service error.
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CompanionError>;
