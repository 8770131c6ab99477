//! Service-level error types and the JSON error body

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::store::StoreError;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while starting, running or stopping the service
///
/// Request-level failures are [`ApiError`](crate::books::ApiError)s and never
/// reach this type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error (binding the listener, serving)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store could not be opened
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Tracing subscriber could not be installed
    #[error("Tracing initialization failed: {0}")]
    Tracing(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

/// Error response body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Caller-facing message; never carries internal detail
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Body of a successful delete: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
