//! Request-level errors and their HTTP mapping
//!
//! | error              | status | body                                  |
//! |--------------------|--------|---------------------------------------|
//! | `Validation`       | 400    | `{"error": "Invalid request"}`        |
//! | `NotFound`         | 404    | `{"error": "Book not found"}`         |
//! | `StoreUnavailable` | 500    | `{"error": "Internal server error"}`  |
//!
//! The detailed cause is logged, never returned.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::validation::ValidationError;
use crate::error::ErrorResponse;
use crate::store::{StoreError, StoreErrorKind};

pub const INVALID_REQUEST: &str = "Invalid request";
pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Everything a book handler can fail with
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected before the store was called
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No record for the given id
    #[error("book not found: {id}")]
    NotFound { id: String },

    /// The store failed
    #[error("{0}")]
    StoreUnavailable(StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => INVALID_REQUEST,
            Self::NotFound { .. } => BOOK_NOT_FOUND,
            Self::StoreUnavailable(_) => INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err.kind {
            StoreErrorKind::NotFound => Self::NotFound {
                id: err.entity_id.unwrap_or_default(),
            },
            StoreErrorKind::Unavailable => Self::StoreUnavailable(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(ValidationError::Malformed(rejection.body_text()))
    }
}

/// A path segment that cannot be decoded names no book
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Undecodable book id: {}", rejection.body_text());
        Self::NotFound { id: String::new() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::debug!("Rejected request body: {}", e),
            Self::NotFound { id } => tracing::debug!(id = %id, "Book not found"),
            Self::StoreUnavailable(e) => tracing::error!(
                operation = %e.operation,
                kind = %e.kind,
                entity_id = ?e.entity_id,
                "Store error: {}", e.message
            ),
        }

        (self.status_code(), Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}
