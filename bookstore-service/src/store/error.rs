//! Store error types
//!
//! A store operation can fail in exactly two ways: the addressed record does
//! not exist, or the backend could not be reached. Both carry enough context
//! to be logged meaningfully; neither is shown verbatim to HTTP callers.
//!
//! ```rust
//! use bookstore_service::store::{StoreError, StoreErrorKind, StoreOperation};
//!
//! let error = StoreError::not_found(StoreOperation::Get, "book_123");
//! assert_eq!(error.kind, StoreErrorKind::NotFound);
//! assert_eq!(error.entity_id.as_deref(), Some("book_123"));
//! ```

use std::fmt;

/// Operation being performed when the store error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Listing all records
    List,
    /// Fetching one record by id
    Get,
    /// Creating a record
    Create,
    /// Replacing a record's fields
    Update,
    /// Removing a record
    Delete,
    /// Loading persisted state at startup
    Load,
    /// Readiness probe
    Ping,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::Load => write!(f, "load"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

/// Category of store error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// No record with the given id (or the id is malformed)
    NotFound,
    /// The persistence backend is unreachable or failing
    Unavailable,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Structured store error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// The operation being performed when the error occurred
    pub operation: StoreOperation,
    /// The category of error
    pub kind: StoreErrorKind,
    /// Human-readable error message, for logs only
    pub message: String,
    /// The id involved, verbatim as the caller supplied it
    pub entity_id: Option<String>,
}

impl StoreError {
    /// Create a "not found" error for the given id
    pub fn not_found(operation: StoreOperation, entity_id: impl Into<String>) -> Self {
        Self {
            operation,
            kind: StoreErrorKind::NotFound,
            message: "Book not found".to_string(),
            entity_id: Some(entity_id.into()),
        }
    }

    /// Create an "unavailable" error
    pub fn unavailable(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind: StoreErrorKind::Unavailable,
            message: message.into(),
            entity_id: None,
        }
    }

    /// Attach the id involved in the failed operation
    #[must_use]
    pub fn with_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Whether the record simply does not exist
    pub fn is_not_found(&self) -> bool {
        self.kind == StoreErrorKind::NotFound
    }

    /// Whether the backend failed
    pub fn is_unavailable(&self) -> bool {
        self.kind == StoreErrorKind::Unavailable
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Store {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref id) = self.entity_id {
            write!(f, " [Book: {}]", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {}
