//! Type-safe identifiers in TypeID format (`prefix_<uuidv7>`)
//!
//! Both book identifiers and request identifiers are TypeIDs: a short prefix
//! followed by a base32-encoded UUIDv7, e.g. `book_01h455vb4pex5vsknk084sn02q`.
//! UUIDv7 keeps identifiers unique for the lifetime of a store and roughly
//! time-ordered, which makes them pleasant to read in logs.
//!
//! ```rust
//! use bookstore_service::ids::BookId;
//! use std::str::FromStr;
//!
//! let id = BookId::new();
//! assert!(id.as_str().starts_with("book_"));
//!
//! let parsed = BookId::from_str(id.as_str()).unwrap();
//! assert_eq!(parsed, id);
//! ```

use http::Request;
use mti::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};

/// Error type for identifier parsing.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// The value could not be parsed as a valid TypeID.
    #[error("failed to parse identifier: {0}")]
    Parse(#[from] MagicTypeIdError),

    /// The prefix was not the expected value.
    #[error("invalid prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        /// The expected prefix.
        expected: &'static str,
        /// The actual prefix found.
        actual: String,
    },
}

fn parse_prefixed(s: &str, expected: &'static str) -> Result<MagicTypeId, IdError> {
    let mti = MagicTypeId::from_str(s)?;
    if mti.prefix().as_str() != expected {
        return Err(IdError::InvalidPrefix {
            expected,
            actual: mti.prefix().as_str().to_string(),
        });
    }
    Ok(mti)
}

/// Identifier of a stored book.
///
/// Assigned by the store when a book is created and never changed afterwards.
/// Callers treat it as an opaque string; only the store parses it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(MagicTypeId);

impl BookId {
    /// The prefix used for book IDs
    pub const PREFIX: &'static str = "book";

    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, Self::PREFIX).map(Self)
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A type-safe request identifier for log correlation.
///
/// Format: `req_<base32-encoded-uuidv7>`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(MagicTypeId);

impl RequestId {
    /// The prefix used for request IDs
    pub const PREFIX: &'static str = "req";

    /// Creates a new request ID with a UUIDv7 (time-sortable).
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Returns the request ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, Self::PREFIX).map(Self)
    }
}

/// A `MakeRequestId` implementation that stamps incoming requests with a `RequestId`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        let id = RequestId::new();
        let header_value = http::HeaderValue::from_str(id.as_str()).ok()?;
        Some(TowerRequestId::new(header_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_new() {
        let id = BookId::new();
        assert!(id.as_str().starts_with("book_"));
        // prefix (4) + underscore (1) + suffix (26)
        assert_eq!(id.as_str().len(), 31);
    }

    #[test]
    fn test_book_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| BookId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_book_id_parse_roundtrip() {
        let id_str = "book_01h455vb4pex5vsknk084sn02q";
        let id = BookId::from_str(id_str).unwrap();
        assert_eq!(id.as_str(), id_str);
        assert_eq!(id.to_string(), id_str);
    }

    #[test]
    fn test_book_id_rejects_other_prefix() {
        match BookId::from_str("req_01h455vb4pex5vsknk084sn02q").unwrap_err() {
            IdError::InvalidPrefix { expected, actual } => {
                assert_eq!(expected, "book");
                assert_eq!(actual, "req");
            }
            other => panic!("Expected InvalidPrefix error, got {other:?}"),
        }
    }

    #[test]
    fn test_book_id_rejects_garbage() {
        assert!(BookId::from_str("unknown-id").is_err());
        assert!(BookId::from_str("book_invalid").is_err());
        assert!(BookId::from_str("").is_err());
    }

    #[test]
    fn test_book_id_serde_as_string() {
        let id = BookId::new();
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));

        let back: BookId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_make_typed_request_id() {
        let mut maker = MakeTypedRequestId;
        let request = http::Request::builder().body(()).unwrap();

        let header_value = maker.make_request_id(&request).unwrap().into_header_value();
        let id_str = header_value.to_str().unwrap();
        assert!(id_str.starts_with("req_"));
        assert!(RequestId::from_str(id_str).is_ok());
    }
}
