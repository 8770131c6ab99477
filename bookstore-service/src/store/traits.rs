//! Store trait definition
//!
//! Uses RPITIT (Return Position Impl Trait In Traits) so implementations are
//! plain `async fn`s without `async_trait`. The trait is therefore not object
//! safe; handlers are generic over the concrete store instead.

use std::future::Future;

use super::error::StoreError;
use crate::books::{Book, BookFields};

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence capability for book records, keyed by [`BookId`](crate::ids::BookId).
///
/// Ids arrive as the raw strings callers put in the path. An implementation
/// must answer `NotFound` for any id it cannot resolve, including ids that are
/// not well-formed for its scheme, and `Unavailable` only when the backend
/// itself fails.
///
/// Mutations must be visible to any `get`/`list` that starts after they
/// return. Concurrent updates of one id may land in either order, but each
/// fully replaces the previous state.
pub trait BookStore: Send + Sync + 'static {
    /// All stored records, in insertion order
    fn list(&self) -> impl Future<Output = StoreResult<Vec<Book>>> + Send;

    /// The record with the given id
    fn get(&self, id: &str) -> impl Future<Output = StoreResult<Book>> + Send;

    /// Store a new record under a freshly generated id and return it
    fn create(&self, fields: BookFields) -> impl Future<Output = StoreResult<Book>> + Send;

    /// Replace every mutable field of an existing record and return the result
    fn update(
        &self,
        id: &str,
        fields: BookFields,
    ) -> impl Future<Output = StoreResult<Book>> + Send;

    /// Remove a record
    fn delete(&self, id: &str) -> impl Future<Output = StoreResult<()>> + Send;

    /// Cheap reachability check used by the readiness probe
    fn ping(&self) -> impl Future<Output = StoreResult<()>> + Send {
        async { Ok(()) }
    }
}
