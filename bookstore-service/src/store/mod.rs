//! Persistence for book records
//!
//! - [`BookStore`]: the capability handlers depend on
//! - [`InMemoryStore`]: volatile reference backend
//! - [`FileStore`]: JSON-file backend that survives restarts
//! - [`ConfiguredStore`]: whichever of the two the configuration selects
//!
//! # Example
//!
//! ```rust
//! use bookstore_service::books::BookFields;
//! use bookstore_service::store::{BookStore, InMemoryStore};
//!
//! # tokio_test_block_on(async {
//! let store = InMemoryStore::new();
//! let book = store.create(BookFields::new("Dune", "Herbert")).await.unwrap();
//! assert_eq!(store.get(book.id.as_str()).await.unwrap(), book);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod error;
mod file;
mod in_memory;
mod traits;

pub use error::{StoreError, StoreErrorKind, StoreOperation};
pub use file::FileStore;
pub use in_memory::InMemoryStore;
pub use traits::{BookStore, StoreResult};

use crate::books::{Book, BookFields};
use crate::config::{StoreBackend, StoreConfig};

/// The backend selected at startup
#[derive(Debug)]
pub enum ConfiguredStore {
    Memory(InMemoryStore),
    File(FileStore),
}

impl ConfiguredStore {
    /// Construct the backend named in the configuration
    pub async fn open(config: &StoreConfig) -> StoreResult<Self> {
        match config.backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory store");
                Ok(Self::Memory(InMemoryStore::new()))
            }
            StoreBackend::File => {
                let store = FileStore::open(&config.path).await?;
                Ok(Self::File(store))
            }
        }
    }

    /// Short backend name for logs and readiness output
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
        }
    }
}

impl BookStore for ConfiguredStore {
    async fn list(&self) -> StoreResult<Vec<Book>> {
        match self {
            Self::Memory(s) => s.list().await,
            Self::File(s) => s.list().await,
        }
    }

    async fn get(&self, id: &str) -> StoreResult<Book> {
        match self {
            Self::Memory(s) => s.get(id).await,
            Self::File(s) => s.get(id).await,
        }
    }

    async fn create(&self, fields: BookFields) -> StoreResult<Book> {
        match self {
            Self::Memory(s) => s.create(fields).await,
            Self::File(s) => s.create(fields).await,
        }
    }

    async fn update(&self, id: &str, fields: BookFields) -> StoreResult<Book> {
        match self {
            Self::Memory(s) => s.update(id, fields).await,
            Self::File(s) => s.update(id, fields).await,
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        match self {
            Self::Memory(s) => s.delete(id).await,
            Self::File(s) => s.delete(id).await,
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        match self {
            Self::Memory(s) => s.ping().await,
            Self::File(s) => s.ping().await,
        }
    }
}
