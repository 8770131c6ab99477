//! JSON file store
//!
//! Keeps the same in-memory index as [`InMemoryStore`](super::InMemoryStore)
//! and writes the full record list to disk after every mutation. A mutation is
//! applied to a copy of the index first; the copy only becomes visible once it
//! has been persisted, so readers never see a state the file does not hold.

use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use super::error::{StoreError, StoreOperation};
use super::in_memory::{resolve_id, BookIndex};
use super::traits::{BookStore, StoreResult};
use crate::books::{Book, BookFields};
use crate::ids::BookId;

/// Store persisted as a JSON array of books
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    index: RwLock<BookIndex>,
}

impl FileStore {
    /// Open the store at `path`, loading any records already there.
    ///
    /// A missing file is an empty store; it is created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let books = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<Book>>(&bytes).map_err(|e| {
                StoreError::unavailable(
                    StoreOperation::Load,
                    format!("Corrupt store file {}: {}", path.display(), e),
                )
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StoreError::unavailable(
                    StoreOperation::Load,
                    format!("Failed to read {}: {}", path.display(), e),
                ))
            }
        };

        tracing::info!(path = %path.display(), count = books.len(), "Opened file store");

        Ok(Self {
            path,
            index: RwLock::new(BookIndex::from_books(books)),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, operation: StoreOperation, index: &BookIndex) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&index.all()).map_err(|e| {
            StoreError::unavailable(operation, format!("Failed to encode records: {}", e))
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let io_err = |e: std::io::Error| {
            tracing::error!(
                operation = %operation,
                path = %self.path.display(),
                "Failed to persist store: {}", e
            );
            StoreError::unavailable(operation, format!("Failed to write {}: {}", self.path.display(), e))
        };

        tokio::fs::write(&tmp, &bytes).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

impl BookStore for FileStore {
    async fn list(&self) -> StoreResult<Vec<Book>> {
        Ok(self.index.read().await.all())
    }

    async fn get(&self, id: &str) -> StoreResult<Book> {
        let book_id = resolve_id(StoreOperation::Get, id)?;
        self.index
            .read()
            .await
            .get(&book_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(StoreOperation::Get, id))
    }

    async fn create(&self, fields: BookFields) -> StoreResult<Book> {
        let book = Book::from_fields(BookId::new(), fields);

        let mut guard = self.index.write().await;
        let mut next = guard.clone();
        next.insert(book.clone());
        self.persist(StoreOperation::Create, &next).await?;
        *guard = next;

        Ok(book)
    }

    async fn update(&self, id: &str, fields: BookFields) -> StoreResult<Book> {
        let book_id = resolve_id(StoreOperation::Update, id)?;

        let mut guard = self.index.write().await;
        let mut next = guard.clone();
        let updated = next
            .replace(&book_id, fields)
            .ok_or_else(|| StoreError::not_found(StoreOperation::Update, id))?;
        self.persist(StoreOperation::Update, &next)
            .await
            .map_err(|e| e.with_entity_id(id))?;
        *guard = next;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let book_id = resolve_id(StoreOperation::Delete, id)?;

        let mut guard = self.index.write().await;
        let mut next = guard.clone();
        next.remove(&book_id)
            .ok_or_else(|| StoreError::not_found(StoreOperation::Delete, id))?;
        self.persist(StoreOperation::Delete, &next)
            .await
            .map_err(|e| e.with_entity_id(id))?;
        *guard = next;

        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::metadata(&dir).await.map(|_| ()).map_err(|e| {
            StoreError::unavailable(
                StoreOperation::Ping,
                format!("Store directory {} unreachable: {}", dir.display(), e),
            )
        })
    }
}
