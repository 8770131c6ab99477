//! In-memory store
//!
//! Records live in an insertion-ordered index behind a `tokio::sync::RwLock`.
//! Reads share the lock and every mutation takes it exclusively, so a read that
//! starts after a write has returned always observes it.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::error::{StoreError, StoreOperation};
use super::traits::{BookStore, StoreResult};
use crate::books::{Book, BookFields};
use crate::ids::BookId;

/// Resolve a caller-supplied id; malformed ids are indistinguishable from unknown ones.
pub(crate) fn resolve_id(operation: StoreOperation, raw: &str) -> StoreResult<BookId> {
    raw.parse()
        .map_err(|_| StoreError::not_found(operation, raw))
}

/// Insertion-ordered map of books, shared by the in-memory and file backends
#[derive(Debug, Clone, Default)]
pub(crate) struct BookIndex {
    books: HashMap<BookId, Book>,
    order: Vec<BookId>,
}

impl BookIndex {
    pub(crate) fn from_books(books: Vec<Book>) -> Self {
        let mut index = Self::default();
        for book in books {
            index.insert(book);
        }
        index
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn all(&self) -> Vec<Book> {
        self.order
            .iter()
            .filter_map(|id| self.books.get(id))
            .cloned()
            .collect()
    }

    pub(crate) fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.get(id)
    }

    pub(crate) fn insert(&mut self, book: Book) {
        if self.books.insert(book.id.clone(), book.clone()).is_none() {
            self.order.push(book.id);
        }
    }

    pub(crate) fn replace(&mut self, id: &BookId, fields: BookFields) -> Option<Book> {
        let book = self.books.get_mut(id)?;
        book.replace_fields(fields);
        Some(book.clone())
    }

    pub(crate) fn remove(&mut self, id: &BookId) -> Option<Book> {
        let book = self.books.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(book)
    }
}

/// Volatile store; contents are lost when the process exits
#[derive(Debug, Default)]
pub struct InMemoryStore {
    index: RwLock<BookIndex>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with existing records
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            index: RwLock::new(BookIndex::from_books(books)),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.index.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl BookStore for InMemoryStore {
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
        self.index.write().await.insert(book.clone());
        tracing::debug!(id = %book.id, "Stored new book");
        Ok(book)
    }

    async fn update(&self, id: &str, fields: BookFields) -> StoreResult<Book> {
        let book_id = resolve_id(StoreOperation::Update, id)?;
        self.index
            .write()
            .await
            .replace(&book_id, fields)
            .ok_or_else(|| StoreError::not_found(StoreOperation::Update, id))
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let book_id = resolve_id(StoreOperation::Delete, id)?;
        self.index
            .write()
            .await
            .remove(&book_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(StoreOperation::Delete, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn dune() -> BookFields {
        BookFields::new("Dune", "Herbert")
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = InMemoryStore::new();
        let created = store
            .create(dune().with_published_year(1965))
            .await
            .unwrap();

        let fetched = store.get(created.id.as_str()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.published_year, Some(1965));
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = InMemoryStore::new();
        let a = store.create(dune()).await.unwrap();
        let b = store.create(dune()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryStore::new();
        let titles = ["Dune", "Hyperion", "Solaris", "Ubik"];
        for title in titles {
            store.create(BookFields::new(title, "Someone")).await.unwrap();
        }

        let listed: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(listed, titles);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found_everywhere() {
        let store = InMemoryStore::new();
        store.create(dune()).await.unwrap();

        for id in ["unknown-id", "", "book_01h455vb4pex5vsknk084sn02q"] {
            assert!(store.get(id).await.unwrap_err().is_not_found());
            assert!(store.update(id, dune()).await.unwrap_err().is_not_found());
            assert!(store.delete(id).await.unwrap_err().is_not_found());
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let store = InMemoryStore::new();
        let created = store
            .create(dune().with_description("Spice").with_published_year(1965))
            .await
            .unwrap();

        let replacement = BookFields::new("Dune Messiah", "Frank Herbert");
        let updated = store
            .update(created.id.as_str(), replacement.clone())
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields(), replacement);

        let fetched = store.get(created.id.as_str()).await.unwrap();
        assert_eq!(fetched.fields(), replacement);
        assert_eq!(fetched.description, None);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = InMemoryStore::new();
        let created = store.create(dune()).await.unwrap();

        store.delete(created.id.as_str()).await.unwrap();
        assert!(store.get(created.id.as_str()).await.unwrap_err().is_not_found());

        let err = store.delete(created.id.as_str()).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.operation, StoreOperation::Delete);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_keeps_order_of_remaining() {
        let store = InMemoryStore::new();
        let a = store.create(BookFields::new("A", "x")).await.unwrap();
        let b = store.create(BookFields::new("B", "x")).await.unwrap();
        let c = store.create(BookFields::new("C", "x")).await.unwrap();

        store.delete(b.id.as_str()).await.unwrap();

        let ids: Vec<_> = store.list().await.unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[tokio::test]
    async fn test_with_books_seeds_store() {
        let existing = Book::from_fields(BookId::new(), dune());
        let store = InMemoryStore::with_books(vec![existing.clone()]);
        assert_eq!(store.get(existing.id.as_str()).await.unwrap(), existing);
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_visible() {
        let store = Arc::new(InMemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .create(BookFields::new(format!("Book {i}"), "Author"))
                    .await
                    .unwrap()
            }));
        }

        let mut created = Vec::new();
        for handle in handles {
            created.push(handle.await.unwrap());
        }

        assert_eq!(store.list().await.unwrap().len(), 50);
        for book in created {
            assert_eq!(store.get(book.id.as_str()).await.unwrap(), book);
        }
    }

    #[tokio::test]
    async fn test_concurrent_updates_last_write_wins() {
        let store = Arc::new(InMemoryStore::new());
        let created = store.create(dune()).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = Arc::clone(&store);
            let id = created.id.to_string();
            handles.push(tokio::spawn(async move {
                store
                    .update(&id, BookFields::new(format!("Title {i}"), format!("Author {i}")))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Whichever write landed last, title and author come from the same request.
        let fetched = store.get(created.id.as_str()).await.unwrap();
        let suffix = fetched.title.trim_start_matches("Title ");
        assert_eq!(fetched.author, format!("Author {suffix}"));
    }
}
