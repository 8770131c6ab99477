//! Route table for the books resource

use axum::{routing::get, Router};

use super::handlers::{create_book, delete_book, get_book, list_books, update_book};
use crate::state::AppState;
use crate::store::BookStore;

/// `/books` and `/books/{id}`
pub fn routes<S: BookStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/books", get(list_books::<S>).post(create_book::<S>))
        .route(
            "/books/{id}",
            get(get_book::<S>)
                .put(update_book::<S>)
                .delete(delete_book::<S>),
        )
}
