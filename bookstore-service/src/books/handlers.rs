//! HTTP handlers for the books resource
//!
//! Each handler makes at most one store call. Bodies are validated before
//! that call; a rejected body never reaches the store.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::error::ApiError;
use super::model::{Book, BookFields};
use super::validation::validate;
use crate::error::MessageResponse;
use crate::state::AppState;
use crate::store::BookStore;

pub const BOOK_DELETED: &str = "Book deleted successfully";

fn fields_from(payload: Result<Json<Value>, JsonRejection>) -> Result<BookFields, ApiError> {
    let Json(body) = payload?;
    Ok(validate(&body)?)
}

/// `GET /books`
pub async fn list_books<S: BookStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.store().list().await?;
    tracing::debug!(count = books.len(), "Listed books");
    Ok(Json(books))
}

/// `GET /books/{id}`
pub async fn get_book<S: BookStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = path?;
    let book = state.store().get(&id).await?;
    Ok(Json(book))
}

/// `POST /books`
pub async fn create_book<S: BookStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let fields = fields_from(payload)?;
    let book = state.store().create(fields).await?;
    tracing::info!(id = %book.id, title = %book.title, "Created book");
    Ok((StatusCode::CREATED, Json(book)))
}

/// `PUT /books/{id}`
pub async fn update_book<S: BookStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let fields = fields_from(payload)?;
    let Path(id) = path?;
    let book = state.store().update(&id, fields).await?;
    tracing::info!(id = %book.id, "Updated book");
    Ok(Json(book))
}

/// `DELETE /books/{id}`
pub async fn delete_book<S: BookStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    state.store().delete(&id).await?;
    tracing::info!(id = %id, "Deleted book");
    Ok(Json(MessageResponse::new(BOOK_DELETED)))
}
