//! The books resource: record type, body validation, handlers and routes
//!
//! | Method | Path          | Success              | Failure       |
//! |--------|---------------|----------------------|---------------|
//! | GET    | `/books`      | 200, array of books  | 500           |
//! | GET    | `/books/{id}` | 200, book            | 404, 500      |
//! | POST   | `/books`      | 201, created book    | 400, 500      |
//! | PUT    | `/books/{id}` | 200, updated book    | 400, 404, 500 |
//! | DELETE | `/books/{id}` | 200, `{message}`     | 404, 500      |

mod error;
pub mod handlers;
mod model;
mod routes;
pub mod validation;

pub use error::{ApiError, BOOK_NOT_FOUND, INTERNAL_SERVER_ERROR, INVALID_REQUEST};
pub use handlers::BOOK_DELETED;
pub use model::{Book, BookFields};
pub use routes::routes;
pub use validation::{validate, ValidationError};
