//! # bookstore-service
//!
//! REST service exposing a collection of book records over HTTP/JSON.
//!
//! ## Features
//!
//! - **CRUD routes**: `GET/POST /books`, `GET/PUT/DELETE /books/{id}`
//! - **Pluggable storage**: any [`BookStore`](store::BookStore); in-memory and JSON file backends ship in the crate
//! - **Middleware stack**: request tracking, panic recovery, body size limits, timeouts, CORS, compression
//! - **Health checks**: liveness and readiness probes
//! - **Graceful shutdown**: SIGTERM and SIGINT drain in-flight requests
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookstore_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone(), InMemoryStore::new());
//!
//!     Server::new(config)
//!         .serve(router(state))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod books;
pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::router;
    pub use crate::books::{ApiError, Book, BookFields, ValidationError};
    pub use crate::config::{Config, MiddlewareConfig, ServiceConfig, StoreBackend, StoreConfig};
    pub use crate::error::{Error, ErrorResponse, MessageResponse, Result};
    pub use crate::health::{health, readiness};
    pub use crate::ids::{BookId, IdError, MakeTypedRequestId, RequestId};
    pub use crate::middleware::{
        request_id_layer, request_id_propagation_layer, sensitive_headers_layer, SENSITIVE_HEADERS,
    };
    pub use crate::observability::{init_tracing, shutdown_tracing};
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::{
        BookStore, ConfiguredStore, FileStore, InMemoryStore, StoreError, StoreErrorKind,
        StoreOperation, StoreResult,
    };

    pub use axum::{
        routing::{delete, get, post, put},
        Json, Router,
    };
    pub use tracing::{debug, error, info, warn};
}
