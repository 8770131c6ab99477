//! Router assembly

use axum::{routing::get, Router};

use crate::{
    books,
    health::{health, readiness},
    state::AppState,
    store::BookStore,
};

/// All routes with state applied, without the middleware stack
///
/// [`Server`](crate::server::Server) wraps the result in its layers; tests can
/// drive it directly.
pub fn router<S: BookStore>(state: AppState<S>) -> Router {
    Router::new()
        .merge(books::routes::<S>())
        .route("/health", get(health::<S>))
        .route("/ready", get(readiness::<S>))
        .with_state(state)
}
