//! Application state shared across handlers

use std::sync::Arc;

use crate::{config::Config, store::BookStore};

/// Application state shared across handlers
///
/// Holds the single store instance constructed at startup. Cloning is cheap;
/// every clone refers to the same store.
pub struct AppState<S> {
    config: Arc<Config>,
    store: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: BookStore> AppState<S> {
    /// Create state around an already-initialized store
    pub fn new(config: Config, store: S) -> Self {
        Self::from_shared(config, Arc::new(store))
    }

    /// Create state around a store the caller keeps a handle to
    pub fn from_shared(config: Config, store: Arc<S>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the store
    pub fn store(&self) -> &S {
        &self.store
    }
}
