//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{state::AppState, store::BookStore};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Liveness probe; 200 whenever the process is serving
pub async fn health<S: BookStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness probe; 503 while the store cannot be reached
pub async fn readiness<S: BookStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let store_status = match state.store().ping().await {
        Ok(()) => DependencyStatus {
            healthy: true,
            message: None,
        },
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            DependencyStatus {
                healthy: false,
                message: Some("Store unavailable".to_string()),
            }
        }
    };

    let ready = store_status.healthy;
    let mut dependencies = HashMap::new();
    dependencies.insert("store".to_string(), store_status);

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = ReadinessResponse {
        ready,
        service: state.config().service.name.clone(),
        dependencies,
    };

    (status, Json(response))
}
