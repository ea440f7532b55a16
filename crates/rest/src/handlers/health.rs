//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and load
//! balancers. These live outside the API prefix.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use verbum_persistence::core::DocumentStore;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - `{"status": "healthy", "backend": ..., "timestamp": ...}`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!("Processing health check request");

    let backend_name = state.storage().backend_name();

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": backend_name,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET /_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Verifies that the store is reachable.
///
/// # HTTP Request
///
/// `GET /_readiness`
///
/// # Response
///
/// - `200 OK` - Store reachable
/// - `503 Service Unavailable` - Store health check failed
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!("Processing readiness check request");

    state.service().health().await?;

    let response = serde_json::json!({
        "status": "ready",
        "backend": state.storage().backend_name(),
        "checks": {
            "storage": "ok"
        }
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
