//! API root handler.

use axum::{Json, response::IntoResponse};
use tracing::debug;

/// Message returned by the API root.
pub const ROOT_MESSAGE: &str = "Bible API - Multilingual Bible with Cross-References";

/// Handler for the API root.
///
/// # HTTP Request
///
/// `GET [prefix]/`
pub async fn root_handler() -> impl IntoResponse {
    debug!("Processing root request");
    Json(serde_json::json!({ "message": ROOT_MESSAGE }))
}
