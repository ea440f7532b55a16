//! Cross-reference handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use verbum_persistence::core::DocumentStore;

use crate::error::RestResult;
use crate::extractors::ApiPath;
use crate::state::AppState;

/// Handler for cross-reference expansion.
///
/// Citations that cannot be parsed or do not name a stored verse are
/// omitted from the response.
///
/// # HTTP Request
///
/// `GET [prefix]/cross-references/{verse_id}`
///
/// # Response
///
/// - `200 OK` - `{"original_verse": {...}, "cross_references": [...]}`
/// - `404 Not Found` - `{"detail": "Verse not found"}`
pub async fn cross_references_handler<S>(
    State(state): State<AppState<S>>,
    ApiPath(verse_id): ApiPath<String>,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(verse_id = %verse_id, "Processing cross-reference request");

    let references = state.service().get_cross_references(&verse_id).await?;

    debug!(
        verse_id = %verse_id,
        cited = references.original_verse.cross_references.len(),
        resolved = references.cross_references.len(),
        "Returning cross-references"
    );
    Ok((StatusCode::OK, Json(references)).into_response())
}
