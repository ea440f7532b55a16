//! Verse search handler.
//!
//! `GET [prefix]/search?q=...&language=...&book=...&testament=...&limit=...&offset=...`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use verbum_persistence::core::DocumentStore;

use crate::error::RestResult;
use crate::extractors::ApiQuery;
use crate::service::SearchRequest;
use crate::state::AppState;

/// Handler for verse search.
///
/// # Query Parameters
///
/// - `q` (required) - Text to match
/// - `language` - Language searched (default `english`)
/// - `book` - Restrict to a book
/// - `testament` - Restrict to `old` or `new` (overrides `book`)
/// - `limit` - Page size (default from configuration, capped at the maximum)
/// - `offset` - Matches to skip (default 0)
///
/// # Response
///
/// - `200 OK` - `{"verses": [...], "total_count": n}`
/// - `400 Bad Request` - `q` missing, or `limit`/`offset` not a non-negative integer
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(request): ApiQuery<SearchRequest>,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(
        q = %request.q,
        language = %request.language,
        book = ?request.book,
        testament = ?request.testament,
        limit = ?request.limit,
        offset = ?request.offset,
        "Processing search request"
    );

    let result = state.service().search(&request).await?;

    debug!(
        returned = result.verses.len(),
        total = result.total_count,
        "Search completed"
    );
    Ok((StatusCode::OK, Json(result)).into_response())
}
