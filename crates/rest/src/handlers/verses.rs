//! Verse handlers.
//!
//! - `GET [prefix]/verses/{verse_id}` - one verse
//! - `GET [prefix]/daily-verse` - a random verse

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

/// Handler for reading a verse.
///
/// # HTTP Request
///
/// `GET [prefix]/verses/{verse_id}`
///
/// # Response
///
/// - `200 OK` - The verse
/// - `404 Not Found` - `{"detail": "Verse not found"}`
pub async fn verse_handler<S>(
    State(state): State<AppState<S>>,
    ApiPath(verse_id): ApiPath<String>,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(verse_id = %verse_id, "Processing verse request");

    let verse = state.service().get_verse(&verse_id).await?;

    Ok((StatusCode::OK, Json(verse)).into_response())
}

/// Handler for the daily verse.
///
/// Picks a verse uniformly at random on every call.
///
/// # HTTP Request
///
/// `GET [prefix]/daily-verse`
///
/// # Response
///
/// - `200 OK` - A verse
/// - `404 Not Found` - No verses are stored
pub async fn daily_verse_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!("Processing daily verse request");

    let verse = state.service().get_daily_verse().await?;

    debug!(verse_id = %verse.id, "Returning daily verse");
    Ok((StatusCode::OK, Json(verse)).into_response())
}
