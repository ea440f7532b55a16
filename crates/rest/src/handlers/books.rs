//! Book and chapter handlers.
//!
//! - `GET [prefix]/books` - all books
//! - `GET [prefix]/books/{book_name}/chapters/{chapter}` - verses of a chapter

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

/// Handler for listing books.
///
/// # HTTP Request
///
/// `GET [prefix]/books`
///
/// # Response
///
/// - `200 OK` - JSON array of books in stored order
pub async fn list_books_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!("Processing list books request");

    let books = state.service().list_books().await?;

    debug!(count = books.len(), "Returning books");
    Ok((StatusCode::OK, Json(books)).into_response())
}

/// Handler for reading a chapter.
///
/// # HTTP Request
///
/// `GET [prefix]/books/{book_name}/chapters/{chapter}`
///
/// # Response
///
/// - `200 OK` - JSON array of verses, empty if the chapter is unknown
/// - `400 Bad Request` - `chapter` is not an integer
pub async fn chapter_handler<S>(
    State(state): State<AppState<S>>,
    ApiPath((book_name, chapter)): ApiPath<(String, i64)>,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(
        book = %book_name,
        chapter = chapter,
        "Processing chapter request"
    );

    let verses = state.service().get_chapter(&book_name, chapter).await?;

    debug!(count = verses.len(), "Returning chapter verses");
    Ok((StatusCode::OK, Json(verses)).into_response())
}
