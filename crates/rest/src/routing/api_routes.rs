//! Scripture route configuration.
//!
//! Defines all routes for the scripture API.

use axum::{Router, routing::get};
use verbum_persistence::core::DocumentStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## Scripture (under the configured prefix, `/api` by default)
/// - `GET /` - Root message
/// - `GET /books` - All books
/// - `GET /books/{book_name}/chapters/{chapter}` - Verses of a chapter
/// - `GET /verses/{verse_id}` - One verse
/// - `GET /search` - Verse search
/// - `GET /cross-references/{verse_id}` - Cross-reference expansion
/// - `GET /daily-verse` - Random verse
///
/// ## Operational (never prefixed)
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + 'static,
{
    let prefix = state.config().normalized_api_prefix().to_string();
    let path = |route: &str| format!("{}{}", prefix, route);

    let mut router = Router::new()
        // Operational routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Scripture routes
        .route(&path("/"), get(handlers::root_handler))
        .route(&path("/books"), get(handlers::list_books_handler::<S>))
        .route(
            &path("/books/{book_name}/chapters/{chapter}"),
            get(handlers::chapter_handler::<S>),
        )
        .route(&path("/verses/{verse_id}"), get(handlers::verse_handler::<S>))
        .route(&path("/search"), get(handlers::search_handler::<S>))
        .route(
            &path("/cross-references/{verse_id}"),
            get(handlers::cross_references_handler::<S>),
        )
        .route(&path("/daily-verse"), get(handlers::daily_verse_handler::<S>));

    // The root is also reachable without the trailing slash.
    if !prefix.is_empty() {
        router = router.route(&prefix, get(handlers::root_handler));
    }

    router.with_state(state)
}
