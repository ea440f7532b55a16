//! # verbum-rest - Multilingual Scripture API
//!
//! This crate provides the HTTP API of the Verbum scripture service: books
//! and verses with parallel-language text, transliterations, notes and
//! cross-references, served read-only over JSON.
//!
//! ## Features
//!
//! - **Browse**: list books, read a chapter, read a verse
//! - **Search**: free-text search in one language, narrowed by book or testament
//! - **Cross-References**: expand a verse's citations into the cited verses
//! - **Daily Verse**: a random verse per request
//! - **Seeding**: built-in sample data for empty stores
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verbum_rest::{create_app_with_config, seed, ServerConfig};
//! use verbum_persistence::backends::memory::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::new();
//!     seed::initialize_data(&store).await?;
//!
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(store, config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | root | GET | `/api/` |
//! | list books | GET | `/api/books` |
//! | chapter | GET | `/api/books/{book_name}/chapters/{chapter}` |
//! | verse | GET | `/api/verses/{verse_id}` |
//! | search | GET | `/api/search?q=...` |
//! | cross-references | GET | `/api/cross-references/{verse_id}` |
//! | daily verse | GET | `/api/daily-verse` |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"detail": "<message>"}`:
//!
//! | HTTP Status | Description |
//! |-------------|-------------|
//! | 400 | Invalid path or query parameter |
//! | 404 | Verse not found |
//! | 408 | Request timed out |
//! | 500 | Storage failure |
//! | 503 | Storage unreachable (readiness) |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and the JSON error body
//! - [`config`] - Server configuration
//! - [`state`] - Application state (service, configuration)
//! - [`models`] - Books, verses and response shapes
//! - [`references`] - Citation parsing
//! - [`query`] - Search filter construction
//! - [`service`] - Retrieval operations
//! - [`seed`] - Built-in sample data
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Parameter extractors
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod query;
pub mod references;
pub mod routing;
pub mod seed;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use service::{ScriptureService, SearchRequest};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use verbum_persistence::core::DocumentStore;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up every route, the tracing and timeout middleware and,
/// when enabled, CORS.
///
/// # Arguments
///
/// * `storage` - The storage backend to use
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust,ignore
/// use verbum_rest::{create_app_with_config, ServerConfig};
/// use verbum_persistence::backends::memory::MemoryStore;
///
/// let config = ServerConfig {
///     api_prefix: "/v1".to_string(),
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryStore::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_shared(Arc::new(storage), config)
}

/// Creates the Axum application over a store the caller keeps a handle to.
pub fn create_app_with_shared<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    info!(
        backend = storage.backend_name(),
        text_match = storage.text_matcher().name(),
        prefix = %config.normalized_api_prefix(),
        "Creating REST API server"
    );

    // Create application state
    let state = AppState::new(storage, config.clone());

    // Build the router with all API routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// the level.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "verbum={level},verbum_rest={level},verbum_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
