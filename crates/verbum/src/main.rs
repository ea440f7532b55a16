//! Verbum scripture server.
//!
//! Serves books, verses, search, cross-references and a daily verse over
//! HTTP from an in-memory or SQLite store.

use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use verbum_persistence::DocumentStore;
use verbum_persistence::backends::memory::MemoryStore;
use verbum_persistence::core::{BackendKind, TextMatcher};
use verbum_rest::{ServerConfig, create_app_with_shared, init_logging, seed};

#[cfg(feature = "sqlite")]
use verbum_persistence::backends::sqlite::{SqliteStore, SqliteStoreConfig};

/// Database file used when no `--database-url` is given.
#[cfg(feature = "sqlite")]
const DEFAULT_DATABASE: &str = "verbum.db";

/// Creates and initializes a SQLite store from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_store(
    config: &ServerConfig,
    matcher: Arc<dyn TextMatcher>,
) -> anyhow::Result<SqliteStore> {
    let db_path = config.database_url.as_deref().unwrap_or(DEFAULT_DATABASE);
    info!(database = %db_path, "Initializing SQLite store");

    let store = SqliteStore::with_matcher(db_path, SqliteStoreConfig::default(), matcher)?;
    store.init_schema()?;

    Ok(store)
}

/// Waits for Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server");
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Seeds the store if configured, then serves it.
async fn start<S>(store: S, config: ServerConfig) -> anyhow::Result<()>
where
    S: DocumentStore + 'static,
{
    if config.seed_on_startup {
        let report = seed::initialize_data(&store).await?;
        info!(
            books = report.books_inserted,
            verses = report.verses_inserted,
            "Seeding complete"
        );
    }

    let app = create_app_with_shared(Arc::new(store), config.clone());
    serve(app, &config).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_kind = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;
    let text_match = config
        .text_match_mode()
        .map_err(|e| anyhow::anyhow!("Invalid text match configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_kind,
        text_match = %text_match,
        "Starting Verbum scripture server"
    );

    match backend_kind {
        BackendKind::Memory => {
            let store = MemoryStore::with_matcher(text_match.matcher());
            start(store, config).await?;
        }
        BackendKind::Sqlite => {
            start_sqlite(config, text_match.matcher()).await?;
        }
    }

    Ok(())
}

/// Starts the server with the SQLite store.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig, matcher: Arc<dyn TextMatcher>) -> anyhow::Result<()> {
    let store = create_sqlite_store(&config, matcher)?;
    start(store, config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig, _matcher: Arc<dyn TextMatcher>) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p verbum --features sqlite"
    )
}
