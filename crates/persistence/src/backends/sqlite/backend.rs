//! SQLite backend implementation.

use std::fmt::Debug;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Arc;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use serde::{Deserialize, Serialize};

use crate::core::{SubstringMatcher, TextMatcher};
use crate::error::{BackendError, StorageError, StorageResult};

use super::query::TEXT_MATCH_FN;
use super::schema;

/// SQLite backend for document storage.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteStoreConfig,
    is_memory: bool,
    matcher: Arc<dyn TextMatcher>,
}

impl Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .field("matcher", &self.matcher.name())
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteStoreConfig {
    /// Maximum number of connections in the pool.
    ///
    /// In-memory databases always use a single connection.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,

    /// Enable WAL mode for better concurrency.
    #[serde(default = "default_true")]
    pub enable_wal: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
        }
    }
}

fn internal(message: String, e: rusqlite::Error) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: Some(Box::new(e)),
    })
}

/// Registers the text matching SQL function on a connection.
fn register_text_matcher(
    conn: &Connection,
    matcher: Arc<dyn TextMatcher>,
) -> Result<(), rusqlite::Error> {
    let matcher = AssertUnwindSafe(matcher);
    conn.create_scalar_function(
        TEXT_MATCH_FN,
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        move |ctx| {
            let matcher = &matcher;
            let text = match ctx.get_raw(0) {
                ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                _ => return Ok(false),
            };
            let query: String = ctx.get(1)?;
            Ok(matcher.0.matches(&text, &query))
        },
    )
}

impl SqliteStore {
    /// Creates a new in-memory SQLite store.
    pub fn in_memory() -> StorageResult<Self> {
        Self::with_config(":memory:", SqliteStoreConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::with_config(path, SqliteStoreConfig::default())
    }

    /// Creates a store with custom configuration and substring matching.
    pub fn with_config<P: AsRef<Path>>(path: P, config: SqliteStoreConfig) -> StorageResult<Self> {
        Self::with_matcher(path, config, Arc::new(SubstringMatcher))
    }

    /// Creates a store with custom configuration and text matcher.
    pub fn with_matcher<P: AsRef<Path>>(
        path: P,
        config: SqliteStoreConfig,
        matcher: Arc<dyn TextMatcher>,
    ) -> StorageResult<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let is_memory = path_str == ":memory:";

        let init_matcher = Arc::clone(&matcher);
        let busy_timeout = std::time::Duration::from_millis(u64::from(config.busy_timeout_ms));
        let manager = SqliteConnectionManager::file(path.as_ref()).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            register_text_matcher(conn, Arc::clone(&init_matcher))
        });

        // Every connection to ":memory:" is a separate database.
        let max_size = if is_memory { 1 } else { config.max_connections.max(1) };

        let pool = Pool::builder()
            .max_size(max_size)
            .min_idle(Some(config.min_connections.min(max_size)))
            .connection_timeout(std::time::Duration::from_millis(
                config.connection_timeout_ms,
            ))
            .build(manager)
            .map_err(|e| {
                StorageError::Backend(BackendError::ConnectionFailed {
                    backend_name: "sqlite".to_string(),
                    message: e.to_string(),
                })
            })?;

        let store = Self {
            pool,
            config,
            is_memory,
            matcher,
        };

        store.configure_connection()?;

        tracing::info!(
            path = %path_str,
            matcher = store.matcher.name(),
            "Opened SQLite document store"
        );

        Ok(store)
    }

    /// Initialize the database schema.
    pub fn init_schema(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Get a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })
        })
    }

    /// Configure database-wide settings.
    fn configure_connection(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;

        if self.config.enable_wal && !self.is_memory {
            // journal_mode returns a row, so it must be queried rather than executed.
            conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
                .map_err(|e| internal("Failed to enable WAL mode".to_string(), e))?;
        }

        Ok(())
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &SqliteStoreConfig {
        &self.config
    }

    pub(crate) fn matcher(&self) -> &dyn TextMatcher {
        self.matcher.as_ref()
    }
}
