//! Server configuration for the scripture REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VERBUM_SERVER_PORT` | 8080 | Server port |
//! | `VERBUM_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `VERBUM_LOG_LEVEL` | info | Log level |
//! | `VERBUM_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `VERBUM_ENABLE_CORS` | true | Enable CORS |
//! | `VERBUM_CORS_ORIGINS` | * | Allowed origins |
//! | `VERBUM_CORS_METHODS` | GET,OPTIONS | Allowed methods |
//! | `VERBUM_CORS_HEADERS` | * | Allowed headers |
//! | `VERBUM_API_PREFIX` | /api | Prefix for the scripture routes |
//! | `VERBUM_STORAGE_BACKEND` | memory | `memory` or `sqlite` |
//! | `VERBUM_DATABASE_URL` | - | SQLite database path (`:memory:` allowed) |
//! | `VERBUM_TEXT_MATCH` | substring | `substring` or `regex` |
//! | `VERBUM_SEED_ON_STARTUP` | true | Seed empty collections at startup |
//! | `VERBUM_DEFAULT_PAGE_SIZE` | 20 | Default search limit |
//! | `VERBUM_MAX_PAGE_SIZE` | 1000 | Maximum search limit |
//!
//! # Example
//!
//! ```rust
//! use verbum_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;
use verbum_persistence::core::{BackendKind, TextMatchMode};

/// Server configuration for the scripture REST API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "verbum")]
#[command(about = "Multilingual scripture lookup server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "VERBUM_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "VERBUM_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "VERBUM_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "VERBUM_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "VERBUM_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "VERBUM_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "VERBUM_CORS_METHODS", default_value = "GET,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "VERBUM_CORS_HEADERS", default_value = "*")]
    pub cors_headers: String,

    /// Path prefix for the scripture routes (empty for none).
    #[arg(long, env = "VERBUM_API_PREFIX", default_value = "/api")]
    pub api_prefix: String,

    /// Storage backend (memory, sqlite).
    #[arg(long, env = "VERBUM_STORAGE_BACKEND", default_value = "memory")]
    pub storage_backend: String,

    /// Database connection string.
    #[arg(long, env = "VERBUM_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Free-text matching mode for search (substring, regex).
    #[arg(long, env = "VERBUM_TEXT_MATCH", default_value = "substring")]
    pub text_match: String,

    /// Insert the built-in sample books and verses into empty collections.
    #[arg(long, env = "VERBUM_SEED_ON_STARTUP", default_value = "true")]
    pub seed_on_startup: bool,

    /// Default page size for search results.
    #[arg(long, env = "VERBUM_DEFAULT_PAGE_SIZE", default_value = "20")]
    pub default_page_size: usize,

    /// Maximum page size for search results.
    #[arg(long, env = "VERBUM_MAX_PAGE_SIZE", default_value = "1000")]
    pub max_page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,OPTIONS".to_string(),
            cors_headers: "*".to_string(),
            api_prefix: "/api".to_string(),
            storage_backend: "memory".to_string(),
            database_url: None,
            text_match: "substring".to_string(),
            seed_on_startup: true,
            default_page_size: 20,
            max_page_size: 1000,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["verbum"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<BackendKind, String> {
        self.storage_backend.parse()
    }

    /// Returns the configured text matching mode.
    pub fn text_match_mode(&self) -> Result<TextMatchMode, String> {
        self.text_match.parse()
    }

    /// Returns the API prefix without a trailing slash (`""` for none).
    pub fn normalized_api_prefix(&self) -> &str {
        self.api_prefix.trim_end_matches('/')
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        let prefix = self.normalized_api_prefix();
        if !prefix.is_empty() && !prefix.starts_with('/') {
            errors.push("API prefix must start with '/'".to_string());
        }
        if prefix.contains(['{', '}', '*']) {
            errors.push("API prefix cannot contain route parameters".to_string());
        }

        if let Err(e) = self.storage_backend_mode() {
            errors.push(e);
        }

        if let Err(e) = self.text_match_mode() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            api_prefix: "/api".to_string(),
            storage_backend: "memory".to_string(),
            database_url: None,
            text_match: "substring".to_string(),
            seed_on_startup: true,
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}
