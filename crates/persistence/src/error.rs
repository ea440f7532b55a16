//! Error types for the persistence layer.
//!
//! Storage errors are split into two categories: failures of the backend
//! itself (connection, query execution, serialization) and problems with the
//! documents handed to the store.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Document shape errors
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Errors related to the documents stored in a collection.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// A document is not a JSON object.
    #[error("document in '{collection}' must be a JSON object")]
    NotAnObject { collection: String },

    /// A stored document could not be mapped onto the requested type.
    #[error("malformed document in '{collection}': {message}")]
    Malformed { collection: String, message: String },
}

impl StorageError {
    /// Returns true if the error means the store could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Backend(
                BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. }
            )
        )
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
