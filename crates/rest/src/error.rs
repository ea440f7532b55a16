//! Error types for the scripture REST API.
//!
//! Every error is rendered as a JSON body of the form
//! `{"detail": "<message>"}` with a matching HTTP status code.
//!
//! # Error Mapping
//!
//! | Source | HTTP Status | Detail |
//! |--------|-------------|--------|
//! | Missing verse | 404 | `Verse not found` |
//! | Rejected path/query parameter | 400 | extractor message |
//! | Storage failure | 500 | `Internal server error` |
//! | Failed readiness check | 503 | `Service unavailable` |

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::{error, warn};
use verbum_persistence::error::StorageError;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Entity not found (HTTP 404).
    NotFound {
        /// The kind of entity (e.g., "Verse").
        resource: String,
        /// The requested identifier, if any.
        id: Option<String>,
    },

    /// Bad request - invalid path or query parameter (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    ///
    /// The message is logged but never sent to the client.
    InternalError {
        /// Error message.
        message: String,
    },

    /// Storage is not reachable (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// A missing verse identified by `id`.
    pub fn verse_not_found(id: impl Into<String>) -> Self {
        RestError::NotFound {
            resource: "Verse".to_string(),
            id: Some(id.into()),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Returns the message sent to the client.
    pub fn detail(&self) -> String {
        match self {
            RestError::NotFound { resource, .. } => format!("{} not found", resource),
            RestError::BadRequest { message } => message.clone(),
            RestError::InternalError { .. } => "Internal server error".to_string(),
            RestError::ServiceUnavailable { .. } => "Service unavailable".to_string(),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound {
                resource,
                id: Some(id),
            } => write!(f, "{} not found: {}", resource, id),
            RestError::NotFound { resource, id: None } => write!(f, "{} not found", resource),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match &self {
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed");
            }
            RestError::ServiceUnavailable { message } => {
                warn!(error = %message, "Storage unavailable");
            }
            _ => {}
        }

        let body = create_error_body(&self.detail());
        (self.status_code(), Json(body)).into_response()
    }
}

/// Creates the JSON error body.
fn create_error_body(detail: &str) -> serde_json::Value {
    serde_json::json!({ "detail": detail })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        RestError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
