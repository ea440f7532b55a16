//! Application state for the scripture REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the retrieval service (which owns the store handle) and
//! the server configuration.

use std::sync::Arc;

use verbum_persistence::core::DocumentStore;

use crate::config::ServerConfig;
use crate::service::{PageLimits, ScriptureService};

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`DocumentStore`])
///
/// # Example
///
/// ```rust,ignore
/// use verbum_rest::{AppState, ServerConfig};
/// use verbum_persistence::backends::memory::MemoryStore;
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The retrieval service.
    service: ScriptureService<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    ///
    /// # Arguments
    ///
    /// * `storage` - The storage backend (wrapped in Arc)
    /// * `config` - Server configuration
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        let limits = PageLimits {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        };
        Self {
            service: ScriptureService::new(storage, limits),
            config: Arc::new(config),
        }
    }

    /// Returns the retrieval service.
    pub fn service(&self) -> &ScriptureService<S> {
        &self.service
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        self.service.store()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verbum_persistence::backends::memory::MemoryStore;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
        assert_eq!(state.storage().backend_name(), "memory");
        assert_eq!(state.config().api_prefix, "/api");
    }

    #[test]
    fn test_app_state_page_limits() {
        let config = ServerConfig {
            default_page_size: 50,
            max_page_size: 500,
            ..Default::default()
        };
        let state = AppState::new(Arc::new(MemoryStore::new()), config);

        let limits = state.service().limits();
        assert_eq!(limits.default_page_size, 50);
        assert_eq!(limits.max_page_size, 500);
    }

    #[test]
    fn test_app_state_clone() {
        let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.storage(), cloned.storage()));
    }
}
