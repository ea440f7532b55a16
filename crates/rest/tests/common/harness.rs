//! REST API test harness.
//!
//! Provides a test server over a seeded store.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use serde_json::Value;
use verbum_persistence::backends::memory::MemoryStore;
use verbum_persistence::core::DocumentStore;

use verbum_rest::{ServerConfig, create_app_with_shared, seed};

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::seeded().await;
///     let response = harness.get("/api/verses/gen-1-1").await;
///     response.assert_status_ok();
/// }
/// ```
pub struct RestTestHarness<S>
where
    S: DocumentStore + 'static,
{
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend.
    pub store: Arc<S>,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness<MemoryStore> {
    /// Creates a harness over an in-memory store holding the sample data.
    pub async fn seeded() -> Self {
        Self::seeded_with_config(ServerConfig::for_testing()).await
    }

    /// Creates a seeded in-memory harness with a custom configuration.
    pub async fn seeded_with_config(config: ServerConfig) -> Self {
        let store = MemoryStore::new();
        seed::initialize_data(&store)
            .await
            .expect("Failed to seed store");
        Self::new(store, config)
    }

    /// Creates a harness over an empty in-memory store.
    pub fn empty() -> Self {
        Self::new(MemoryStore::new(), ServerConfig::for_testing())
    }
}

impl<S> RestTestHarness<S>
where
    S: DocumentStore + 'static,
{
    /// Creates a new test harness with the given store.
    pub fn new(store: S, config: ServerConfig) -> Self {
        let store = Arc::new(store);
        let app = create_app_with_shared(Arc::clone(&store), config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            store,
            config,
        }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a GET request with query parameters.
    pub async fn get_with_query(&self, path: &str, params: &[(&str, &str)]) -> TestResponse {
        let mut request = self.server.get(path);
        for (key, value) in params {
            request = request.add_query_param(key, value);
        }
        request.await
    }
}

/// Extracts the `id` field of each verse in a JSON array.
pub fn verse_ids(verses: &Value) -> Vec<String> {
    verses
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
