//! Core document store trait.
//!
//! This module defines the [`DocumentStore`] trait: a small collection-based
//! document store offering bulk insert, filtered find with projection,
//! counting, skip/limit pagination and random sampling.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::TextMatcher;
use crate::error::StorageResult;
use crate::types::{Filter, FindOptions, Projection};

/// Collection-based document storage.
///
/// Documents are JSON objects. Every inserted document receives a
/// store-generated surrogate key under [`SURROGATE_KEY`](crate::types::SURROGATE_KEY);
/// callers that must not expose it use
/// [`Projection::without_surrogate_key`].
///
/// "Native order" is insertion order within a collection. Backends return
/// documents in native order unless the operation says otherwise.
///
/// # Example
///
/// ```ignore
/// use verbum_persistence::core::DocumentStore;
/// use verbum_persistence::types::{Filter, FindOptions, Projection};
///
/// async fn genesis_one<S: DocumentStore>(store: &S) -> StorageResult<Vec<Value>> {
///     let filter = Filter::new().eq("book", "Genesis").eq("chapter", 1);
///     let options = FindOptions::new()
///         .limit(1000)
///         .projection(Projection::without_surrogate_key());
///     store.find("verses", &filter, &options).await
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns the text matcher used to evaluate [`Condition::Matches`](crate::types::Condition::Matches).
    fn text_matcher(&self) -> &dyn TextMatcher;

    /// Appends documents to a collection, in order.
    ///
    /// # Returns
    ///
    /// The number of documents inserted.
    ///
    /// # Errors
    ///
    /// * `StorageError::Document(NotAnObject)` - If any document is not a JSON object
    async fn insert_many(&self, collection: &str, documents: Vec<Value>) -> StorageResult<usize>;

    /// Finds documents matching `filter`.
    ///
    /// Results are in native order, with `options.skip` documents skipped,
    /// at most `options.limit` returned and `options.projection` applied.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: &FindOptions,
    ) -> StorageResult<Vec<Value>>;

    /// Finds the first document matching `filter` in native order.
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
        projection: &Projection,
    ) -> StorageResult<Option<Value>> {
        let options = FindOptions::new().limit(1).projection(projection.clone());
        Ok(self
            .find(collection, filter, &options)
            .await?
            .into_iter()
            .next())
    }

    /// Counts documents matching `filter`, ignoring any pagination.
    async fn count(&self, collection: &str, filter: &Filter) -> StorageResult<u64>;

    /// Returns up to `size` documents chosen uniformly at random.
    async fn sample(
        &self,
        collection: &str,
        size: usize,
        projection: &Projection,
    ) -> StorageResult<Vec<Value>>;

    /// Verifies that the store is reachable.
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}
