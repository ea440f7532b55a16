//! DocumentStore implementation for in-memory collections.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rand::seq::SliceRandom;
use serde_json::Value;

use crate::core::{DocumentStore, SubstringMatcher, TextMatcher};
use crate::error::{DocumentError, StorageResult};
use crate::types::{Filter, FindOptions, Projection, SURROGATE_KEY};

/// Process-local document store.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
    matcher: Arc<dyn TextMatcher>,
}

impl Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let collections = self.collections.read();
        f.debug_struct("MemoryStore")
            .field("collections", &collections.keys().collect::<Vec<_>>())
            .field("matcher", &self.matcher.name())
            .finish()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store using case-insensitive substring matching.
    pub fn new() -> Self {
        Self::with_matcher(Arc::new(SubstringMatcher))
    }

    /// Creates an empty store using the given text matcher.
    pub fn with_matcher(matcher: Arc<dyn TextMatcher>) -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            matcher,
        }
    }

    /// Returns the number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Returns true if the collection holds no documents.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn matching<'a>(&self, documents: &'a [Value], filter: &'a Filter) -> impl Iterator<Item = &'a Value> + 'a {
        let matcher = Arc::clone(&self.matcher);
        documents
            .iter()
            .filter(move |doc| filter.evaluate(doc, matcher.as_ref()))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn text_matcher(&self) -> &dyn TextMatcher {
        self.matcher.as_ref()
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Value>) -> StorageResult<usize> {
        let mut prepared = Vec::with_capacity(documents.len());
        for mut document in documents {
            let Some(obj) = document.as_object_mut() else {
                return Err(DocumentError::NotAnObject {
                    collection: collection.to_string(),
                }
                .into());
            };
            obj.insert(
                SURROGATE_KEY.to_string(),
                Value::String(uuid::Uuid::new_v4().to_string()),
            );
            prepared.push(document);
        }

        let inserted = prepared.len();
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .extend(prepared);

        tracing::debug!(collection, inserted, "Inserted documents");
        Ok(inserted)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: &FindOptions,
    ) -> StorageResult<Vec<Value>> {
        let collections = self.collections.read();
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let limit = options.limit.unwrap_or(usize::MAX);
        Ok(self
            .matching(documents, filter)
            .skip(options.skip)
            .take(limit)
            .map(|doc| options.projection.apply(doc.clone()))
            .collect())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> StorageResult<u64> {
        let collections = self.collections.read();
        Ok(collections
            .get(collection)
            .map(|documents| self.matching(documents, filter).count() as u64)
            .unwrap_or(0))
    }

    async fn sample(
        &self,
        collection: &str,
        size: usize,
        projection: &Projection,
    ) -> StorageResult<Vec<Value>> {
        let collections = self.collections.read();
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut rng = rand::thread_rng();
        Ok(documents
            .choose_multiple(&mut rng, size)
            .map(|doc| projection.apply(doc.clone()))
            .collect())
    }
}
