//! Built-in sample data.
//!
//! On startup each collection that is still empty receives the sample books
//! and verses embedded from `data/seed.json`. Collections that already hold
//! documents are left untouched, so seeding any number of times never
//! duplicates data.

use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use verbum_persistence::core::DocumentStore;
use verbum_persistence::error::{BackendError, StorageError, StorageResult};
use verbum_persistence::types::Filter;

use crate::models::{BOOKS_COLLECTION, VERSES_COLLECTION};

const SEED_DATA: &str = include_str!("../data/seed.json");

#[derive(Debug, Deserialize)]
struct SeedData {
    books: Vec<Value>,
    verses: Vec<Value>,
}

/// What [`initialize_data`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Books inserted (0 if the collection was already populated).
    pub books_inserted: usize,
    /// Verses inserted (0 if the collection was already populated).
    pub verses_inserted: usize,
}

fn load_seed_data() -> StorageResult<SeedData> {
    serde_json::from_str(SEED_DATA).map_err(|e| {
        StorageError::Backend(BackendError::SerializationError {
            message: format!("invalid built-in seed data: {}", e),
        })
    })
}

/// Seeds the `books` and `verses` collections if they are empty.
///
/// Concurrent cold starts against a shared store are not coordinated.
pub async fn initialize_data<S>(store: &S) -> StorageResult<SeedReport>
where
    S: DocumentStore + ?Sized,
{
    let data = load_seed_data()?;

    let books_inserted = seed_collection(store, BOOKS_COLLECTION, data.books).await?;
    let verses_inserted = seed_collection(store, VERSES_COLLECTION, data.verses).await?;

    Ok(SeedReport {
        books_inserted,
        verses_inserted,
    })
}

async fn seed_collection<S>(
    store: &S,
    collection: &str,
    documents: Vec<Value>,
) -> StorageResult<usize>
where
    S: DocumentStore + ?Sized,
{
    let existing = store.count(collection, &Filter::new()).await?;
    if existing > 0 {
        info!(collection, existing, "Collection already populated, skipping seed");
        return Ok(0);
    }

    let inserted = store.insert_many(collection, documents).await?;
    info!(collection, inserted, "Sample data inserted");
    Ok(inserted)
}
