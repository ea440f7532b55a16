//! Verbum Persistence Layer
//!
//! This crate provides a small collection-based document store used by the
//! Verbum scripture service. Documents are JSON objects grouped into named
//! collections; callers query them with equality, membership and free-text
//! conditions over dotted field paths.
//!
//! # Features
//!
//! - **Pluggable Backends**: process-local memory (always available) and SQLite
//! - **Pluggable Text Matching**: case-insensitive substring or regex
//! - **Projection**: hide the store-generated surrogate key or select fields
//! - **Sampling**: uniformly random documents from a collection
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! verbum-persistence = { version = "0.1", features = ["sqlite"] }
//! ```
//!
//! # Architecture
//!
//! - [`types`] - Filters, find options and projections
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`DocumentStore`] trait and text matchers
//! - [`backends`] - Backend implementations (memory, SQLite)
//!
//! # Quick Start
//!
//! ```
//! use verbum_persistence::backends::memory::MemoryStore;
//! use verbum_persistence::core::DocumentStore;
//! use verbum_persistence::types::{Filter, FindOptions, Projection};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let store = MemoryStore::new();
//! store
//!     .insert_many("books", vec![json!({"id": "gen", "testament": "old"})])
//!     .await
//!     .unwrap();
//!
//! let filter = Filter::new().eq("testament", "old");
//! let options = FindOptions::new().projection(Projection::without_surrogate_key());
//! let books = store.find("books", &filter, &options).await.unwrap();
//! assert_eq!(books, vec![json!({"id": "gen", "testament": "old"})]);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Filter, FindOptions, Projection};

// Re-export core traits
pub use core::{BackendKind, DocumentStore, TextMatchMode, TextMatcher};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
