//! Core storage traits and abstractions.
//!
//! - [`DocumentStore`] - collection-based document storage
//! - [`TextMatcher`] - pluggable free-text matching used by filters
//! - [`BackendKind`] - backend identification for configuration
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use verbum_persistence::core::{DocumentStore, SubstringMatcher, TextMatcher};
//! use verbum_persistence::types::{Filter, FindOptions, Projection};
//! use verbum_persistence::error::StorageResult;
//!
//! struct MyStore;
//!
//! #[async_trait]
//! impl DocumentStore for MyStore {
//!     fn backend_name(&self) -> &'static str {
//!         "my-store"
//!     }
//!
//!     fn text_matcher(&self) -> &dyn TextMatcher {
//!         &SubstringMatcher
//!     }
//!
//!     // ... implement insert_many, find, count and sample
//! }
//! ```

pub mod backend;
pub mod matcher;
pub mod store;

pub use backend::BackendKind;
pub use matcher::{RegexMatcher, SubstringMatcher, TextMatchMode, TextMatcher};
pub use store::DocumentStore;
