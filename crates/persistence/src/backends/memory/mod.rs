//! In-memory backend implementation.
//!
//! Collections are vectors of JSON documents kept in insertion order behind
//! a read/write lock. Filters are evaluated document by document with the
//! store's [`TextMatcher`](crate::core::TextMatcher). Nothing is persisted;
//! the data lives as long as the process.
//!
//! # Example
//!
//! ```
//! use verbum_persistence::backends::memory::MemoryStore;
//! use verbum_persistence::core::DocumentStore;
//!
//! let store = MemoryStore::new();
//! assert_eq!(store.backend_name(), "memory");
//! ```

mod store;

pub use store::MemoryStore;
