//! SQLite backend implementation.
//!
//! Supports both in-memory databases (useful for tests) and file-based
//! databases. All collections share a single `documents` table holding the
//! JSON body of each document; filters compile to `json_extract` predicates.
//! Free-text conditions call a `text_matches` SQL function that every pooled
//! connection registers from the store's [`TextMatcher`](crate::core::TextMatcher).
//!
//! # Example
//!
//! ```no_run
//! use verbum_persistence::backends::sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::open("./data/verbum.db")?;
//! store.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE documents (
//!     seq INTEGER PRIMARY KEY AUTOINCREMENT,
//!     collection TEXT NOT NULL,
//!     surrogate_id TEXT NOT NULL UNIQUE,
//!     data TEXT NOT NULL  -- JSON data
//! );
//! ```

mod backend;
mod query;
mod schema;
mod storage;

pub use backend::{SqliteStore, SqliteStoreConfig};
pub use schema::SCHEMA_VERSION;
