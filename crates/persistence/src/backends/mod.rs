//! Storage backend implementations.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | always | Process-local collections, nothing persisted |
//! | SQLite | `sqlite` | Embedded database, in-memory or file-based |
//!
//! # Example
//!
//! ```no_run
//! use verbum_persistence::backends::memory::MemoryStore;
//! # #[cfg(feature = "sqlite")]
//! use verbum_persistence::backends::sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let memory = MemoryStore::new();
//!
//! # #[cfg(feature = "sqlite")]
//! # {
//! let sqlite = SqliteStore::open("./data/verbum.db")?;
//! sqlite.init_schema()?;
//! # }
//! # Ok(())
//! # }
//! ```

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;
