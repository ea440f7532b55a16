//! HTTP request handlers.
//!
//! - [`root`] - API root message
//! - [`books`] - List books and read chapters
//! - [`verses`] - Read a verse and the daily verse
//! - [`search`] - Verse search
//! - [`cross_references`] - Cross-reference expansion
//! - [`health`] - Health, liveness and readiness endpoints

pub mod books;
pub mod cross_references;
pub mod health;
pub mod root;
pub mod search;
pub mod verses;

// Re-export handlers for convenience
pub use books::{chapter_handler, list_books_handler};
pub use cross_references::cross_references_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use root::{ROOT_MESSAGE, root_handler};
pub use search::search_handler;
pub use verses::{daily_verse_handler, verse_handler};
