//! Core types for querying the document store.
//!
//! - [`Filter`] / [`Condition`] - field conditions combined with AND
//! - [`FindOptions`] / [`Projection`] - pagination and field selection

mod filter;
mod options;

pub use filter::{Condition, Filter, lookup_path};
pub use options::{FindOptions, Projection, SURROGATE_KEY};
