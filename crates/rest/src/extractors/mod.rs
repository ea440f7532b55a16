//! Axum extractors for request parameters.
//!
//! - [`ApiPath`] - Path parameters with `{"detail"}` rejections
//! - [`ApiQuery`] - Query parameters with `{"detail"}` rejections

mod params;

pub use params::{ApiPath, ApiQuery};
