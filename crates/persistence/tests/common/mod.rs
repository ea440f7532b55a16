//! Test infrastructure for the persistence layer.
//!
//! Shared fixtures plus the behavioral checks run against every backend.

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
