//! Test infrastructure for the REST API.

#![allow(dead_code)]

pub mod harness;

pub use harness::*;
