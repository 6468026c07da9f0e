//! Integration test utilities for the LFG API
//!
//! This crate provides helpers for running end-to-end tests against a
//! spawned server backed by a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
