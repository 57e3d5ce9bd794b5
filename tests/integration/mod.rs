//! Integration tests for ingest-tracker
//!
//! These tests run the public store contract against real backends
//! without mocking.

pub mod config_tests;
pub mod memory_store_tests;
pub mod sqlite_store_tests;
