//! Configuration data models
//!
//! This module defines all configuration structures used by the tracker.

#![allow(missing_docs)]

pub mod logging;
pub mod storage;
pub mod tracker;

// Re-export all configuration types
pub use logging::*;
pub use storage::*;
pub use tracker::*;

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}
