//! Error handling utilities
//!
//! This module provides the store error taxonomy and backend fault translation.

pub mod error;

// Re-export commonly used types
pub use error::*;
