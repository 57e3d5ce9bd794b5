//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `storage_validators`: Storage and database validators
//! - `logging_validators`: Logging and top-level validators
//! - `tests`: Test suite for all validators

mod logging_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
