//! Core functionality for the tracker
//!
//! This module contains the domain models and the store contract.

pub mod models;
pub mod traits;
