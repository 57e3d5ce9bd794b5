//! Core traits module
//!
//! Contains the abstract store interface

pub mod store;

pub use store::TrackerStore;
