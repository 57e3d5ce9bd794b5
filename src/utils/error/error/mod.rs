//! Error handling for the tracker
//!
//! This module defines all error types used throughout the store layer.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod kind;
mod types;

pub use kind::{ErrorDetail, ErrorKind};
pub use types::{Result, TrackerError};
