//! Utility modules for the tracker
//!
//! - **error**: error taxonomy shared by every backend
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{ErrorDetail, ErrorKind, Result, TrackerError};
