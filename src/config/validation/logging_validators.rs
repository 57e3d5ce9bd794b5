//! Logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Unsupported log level: {}. Supported levels: {:?}",
                self.level, LOG_LEVELS
            ));
        }
        Ok(())
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<(), String> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
