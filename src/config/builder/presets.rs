//! Convenience functions for common configurations

use super::ConfigBuilder;

/// Process-local store, nothing persisted
pub fn in_memory() -> ConfigBuilder {
    ConfigBuilder::new().memory()
}

/// Private in-memory SQLite database with migrations applied on connect.
///
/// In-memory SQLite lives per connection, so the pool is limited to one.
pub fn sqlite_in_memory() -> ConfigBuilder {
    ConfigBuilder::new()
        .database("sqlite::memory:")
        .max_connections(1)
        .auto_migrate(true)
}

/// File-backed SQLite database under `path`
pub fn sqlite_file(path: &str) -> ConfigBuilder {
    ConfigBuilder::new()
        .database(format!("sqlite://{}?mode=rwc", path))
        .auto_migrate(true)
}
