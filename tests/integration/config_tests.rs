//! Configuration integration tests
//!
//! Loads configuration files from disk and checks validation across
//! all config components.

#[cfg(test)]
mod tests {
    use ingest_tracker::config::models::{
        DatabaseConfig, LogFormat, LoggingConfig, StorageConfig, StoreBackendKind,
    };
    use ingest_tracker::config::{Config, ConfigBuilder, Validate};
    use ingest_tracker::storage;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// A memory config file yields a working store
    #[tokio::test]
    async fn test_memory_config_file_connects() {
        let file = write_config("storage:\n  backend: memory\n");
        let config = Config::from_file(file.path()).await.unwrap();

        let store = storage::connect(config.storage()).await.unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_invalid_backend_name_rejected() {
        let file = write_config("storage:\n  backend: redis\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_log_level_rejected() {
        let file = write_config("logging:\n  level: loud\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Logging config error"));
    }

    #[test]
    fn test_memory_backend_ignores_database_settings() {
        let config = StorageConfig {
            backend: StoreBackendKind::Memory,
            auto_migrate: false,
            database: DatabaseConfig {
                url: "not-a-url".to_string(),
                max_connections: 0,
                connection_timeout: 0,
            },
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_backend_checks_pool_size() {
        let mut config = StorageConfig::default();
        config.database.max_connections = 0;

        let result = config.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_round_trip_through_yaml() {
        let config = ConfigBuilder::new()
            .database("postgres://tracker@db/tracker")
            .max_connections(20)
            .log_format(LogFormat::Json)
            .build()
            .unwrap();

        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.storage().database.url, "postgres://tracker@db/tracker");
        assert_eq!(parsed.storage().database.max_connections, 20);
        assert_eq!(parsed.logging().format, LogFormat::Json);
    }

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Text);
        assert!(logging.validate().is_ok());
    }
}
