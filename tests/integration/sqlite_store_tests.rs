//! SQLite backend tests
//!
//! Runs the conformance suite against the SeaORM backend on in-memory
//! SQLite, plus persistence checks on a file database.

#[cfg(test)]
mod tests {
    use crate::common::database::{TestDatabase, sqlite_store};
    use ingest_tracker::config::builder::presets;
    use ingest_tracker::storage::{self, StoreBackend};
    use ingest_tracker::{LogType, ProcessStatus, TrackerStore};
    use tempfile::TempDir;

    crate::conformance_suite!(sqlite_store());

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
        assert_eq!(db.db().backend_name(), "sqlite");
    }

    /// Data survives closing and reopening a file database
    #[tokio::test]
    async fn test_file_database_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tracker.db");
        let config = presets::sqlite_file(path.to_str().unwrap()).build().unwrap();

        let store = storage::connect(config.storage()).await.unwrap();
        store.create_batch("u1", "b1").await.unwrap();
        store.add_file("b1", "f1", "a.csv", "/in/a.csv").await.unwrap();
        store
            .log_file_status("f1", ProcessStatus::Completed, "done", LogType::Success)
            .await
            .unwrap();
        store.close().await.unwrap();

        assert!(path.exists());

        let reopened = storage::connect(config.storage()).await.unwrap();
        let logs = reopened.get_file_logs("f1").await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].description, "done");
        assert_eq!(
            reopened.get_file("f1").await.unwrap().status,
            ProcessStatus::Completed
        );
        reopened.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_backend_enum_dispatches_to_database() {
        let config = presets::sqlite_in_memory().build().unwrap();
        let backend = StoreBackend::new(config.storage()).await.unwrap();

        assert!(matches!(backend, StoreBackend::Database(_)));
        assert_eq!(backend.backend_name(), "sqlite");
        backend.create_batch("u1", "b1").await.unwrap();
        assert_eq!(backend.stats().await.unwrap().batches, 1);
    }

    #[tokio::test]
    async fn test_missing_schema_is_reported() {
        let config = presets::sqlite_in_memory()
            .auto_migrate(false)
            .build()
            .unwrap();
        let store = storage::connect(config.storage()).await.unwrap();

        // No tables without migrations
        assert!(store.create_batch("u1", "b1").await.is_err());
    }
}
