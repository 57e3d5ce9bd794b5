//! In-memory backend tests
//!
//! Runs the conformance suite against `MemoryStore`.

#[cfg(test)]
mod tests {
    use ingest_tracker::{MemoryStore, TrackerStore};
    use std::sync::Arc;

    async fn memory_store() -> Arc<dyn TrackerStore> {
        Arc::new(MemoryStore::new())
    }

    crate::conformance_suite!(memory_store());

    #[tokio::test]
    async fn test_backend_name() {
        assert_eq!(memory_store().await.backend_name(), "memory");
    }

    /// Log IDs keep increasing after a purge
    #[tokio::test]
    async fn test_log_ids_not_reused() {
        let store = memory_store().await;
        store.create_batch("u1", "b1").await.unwrap();
        store.add_file("b1", "f1", "a", "/a").await.unwrap();

        let status = ingest_tracker::ProcessStatus::Processing;
        let log_type = ingest_tracker::LogType::Info;
        store.log_file_status("f1", status, "", log_type).await.unwrap();
        let first = store.get_file_logs("f1").await.unwrap()[0].log_id;

        store.delete_file_logs("f1").await.unwrap();
        store.log_file_status("f1", status, "", log_type).await.unwrap();
        let second = store.get_file_logs("f1").await.unwrap()[0].log_id;
        assert!(second > first);
    }
}
