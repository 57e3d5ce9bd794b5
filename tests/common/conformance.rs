//! Backend conformance harness
//!
//! Every check takes a fresh, empty store and exercises the behavior all
//! backends share. Backend test modules instantiate the whole suite with
//! `conformance_suite!`.

use super::fixtures::BatchFixture;
use crate::assert_store_err;
use futures::future::join_all;
use ingest_tracker::{
    LogSubject, LogType, ProcessStatus, StoreStats, TrackerError, TrackerStore,
};
use std::sync::Arc;

pub type Store = Arc<dyn TrackerStore>;

pub async fn create_then_get(store: Store) {
    let created = store.create_batch("u1", "b1").await.unwrap();
    assert_eq!(created.status, ProcessStatus::Pending);
    assert_eq!(created.file_count, 0);
    assert_eq!(created.user_id, "u1");

    let fetched = store.get_batch("u1", "b1").await.unwrap();
    assert_eq!(fetched.batch_id, "b1");
    assert_eq!(fetched.status, ProcessStatus::Pending);
    assert_eq!(fetched.created_at, fetched.updated_at);

    let file = store.add_file("b1", "f1", "a.csv", "/in/a.csv").await.unwrap();
    assert_eq!(file.status, ProcessStatus::Pending);

    let fetched = store.get_file("f1").await.unwrap();
    assert_eq!(fetched.batch_id, "b1");
    assert_eq!(fetched.file_name, "a.csv");
    assert_eq!(fetched.file_path, "/in/a.csv");
}

pub async fn duplicate_batch_rejected_across_tenants(store: Store) {
    store.create_batch("u1", "b1").await.unwrap();

    assert_store_err!(store.create_batch("u1", "b1").await, TrackerError::DuplicateKey(_));
    assert_store_err!(store.create_batch("u2", "b1").await, TrackerError::DuplicateKey(_));

    // The original owner is unchanged
    assert_eq!(store.get_batch("u1", "b1").await.unwrap().user_id, "u1");
    assert!(store.get_user_batches("u2").await.unwrap().is_empty());
}

pub async fn add_file_requires_batch(store: Store) {
    assert_store_err!(
        store.add_file("missing", "f1", "a.csv", "/in/a.csv").await,
        TrackerError::NotFound(_)
    );
    assert_store_err!(store.get_file("f1").await, TrackerError::NotFound(_));
}

pub async fn duplicate_file_rejected(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 0).await;
    BatchFixture::seed(store.as_ref(), "u1", "b2", 0).await;
    store.add_file("b1", "f1", "a.csv", "/in/a.csv").await.unwrap();

    assert_store_err!(
        store.add_file("b2", "f1", "other.csv", "/in/other.csv").await,
        TrackerError::DuplicateKey(_)
    );
    assert_eq!(store.get_file("f1").await.unwrap().batch_id, "b1");
    assert!(store.get_batch_files("u1", "b2").await.unwrap().is_empty());
}

pub async fn files_listed_once_in_insertion_order(store: Store) {
    let fixture = BatchFixture::seed(store.as_ref(), "u1", "b1", 5).await;

    let files = store.get_batch_files("u1", "b1").await.unwrap();
    let ids: Vec<_> = files.iter().map(|f| f.file_id.clone()).collect();
    assert_eq!(ids, fixture.file_ids);

    // Status updates do not reorder
    store
        .log_file_status(&fixture.file_ids[0], ProcessStatus::Completed, "", LogType::Success)
        .await
        .unwrap();
    let files = store.get_batch_files("u1", "b1").await.unwrap();
    assert_eq!(files.len(), 5);
    assert_eq!(files[0].file_id, fixture.file_ids[0]);
    assert_eq!(files[0].status, ProcessStatus::Completed);
}

pub async fn user_batches_in_creation_order(store: Store) {
    for id in ["b3", "b1", "b2"] {
        store.create_batch("u1", id).await.unwrap();
    }
    store.create_batch("u2", "other").await.unwrap();

    let ids: Vec<_> = store
        .get_user_batches("u1")
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.batch_id)
        .collect();
    assert_eq!(ids, ["b3", "b1", "b2"]);
    assert!(store.get_user_batches("nobody").await.unwrap().is_empty());
}

pub async fn last_log_matches_last_status(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 1).await;
    let file_id = "b1-f0";

    assert!(store.get_file_logs(file_id).await.unwrap().is_empty());

    let steps = [
        (ProcessStatus::Processing, "started", LogType::Info),
        (ProcessStatus::Failed, "parse error", LogType::Error),
        (ProcessStatus::Processing, "retrying", LogType::Warning),
    ];
    for (status, description, log_type) in steps {
        let file = store
            .log_file_status(file_id, status, description, log_type)
            .await
            .unwrap();
        assert_eq!(file.status, status);
        assert!(file.updated_at >= file.created_at);
    }

    let logs = store.get_file_logs(file_id).await.unwrap();
    assert_eq!(logs.len(), 3);
    assert!(logs.windows(2).all(|w| w[0].log_id < w[1].log_id));
    assert!(logs.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    let last = logs.last().unwrap();
    assert_eq!(last.subject, LogSubject::File);
    assert_eq!(last.subject_id, file_id);
    assert_eq!(last.status, ProcessStatus::Processing);
    assert_eq!(last.description, "retrying");
    assert_eq!(last.log_type, LogType::Warning);
    assert_eq!(store.get_file(file_id).await.unwrap().status, last.status);
}

pub async fn batch_status_updates_file_count(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 2).await;

    // Caller-supplied count wins, even when it disagrees with the files
    let batch = store
        .log_batch_status("b1", ProcessStatus::Processing, 7)
        .await
        .unwrap();
    assert_eq!(batch.file_count, 7);
    let batch = store
        .log_batch_status("b1", ProcessStatus::Completed, 2)
        .await
        .unwrap();
    assert_eq!(batch.file_count, 2);
    assert_eq!(batch.status, ProcessStatus::Completed);

    let fetched = store.get_batch("u1", "b1").await.unwrap();
    assert_eq!(fetched.file_count, 2);
    assert_eq!(fetched.status, ProcessStatus::Completed);

    let logs = store.get_batch_logs("u1", "b1").await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].subject, LogSubject::Batch);
    assert_eq!(logs[0].log_type, LogType::Info);
    assert_eq!(logs[1].description, "Batch status changed to completed (2 files)");
}

pub async fn unknown_ids_are_not_found(store: Store) {
    assert_store_err!(store.get_batch("u1", "nope").await, TrackerError::NotFound(_));
    assert_store_err!(store.get_file("nope").await, TrackerError::NotFound(_));
    assert_store_err!(store.get_batch_files("u1", "nope").await, TrackerError::NotFound(_));
    assert_store_err!(store.get_file_logs("nope").await, TrackerError::NotFound(_));
    assert_store_err!(store.get_batch_logs("u1", "nope").await, TrackerError::NotFound(_));
    assert_store_err!(store.delete_file_logs("nope").await, TrackerError::NotFound(_));
    assert_store_err!(
        store
            .log_file_status("nope", ProcessStatus::Failed, "", LogType::Error)
            .await,
        TrackerError::NotFound(_)
    );
    assert_store_err!(
        store.log_batch_status("nope", ProcessStatus::Failed, 0).await,
        TrackerError::NotFound(_)
    );
    assert_store_err!(store.delete_batch("u1", "nope").await, TrackerError::NotFound(_));
    assert_store_err!(store.delete_file("u1", "nope", "f").await, TrackerError::NotFound(_));

    // Failed updates leave no trace
    assert_eq!(store.stats().await.unwrap().logs, 0);
}

pub async fn tenant_isolation_on_scoped_calls(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 1).await;

    assert_store_err!(store.get_batch("u2", "b1").await, TrackerError::NotFound(_));
    assert_store_err!(store.get_batch_files("u2", "b1").await, TrackerError::NotFound(_));
    assert_store_err!(store.get_batch_logs("u2", "b1").await, TrackerError::NotFound(_));
    assert_store_err!(store.delete_batch("u2", "b1").await, TrackerError::NotFound(_));
    assert_store_err!(
        store.delete_file("u2", "b1", "b1-f0").await,
        TrackerError::NotFound(_)
    );
    assert_eq!(store.delete_all("u2").await.unwrap(), 0);

    // Nothing was touched
    assert_eq!(store.get_batch_files("u1", "b1").await.unwrap().len(), 1);
    assert!(store.get_batch("u1", "b1").await.is_ok());
}

pub async fn delete_file_logs_keeps_file(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 2).await;
    for status in [ProcessStatus::Processing, ProcessStatus::Completed] {
        store
            .log_file_status("b1-f0", status, "", LogType::Info)
            .await
            .unwrap();
    }
    store
        .log_file_status("b1-f1", ProcessStatus::Processing, "", LogType::Info)
        .await
        .unwrap();

    assert_eq!(store.delete_file_logs("b1-f0").await.unwrap(), 2);
    assert_eq!(store.delete_file_logs("b1-f0").await.unwrap(), 0);

    let file = store.get_file("b1-f0").await.unwrap();
    assert_eq!(file.status, ProcessStatus::Completed);
    assert!(store.get_file_logs("b1-f0").await.unwrap().is_empty());
    assert_eq!(store.get_file_logs("b1-f1").await.unwrap().len(), 1);
}

pub async fn delete_file_checks_ownership_chain(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 2).await;
    BatchFixture::seed(store.as_ref(), "u1", "b2", 1).await;
    store
        .log_file_status("b1-f0", ProcessStatus::Processing, "", LogType::Info)
        .await
        .unwrap();

    // File exists but under another batch
    assert_store_err!(
        store.delete_file("u1", "b2", "b1-f0").await,
        TrackerError::NotFound(_)
    );
    assert!(store.get_file("b1-f0").await.is_ok());

    store.delete_file("u1", "b1", "b1-f0").await.unwrap();
    assert_store_err!(store.get_file("b1-f0").await, TrackerError::NotFound(_));
    assert_store_err!(store.get_file_logs("b1-f0").await, TrackerError::NotFound(_));

    let remaining: Vec<_> = store
        .get_batch_files("u1", "b1")
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.file_id)
        .collect();
    assert_eq!(remaining, ["b1-f1"]);

    // The ID is free again
    store.add_file("b2", "b1-f0", "again.csv", "/in/again").await.unwrap();
}

pub async fn delete_batch_cascades(store: Store) {
    let fixture = BatchFixture::seed(store.as_ref(), "u1", "b1", 3).await;
    BatchFixture::seed(store.as_ref(), "u1", "b2", 1).await;
    for file_id in &fixture.file_ids {
        store
            .log_file_status(file_id, ProcessStatus::Completed, "", LogType::Success)
            .await
            .unwrap();
    }
    store
        .log_batch_status("b1", ProcessStatus::Completed, 3)
        .await
        .unwrap();

    store.delete_batch("u1", "b1").await.unwrap();

    assert_store_err!(store.get_batch("u1", "b1").await, TrackerError::NotFound(_));
    assert_store_err!(store.get_batch_files("u1", "b1").await, TrackerError::NotFound(_));
    for file_id in &fixture.file_ids {
        assert_store_err!(store.get_file(file_id).await, TrackerError::NotFound(_));
    }

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.batches, 1);
    assert_eq!(stats.files, 1);
    assert_eq!(stats.logs, 0);

    // The batch ID can be reused afterwards
    store.create_batch("u2", "b1").await.unwrap();
}

pub async fn delete_all_isolates_tenants(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "a1", 2).await;
    BatchFixture::seed(store.as_ref(), "u1", "a2", 1).await;
    BatchFixture::seed(store.as_ref(), "u2", "c1", 2).await;
    store
        .log_file_status("c1-f0", ProcessStatus::Processing, "", LogType::Info)
        .await
        .unwrap();

    assert_eq!(store.delete_all("u1").await.unwrap(), 2);

    assert!(store.get_user_batches("u1").await.unwrap().is_empty());
    assert_store_err!(store.get_file("a1-f0").await, TrackerError::NotFound(_));

    let other = store.get_user_batches("u2").await.unwrap();
    assert_eq!(other.len(), 1);
    assert_eq!(store.get_batch_files("u2", "c1").await.unwrap().len(), 2);
    assert_eq!(store.get_file_logs("c1-f0").await.unwrap().len(), 1);
}

pub async fn delete_all_on_empty_tenant(store: Store) {
    assert_eq!(store.delete_all("ghost").await.unwrap(), 0);
    BatchFixture::seed(store.as_ref(), "u1", "b1", 1).await;
    assert_eq!(store.delete_all("u1").await.unwrap(), 1);
    assert_eq!(store.delete_all("u1").await.unwrap(), 0);
}

pub async fn example_scenario(store: Store) {
    store.create_batch("u1", "b1").await.unwrap();
    store.add_file("b1", "f1", "report.pdf", "/in/report.pdf").await.unwrap();
    store
        .log_file_status("f1", ProcessStatus::Processing, "extracting", LogType::Info)
        .await
        .unwrap();
    store
        .log_file_status("f1", ProcessStatus::Completed, "done", LogType::Success)
        .await
        .unwrap();

    let logs = store.get_file_logs("f1").await.unwrap();
    let statuses: Vec<_> = logs.iter().map(|l| l.status).collect();
    assert_eq!(statuses, [ProcessStatus::Processing, ProcessStatus::Completed]);
    assert_eq!(store.get_file("f1").await.unwrap().status, ProcessStatus::Completed);
}

pub async fn concurrent_status_updates(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 1).await;
    const WRITERS: usize = 32;

    let tasks: Vec<_> = (0..WRITERS)
        .map(|i| {
            let store = Arc::clone(&store);
            let status = if i % 2 == 0 {
                ProcessStatus::Processing
            } else {
                ProcessStatus::Completed
            };
            tokio::spawn(async move {
                store
                    .log_file_status("b1-f0", status, &format!("writer {}", i), LogType::Info)
                    .await
            })
        })
        .collect();

    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let logs = store.get_file_logs("b1-f0").await.unwrap();
    assert_eq!(logs.len(), WRITERS);
    let last = logs.last().unwrap();
    assert_eq!(store.get_file("b1-f0").await.unwrap().status, last.status);
}

pub async fn concurrent_delete_and_update(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 1).await;

    let updates: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .log_file_status("b1-f0", ProcessStatus::Processing, "", LogType::Info)
                    .await
            })
        })
        .collect();
    let delete = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.delete_file("u1", "b1", "b1-f0").await })
    };

    delete.await.unwrap().unwrap();
    for result in join_all(updates).await {
        match result.unwrap() {
            Ok(_) | Err(TrackerError::NotFound(_)) => {}
            Err(e) => panic!("Unexpected error: {}", e),
        }
    }

    // No log survives its file
    assert_store_err!(store.get_file("b1-f0").await, TrackerError::NotFound(_));
    assert_eq!(store.stats().await.unwrap().logs, 0);
}

pub async fn concurrent_create_same_batch(store: Store) {
    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.create_batch(&format!("u{}", i), "shared").await })
        })
        .collect();

    let mut created = 0;
    for result in join_all(tasks).await {
        match result.unwrap() {
            Ok(_) => created += 1,
            Err(TrackerError::DuplicateKey(_)) => {}
            Err(e) => panic!("Unexpected error: {}", e),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(store.stats().await.unwrap().batches, 1);
}

pub async fn stats_track_rows(store: Store) {
    assert_eq!(store.stats().await.unwrap(), StoreStats::default());

    let first = BatchFixture::random(store.as_ref(), "u1", 2).await;
    let second = BatchFixture::random(store.as_ref(), "u2", 1).await;
    assert_ne!(first.batch_id, second.batch_id);

    store
        .log_file_status(&first.file_ids[0], ProcessStatus::Processing, "", LogType::Info)
        .await
        .unwrap();
    store
        .log_batch_status(&first.batch_id, ProcessStatus::Processing, 2)
        .await
        .unwrap();

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.batches, 2);
    assert_eq!(stats.files, 3);
    assert_eq!(stats.logs, 2);

    // Counts span tenants and shrink with deletes
    store
        .delete_batch(&second.user_id, &second.batch_id)
        .await
        .unwrap();
    let stats = store.stats().await.unwrap();
    assert_eq!(stats.batches, 1);
    assert_eq!(stats.files, 2);
    assert_eq!(stats.logs, 2);
}

pub async fn close_is_idempotent(store: Store) {
    BatchFixture::seed(store.as_ref(), "u1", "b1", 1).await;
    assert!(store.health_check().await.is_ok());

    store.close().await.unwrap();
    store.close().await.unwrap();

    assert_store_err!(store.health_check().await, TrackerError::Closed);
    assert_store_err!(store.get_batch("u1", "b1").await, TrackerError::Closed);
    assert_store_err!(store.create_batch("u1", "b2").await, TrackerError::Closed);
    assert_store_err!(store.get_user_batches("u1").await, TrackerError::Closed);
    assert_store_err!(store.delete_all("u1").await, TrackerError::Closed);
}
