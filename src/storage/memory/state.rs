//! Tracker state held by the in-memory backend
//!
//! Every method runs to completion without suspending, so callers holding the
//! lock observe and produce whole operations only.

use crate::core::models::{
    BatchRecord, FileRecord, LogSubject, LogType, ProcessStatus, StatusLogEntry, StoreStats,
    batch_status_description,
};
use crate::utils::error::{Result, TrackerError};
use chrono::Utc;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(super) struct TrackerState {
    batches: HashMap<String, BatchRecord>,
    files: HashMap<String, FileRecord>,
    /// Batch IDs per tenant, creation order
    user_batches: HashMap<String, Vec<String>>,
    /// File IDs per batch, insertion order
    batch_files: HashMap<String, Vec<String>>,
    file_logs: HashMap<String, Vec<StatusLogEntry>>,
    batch_logs: HashMap<String, Vec<StatusLogEntry>>,
    next_log_id: i64,
}

impl TrackerState {
    pub(super) fn create_batch(&mut self, user_id: &str, batch_id: &str) -> Result<BatchRecord> {
        if self.batches.contains_key(batch_id) {
            return Err(TrackerError::duplicate_key(format!(
                "Batch already exists: {}",
                batch_id
            )));
        }

        let batch = BatchRecord::new(user_id, batch_id);
        self.batches.insert(batch_id.to_string(), batch.clone());
        self.user_batches
            .entry(user_id.to_string())
            .or_default()
            .push(batch_id.to_string());
        self.batch_files.insert(batch_id.to_string(), Vec::new());
        Ok(batch)
    }

    pub(super) fn add_file(
        &mut self,
        batch_id: &str,
        file_id: &str,
        file_name: &str,
        file_path: &str,
    ) -> Result<FileRecord> {
        if !self.batches.contains_key(batch_id) {
            return Err(TrackerError::batch_not_found(batch_id));
        }
        if self.files.contains_key(file_id) {
            return Err(TrackerError::duplicate_key(format!(
                "File already exists: {}",
                file_id
            )));
        }

        let file = FileRecord::new(batch_id, file_id, file_name, file_path);
        self.files.insert(file_id.to_string(), file.clone());
        self.batch_files
            .entry(batch_id.to_string())
            .or_default()
            .push(file_id.to_string());
        Ok(file)
    }

    pub(super) fn log_file_status(
        &mut self,
        file_id: &str,
        status: ProcessStatus,
        description: &str,
        log_type: LogType,
    ) -> Result<FileRecord> {
        let now = Utc::now();
        let file = self
            .files
            .get_mut(file_id)
            .ok_or_else(|| TrackerError::file_not_found(file_id))?;
        file.status = status;
        file.updated_at = now;
        let snapshot = file.clone();

        let entry = self.next_entry(LogSubject::File, file_id, status, description, log_type);
        self.file_logs
            .entry(file_id.to_string())
            .or_default()
            .push(entry);
        Ok(snapshot)
    }

    pub(super) fn log_batch_status(
        &mut self,
        batch_id: &str,
        status: ProcessStatus,
        file_count: u32,
    ) -> Result<BatchRecord> {
        let now = Utc::now();
        let batch = self
            .batches
            .get_mut(batch_id)
            .ok_or_else(|| TrackerError::batch_not_found(batch_id))?;
        batch.status = status;
        batch.file_count = file_count;
        batch.updated_at = now;
        let snapshot = batch.clone();

        let description = batch_status_description(status, file_count);
        let entry = self.next_entry(
            LogSubject::Batch,
            batch_id,
            status,
            &description,
            LogType::Info,
        );
        self.batch_logs
            .entry(batch_id.to_string())
            .or_default()
            .push(entry);
        Ok(snapshot)
    }

    /// Look up a batch and verify it belongs to `user_id`
    pub(super) fn owned_batch(&self, user_id: &str, batch_id: &str) -> Result<&BatchRecord> {
        self.batches
            .get(batch_id)
            .filter(|batch| batch.is_owned_by(user_id))
            .ok_or_else(|| TrackerError::batch_not_found(batch_id))
    }

    pub(super) fn file(&self, file_id: &str) -> Result<&FileRecord> {
        self.files
            .get(file_id)
            .ok_or_else(|| TrackerError::file_not_found(file_id))
    }

    pub(super) fn user_batches(&self, user_id: &str) -> Result<Vec<BatchRecord>> {
        let Some(ids) = self.user_batches.get(user_id) else {
            return Ok(Vec::new());
        };

        ids.iter()
            .map(|id| {
                self.batches.get(id).cloned().ok_or_else(|| {
                    TrackerError::invariant(format!(
                        "Tenant {} indexes missing batch {}",
                        user_id, id
                    ))
                })
            })
            .collect()
    }

    pub(super) fn batch_files(&self, user_id: &str, batch_id: &str) -> Result<Vec<FileRecord>> {
        self.owned_batch(user_id, batch_id)?;

        self.batch_files
            .get(batch_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|id| {
                self.files.get(id).cloned().ok_or_else(|| {
                    TrackerError::invariant(format!("Batch {} indexes missing file {}", batch_id, id))
                })
            })
            .collect()
    }

    pub(super) fn file_logs(&self, file_id: &str) -> Result<Vec<StatusLogEntry>> {
        self.file(file_id)?;
        Ok(self.file_logs.get(file_id).cloned().unwrap_or_default())
    }

    pub(super) fn batch_logs(&self, user_id: &str, batch_id: &str) -> Result<Vec<StatusLogEntry>> {
        self.owned_batch(user_id, batch_id)?;
        Ok(self.batch_logs.get(batch_id).cloned().unwrap_or_default())
    }

    pub(super) fn delete_file_logs(&mut self, file_id: &str) -> Result<u64> {
        self.file(file_id)?;
        let removed = self.file_logs.remove(file_id).map_or(0, |logs| logs.len());
        Ok(removed as u64)
    }

    pub(super) fn delete_file(&mut self, user_id: &str, batch_id: &str, file_id: &str) -> Result<()> {
        self.owned_batch(user_id, batch_id)?;
        match self.files.get(file_id) {
            Some(file) if file.batch_id == batch_id => {}
            _ => return Err(TrackerError::file_not_found(file_id)),
        }

        self.files.remove(file_id);
        self.file_logs.remove(file_id);
        if let Some(ids) = self.batch_files.get_mut(batch_id) {
            ids.retain(|id| id != file_id);
        }
        Ok(())
    }

    pub(super) fn delete_batch(&mut self, user_id: &str, batch_id: &str) -> Result<()> {
        self.owned_batch(user_id, batch_id)?;
        self.cascade_batch(batch_id)?;
        if let Some(ids) = self.user_batches.get_mut(user_id) {
            ids.retain(|id| id != batch_id);
            if ids.is_empty() {
                self.user_batches.remove(user_id);
            }
        }
        Ok(())
    }

    pub(super) fn delete_all(&mut self, user_id: &str) -> Result<u64> {
        let Some(ids) = self.user_batches.get(user_id).cloned() else {
            return Ok(0);
        };

        // Verify the whole cascade before mutating so a broken index leaves
        // the tenant intact.
        for batch_id in &ids {
            self.check_cascade(batch_id)?;
        }
        self.user_batches.remove(user_id);
        for batch_id in &ids {
            self.cascade_batch(batch_id)?;
        }
        Ok(ids.len() as u64)
    }

    pub(super) fn stats(&self) -> StoreStats {
        let logs: usize = self
            .file_logs
            .values()
            .chain(self.batch_logs.values())
            .map(Vec::len)
            .sum();
        StoreStats {
            batches: self.batches.len() as u64,
            files: self.files.len() as u64,
            logs: logs as u64,
        }
    }

    pub(super) fn clear(&mut self) {
        *self = Self {
            next_log_id: self.next_log_id,
            ..Self::default()
        };
    }

    fn check_cascade(&self, batch_id: &str) -> Result<()> {
        if !self.batches.contains_key(batch_id) {
            return Err(TrackerError::invariant(format!(
                "Tenant index references missing batch {}",
                batch_id
            )));
        }
        for file_id in self.batch_files.get(batch_id).map(Vec::as_slice).unwrap_or_default() {
            match self.files.get(file_id) {
                Some(file) if file.batch_id == batch_id => {}
                _ => {
                    return Err(TrackerError::invariant(format!(
                        "Batch {} references orphaned file {}",
                        batch_id, file_id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Remove a batch, its files and every related log. Tenant index is left
    /// to the caller.
    fn cascade_batch(&mut self, batch_id: &str) -> Result<()> {
        self.check_cascade(batch_id)?;

        for file_id in self.batch_files.remove(batch_id).unwrap_or_default() {
            self.files.remove(&file_id);
            self.file_logs.remove(&file_id);
        }
        self.batch_logs.remove(batch_id);
        self.batches.remove(batch_id);
        Ok(())
    }

    fn next_entry(
        &mut self,
        subject: LogSubject,
        subject_id: &str,
        status: ProcessStatus,
        description: &str,
        log_type: LogType,
    ) -> StatusLogEntry {
        self.next_log_id += 1;
        StatusLogEntry {
            log_id: self.next_log_id,
            subject,
            subject_id: subject_id.to_string(),
            status,
            description: description.to_string(),
            log_type,
            timestamp: Utc::now(),
        }
    }
}
