//! In-memory storage implementation.
//!
//! Provides a thread-safe in-memory backend that keeps jobs in order.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::RwLock;

use super::{JobStore, StorageError};
use crate::core::job::Job;
use crate::core::types::JobId;

/// In-memory job store.
///
/// Thread-safe storage using RwLock for concurrent access.
/// Data is not persisted across restarts.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<Vec<Job>>,
}

impl InMemoryJobStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn save_job(&self, job: Job) -> Result<(), StorageError> {
        let mut jobs = self.jobs.write().map_err(|_| StorageError::LockPoisoned)?;
        if jobs.iter().any(|j| j.id() == job.id()) {
            return Err(StorageError::DuplicateKey(format!("job: {}", job.id())));
        }
        jobs.push(job);
        Ok(())
    }

    async fn get_job(&self, id: &JobId) -> Result<Job, StorageError> {
        let jobs = self.jobs.read().map_err(|_| StorageError::LockPoisoned)?;
        jobs.iter()
            .find(|j| j.id() == id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("job: {}", id)))
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, StorageError> {
        let jobs = self.jobs.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(jobs.clone())
    }

    async fn update_job(&self, job: Job) -> Result<(), StorageError> {
        let mut jobs = self.jobs.write().map_err(|_| StorageError::LockPoisoned)?;
        let slot = jobs
            .iter_mut()
            .find(|j| j.id() == job.id())
            .ok_or_else(|| StorageError::NotFound(format!("job: {}", job.id())))?;
        *slot = job;
        Ok(())
    }

    async fn delete_job(&self, id: &JobId) -> Result<(), StorageError> {
        let mut jobs = self.jobs.write().map_err(|_| StorageError::LockPoisoned)?;
        let position = jobs
            .iter()
            .position(|j| j.id() == id)
            .ok_or_else(|| StorageError::NotFound(format!("job: {}", id)))?;
        jobs.remove(position);
        Ok(())
    }

    async fn replace_all(&self, incoming: Vec<Job>) -> Result<(), StorageError> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(incoming.len());
        for job in incoming {
            if seen.insert(job.id().clone()) {
                kept.push(job);
            } else {
                tracing::warn!(job_id = %job.id(), "Duplicate job id, keeping the first");
            }
        }

        let mut jobs = self.jobs.write().map_err(|_| StorageError::LockPoisoned)?;
        *jobs = kept;
        Ok(())
    }
}
