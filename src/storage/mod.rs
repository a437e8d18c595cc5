//! Storage abstraction for the board's job list.
//!
//! Jobs are kept in fixture order. The trait allows other backends to be
//! plugged in behind the board; the in-memory store is the default.

mod memory;

pub use memory::InMemoryJobStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::job::Job;
use crate::core::types::JobId;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested item was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A duplicate key was detected.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// Storage lock was poisoned.
    #[error("storage lock poisoned")]
    LockPoisoned,

    /// Generic storage error.
    #[error("storage error: {0}")]
    Other(String),
}

/// Ordered job storage.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Append a new job. Fails if the id is taken.
    async fn save_job(&self, job: Job) -> Result<(), StorageError>;

    /// Get a job by id.
    async fn get_job(&self, id: &JobId) -> Result<Job, StorageError>;

    /// All jobs in insertion order.
    async fn list_jobs(&self) -> Result<Vec<Job>, StorageError>;

    /// Replace an existing job in place, keeping its position.
    async fn update_job(&self, job: Job) -> Result<(), StorageError>;

    /// Remove a job.
    async fn delete_job(&self, id: &JobId) -> Result<(), StorageError>;

    /// Replace the whole job list.
    ///
    /// Fixture lists may repeat an id; later duplicates are dropped with a warning.
    async fn replace_all(&self, jobs: Vec<Job>) -> Result<(), StorageError>;

    /// Whether a job with this id exists.
    async fn contains(&self, id: &JobId) -> Result<bool, StorageError> {
        match self.get_job(id).await {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
