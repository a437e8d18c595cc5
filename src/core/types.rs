//! Core identifier types for the dashboard.
//!
//! These types provide type-safe identifiers for jobs and their projected
//! calendar occurrences.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier for a job.
///
/// Fixture files carry job ids either as JSON numbers or as strings; both
/// deserialize into the same textual form so `1` and `"1"` are one job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

/// Identifier of one projected occurrence of a job.
///
/// The textual form is `{job}-{index}` for cron occurrences and
/// `{job}-schedule` for the one-off occurrence. It is a display handle only:
/// the owning job is always carried separately on the occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceId(String);

impl JobId {
    /// Create a new JobId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<u64> for JobId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Unsigned(n) => Self(n.to_string()),
            Raw::Signed(n) => Self(n.to_string()),
        })
    }
}

impl OccurrenceId {
    /// Id of the `index`-th cron occurrence of a job.
    pub fn recurring(job_id: &JobId, index: usize) -> Self {
        Self(format!("{}-{}", job_id, index))
    }

    /// Id of the one-off `scheduleAt` occurrence of a job.
    pub fn schedule(job_id: &JobId) -> Self {
        Self(format!("{}-schedule", job_id))
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OccurrenceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
