//! Board state: the job list and its projected occurrences.
//!
//! The board is the single owner of calendar state. Edits arrive as
//! occurrence selections (what the user clicked) and are resolved to the
//! owning job through the occurrence's `job_id`.

use std::sync::Arc;
use thiserror::Error;

use crate::core::job::{Job, JobDraft};
use crate::core::projector::{Occurrence, Projector};
use crate::core::types::{JobId, OccurrenceId};
use crate::fixtures::FixtureLoader;
use crate::storage::{JobStore, StorageError};

/// Errors that can occur when mutating the board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The selected occurrence is not on the board.
    #[error("occurrence not found: {0}")]
    OccurrenceNotFound(OccurrenceId),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Outcome of [`Board::update_by_occurrence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// An existing job was patched; `occurrences` is how many it now has.
    Updated { job_id: JobId, occurrences: usize },
    /// A new job was created, with its first occurrence if it has one.
    Inserted {
        job_id: JobId,
        occurrence: Option<OccurrenceId>,
    },
}

impl Reconciled {
    pub fn job_id(&self) -> &JobId {
        match self {
            Reconciled::Updated { job_id, .. } | Reconciled::Inserted { job_id, .. } => job_id,
        }
    }
}

/// Jobs plus the occurrences currently shown for them.
pub struct Board {
    store: Arc<dyn JobStore>,
    projector: Projector,
    occurrences: Vec<Occurrence>,
}

impl Board {
    /// Create an empty board.
    pub fn new(store: Arc<dyn JobStore>, projector: Projector) -> Self {
        Self {
            store,
            projector,
            occurrences: Vec::new(),
        }
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Replace all jobs and re-project.
    pub async fn load(&mut self, jobs: Vec<Job>) -> Result<(), BoardError> {
        self.store.replace_all(jobs).await?;
        self.refresh().await
    }

    /// Reload jobs from fixtures, discarding local edits.
    ///
    /// A failed fetch leaves the board empty.
    pub async fn reload_from(&mut self, loader: &FixtureLoader) -> Result<usize, BoardError> {
        let jobs = loader.load_jobs().await;
        let count = jobs.len();
        self.load(jobs).await?;
        Ok(count)
    }

    /// Re-project every stored job against the clock.
    pub async fn refresh(&mut self) -> Result<(), BoardError> {
        let jobs = self.store.list_jobs().await?;
        self.occurrences = self.projector.project(&jobs);
        Ok(())
    }

    /// Current occurrences, in job order.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Look up an occurrence by id.
    pub fn occurrence(&self, id: &OccurrenceId) -> Option<&Occurrence> {
        self.occurrences.iter().find(|o| &o.id == id)
    }

    /// Occurrences owned by one job.
    pub fn occurrences_for<'a>(&'a self, job_id: &'a JobId) -> impl Iterator<Item = &'a Occurrence> {
        self.occurrences.iter().filter(move |o| &o.job_id == job_id)
    }

    /// All jobs, in order.
    pub async fn jobs(&self) -> Result<Vec<Job>, BoardError> {
        Ok(self.store.list_jobs().await?)
    }

    /// A single job.
    pub async fn job(&self, id: &JobId) -> Result<Job, BoardError> {
        Ok(self.store.get_job(id).await?)
    }

    /// Apply a form submission.
    ///
    /// The target occurrence is resolved to its owning job, which is patched
    /// with the draft and re-projected in place. Without a target, or when no
    /// occurrence on the board matches it, a new job is created.
    pub async fn update_by_occurrence(
        &mut self,
        target: Option<&OccurrenceId>,
        draft: JobDraft,
    ) -> Result<Reconciled, BoardError> {
        let owner = target
            .and_then(|id| self.occurrence(id))
            .map(|o| o.job_id.clone());

        match owner {
            Some(job_id) => self.update_job(&job_id, draft).await,
            None => {
                if let Some(target) = target {
                    tracing::debug!(occurrence_id = %target, "No job owns occurrence, creating one");
                }
                self.insert(draft).await
            }
        }
    }

    /// Patch a job with a draft and replace its occurrences.
    ///
    /// The new occurrences take the place of the old ones in board order.
    /// Other jobs' occurrences are left untouched.
    pub async fn update_job(&mut self, job_id: &JobId, draft: JobDraft) -> Result<Reconciled, BoardError> {
        let mut job = self.store.get_job(job_id).await?;
        job.apply(draft);
        self.store.update_job(job.clone()).await?;

        let projected = self.projector.project_job(&job, self.projector.now());
        let occurrences = projected.len();

        let position = self
            .occurrences
            .iter()
            .position(|o| &o.job_id == job_id)
            .unwrap_or(self.occurrences.len());
        self.occurrences.retain(|o| &o.job_id != job_id);
        self.occurrences.splice(position..position, projected);

        tracing::info!(job_id = %job_id, occurrences, "Updated job");
        Ok(Reconciled::Updated {
            job_id: job_id.clone(),
            occurrences,
        })
    }

    async fn insert(&mut self, draft: JobDraft) -> Result<Reconciled, BoardError> {
        let now = self.projector.now();
        let job_id = self.fresh_job_id(now.timestamp_millis()).await?;
        let job = Job::from_draft(job_id.clone(), draft);
        self.store.save_job(job.clone()).await?;

        let occurrence = self.projector.first_occurrence(&job, now);
        let occurrence_id = occurrence.as_ref().map(|o| o.id.clone());
        self.occurrences.extend(occurrence);

        tracing::info!(job_id = %job_id, "Created job");
        Ok(Reconciled::Inserted {
            job_id,
            occurrence: occurrence_id,
        })
    }

    async fn fresh_job_id(&self, millis: i64) -> Result<JobId, BoardError> {
        let base = format!("new-{}", millis);
        let mut candidate = JobId::new(base.clone());
        let mut n = 1;
        while self.store.contains(&candidate).await? {
            candidate = JobId::new(format!("{}-{}", base, n));
            n += 1;
        }
        Ok(candidate)
    }

    /// Delete the job owning `target` and all of its occurrences.
    ///
    /// Returns how many occurrences were removed.
    pub async fn delete_by_occurrence(&mut self, target: &OccurrenceId) -> Result<usize, BoardError> {
        let job_id = self
            .occurrence(target)
            .map(|o| o.job_id.clone())
            .ok_or_else(|| BoardError::OccurrenceNotFound(target.clone()))?;

        match self.store.delete_job(&job_id).await {
            Ok(()) => {}
            Err(StorageError::NotFound(_)) => {
                tracing::debug!(job_id = %job_id, "Job already gone from store");
            }
            Err(e) => return Err(e.into()),
        }

        let before = self.occurrences.len();
        self.occurrences.retain(|o| o.job_id != job_id);
        let removed = before - self.occurrences.len();

        tracing::info!(job_id = %job_id, occurrences = removed, "Deleted job");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::projector::{OccurrenceSource, OccurrenceStatus};
    use crate::storage::InMemoryJobStore;
    use chrono::{TimeZone, Utc};

    async fn board_with(jobs: Vec<Job>) -> Board {
        let clock = Arc::new(FixedClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        let mut board = Board::new(Arc::new(InMemoryJobStore::new()), Projector::new(clock));
        board.load(jobs).await.unwrap();
        board
    }

    fn daily(id: &str, name: &str) -> Job {
        Job::new(id, name).with_cron("0 9 * * *").with_zone("UTC")
    }

    #[tokio::test]
    async fn test_load_projects_occurrences() {
        let board = board_with(vec![daily("1", "One"), daily("10", "Ten")]).await;

        assert_eq!(board.occurrences().len(), 10);
        assert_eq!(board.occurrences_for(&JobId::new("1")).count(), 5);
    }

    #[tokio::test]
    async fn test_update_job_one_leaves_job_ten_alone() {
        let mut board = board_with(vec![daily("1", "One"), daily("10", "Ten")]).await;

        let result = board
            .update_by_occurrence(Some(&OccurrenceId::from("1-2")), JobDraft::new("Renamed").with_cron("0 9 * * *"))
            .await
            .unwrap();

        assert_eq!(
            result,
            Reconciled::Updated {
                job_id: JobId::new("1"),
                occurrences: 5
            }
        );
        assert!(board.occurrences_for(&JobId::new("1")).all(|o| o.title == "Renamed"));
        assert!(board.occurrences_for(&JobId::new("10")).all(|o| o.title == "Ten"));
        assert_eq!(board.job(&JobId::new("10")).await.unwrap().title(), "Ten");
        assert_eq!(board.job(&JobId::new("1")).await.unwrap().title(), "Renamed");
    }

    #[tokio::test]
    async fn test_update_upserts_schedule_occurrence() {
        let mut board = board_with(vec![daily("1", "One")]).await;

        board
            .update_by_occurrence(
                Some(&OccurrenceId::from("1-0")),
                JobDraft::new("One")
                    .with_cron("0 9 * * *")
                    .with_schedule_at("2023-12-01T00:00:00Z"),
            )
            .await
            .unwrap();

        let scheduled = board.occurrence(&OccurrenceId::from("1-schedule")).unwrap();
        assert_eq!(scheduled.status, OccurrenceStatus::Active);
        assert_eq!(scheduled.source, OccurrenceSource::ScheduleAt);
        assert_eq!(board.occurrences().len(), 6);

        // A second edit replaces rather than duplicates
        board
            .update_by_occurrence(
                Some(&OccurrenceId::from("1-schedule")),
                JobDraft::new("One")
                    .with_cron("0 9 * * *")
                    .with_schedule_at("2024-12-01T00:00:00Z"),
            )
            .await
            .unwrap();

        assert_eq!(board.occurrences().len(), 6);
        let scheduled = board.occurrence(&OccurrenceId::from("1-schedule")).unwrap();
        assert_eq!(scheduled.status, OccurrenceStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_unmatched_occurrence_inserts_job() {
        let mut board = board_with(vec![daily("1", "One")]).await;

        let result = board
            .update_by_occurrence(
                Some(&OccurrenceId::from("new-123")),
                JobDraft::new("Fresh").with_schedule_at("2024-01-05T00:00:00Z"),
            )
            .await
            .unwrap();

        let Reconciled::Inserted { job_id, occurrence } = result else {
            panic!("expected an insert");
        };
        assert_eq!(job_id.as_str(), "new-1704067200000");
        assert_eq!(occurrence, Some(OccurrenceId::from("new-1704067200000-schedule")));
        assert_eq!(board.occurrences().len(), 6);
        assert_eq!(board.jobs().await.unwrap().len(), 2);
        assert!(board.occurrences_for(&JobId::new("1")).all(|o| o.title == "One"));
    }

    #[tokio::test]
    async fn test_one_off_becomes_cron() {
        let once = Job::new("1", "Once")
            .with_zone("UTC")
            .with_schedule_at("2024-02-01T00:00:00Z");
        let mut board = board_with(vec![once]).await;
        assert_eq!(board.occurrences().len(), 1);

        let result = board
            .update_by_occurrence(
                Some(&OccurrenceId::from("1-schedule")),
                JobDraft::new("Daily").with_zone("UTC").with_cron("0 9 * * *"),
            )
            .await
            .unwrap();

        assert_eq!(
            result,
            Reconciled::Updated {
                job_id: JobId::new("1"),
                occurrences: 5
            }
        );
        assert!(board.occurrence(&OccurrenceId::from("1-schedule")).is_none());
        let starts: Vec<_> = board.occurrences().iter().map(|o| o.start).collect();
        assert_eq!(starts[0], Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
        assert_eq!(starts[4], Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap());
        assert!(board.occurrences().iter().all(|o| o.source != OccurrenceSource::ScheduleAt));
        assert!(board.job(&JobId::new("1")).await.unwrap().schedule_at().is_none());
    }

    #[tokio::test]
    async fn test_edit_keeps_board_order() {
        let mut board = board_with(vec![daily("1", "One"), daily("2", "Two"), daily("3", "Three")]).await;

        board
            .update_by_occurrence(
                Some(&OccurrenceId::from("2-3")),
                JobDraft::new("Two").with_zone("UTC").with_cron("0 12 * * *"),
            )
            .await
            .unwrap();

        let owners: Vec<_> = board.occurrences().iter().map(|o| o.job_id.as_str()).collect();
        assert_eq!(&owners[0..5], ["1"; 5]);
        assert_eq!(&owners[5..10], ["2"; 5]);
        assert_eq!(&owners[10..15], ["3"; 5]);
    }

    #[tokio::test]
    async fn test_insert_new_job_with_schedule() {
        let mut board = board_with(vec![]).await;

        let result = board
            .update_by_occurrence(None, JobDraft::new("Once").with_schedule_at("2024-01-05T00:00:00Z"))
            .await
            .unwrap();

        let Reconciled::Inserted { job_id, occurrence } = result else {
            panic!("expected an insert");
        };
        assert_eq!(job_id.as_str(), "new-1704067200000");
        assert_eq!(occurrence, Some(OccurrenceId::from("new-1704067200000-schedule")));
        assert_eq!(board.occurrences().len(), 1);
        assert_eq!(board.occurrences()[0].status, OccurrenceStatus::Pending);
    }

    #[tokio::test]
    async fn test_insert_new_cron_job_uses_next_fire_time() {
        let mut board = board_with(vec![]).await;

        board
            .update_by_occurrence(None, JobDraft::new("Cron").with_zone("UTC").with_cron("0 9 * * *"))
            .await
            .unwrap();
        let second = board
            .update_by_occurrence(None, JobDraft::new("Again").with_zone("UTC").with_cron("0 9 * * *"))
            .await
            .unwrap();

        // Same millisecond: the second id gets a suffix
        assert_eq!(second.job_id().as_str(), "new-1704067200000-1");
        assert_eq!(board.jobs().await.unwrap().len(), 2);
        assert_eq!(
            board.occurrences()[0].start,
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_delete_removes_only_owning_job() {
        let mut board = board_with(vec![daily("1", "One"), daily("10", "Ten")]).await;

        let removed = board.delete_by_occurrence(&OccurrenceId::from("1-4")).await.unwrap();

        assert_eq!(removed, 5);
        assert_eq!(board.occurrences().len(), 5);
        assert!(board.occurrences().iter().all(|o| o.job_id == JobId::new("10")));

        let jobs = board.jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id().as_str(), "10");
    }

    #[tokio::test]
    async fn test_cron_change_reprojects_immediately() {
        let mut board = board_with(vec![daily("1", "One"), daily("10", "Ten")]).await;

        board
            .update_by_occurrence(
                Some(&OccurrenceId::from("1-0")),
                JobDraft::new("One").with_zone("UTC").with_cron("30 18 * * *"),
            )
            .await
            .unwrap();

        let one_id = JobId::new("1");
        let one: Vec<_> = board.occurrences_for(&one_id).collect();
        assert_eq!(one.len(), 5);
        assert_eq!(one[0].start, Utc.with_ymd_and_hms(2024, 1, 1, 18, 30, 0).unwrap());
        let ten_id = JobId::new("10");
        let ten: Vec<_> = board.occurrences_for(&ten_id).collect();
        assert_eq!(ten[0].start, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn test_clearing_schedule_drops_schedule_occurrence() {
        let both = daily("1", "One").with_schedule_at("2024-03-01T00:00:00Z");
        let mut board = board_with(vec![both]).await;
        assert_eq!(board.occurrences().len(), 6);

        board
            .update_by_occurrence(
                Some(&OccurrenceId::from("1-schedule")),
                JobDraft::new("One").with_zone("UTC").with_cron("0 9 * * *"),
            )
            .await
            .unwrap();

        assert_eq!(board.occurrences().len(), 5);
        assert!(board.occurrence(&OccurrenceId::from("1-schedule")).is_none());
    }

    #[tokio::test]
    async fn test_update_job_by_id() {
        let mut board = board_with(vec![daily("1", "One")]).await;

        board
            .update_job(&JobId::new("1"), JobDraft::new("Renamed").with_zone("UTC").with_cron("0 9 * * *"))
            .await
            .unwrap();
        assert!(board.occurrences().iter().all(|o| o.title == "Renamed"));

        let missing = board.update_job(&JobId::new("2"), JobDraft::new("x")).await;
        assert!(matches!(missing, Err(BoardError::Storage(StorageError::NotFound(_)))));
    }
}
