//! Occurrence projection.
//!
//! Expands each job into the calendar occurrences it produces: the next few
//! cron fire times and, for one-off jobs, the `scheduleAt` instant.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::cron::CronSchedule;
use super::job::Job;
use super::types::{JobId, OccurrenceId};

/// How many cron occurrences each job contributes by default.
pub const DEFAULT_OCCURRENCES_PER_JOB: usize = 5;

/// Status of a projected occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OccurrenceStatus {
    /// The occurrence is due.
    Active,
    /// The occurrence is still in the future.
    Pending,
}

impl OccurrenceStatus {
    /// `Active` once `start` has been reached.
    pub fn at(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start <= now {
            OccurrenceStatus::Active
        } else {
            OccurrenceStatus::Pending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OccurrenceStatus::Active => "Active",
            OccurrenceStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for OccurrenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Status shown in the jobs table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JobStatus {
    Active,
    Pending,
    /// No usable schedule.
    Unknown,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Pending => "Pending",
            JobStatus::Unknown => "Unknown",
        }
    }
}

impl From<OccurrenceStatus> for JobStatus {
    fn from(status: OccurrenceStatus) -> Self {
        match status {
            OccurrenceStatus::Active => JobStatus::Active,
            OccurrenceStatus::Pending => JobStatus::Pending,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which part of a job produced an occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OccurrenceSource {
    /// The `index`-th upcoming cron fire time.
    Cron { index: usize },
    /// The one-off `scheduleAt` instant.
    ScheduleAt,
}

/// One calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: OccurrenceId,
    /// The owning job. Edits and deletes resolve through this, never through `id`.
    pub job_id: JobId,
    pub title: String,
    pub start: DateTime<Utc>,
    pub status: OccurrenceStatus,
    pub source: OccurrenceSource,
}

impl Occurrence {
    /// Detail text shown when the occurrence is selected.
    ///
    /// The schedule line prefers the job's cron expression, then its
    /// `scheduleAt`, then the occurrence start.
    pub fn tooltip(&self, job: Option<&Job>) -> String {
        let description = job
            .map(|j| j.description())
            .filter(|d| !d.is_empty())
            .unwrap_or("-");
        let schedule = job
            .and_then(|j| j.cron_expression().or(j.schedule_at()))
            .map(str::to_string)
            .unwrap_or_else(|| self.start.to_rfc3339());

        format!(
            "ID: {}\nName: {}\nDescription: {}\nSchedule: {}\nStatus: {}",
            self.id, self.title, description, schedule, self.status
        )
    }
}

/// Expands jobs into occurrences relative to an injected clock.
#[derive(Clone)]
pub struct Projector {
    occurrences_per_job: usize,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Projector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projector")
            .field("occurrences_per_job", &self.occurrences_per_job)
            .finish_non_exhaustive()
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl Projector {
    /// Create a projector reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            occurrences_per_job: DEFAULT_OCCURRENCES_PER_JOB,
            clock,
        }
    }

    /// Set how many cron occurrences each job contributes.
    pub fn with_occurrences_per_job(mut self, count: usize) -> Self {
        self.occurrences_per_job = count;
        self
    }

    pub fn occurrences_per_job(&self) -> usize {
        self.occurrences_per_job
    }

    /// The clock's current instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Project every job, in job order.
    pub fn project(&self, jobs: &[Job]) -> Vec<Occurrence> {
        self.project_at(jobs, self.now())
    }

    /// Project every job against an explicit `now`.
    pub fn project_at(&self, jobs: &[Job], now: DateTime<Utc>) -> Vec<Occurrence> {
        let occurrences: Vec<Occurrence> = jobs
            .iter()
            .flat_map(|job| self.project_job(job, now))
            .collect();

        tracing::debug!(
            jobs = jobs.len(),
            occurrences = occurrences.len(),
            "Projected occurrences"
        );
        occurrences
    }

    /// Occurrences of a single job: cron fire times first, then `scheduleAt`.
    ///
    /// Cron occurrences are always `Active`. An unparsable cron expression
    /// or `scheduleAt` drops that part with a warning.
    pub fn project_job(&self, job: &Job, now: DateTime<Utc>) -> Vec<Occurrence> {
        if !job.is_recurring() && !job.is_one_off() {
            tracing::warn!(job_id = %job.id(), "Job has no cronExpression or scheduleAt, skipping");
            return Vec::new();
        }

        let mut occurrences = Vec::new();

        if let Some(expression) = job.cron_expression() {
            match CronSchedule::with_timezone(expression, job.zone_id()) {
                Ok(schedule) => {
                    occurrences.extend(
                        schedule
                            .upcoming(now)
                            .take(self.occurrences_per_job)
                            .enumerate()
                            .map(|(index, start)| Occurrence {
                                id: OccurrenceId::recurring(job.id(), index),
                                job_id: job.id().clone(),
                                title: job.title().to_string(),
                                start,
                                status: OccurrenceStatus::Active,
                                source: OccurrenceSource::Cron { index },
                            }),
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        job_id = %job.id(),
                        expression,
                        zone_id = job.zone_id(),
                        error = %e,
                        "Failed to parse cronExpression"
                    );
                }
            }
        }

        occurrences.extend(self.schedule_occurrence(job, now));
        occurrences
    }

    /// The `{job}-schedule` occurrence, if the job has a valid `scheduleAt`.
    pub fn schedule_occurrence(&self, job: &Job, now: DateTime<Utc>) -> Option<Occurrence> {
        match job.scheduled_at() {
            Ok(Some(start)) => Some(Occurrence {
                id: OccurrenceId::schedule(job.id()),
                job_id: job.id().clone(),
                title: job.title().to_string(),
                start,
                status: OccurrenceStatus::at(start, now),
                source: OccurrenceSource::ScheduleAt,
            }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(job_id = %job.id(), error = %e, "Invalid scheduleAt");
                None
            }
        }
    }

    /// The single occurrence shown for a freshly created job.
    ///
    /// The `scheduleAt` occurrence when there is one, otherwise the next
    /// cron fire time.
    pub fn first_occurrence(&self, job: &Job, now: DateTime<Utc>) -> Option<Occurrence> {
        if let Some(occurrence) = self.schedule_occurrence(job, now) {
            return Some(occurrence);
        }

        let expression = job.cron_expression()?;
        match CronSchedule::with_timezone(expression, job.zone_id()) {
            Ok(schedule) => schedule.next_after(now).ok().map(|start| Occurrence {
                id: OccurrenceId::recurring(job.id(), 0),
                job_id: job.id().clone(),
                title: job.title().to_string(),
                start,
                status: OccurrenceStatus::Active,
                source: OccurrenceSource::Cron { index: 0 },
            }),
            Err(e) => {
                tracing::warn!(job_id = %job.id(), expression, error = %e, "Failed to parse cronExpression");
                None
            }
        }
    }
}

/// Status of a job for the jobs table.
///
/// Cron jobs compare their next fire time to `now`; one-off jobs compare
/// `scheduleAt`. Anything else, including unparsable schedules, is `Unknown`.
pub fn job_status(job: &Job, now: DateTime<Utc>) -> JobStatus {
    if let Some(expression) = job.cron_expression() {
        return match CronSchedule::with_timezone(expression, job.zone_id())
            .and_then(|schedule| schedule.next_after(now))
        {
            Ok(next) => OccurrenceStatus::at(next, now).into(),
            Err(e) => {
                tracing::warn!(job_id = %job.id(), expression, error = %e, "Error evaluating job status");
                JobStatus::Unknown
            }
        };
    }

    match job.scheduled_at() {
        Ok(Some(at)) => OccurrenceStatus::at(at, now).into(),
        Ok(None) => JobStatus::Unknown,
        Err(e) => {
            tracing::warn!(job_id = %job.id(), error = %e, "Error evaluating job status");
            JobStatus::Unknown
        }
    }
}
