//! cronboard - job scheduling dashboard core.
//!
//! Turns a list of HTTP jobs (cron expressions and one-off timestamps) into
//! calendar occurrences, keeps edits consistent per job, and renders the
//! result in a terminal dashboard.
//!
//! # Modules
//!
//! - [`core`]: cron codec, job model and occurrence projection
//! - [`storage`]: ordered job storage
//! - [`board`]: occurrence-driven edits and deletes
//! - [`fixtures`]: `data.json` and `Order.json` loading
//! - [`config`]: YAML configuration
//! - [`tui`]: terminal dashboard
//! - [`testing`]: helpers for tests

pub mod board;
pub mod config;
pub mod core;
pub mod fixtures;
pub mod storage;
pub mod testing;
pub mod tui;

pub use board::{Board, BoardError, Reconciled};
pub use config::{BoardConfig, ConfigError, FixtureConfig};
pub use core::clock::{Clock, FixedClock, SystemClock};
pub use core::cron::{CronError, CronSchedule, RepeatPattern, cron_to_next_occurrences, date_to_cron};
pub use core::job::{
    DEFAULT_TIMEZONE, HttpHeader, HttpMethod, HttpRequest, Job, JobDraft, JobError, JobRecord,
    parse_timestamp,
};
pub use core::projector::{
    JobStatus, Occurrence, OccurrenceSource, OccurrenceStatus, Projector, job_status,
};
pub use core::types::{JobId, OccurrenceId};
pub use fixtures::{DashboardData, DashboardMetrics, FixtureError, FixtureLoader, FixtureSource};
pub use storage::{InMemoryJobStore, JobStore, StorageError};
