//! Fixture loading.
//!
//! The board reads two JSON documents: `data.json` (dashboard summary) and
//! `Order.json` (the job list). They come from a local directory or an HTTP
//! base URL. The `load_*` methods are best-effort: failures are logged and
//! an empty dataset is returned.

mod dashboard;

pub use dashboard::{DashboardData, DashboardMetrics, MenuItem, Profile, Transactions, format_count};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::job::{DEFAULT_TIMEZONE, Job, JobRecord};

/// File name of the dashboard summary.
pub const DASHBOARD_FILE: &str = "data.json";

/// File name of the job list.
pub const JOBS_FILE: &str = "Order.json";

/// Errors that can occur when loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Failed to read a local fixture file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The document is not the expected JSON.
    #[error("JSON parse error in {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where fixtures are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureSource {
    /// A local directory holding the fixture files.
    Directory(PathBuf),
    /// An HTTP base URL; files are fetched from `{base}/{file}`.
    Http(String),
}

impl FixtureSource {
    /// Interpret a CLI argument: `http://` and `https://` are URLs, anything else a path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            FixtureSource::Http(value.trim_end_matches('/').to_string())
        } else {
            FixtureSource::Directory(PathBuf::from(value))
        }
    }
}

impl fmt::Display for FixtureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureSource::Directory(path) => write!(f, "{}", path.display()),
            FixtureSource::Http(base) => f.write_str(base),
        }
    }
}

/// Reads fixtures from a [`FixtureSource`].
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    source: FixtureSource,
    client: Client,
    default_timezone: String,
}

impl FixtureLoader {
    /// Create a loader for `source`.
    pub fn new(source: FixtureSource) -> Result<Self, FixtureError> {
        let client = Client::builder()
            .user_agent(format!("cronboard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            source,
            client,
            default_timezone: DEFAULT_TIMEZONE.to_string(),
        })
    }

    /// Set the timezone given to jobs that do not name one.
    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = timezone.into();
        self
    }

    pub fn source(&self) -> &FixtureSource {
        &self.source
    }

    /// Load `data.json`.
    pub async fn try_load_dashboard(&self) -> Result<DashboardData, FixtureError> {
        self.fetch_json(DASHBOARD_FILE).await
    }

    /// Load `data.json`, logging failures and returning `None`.
    pub async fn load_dashboard(&self) -> Option<DashboardData> {
        match self.try_load_dashboard().await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!(source = %self.source, error = %e, "Error loading data.json");
                None
            }
        }
    }

    /// Load `Order.json`.
    ///
    /// The document must be a JSON array. Individual records that fail to
    /// parse are skipped with a warning; the rest keep their index.
    pub async fn try_load_jobs(&self) -> Result<Vec<Job>, FixtureError> {
        let values: Vec<serde_json::Value> = self.fetch_json(JOBS_FILE).await?;

        let jobs = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<JobRecord>(value) {
                Ok(record) => Some(Job::from_record(record, index, &self.default_timezone)),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Error processing order, skipping");
                    None
                }
            })
            .collect::<Vec<_>>();

        tracing::info!(source = %self.source, jobs = jobs.len(), "Loaded jobs");
        Ok(jobs)
    }

    /// Load `Order.json`, logging failures and returning an empty list.
    pub async fn load_jobs(&self) -> Vec<Job> {
        match self.try_load_jobs().await {
            Ok(jobs) => jobs,
            Err(e) => {
                tracing::error!(source = %self.source, error = %e, "Failed to load Order.json");
                Vec::new()
            }
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, FixtureError> {
        match &self.source {
            FixtureSource::Directory(dir) => {
                let path = dir.join(name);
                let text = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| FixtureError::Io { path, source })?;
                serde_json::from_str(&text).map_err(|source| FixtureError::Json {
                    name: name.to_string(),
                    source,
                })
            }
            FixtureSource::Http(base) => {
                let url = format!("{}/{}", base, name);
                tracing::debug!(%url, "Fetching fixture");
                let resp = self.client.get(&url).send().await?.error_for_status()?;
                let text = resp.text().await?;
                serde_json::from_str(&text).map_err(|source| FixtureError::Json {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }
}
