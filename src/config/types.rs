//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::job::DEFAULT_TIMEZONE;
use crate::core::projector::DEFAULT_OCCURRENCES_PER_JOB;
use crate::fixtures::FixtureSource;

/// Board configuration (cronboard.yaml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Timezone for jobs that do not name one.
    pub default_timezone: String,
    /// Cron occurrences projected per job.
    pub occurrences_per_job: usize,
    /// Where fixtures are read from.
    pub fixtures: FixtureConfig,
    /// Seconds between dashboard redraw ticks.
    pub refresh_interval_secs: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            occurrences_per_job: DEFAULT_OCCURRENCES_PER_JOB,
            fixtures: FixtureConfig::default(),
            refresh_interval_secs: 30,
        }
    }
}

impl BoardConfig {
    /// The refresh interval as a duration.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// Fixture location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FixtureConfig {
    /// A local directory.
    #[serde(rename = "directory")]
    Directory {
        /// Directory holding `data.json` and `Order.json`.
        path: PathBuf,
    },
    /// An HTTP server.
    #[serde(rename = "http")]
    Http {
        /// Base URL the fixture files are served under.
        base_url: String,
    },
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig::Directory {
            path: PathBuf::from("./public"),
        }
    }
}

impl From<&FixtureConfig> for FixtureSource {
    fn from(config: &FixtureConfig) -> Self {
        match config {
            FixtureConfig::Directory { path } => FixtureSource::Directory(path.clone()),
            FixtureConfig::Http { base_url } => {
                FixtureSource::Http(base_url.trim_end_matches('/').to_string())
            }
        }
    }
}

impl From<FixtureSource> for FixtureConfig {
    fn from(source: FixtureSource) -> Self {
        match source {
            FixtureSource::Directory(path) => FixtureConfig::Directory { path },
            FixtureSource::Http(base_url) => FixtureConfig::Http { base_url },
        }
    }
}
