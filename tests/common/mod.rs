//! Common test utilities shared across integration tests.

use chrono::{DateTime, TimeZone, Utc};
use cronboard::{FixtureLoader, FixtureSource};
use tempfile::TempDir;

/// Midnight UTC on the given day.
pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// A temporary directory holding fixture files.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `Order.json`.
    pub fn with_jobs(self, json: &str) -> Self {
        std::fs::write(self.dir.path().join("Order.json"), json).unwrap();
        self
    }

    /// Write `data.json`.
    pub fn with_dashboard(self, json: &str) -> Self {
        std::fs::write(self.dir.path().join("data.json"), json).unwrap();
        self
    }

    /// A loader reading from this directory.
    pub fn loader(&self) -> FixtureLoader {
        FixtureLoader::new(FixtureSource::Directory(self.dir.path().to_path_buf())).unwrap()
    }
}
