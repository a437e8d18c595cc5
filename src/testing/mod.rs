//! Testing utilities for users of the cronboard library.
//!
//! [`TestBoard`] wires a board to in-memory storage and a pinned clock.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use cronboard::testing::TestBoard;
//!
//! # tokio_test_block(async {
//! let mut harness = TestBoard::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! harness
//!     .load_json(r#"[{"id": 1, "name": "Ping", "cronExpression": "0 9 * * *", "zoneId": "UTC"}]"#)
//!     .await;
//! assert_eq!(harness.board().occurrences().len(), 5);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::board::Board;
use crate::core::clock::FixedClock;
use crate::core::job::{DEFAULT_TIMEZONE, Job, JobRecord};
use crate::core::projector::Projector;
use crate::storage::InMemoryJobStore;

/// A board wired to in-memory storage and a [`FixedClock`].
pub struct TestBoard {
    board: Board,
    clock: Arc<FixedClock>,
}

impl TestBoard {
    /// Create an empty board whose clock reads `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let clock = Arc::new(FixedClock::at(now));
        let projector = Projector::new(clock.clone());
        Self {
            board: Board::new(Arc::new(InMemoryJobStore::new()), projector),
            clock,
        }
    }

    /// Load jobs given as an `Order.json` document.
    ///
    /// # Panics
    ///
    /// Panics if the JSON is not an array of job records.
    pub async fn load_json(&mut self, json: &str) -> &mut Self {
        let records: Vec<JobRecord> =
            serde_json::from_str(json).expect("test fixture must be an array of job records");
        let jobs = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Job::from_record(record, index, DEFAULT_TIMEZONE))
            .collect();
        self.load(jobs).await
    }

    /// Load jobs directly.
    ///
    /// # Panics
    ///
    /// Panics on storage errors.
    pub async fn load(&mut self, jobs: Vec<Job>) -> &mut Self {
        self.board.load(jobs).await.expect("in-memory load cannot fail");
        self
    }

    /// The pinned clock; move it and call [`Board::refresh`] to re-evaluate statuses.
    pub fn clock(&self) -> &FixedClock {
        &self.clock
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
