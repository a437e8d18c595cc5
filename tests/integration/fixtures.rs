//! Fixture loading from disk.

use cronboard::testing::TestBoard;
use cronboard::{Board, InMemoryJobStore, Projector};
use std::sync::Arc;

use crate::common::{FixtureDir, utc};

const DATA: &str = r#"{
    "profile": {"name": "Dewi", "role": "Scheduler admin"},
    "menu": [{"title": "Dashboard"}, {"title": "Scheduler"}, {"title": "Calendar"}],
    "transactions": {"total": 3782, "failed": 5359, "successful": 3782, "weekly": [120, 340, 90, 410, 280, 60, 30]}
}"#;

const ORDERS: &str = r#"[
    {
        "id": 1,
        "name": "Sync orders",
        "description": "Pull new orders",
        "cronExpression": "0 */2 * * *",
        "zoneId": "Asia/Jakarta",
        "request": {
            "url": "https://api.example.com/orders/sync",
            "httpMethod": "POST",
            "httpHeaders": [{"key": "Content-Type", "value": "application/json"}],
            "data": "{\"full\": false}"
        }
    },
    {"name": "Reminder", "scheduleAt": "2024-01-10T03:00:00Z"}
]"#;

#[tokio::test]
async fn test_load_both_fixtures() {
    let dir = FixtureDir::new().with_dashboard(DATA).with_jobs(ORDERS);
    let loader = dir.loader();

    let data = loader.load_dashboard().await.unwrap();
    assert_eq!(data.menu.len(), 3);
    let metrics = data.metrics();
    assert_eq!(metrics.weekly_total, 1330);
    assert_eq!(metrics.weekly_peak, 410);

    let jobs = loader.load_jobs().await;
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1].id().as_str(), "order-1");
    let request = jobs[0].request().unwrap();
    assert_eq!(request.summary(), "POST https://api.example.com/orders/sync");
}

#[tokio::test]
async fn test_board_reload_from_directory() {
    let dir = FixtureDir::new().with_jobs(ORDERS);
    let mut harness = TestBoard::at(utc(2024, 1, 1));

    let count = harness.board_mut().reload_from(&dir.loader()).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(harness.board().occurrences().len(), 6);
}

#[tokio::test]
async fn test_missing_directory_leaves_board_empty() {
    let dir = FixtureDir::new();
    let mut board = Board::new(Arc::new(InMemoryJobStore::new()), Projector::default());

    let count = board.reload_from(&dir.loader()).await.unwrap();

    assert_eq!(count, 0);
    assert!(board.occurrences().is_empty());
    assert!(dir.loader().load_dashboard().await.is_none());
}
