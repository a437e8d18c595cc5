//! Projection of fixture job lists.

use chrono::{Duration, TimeZone, Utc};
use cronboard::testing::TestBoard;
use cronboard::{OccurrenceStatus, cron_to_next_occurrences};

use crate::common::utc;

#[tokio::test]
async fn test_daily_job_projects_five_mornings() {
    let mut harness = TestBoard::at(utc(2024, 1, 1));
    harness
        .load_json(r#"[{"id": 1, "name": "Ping", "cronExpression": "0 9 * * *", "zoneId": "UTC"}]"#)
        .await;

    let occurrences = harness.board().occurrences();
    assert_eq!(occurrences.len(), 5);

    let starts: Vec<_> = occurrences.iter().map(|o| o.start).collect();
    let expected: Vec<_> = (1..=5)
        .map(|day| Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap())
        .collect();
    assert_eq!(starts, expected);
    assert!(occurrences.iter().all(|o| o.status == OccurrenceStatus::Active));
    assert!(occurrences.iter().all(|o| o.title == "Ping"));
}

#[tokio::test]
async fn test_schedule_at_status_flips_with_clock() {
    let json = r#"[{"id": "once", "name": "Once", "scheduleAt": "2024-01-01T00:00:00Z"}]"#;

    let mut before = TestBoard::at(utc(2023, 1, 1));
    before.load_json(json).await;
    assert_eq!(before.board().occurrences()[0].status, OccurrenceStatus::Pending);

    let mut after = TestBoard::at(utc(2024, 6, 1));
    after.load_json(json).await;
    assert_eq!(after.board().occurrences()[0].status, OccurrenceStatus::Active);
}

#[tokio::test]
async fn test_refresh_after_clock_moves() {
    let mut harness = TestBoard::at(utc(2023, 12, 31));
    harness
        .load_json(r#"[{"id": 3, "scheduleAt": "2024-01-01T00:00:00Z"}]"#)
        .await;
    assert_eq!(harness.board().occurrences()[0].status, OccurrenceStatus::Pending);

    harness.clock().advance(Duration::days(2));
    harness.board_mut().refresh().await.unwrap();

    assert_eq!(harness.board().occurrences()[0].status, OccurrenceStatus::Active);
    assert_eq!(harness.board().occurrences()[0].title, "Untitled");
}

#[tokio::test]
async fn test_mixed_list_skips_broken_jobs() {
    let json = r#"[
        {"id": 1, "name": "Good", "cronExpression": "*/30 * * * *", "zoneId": "UTC"},
        {"id": 2, "name": "Broken cron", "cronExpression": "every tuesday"},
        {"id": 3, "name": "Nothing"},
        {"id": 4, "name": "Broken time", "scheduleAt": "soon"},
        {"id": 5, "name": "Both", "cronExpression": "0 0 1 * *", "scheduleAt": "2024-02-01T00:00:00Z", "zoneId": "UTC"}
    ]"#;

    let mut harness = TestBoard::at(utc(2024, 1, 1));
    harness.load_json(json).await;

    let ids: Vec<&str> = harness
        .board()
        .occurrences()
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["1-0", "1-1", "1-2", "1-3", "1-4", "5-0", "5-1", "5-2", "5-3", "5-4", "5-schedule"]
    );
}

#[tokio::test]
async fn test_jakarta_default_timezone() {
    // No zoneId: 09:00 in Jakarta is 02:00 UTC
    let mut harness = TestBoard::at(utc(2024, 1, 1));
    harness
        .load_json(r#"[{"id": 1, "cronExpression": "0 9 * * *"}]"#)
        .await;

    let first = &harness.board().occurrences()[0];
    assert_eq!(first.start, Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap());
}

#[test]
fn test_next_occurrences_strictly_increase() {
    let times = cron_to_next_occurrences("15 */6 * * 1-5", "Europe/London", 5, utc(2024, 3, 29));

    assert_eq!(times.len(), 5);
    assert!(times.windows(2).all(|w| w[0] < w[1]));
    assert!(times.iter().all(|t| *t > utc(2024, 3, 29)));

    assert!(cron_to_next_occurrences("bogus", "UTC", 5, utc(2024, 1, 1)).is_empty());
}
