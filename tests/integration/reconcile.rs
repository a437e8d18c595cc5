//! Occurrence-driven edits and deletes.

use cronboard::testing::TestBoard;
use cronboard::{BoardError, JobDraft, JobId, OccurrenceId, Reconciled, RepeatPattern};

use crate::common::utc;

const TWO_JOBS: &str = r#"[
    {"id": 1, "name": "One", "cronExpression": "0 9 * * *", "zoneId": "UTC"},
    {"id": 10, "name": "Ten", "cronExpression": "0 9 * * *", "zoneId": "UTC"}
]"#;

async fn two_jobs() -> TestBoard {
    let mut harness = TestBoard::at(utc(2024, 1, 1));
    harness.load_json(TWO_JOBS).await;
    harness
}

#[tokio::test]
async fn test_edit_job_one_never_touches_job_ten() {
    let mut harness = two_jobs().await;

    for index in 0..5 {
        let target = OccurrenceId::from(format!("1-{}", index).as_str());
        harness
            .board_mut()
            .update_by_occurrence(
                Some(&target),
                JobDraft::new(format!("One v{}", index))
                    .with_zone("UTC")
                    .with_cron("0 9 * * *"),
            )
            .await
            .unwrap();
    }

    let board = harness.board();
    let one = JobId::new("1");
    let ten = JobId::new("10");
    assert!(board.occurrences_for(&one).all(|o| o.title == "One v4"));
    assert!(board.occurrences_for(&ten).all(|o| o.title == "Ten"));
    assert_eq!(board.occurrences_for(&ten).count(), 5);
}

#[tokio::test]
async fn test_edit_applies_new_schedule_at_once() {
    let mut harness = two_jobs().await;

    let draft = JobDraft::new("One")
        .with_zone("UTC")
        .with_schedule_at("2024-01-03T18:45:00Z")
        .with_repeat(&RepeatPattern::Weekly)
        .unwrap();
    assert_eq!(draft.cron_expression.as_deref(), Some("45 18 * * WED"));

    let result = harness
        .board_mut()
        .update_by_occurrence(Some(&OccurrenceId::from("1-0")), draft)
        .await
        .unwrap();
    assert_eq!(
        result,
        Reconciled::Updated {
            job_id: JobId::new("1"),
            occurrences: 6
        }
    );

    let one_id = JobId::new("1");
    let one: Vec<_> = harness.board().occurrences_for(&one_id).collect();
    // Five weekly fire times plus the one-off
    assert_eq!(one.len(), 6);
    assert_eq!(one[1].start - one[0].start, chrono::Duration::days(7));
    assert_eq!(one[5].id.as_str(), "1-schedule");
}

#[tokio::test]
async fn test_create_then_delete_new_job() {
    let mut harness = two_jobs().await;

    let inserted = harness
        .board_mut()
        .update_by_occurrence(
            None,
            JobDraft::new("Fresh").with_zone("UTC").with_schedule_at("2024-01-02 08:00"),
        )
        .await
        .unwrap();

    let Reconciled::Inserted {
        job_id,
        occurrence: Some(occurrence),
    } = inserted
    else {
        panic!("expected an insert with an occurrence");
    };
    assert!(job_id.as_str().starts_with("new-"));
    assert_eq!(harness.board().occurrences().len(), 11);

    let removed = harness
        .board_mut()
        .delete_by_occurrence(&occurrence)
        .await
        .unwrap();

    assert_eq!(removed, 1);
    assert_eq!(harness.board().occurrences().len(), 10);
    assert_eq!(harness.board().jobs().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_job_ten_keeps_job_one() {
    let mut harness = two_jobs().await;

    harness
        .board_mut()
        .delete_by_occurrence(&OccurrenceId::from("10-0"))
        .await
        .unwrap();

    let board = harness.board();
    assert!(board.occurrences().iter().all(|o| o.job_id == JobId::new("1")));
    assert_eq!(board.occurrences().len(), 5);
}

#[tokio::test]
async fn test_edit_of_unsaved_selection_creates_job() {
    let mut harness = two_jobs().await;

    let result = harness
        .board_mut()
        .update_by_occurrence(
            Some(&OccurrenceId::from("new-42")),
            JobDraft::new("Unsaved").with_zone("UTC").with_cron("0 6 * * *"),
        )
        .await
        .unwrap();

    assert!(matches!(result, Reconciled::Inserted { occurrence: Some(_), .. }));
    assert_eq!(harness.board().jobs().await.unwrap().len(), 3);
    assert_eq!(harness.board().occurrences().len(), 11);
}

#[tokio::test]
async fn test_stale_occurrence_is_rejected() {
    let mut harness = two_jobs().await;
    let target = OccurrenceId::from("10-0");

    harness.board_mut().delete_by_occurrence(&target).await.unwrap();
    let again = harness.board_mut().delete_by_occurrence(&target).await;

    assert!(matches!(again, Err(BoardError::OccurrenceNotFound(_))));
}
