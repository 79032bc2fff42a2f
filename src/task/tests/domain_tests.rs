//! Domain-focused tests for tasks, priorities and view criteria.

use super::support::{StepClock, january, persisted, task_id};
use crate::task::domain::{
    ParseCriteriaError, ParsePriorityError, PersistedTaskData, Priority, SortKey, StatusFilter,
    Task, TaskDetails, TaskDomainError, TaskPatch, TaskSnapshot, ViewCriteria,
};
use chrono::{Duration, NaiveDate};
use eyre::ensure;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> StepClock {
    StepClock::starting_at(january(5), Duration::minutes(1))
}

#[rstest]
fn details_trim_title_and_description(clock: StepClock) {
    let details = TaskDetails::new("  Write status report  ")
        .expect("valid details")
        .with_description("  weekly  ");
    let task = Task::new(task_id("t1"), details, &clock);

    assert_eq!(task.title(), "Write status report");
    assert_eq!(task.description(), "weekly");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn details_reject_blank_title(#[case] title: &str) {
    assert_eq!(TaskDetails::new(title), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn new_task_takes_defaults_and_matching_timestamps(clock: StepClock) {
    let task = Task::new(
        task_id("t1"),
        TaskDetails::new("Buy milk").expect("valid details"),
        &clock,
    );

    assert_eq!(task.description(), "");
    assert_eq!(task.due_date(), None);
    assert_eq!(task.priority(), Priority::Medium);
    assert!(!task.is_completed());
    assert_eq!(task.created_at(), january(5));
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn apply_changes_only_supplied_fields(clock: StepClock) -> eyre::Result<()> {
    let due = NaiveDate::from_ymd_opt(2024, 2, 1).ok_or_else(|| eyre::eyre!("bad date"))?;
    let mut task = Task::from_persisted(persisted("t1", "Draft plan", 1));

    task.apply(
        TaskPatch::new()
            .with_description("outline first")
            .with_due_date(Some(due))
            .with_priority(Priority::High),
        &clock,
    );

    ensure!(task.title() == "Draft plan", "title should be untouched");
    ensure!(task.description() == "outline first", "description not applied");
    ensure!(task.due_date() == Some(due), "due date not applied");
    ensure!(task.priority() == Priority::High, "priority not applied");
    ensure!(task.updated_at() == january(5), "updated_at not refreshed");
    ensure!(task.created_at() == january(1), "created_at must not change");
    Ok(())
}

#[rstest]
fn apply_can_clear_due_date(clock: StepClock) {
    let mut task = Task::from_persisted(PersistedTaskData {
        due_date: NaiveDate::from_ymd_opt(2024, 1, 10),
        ..persisted("t1", "Dated", 1)
    });

    task.apply(TaskPatch::new().with_due_date(None), &clock);

    assert_eq!(task.due_date(), None);
}

#[rstest]
fn apply_keeps_blank_title_as_given(clock: StepClock) {
    let mut task = Task::from_persisted(persisted("t1", "Original", 1));

    task.apply(TaskPatch::new().with_title("  "), &clock);

    assert_eq!(task.title(), "  ");
}

#[rstest]
fn updated_at_never_moves_backwards() {
    let mut task = Task::from_persisted(persisted("t1", "Future-stamped", 20));
    let stale_clock = StepClock::starting_at(january(2), Duration::zero());

    task.toggle_completed(&stale_clock);

    assert!(task.is_completed());
    assert_eq!(task.updated_at(), january(20));
}

#[rstest]
#[case("Low", Priority::Low)]
#[case("medium", Priority::Medium)]
#[case(" HIGH ", Priority::High)]
fn priority_parses_case_insensitively(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw), Ok(expected));
}

#[rstest]
fn priority_rejects_unknown_level() {
    assert_eq!(
        Priority::try_from("urgent"),
        Err(ParsePriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn priority_weights_order_high_first() {
    assert!(Priority::High.weight() > Priority::Medium.weight());
    assert!(Priority::Medium.weight() > Priority::Low.weight());
}

#[rstest]
fn criteria_tokens_parse_back_to_their_variants() {
    for filter in StatusFilter::ALL {
        assert_eq!(StatusFilter::try_from(filter.as_str()), Ok(filter));
    }
    for key in SortKey::ALL {
        assert_eq!(SortKey::try_from(key.as_str()), Ok(key));
    }
}

#[rstest]
fn criteria_reject_unknown_tokens() {
    assert_eq!(
        StatusFilter::try_from("archived"),
        Err(ParseCriteriaError::Filter("archived".to_owned()))
    );
    assert_eq!(
        SortKey::try_from("title_asc"),
        Err(ParseCriteriaError::SortKey("title_asc".to_owned()))
    );
}

#[rstest]
fn default_criteria_show_everything_newest_first() {
    let criteria = ViewCriteria::default();

    assert_eq!(criteria.filter, StatusFilter::All);
    assert_eq!(criteria.search, "");
    assert_eq!(criteria.sort, SortKey::CreatedDesc);
    assert_eq!(criteria.search_needle(), None);
}

#[rstest]
#[case("  Status ", Some("status"))]
#[case("   ", None)]
fn search_needle_is_trimmed_and_lowercased(#[case] search: &str, #[case] expected: Option<&str>) {
    let criteria = ViewCriteria::default().with_search(search);

    assert_eq!(criteria.search_needle().as_deref(), expected);
}

#[rstest]
fn snapshot_validation_accepts_well_formed_collection() {
    let snapshot = TaskSnapshot::new(vec![
        Task::from_persisted(persisted("t1", "One", 1)),
        Task::from_persisted(persisted("t2", "Two", 2)),
    ]);

    assert_eq!(snapshot.validate(), Ok(()));
}

#[rstest]
fn snapshot_validation_rejects_duplicate_ids() {
    let snapshot = TaskSnapshot::new(vec![
        Task::from_persisted(persisted("t1", "One", 1)),
        Task::from_persisted(persisted("t1", "Again", 2)),
    ]);

    assert_eq!(
        snapshot.validate(),
        Err(TaskDomainError::DuplicateTaskId("t1".to_owned()))
    );
}

#[rstest]
fn snapshot_validation_accepts_blank_title_left_by_an_edit() {
    let snapshot = TaskSnapshot::new(vec![
        Task::from_persisted(persisted("t1", " ", 1)),
        Task::from_persisted(persisted("t2", "Named", 2)),
    ]);

    assert_eq!(snapshot.validate(), Ok(()));
}

#[rstest]
fn snapshot_validation_rejects_update_before_creation() {
    let snapshot = TaskSnapshot::new(vec![Task::from_persisted(
        PersistedTaskData {
            updated_at: january(1),
            ..persisted("t1", "Backdated", 3)
        },
    )]);

    assert_eq!(
        snapshot.validate(),
        Err(TaskDomainError::UpdatedBeforeCreated("t1".to_owned()))
    );
}

#[rstest]
fn task_serializes_with_camel_case_keys_and_calendar_dates() -> eyre::Result<()> {
    let task = Task::from_persisted(PersistedTaskData {
        due_date: NaiveDate::from_ymd_opt(2024, 1, 10),
        priority: Priority::High,
        ..persisted("t1", "Ship release", 1)
    });

    let value = serde_json::to_value(&task)?;

    ensure!(value["id"] == "t1", "id key");
    ensure!(value["dueDate"] == "2024-01-10", "dueDate key: {value}");
    ensure!(value["priority"] == "High", "priority value");
    ensure!(value["completed"] == false, "completed key");
    ensure!(value.get("createdAt").is_some(), "createdAt key");
    ensure!(value.get("updatedAt").is_some(), "updatedAt key");
    Ok(())
}

#[rstest]
fn task_deserializes_with_defaults_for_optional_fields() -> eyre::Result<()> {
    let raw = r#"{
        "id": "legacy-1",
        "title": "Imported",
        "createdAt": "2024-01-01T09:00:00Z",
        "updatedAt": "2024-01-01T09:00:00Z"
    }"#;

    let task: Task = serde_json::from_str(raw)?;

    ensure!(task.description().is_empty(), "description default");
    ensure!(task.due_date().is_none(), "dueDate default");
    ensure!(task.priority() == Priority::Medium, "priority default");
    ensure!(!task.is_completed(), "completed default");
    Ok(())
}
