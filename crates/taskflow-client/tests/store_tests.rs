/*
[INPUT]:  TaskStore driven against the in-memory FakeApi
[OUTPUT]: Collection, form and notification behavior of every store operation
[POS]:    Integration test layer - task state synchronization
[UPDATE]: When store operations or reconciliation rules change
*/

mod common;

use common::{Call, FakeApi, sample_tasks};
use rstest::rstest;
use taskflow_adapter::{Priority, TaskStatus};
use taskflow_client::form::{DUE_DATE_IN_PAST, DUE_DATE_INVALID, TITLE_REQUIRED};
use taskflow_client::{
    FieldUpdate, FilterCriteria, NotificationKind, Notifier, Selector, StoreError, TaskDraft,
    TaskField, TaskStore,
};
use tokio_test::assert_ok;

async fn loaded_store(api: &FakeApi) -> (TaskStore<FakeApi>, Notifier) {
    let notifier = Notifier::new();
    let mut store = TaskStore::new(api.clone(), notifier.clone());
    store.load().await;
    (store, notifier)
}

fn draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        ..TaskDraft::default()
    }
}

#[tokio::test]
async fn test_load_replaces_collection() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (store, notifier) = loaded_store(&api).await;

    assert!(store.is_loaded());
    assert!(store.load_error().is_none());
    assert_eq!(store.tasks().len(), 3);
    assert_eq!(store.tasks()[0].id, "1");
    assert!(notifier.current().is_none());
}

#[tokio::test]
async fn test_load_failure_leaves_empty_collection_and_notifies() {
    let api = FakeApi::with_tasks(sample_tasks());
    api.fail_with(503, "Service Unavailable");
    let (store, notifier) = loaded_store(&api).await;

    assert!(store.tasks().is_empty());
    let err = store.load_error().expect("load error recorded");
    assert_eq!(err.status(), 503);

    let notification = notifier.current().expect("error notification");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Failed to load tasks: Service Unavailable");
}

#[tokio::test]
async fn test_reload_after_failure_recovers() {
    let api = FakeApi::with_tasks(sample_tasks());
    api.fail_with(500, "boom");
    let (mut store, _notifier) = loaded_store(&api).await;
    assert!(store.load_error().is_some());

    api.recover();
    store.load().await;
    assert!(store.load_error().is_none());
    assert_eq!(store.tasks().len(), 3);
}

#[tokio::test]
async fn test_create_prepends_with_single_call() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;

    let created = assert_ok!(store.submit(&draft("  Plan sprint  "), None).await);

    assert_eq!(created.title, "Plan sprint");
    assert_eq!(store.tasks().len(), 4);
    assert_eq!(store.tasks()[0].id, created.id);
    assert_eq!(api.mutation_count(), 1);
    assert!(matches!(&api.calls()[1], Call::Create(input) if input.title == "Plan sprint"));

    let notification = notifier.current().expect("success notification");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Task created successfully");
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;

    assert_ok!(store.begin_edit("3"));
    store
        .form_mut()
        .set_field(FieldUpdate::Title("Report bug upstream".to_string()));
    store
        .form_mut()
        .set_field(FieldUpdate::Priority(Priority::High));
    let updated = assert_ok!(store.submit_form().await);

    assert_eq!(updated.id, "3");
    assert_eq!(api.mutation_count(), 1);
    assert!(matches!(api.calls().last(), Some(Call::Update(id, _)) if id == "3"));
    assert_eq!(store.tasks().len(), 3);
    assert_eq!(store.tasks()[2].title, "Report bug upstream");
    assert_eq!(store.tasks()[2].priority, Priority::High);
    assert_eq!(
        store.tasks().iter().filter(|task| task.id == "3").count(),
        1
    );
    assert!(!store.form().is_editing());
    assert_eq!(store.form().draft(), &TaskDraft::default());
    assert_eq!(
        notifier.current().map(|n| n.message),
        Some("Task updated successfully".to_string())
    );
}

#[rstest]
#[case("", TaskField::Title, TITLE_REQUIRED)]
#[case("   ", TaskField::Title, TITLE_REQUIRED)]
#[tokio::test]
async fn test_blank_title_never_reaches_backend(
    #[case] title: &str,
    #[case] field: TaskField,
    #[case] message: &str,
) {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;

    let result = store.submit(&draft(title), None).await;

    match result {
        Err(StoreError::Validation(errors)) => assert_eq!(errors.get(field), Some(message)),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(api.mutation_count(), 0);
    assert_eq!(store.tasks().len(), 3);
    assert_eq!(store.form().error(field), Some(message));
    assert!(notifier.current().is_none());
}

#[rstest]
#[case("2000-01-01", DUE_DATE_IN_PAST)]
#[case("next tuesday", DUE_DATE_INVALID)]
#[tokio::test]
async fn test_bad_due_date_is_rejected(#[case] due: &str, #[case] message: &str) {
    let api = FakeApi::with_tasks(Vec::new());
    let (mut store, _notifier) = loaded_store(&api).await;

    store
        .form_mut()
        .set_field(FieldUpdate::Title("Ship".to_string()));
    store
        .form_mut()
        .set_field(FieldUpdate::DueDate(due.to_string()));
    let result = store.submit_form().await;

    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(store.form().error(TaskField::DueDate), Some(message));
    assert_eq!(api.mutation_count(), 0);

    // editing the field clears its error
    store
        .form_mut()
        .set_field(FieldUpdate::DueDate(String::new()));
    assert!(store.form().error(TaskField::DueDate).is_none());
}

#[tokio::test]
async fn test_create_failure_keeps_collection_and_form() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;
    api.fail_with(422, "Title too long");

    store
        .form_mut()
        .set_field(FieldUpdate::Title("Doomed".to_string()));
    let result = store.submit_form().await;

    assert!(matches!(result, Err(StoreError::Remote(_))));
    assert_eq!(store.tasks().len(), 3);
    assert_eq!(store.form().draft().title, "Doomed");
    let notification = notifier.current().expect("error notification");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Failed to create task: Title too long");
}

#[tokio::test]
async fn test_update_failure_keeps_edit_binding_for_retry() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;

    assert_ok!(store.begin_edit("1"));
    store
        .form_mut()
        .set_field(FieldUpdate::Title("Write final report".to_string()));
    api.fail_with(409, "Record changed");

    let result = store.submit_form().await;

    assert!(matches!(result, Err(StoreError::Remote(_))));
    assert!(store.form().is_bound_to("1"));
    assert_eq!(store.form().draft().title, "Write final report");
    assert_eq!(store.get("1").map(|t| t.title.as_str()), Some("Write report"));
    assert_eq!(
        notifier.current().map(|n| n.message),
        Some("Failed to update task: Record changed".to_string())
    );

    api.recover();
    let updated = assert_ok!(store.submit_form().await);
    assert_eq!(updated.title, "Write final report");
    assert_eq!(store.tasks().len(), 3);
    assert!(!store.form().is_editing());
}

#[tokio::test]
async fn test_submit_reports_into_shared_form() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, _notifier) = loaded_store(&api).await;
    assert_ok!(store.begin_edit("2"));

    // a draft other than the form's still reports its errors on the form
    let result = store.submit(&draft(" "), None).await;
    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(store.form().error(TaskField::Title), Some(TITLE_REQUIRED));
    assert!(store.form().is_bound_to("2"));
    assert_eq!(store.form().draft().title, "Buy milk");

    // and a successful write resets it
    assert_ok!(store.submit(&draft("Standalone"), None).await);
    assert!(!store.form().is_editing());
    assert_eq!(store.form().draft(), &TaskDraft::default());
    assert!(store.form().errors().is_empty());
}

#[rstest]
#[case("1", TaskStatus::Completed, "Task marked as completed")]
#[case("2", TaskStatus::Pending, "Task marked as pending")]
#[case("3", TaskStatus::Completed, "Task marked as completed")]
#[tokio::test]
async fn test_toggle_completion(
    #[case] id: &str,
    #[case] expected: TaskStatus,
    #[case] message: &str,
) {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;

    let task = assert_ok!(store.toggle_completion(id).await);

    assert_eq!(task.status, expected);
    assert_eq!(store.get(id).map(|t| t.status), Some(expected));
    assert_eq!(
        api.calls().last(),
        Some(&Call::Update(
            id.to_string(),
            taskflow_adapter::TaskPatch::status(expected)
        ))
    );
    assert_eq!(notifier.current().map(|n| n.message), Some(message.to_string()));
}

#[tokio::test]
async fn test_toggle_unknown_id_makes_no_call() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, _notifier) = loaded_store(&api).await;

    let result = store.toggle_completion("missing").await;

    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "missing"));
    assert_eq!(api.mutation_count(), 0);
}

#[tokio::test]
async fn test_toggle_failure_keeps_status() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;
    api.fail_with(500, "Internal Server Error");

    assert!(store.toggle_completion("1").await.is_err());
    assert_eq!(store.get("1").map(|t| t.status), Some(TaskStatus::Pending));
    assert_eq!(
        notifier.current().map(|n| n.message),
        Some("Failed to update task: Internal Server Error".to_string())
    );
}

#[tokio::test]
async fn test_remove_bound_task_resets_form() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;

    assert_ok!(store.begin_edit("2"));
    assert!(store.form().is_bound_to("2"));

    let receipt = assert_ok!(store.remove("2").await);

    assert_eq!(receipt.id, "2");
    assert!(store.get("2").is_none());
    assert_eq!(store.tasks().len(), 2);
    assert!(!store.form().is_editing());
    assert_eq!(
        notifier.current().map(|n| n.message),
        Some("Task deleted".to_string())
    );
}

#[tokio::test]
async fn test_remove_other_task_keeps_edit_binding() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, _notifier) = loaded_store(&api).await;

    assert_ok!(store.begin_edit("1"));
    assert_ok!(store.remove("2").await);

    assert!(store.form().is_bound_to("1"));
}

#[tokio::test]
async fn test_remove_failure_keeps_task() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, notifier) = loaded_store(&api).await;
    api.fail_with(404, "Not Found");

    assert!(matches!(
        store.remove("1").await,
        Err(StoreError::Remote(_))
    ));
    assert!(store.get("1").is_some());
    assert_eq!(
        notifier.current().map(|n| n.message),
        Some("Failed to delete task: Not Found".to_string())
    );
}

#[tokio::test]
async fn test_begin_edit_unknown_id() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (mut store, _notifier) = loaded_store(&api).await;

    assert!(matches!(
        store.begin_edit("nope"),
        Err(StoreError::NotFound(_))
    ));
    assert!(!store.form().is_editing());
}

#[tokio::test]
async fn test_derive_and_counts_do_not_mutate() {
    let api = FakeApi::with_tasks(sample_tasks());
    let (store, _notifier) = loaded_store(&api).await;
    let before = store.tasks().to_vec();

    let criteria = FilterCriteria {
        status: Selector::All,
        priority: Selector::All,
        search: "REPORT".to_string(),
    };
    let view = store.derive(&criteria);
    let ids: Vec<&str> = view.iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let pending_only = store.derive(&FilterCriteria {
        status: Selector::Only(TaskStatus::Pending),
        ..FilterCriteria::default()
    });
    assert_eq!(pending_only.len(), 1);

    let counts = store.counts();
    assert_eq!(counts.total, 3);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.in_progress, 1);
    assert_eq!(counts.completed, 1);

    assert_eq!(store.tasks(), before.as_slice());
}
