use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use taskdeck_core::{
    DomainStore, MemoryStorage, TaskDraft, TaskPatch, TaskStatus,
};
use uuid::Uuid;

#[test]
fn add_task_stamps_id_and_creation_times() {
    let store = DomainStore::new(MemoryStorage::new());

    let task = store.add_task(TaskDraft::titled("write release notes"));

    assert!(!task.id.is_nil());
    assert_eq!(task.created_at, task.updated_at);
    assert_eq!(task.status, TaskStatus::Pending);

    let stored = store.get_tasks();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], task);
}

#[test]
fn add_task_defaults_due_date_to_creation_time() {
    let store = DomainStore::new(MemoryStorage::new());

    let defaulted = store.add_task(TaskDraft::titled("no explicit deadline"));
    assert_eq!(defaulted.due_date, defaulted.created_at);

    let due = Utc.with_ymd_and_hms(2027, 1, 15, 18, 0, 0).unwrap();
    let explicit = store.add_task(TaskDraft {
        due_date: Some(due),
        ..TaskDraft::titled("with deadline")
    });
    assert_eq!(explicit.due_date, due);
}

#[test]
fn add_task_generates_unique_ids() {
    let store = DomainStore::new(MemoryStorage::new());

    let ids: HashSet<_> = (0..20)
        .map(|i| store.add_task(TaskDraft::titled(format!("task {i}"))).id)
        .collect();

    assert_eq!(ids.len(), 20);
    assert_eq!(store.get_tasks().len(), 20);
}

#[test]
fn completing_a_task_refreshes_updated_at() {
    let store = DomainStore::new(MemoryStorage::new());
    let task = store.add_task(TaskDraft::titled("flip me"));
    let stamped_at = task.updated_at;

    thread::sleep(Duration::from_millis(5));
    let updated = store
        .update_task(task.id, TaskPatch::status_only(TaskStatus::Completed))
        .expect("task exists");

    assert_eq!(updated.status, TaskStatus::Completed);
    assert!(updated.updated_at > stamped_at);
    assert_eq!(updated.created_at, task.created_at);

    let reloaded = store.get_tasks();
    assert_eq!(reloaded[0].status, TaskStatus::Completed);
    assert!(reloaded[0].updated_at > reloaded[0].created_at);
}

#[test]
fn completion_toggle_is_reversible() {
    let store = DomainStore::new(MemoryStorage::new());
    let task = store.add_task(TaskDraft::titled("toggle"));

    store
        .update_task(task.id, TaskPatch::status_only(TaskStatus::Completed))
        .expect("task exists");
    let reverted = store
        .update_task(task.id, TaskPatch::status_only(TaskStatus::Pending))
        .expect("task exists");

    assert_eq!(reverted.status, TaskStatus::Pending);
}

#[test]
fn update_of_unknown_id_is_none_and_writes_nothing() {
    let store = DomainStore::new(MemoryStorage::new());
    store.add_task(TaskDraft::titled("only resident"));
    let before = store.get_tasks();

    let result = store.update_task(
        Uuid::new_v4(),
        TaskPatch {
            title: Some("ghost".to_string()),
            ..TaskPatch::default()
        },
    );

    assert!(result.is_none());
    assert_eq!(store.get_tasks(), before);
}

#[test]
fn update_merges_partial_fields_over_existing_record() {
    let store = DomainStore::new(MemoryStorage::new());
    let task = store.add_task(TaskDraft {
        description: "first pass".to_string(),
        notes: "check appendix".to_string(),
        ..TaskDraft::titled("draft chapter")
    });

    let updated = store
        .update_task(
            task.id,
            TaskPatch {
                description: Some("second pass".to_string()),
                ..TaskPatch::default()
            },
        )
        .expect("task exists");

    assert_eq!(updated.title, "draft chapter");
    assert_eq!(updated.description, "second pass");
    assert_eq!(updated.notes, "check appendix");
    assert_eq!(updated.id, task.id);
}

#[test]
fn delete_returns_whether_a_removal_occurred() {
    let store = DomainStore::new(MemoryStorage::new());
    let keep = store.add_task(TaskDraft::titled("keep"));
    let doomed = store.add_task(TaskDraft::titled("drop"));

    assert!(!store.delete_task(Uuid::new_v4()));
    assert_eq!(store.get_tasks().len(), 2);

    assert!(store.delete_task(doomed.id));
    let remaining = store.get_tasks();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    assert!(!store.delete_task(doomed.id));
}

#[test]
fn save_then_get_roundtrips_structurally() {
    let store = DomainStore::new(MemoryStorage::new());
    let tasks = vec![
        store.add_task(TaskDraft::titled("one")),
        store.add_task(TaskDraft::titled("two")),
    ];

    store.save_tasks(&tasks);
    assert_eq!(store.get_tasks(), tasks);
}

#[test]
fn collections_preserve_insertion_order() {
    let store = DomainStore::new(MemoryStorage::new());
    for title in ["first", "second", "third"] {
        store.add_task(TaskDraft::titled(title));
    }

    let titles: Vec<String> = store.get_tasks().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}
