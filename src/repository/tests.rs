//! Repository Integration Tests
//!
//! Exercise the repositories against a real store file in a temp directory.
//! Per-operation connections mean `:memory:` cannot be shared, so fixtures
//! are on-disk.

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use crate::domain::{DetailItem, TaskItem};
use crate::repository::{seed, CardRepository, DetailRepository, Repository, Store, TaskRepository};

fn setup_store() -> (TempDir, Store) {
    let dir = TempDir::new().expect("temp dir");
    let store = Store::open(dir.path().join("tasks.db")).expect("open store");
    (dir, store)
}

fn at(date: NaiveDate, h: u32, m: u32, s: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, s).expect("valid time")
}

#[test]
fn day_query_upper_bound_is_exclusive() {
    let (_dir, store) = setup_store();
    let repo = TaskRepository::new(store);
    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let next = day.succ_opt().unwrap();

    repo.insert(&TaskItem::new(at(day, 0, 0, 0), "at midnight"))
        .unwrap();
    repo.insert(&TaskItem::new(at(day, 23, 59, 59), "last second"))
        .unwrap();
    repo.insert(&TaskItem::new(at(next, 0, 0, 0), "next midnight"))
        .unwrap();

    let tasks = repo.list_for_day(day).unwrap();
    let descriptions: Vec<_> = tasks.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, ["at midnight", "last second"]);

    let tomorrow = repo.list_for_day(next).unwrap();
    assert_eq!(tomorrow.len(), 1);
    assert_eq!(tomorrow[0].description, "next midnight");
}

#[test]
fn day_query_with_no_rows_is_empty() {
    let (_dir, store) = setup_store();
    let repo = TaskRepository::new(store);
    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    assert!(repo.list_for_day(day).unwrap().is_empty());
}

#[test]
fn parent_query_with_no_details_is_empty() {
    let (_dir, store) = setup_store();
    let tasks = TaskRepository::new(store.clone());
    let details = DetailRepository::new(store);

    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let task = TaskItem::new(at(day, 9, 0, 0), "no details yet");
    tasks.insert(&task).unwrap();

    assert!(details.list_for_parent(&task.id).unwrap().is_empty());
}

#[test]
fn parent_query_returns_insertion_order() {
    let (_dir, store) = setup_store();
    let tasks = TaskRepository::new(store.clone());
    let details = DetailRepository::new(store);

    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let task = TaskItem::new(at(day, 9, 0, 0), "with details");
    tasks.insert(&task).unwrap();
    for label in ["first", "second", "third"] {
        details.insert(&DetailItem::new(&task.id, label)).unwrap();
    }

    let loaded = details.list_for_parent(&task.id).unwrap();
    let labels: Vec<_> = loaded.iter().map(|d| d.description.as_str()).collect();
    assert_eq!(labels, ["first", "second", "third"]);
    assert!(loaded.iter().all(|d| !d.done));
}

#[test]
fn set_done_updates_exactly_one_row() {
    let (_dir, store) = setup_store();
    let tasks = TaskRepository::new(store.clone());
    let details = DetailRepository::new(store);

    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let task = TaskItem::new(at(day, 9, 0, 0), "toggle target");
    tasks.insert(&task).unwrap();

    let a = DetailItem::new(&task.id, "a");
    let b = DetailItem::new(&task.id, "b");
    details.insert(&a).unwrap();
    details.insert(&b).unwrap();

    details.set_done(&a.id, true).unwrap();

    let loaded = details.list_for_parent(&task.id).unwrap();
    assert!(loaded[0].done);
    assert!(!loaded[1].done);
}

#[test]
fn orphaned_details_are_counted_but_skipped_by_queries() {
    let (_dir, store) = setup_store();
    let tasks = TaskRepository::new(store.clone());
    let details = DetailRepository::new(store);

    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let task = TaskItem::new(at(day, 9, 0, 0), "real parent");
    tasks.insert(&task).unwrap();
    details.insert(&DetailItem::new(&task.id, "attached")).unwrap();
    details
        .insert(&DetailItem::new("no-such-task", "orphan"))
        .unwrap();

    assert_eq!(details.count_orphans().unwrap(), 1);
    assert_eq!(details.list_for_parent(&task.id).unwrap().len(), 1);
}

#[test]
fn demo_seed_populates_all_three_tables() {
    let (_dir, store) = setup_store();
    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let rows = seed::demo_rows(at(day, 14, 30, 0));
    seed::insert_all(&store, &rows).unwrap();

    let cards = CardRepository::new(store.clone());
    let tasks = TaskRepository::new(store.clone());
    let details = DetailRepository::new(store);

    let seeded_cards = cards.list().unwrap();
    assert_eq!(seeded_cards.len(), 3);
    assert_eq!(seeded_cards[0].date, day);
    assert_eq!(tasks.list().unwrap().len(), 6);
    assert_eq!(details.list().unwrap().len(), 17);
    assert_eq!(details.count_orphans().unwrap(), 0);

    // Day 0 carries two tasks, day 1 three, day 2 one.
    assert_eq!(tasks.list_for_day(day).unwrap().len(), 2);
    assert_eq!(tasks.list_for_day(day.succ_opt().unwrap()).unwrap().len(), 3);

    let groceries = &tasks.list_for_day(day).unwrap()[0];
    assert_eq!(groceries.description, "Weekly grocery shopping");
    let lines = details.list_for_parent(&groceries.id).unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].description, "List groceries needed");
}

#[test]
fn seeded_task_without_details_loads_empty() {
    let (_dir, store) = setup_store();
    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    seed::insert_all(&store, &seed::demo_rows(at(day, 14, 30, 0))).unwrap();

    let tasks = TaskRepository::new(store.clone());
    let details = DetailRepository::new(store);

    let office = &tasks
        .list_for_day(day + chrono::Duration::days(2))
        .unwrap()[0];
    assert_eq!(office.description, "Organize home office");
    assert!(details.list_for_parent(&office.id).unwrap().is_empty());
}

#[test]
fn find_by_id_roundtrips() {
    let (_dir, store) = setup_store();
    let tasks = TaskRepository::new(store);

    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let task = TaskItem::new(at(day, 9, 15, 0), "find me");
    tasks.insert(&task).unwrap();

    let found = tasks.find_by_id(&task.id).unwrap().expect("present");
    assert_eq!(found.description, "find me");
    assert_eq!(found.datetime, task.datetime);
    assert!(tasks.find_by_id(&"missing".to_string()).unwrap().is_none());
}
