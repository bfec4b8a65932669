//! Demo Seeding
//!
//! First-run population of the store: an ordered, heterogeneous row sequence
//! inserted row by row. Not transactional; a partial failure leaves partial
//! data, which is acceptable for demo seeding only.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{Card, DetailItem, DomainResult, TaskItem};

use super::card_repo::CardRepository;
use super::db::Store;
use super::detail_repo::DetailRepository;
use super::task_repo::TaskRepository;
use super::traits::Repository;

/// One row of the seed sequence, tagged with its target table
pub enum SeedRow {
    Card(Card),
    Task(TaskItem),
    Detail(DetailItem),
}

/// Insert each row into its matching table, preserving sequence order.
pub fn insert_all(store: &Store, rows: &[SeedRow]) -> DomainResult<()> {
    let cards = CardRepository::new(store.clone());
    let tasks = TaskRepository::new(store.clone());
    let details = DetailRepository::new(store.clone());

    for row in rows {
        match row {
            SeedRow::Card(card) => cards.insert(card)?,
            SeedRow::Task(task) => tasks.insert(task)?,
            SeedRow::Detail(detail) => details.insert(detail)?,
        }
    }
    log::info!("seeded {} demo row(s)", rows.len());
    Ok(())
}

/// The demo data set: six tasks spread over three days starting at `now`,
/// each followed by its checklist lines. The last task deliberately has no
/// details, so the empty detail view is reachable from seeded data.
pub fn demo_rows(now: NaiveDateTime) -> Vec<SeedRow> {
    let mut rows = Vec::new();
    let mut dt = now;

    for offset in 0..3i64 {
        rows.push(SeedRow::Card(Card::new(
            now.date() + Duration::days(offset),
        )));
    }

    let task = |rows: &mut Vec<SeedRow>, dt: NaiveDateTime, description: &str| -> String {
        let task = TaskItem::new(dt, description);
        let id = task.id.clone();
        rows.push(SeedRow::Task(task));
        id
    };
    let detail = |rows: &mut Vec<SeedRow>, parent: &str, description: &str| {
        rows.push(SeedRow::Detail(DetailItem::new(parent, description)));
    };

    let parent = task(&mut rows, dt, "Weekly grocery shopping");
    detail(&mut rows, &parent, "List groceries needed");
    detail(&mut rows, &parent, "Check coupons/sales");
    detail(&mut rows, &parent, "Visit supermarket");
    detail(&mut rows, &parent, "Buy fruits, veggies, meat, dairy");

    let parent = task(&mut rows, dt, "Study for exams");
    detail(&mut rows, &parent, "Review math notes");
    detail(&mut rows, &parent, "Solve textbook problems");
    detail(&mut rows, &parent, "Study scientific methods");

    dt += Duration::days(1);
    let parent = task(&mut rows, dt, "Deep clean house");
    detail(&mut rows, &parent, "Vacuum carpets/rugs");
    detail(&mut rows, &parent, "Dust and clean windows");
    detail(&mut rows, &parent, "Mop kitchen/bathroom");
    detail(&mut rows, &parent, "Organize living room");

    let parent = task(&mut rows, dt, "Morning yoga routine");
    detail(&mut rows, &parent, "Prepare yoga mat");
    detail(&mut rows, &parent, "Start with stretching");
    detail(&mut rows, &parent, "Follow online class");

    let parent = task(&mut rows, dt, "Plan healthy meals");
    detail(&mut rows, &parent, "Research recipes");
    detail(&mut rows, &parent, "List ingredients");
    detail(&mut rows, &parent, "Create meal schedule");

    dt += Duration::days(1);
    task(&mut rows, dt, "Organize home office");

    rows
}
