//! Task Repository
//!
//! SQLite-backed access to `task_item` rows. The date-range query is what
//! binds tasks to day cards: a card shows the tasks whose timestamp falls
//! inside its calendar day.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::params;

use crate::domain::{DomainError, DomainResult, TaskItem};

use super::db::{from_ticks, to_ticks, Store};
use super::traits::Repository;

const COLUMNS: &str = "id, datetime, description";

pub struct TaskRepository {
    store: Store,
}

impl TaskRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Tasks whose timestamp lies in `[day 00:00:00, day+1 00:00:00)`, in
    /// insertion order. The upper bound is exclusive: a task stamped exactly
    /// at the next midnight belongs to the next day.
    pub fn list_for_day(&self, day: NaiveDate) -> DomainResult<Vec<TaskItem>> {
        let start = to_ticks(day.and_time(NaiveTime::MIN));
        let next = day
            .succ_opt()
            .ok_or_else(|| DomainError::InvalidInput(format!("date out of range: {}", day)))?;
        let end = to_ticks(next.and_time(NaiveTime::MIN));

        let conn = self.store.connect_read_only()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM task_item WHERE datetime >= ?1 AND datetime < ?2 ORDER BY rowid"
        ))?;
        let rows = stmt.query_map(params![start, end], row_to_parts)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(parts_to_task(row?)?);
        }
        log::debug!("loaded {} task(s) for {}", tasks.len(), day);
        Ok(tasks)
    }
}

impl Repository<TaskItem> for TaskRepository {
    fn insert(&self, entity: &TaskItem) -> DomainResult<()> {
        let conn = self.store.connect()?;
        conn.execute(
            "INSERT INTO task_item (id, datetime, description) VALUES (?1, ?2, ?3)",
            params![entity.id, to_ticks(entity.datetime), entity.description],
        )?;
        Ok(())
    }

    fn find_by_id(&self, id: &String) -> DomainResult<Option<TaskItem>> {
        let conn = self.store.connect_read_only()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {COLUMNS} FROM task_item WHERE id = ?1"))?;
        let mut rows = stmt.query_map(params![id], row_to_parts)?;
        match rows.next() {
            Some(row) => Ok(Some(parts_to_task(row?)?)),
            None => Ok(None),
        }
    }

    fn list(&self) -> DomainResult<Vec<TaskItem>> {
        let conn = self.store.connect_read_only()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {COLUMNS} FROM task_item ORDER BY rowid"))?;
        let rows = stmt.query_map([], row_to_parts)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(parts_to_task(row?)?);
        }
        Ok(tasks)
    }
}

fn row_to_parts(row: &rusqlite::Row<'_>) -> rusqlite::Result<(String, i64, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn parts_to_task((id, ticks, description): (String, i64, String)) -> DomainResult<TaskItem> {
    Ok(TaskItem {
        id,
        datetime: from_ticks(ticks)?,
        description,
        details: Vec::new(),
    })
}
