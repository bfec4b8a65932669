//! Detail Repository
//!
//! SQLite-backed access to `detail_item` rows: the parent filter that backs
//! the task detail view, and the single-row `done` update issued by the
//! persistence bridge.

use rusqlite::params;

use crate::domain::{DetailItem, DomainResult};

use super::db::Store;
use super::traits::Repository;

const COLUMNS: &str = "id, parent_id, description, done";

pub struct DetailRepository {
    store: Store,
}

impl DetailRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Details belonging to one task, in insertion order. A task with no
    /// details yields an empty vec.
    pub fn list_for_parent(&self, parent_id: &str) -> DomainResult<Vec<DetailItem>> {
        let conn = self.store.connect_read_only()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM detail_item WHERE parent_id = ?1 ORDER BY rowid"
        ))?;
        let rows = stmt.query_map(params![parent_id], row_to_detail)?;
        let details = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        log::debug!("loaded {} detail(s) for task {}", details.len(), parent_id);
        Ok(details)
    }

    /// Persist a new `done` value for exactly one row. Individual and
    /// immediate: each toggle is its own statement, never batched.
    pub fn set_done(&self, id: &str, done: bool) -> DomainResult<()> {
        let conn = self.store.connect()?;
        let updated = conn.execute(
            "UPDATE detail_item SET done = ?1 WHERE id = ?2",
            params![done, id],
        )?;
        if updated == 0 {
            log::warn!("done update matched no row for detail {}", id);
        }
        Ok(())
    }

    /// Number of rows whose parent_id references no existing task. The soft
    /// parent invariant is unenforced; this scan is how violations surface.
    pub fn count_orphans(&self) -> DomainResult<i64> {
        let conn = self.store.connect_read_only()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM detail_item d
             WHERE NOT EXISTS (SELECT 1 FROM task_item t WHERE t.id = d.parent_id)",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

impl Repository<DetailItem> for DetailRepository {
    fn insert(&self, entity: &DetailItem) -> DomainResult<()> {
        let conn = self.store.connect()?;
        conn.execute(
            "INSERT INTO detail_item (id, parent_id, description, done) VALUES (?1, ?2, ?3, ?4)",
            params![entity.id, entity.parent_id, entity.description, entity.done],
        )?;
        Ok(())
    }

    fn find_by_id(&self, id: &String) -> DomainResult<Option<DetailItem>> {
        let conn = self.store.connect_read_only()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {COLUMNS} FROM detail_item WHERE id = ?1"))?;
        let mut rows = stmt.query_map(params![id], row_to_detail)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    fn list(&self) -> DomainResult<Vec<DetailItem>> {
        let conn = self.store.connect_read_only()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {COLUMNS} FROM detail_item ORDER BY rowid"))?;
        let rows = stmt.query_map([], row_to_detail)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

fn row_to_detail(row: &rusqlite::Row<'_>) -> rusqlite::Result<DetailItem> {
    Ok(DetailItem {
        id: row.get(0)?,
        parent_id: row.get(1)?,
        description: row.get(2)?,
        done: row.get(3)?,
    })
}
