//! Database Connection and Setup
//!
//! Owns the store file path and the schema. Connections are opened per
//! operation and dropped when it completes; there is no shared long-lived
//! connection or pool. All access is synchronous on the calling thread.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime};
use rusqlite::{Connection, OpenFlags};

use crate::domain::{DomainError, DomainResult};

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Handle to the on-disk store. Cheap to clone; every clone opens its own
/// scoped connections against the same file.
#[derive(Debug, Clone)]
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    /// Open the store at `path`, creating the schema if missing.
    pub fn open(path: impl AsRef<Path>) -> DomainResult<Self> {
        let store = Self {
            db_path: path.as_ref().to_path_buf(),
        };
        let conn = store.connect()?;
        migrate(&conn)?;
        log::debug!("store ready at {}", store.db_path.display());
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Scoped read-write connection for one operation.
    pub(crate) fn connect(&self) -> DomainResult<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Scoped read-only connection for pure loads.
    pub(crate) fn connect_read_only(&self) -> DomainResult<Connection> {
        Ok(Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?)
    }
}

/// Create the three tables and the parent-id index.
///
/// `detail_item.parent_id` intentionally carries no FOREIGN KEY clause: the
/// reference to `task_item.id` is a soft invariant, checked only by the
/// startup integrity scan.
fn migrate(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS card (
            id TEXT PRIMARY KEY,
            datetime INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS task_item (
            id TEXT PRIMARY KEY,
            datetime INTEGER NOT NULL,
            description TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS detail_item (
            id TEXT PRIMARY KEY,
            parent_id TEXT NOT NULL,
            description TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_detail_parent ON detail_item(parent_id);",
    )?;
    Ok(())
}

/// Timestamps are stored as i64 Unix seconds, a portable stand-in for the
/// original store's native tick encoding. Day-range queries compare these
/// directly.
pub(crate) fn to_ticks(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp()
}

pub(crate) fn from_ticks(secs: i64) -> DomainResult<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| DomainError::Internal(format!("timestamp out of range: {}", secs)))
}
