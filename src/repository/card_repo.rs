//! Card Repository
//!
//! SQLite-backed access to `card` rows. Cards are rebuilt in memory on each
//! refresh; the table only receives seeded demo rows, so this repository is
//! the bare trait implementation.

use chrono::NaiveTime;
use rusqlite::params;

use crate::domain::{Card, DomainResult};

use super::db::{from_ticks, to_ticks, Store};
use super::traits::Repository;

pub struct CardRepository {
    store: Store,
}

impl CardRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl Repository<Card> for CardRepository {
    fn insert(&self, entity: &Card) -> DomainResult<()> {
        let conn = self.store.connect()?;
        conn.execute(
            "INSERT INTO card (id, datetime) VALUES (?1, ?2)",
            params![entity.id, to_ticks(entity.date.and_time(NaiveTime::MIN))],
        )?;
        Ok(())
    }

    fn find_by_id(&self, id: &String) -> DomainResult<Option<Card>> {
        let conn = self.store.connect_read_only()?;
        let mut stmt = conn.prepare("SELECT id, datetime FROM card WHERE id = ?1")?;
        let mut rows = stmt.query_map(params![id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;
        match rows.next() {
            Some(row) => {
                let (id, ticks) = row?;
                Ok(Some(Card {
                    id,
                    date: from_ticks(ticks)?.date(),
                    tasks: Vec::new(),
                }))
            }
            None => Ok(None),
        }
    }

    fn list(&self) -> DomainResult<Vec<Card>> {
        let conn = self.store.connect_read_only()?;
        let mut stmt = conn.prepare("SELECT id, datetime FROM card ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut cards = Vec::new();
        for row in rows {
            let (id, ticks) = row?;
            cards.push(Card {
                id,
                date: from_ticks(ticks)?.date(),
                tasks: Vec::new(),
            });
        }
        Ok(cards)
    }
}
