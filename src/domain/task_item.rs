//! TaskItem Entity
//!
//! A persisted task belonging to a specific day. Its checklist lines live in
//! `details`, populated at query time by matching `DetailItem::parent_id`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::detail_item::DetailItem;
use super::entity::Entity;

/// A task scheduled at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskItem {
    /// Unique identifier, generated client-side at construction
    pub id: String,
    /// Full timestamp; the day portion decides which card shows the task
    pub datetime: NaiveDateTime,
    /// Human-readable description
    pub description: String,
    /// Checklist lines for this task (populated at query time)
    pub details: Vec<DetailItem>,
}

impl TaskItem {
    pub fn new(datetime: NaiveDateTime, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            datetime,
            description: description.into(),
            details: Vec::new(),
        }
    }
}

impl Entity for TaskItem {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}
