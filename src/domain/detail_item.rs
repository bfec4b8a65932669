//! DetailItem Entity
//!
//! A persisted checklist line belonging to a task. `parent_id` references
//! `TaskItem::id` by convention only; the schema does not enforce it, and
//! queries silently skip orphaned rows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// One checklist line of a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailItem {
    /// Unique identifier, generated client-side at construction
    pub id: String,
    /// Id of the owning task (soft foreign key, unenforced)
    pub parent_id: String,
    /// Human-readable description
    pub description: String,
    /// Completion flag; the only field mutated after creation
    pub done: bool,
}

impl DetailItem {
    pub fn new(parent_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            parent_id: parent_id.into(),
            description: description.into(),
            done: false,
        }
    }
}

impl Entity for DetailItem {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}
