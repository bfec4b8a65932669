//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has no database dependencies (except serde for serialization
//! and uuid for id generation).

mod card;
mod detail_item;
mod entity;
mod task_item;

pub use card::Card;
pub use detail_item::DetailItem;
pub use entity::{DomainError, DomainResult, Entity};
pub use task_item::TaskItem;
