//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access. Implementations open a
//! scoped connection per call; queries are read-only and side-effect-free.

use crate::domain::{DomainResult, Entity};

/// Core repository trait, generic over any Entity type
pub trait Repository<T: Entity> {
    /// Insert a new row for the entity
    fn insert(&self, entity: &T) -> DomainResult<()>;

    /// Find a row by ID
    fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// List all rows in insertion order
    fn list(&self) -> DomainResult<Vec<T>>;
}
