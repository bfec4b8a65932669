//! Repository Layer
//!
//! Data access over the embedded SQLite store.

mod card_repo;
mod db;
mod detail_repo;
pub mod seed;
mod task_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use card_repo::CardRepository;
pub use db::Store;
pub use detail_repo::DetailRepository;
pub use task_repo::TaskRepository;
pub use traits::Repository;
