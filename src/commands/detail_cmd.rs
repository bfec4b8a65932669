//! Detail Commands
//!
//! The change-to-persistence bridge: a `done` flip on a checklist line is
//! written back synchronously, as a single-row update, unless a bulk load is
//! in progress or the value did not actually change.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::repository::DetailRepository;
use crate::AppState;

/// What happened to a requested `done` change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteOutcome {
    /// Value changed and exactly one row was updated
    Written,
    /// Value changed in memory, but a load was active; the write is dropped,
    /// not deferred
    Suppressed,
    /// Value already equal; nothing touched
    Unchanged,
}

/// Set the `done` flag of one detail line of the selected task.
///
/// The in-memory value changes before the write is attempted and is not
/// rolled back on failure; a failed write leaves memory and store diverged
/// and the error propagates to the caller.
pub fn set_done(state: &mut AppState, detail_id: &str, done: bool) -> DomainResult<WriteOutcome> {
    let task = state
        .current_task
        .as_mut()
        .ok_or_else(|| DomainError::InvalidInput("no task selected".to_string()))?;
    let detail = task
        .details
        .iter_mut()
        .find(|detail| detail.id == detail_id)
        .ok_or_else(|| DomainError::NotFound(format!("detail {}", detail_id)))?;

    if detail.done == done {
        return Ok(WriteOutcome::Unchanged);
    }
    detail.done = done;

    if !state.loading.is_idle() {
        log::debug!("done change on {} suppressed during load", detail_id);
        return Ok(WriteOutcome::Suppressed);
    }

    DetailRepository::new(state.store.clone()).set_done(detail_id, done)?;
    Ok(WriteOutcome::Written)
}
