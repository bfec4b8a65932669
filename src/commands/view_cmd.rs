//! View Commands
//!
//! List/detail view switching and task selection. Opening a task loads its
//! checklist under a held load token, so flag values arriving from the store
//! never trigger write-back.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::repository::DetailRepository;
use crate::AppState;

/// Which of the two screens the UI should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    List,
    Detail,
}

/// Select a task from the current card window, load its details, and switch
/// to the detail view.
pub fn open_task(state: &mut AppState, task_id: &str) -> DomainResult<()> {
    let mut task = state
        .days
        .iter()
        .flat_map(|day| day.tasks.iter())
        .find(|task| task.id == task_id)
        .cloned()
        .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?;

    let _token = state.loading.start();
    task.details = DetailRepository::new(state.store.clone()).list_for_parent(&task.id)?;

    state.current_task = Some(task);
    state.view = ViewState::Detail;
    Ok(())
}

/// Return to the list view. A no-op when already there (the original app
/// swallows back-navigation on the main screen).
pub fn close_task(state: &mut AppState) {
    state.view = ViewState::List;
}
