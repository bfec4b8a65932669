//! Commands Layer
//!
//! The operations a UI drives the core with: refreshing the card window,
//! selecting tasks, switching views, and toggling checklist lines.

mod detail_cmd;
mod refresh_cmd;
mod view_cmd;


pub use detail_cmd::{set_done, WriteOutcome};
pub use refresh_cmd::{refresh, refresh_from, WINDOW_DAYS};
pub use view_cmd::{close_task, open_task, ViewState};
