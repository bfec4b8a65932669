//! day-deck Backend
//!
//! Core of a multi-day task/checklist organizer: a rolling week of day
//! cards, each day holding tasks, each task holding checklist lines, backed
//! by a local embedded SQLite file.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access over the embedded store
//! - commands: The operations a UI binds to
//!
//! The UI shell itself is out of scope; a frontend binds to [`AppState`] and
//! drives it through the functions in [`commands`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

pub mod commands;
pub mod domain;
pub mod loading;
pub mod repository;

use commands::ViewState;
use domain::{Card, DomainResult, TaskItem};
use loading::LoadTracker;
use repository::{seed, DetailRepository, Store};

/// Startup configuration. Constructed once and handed to [`bootstrap`]; the
/// store path is explicit rather than a global.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Location of the store file
    pub db_path: PathBuf,
    /// Delete any existing store file before opening, forcing a re-seed
    pub reset: bool,
}

impl AppConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            reset: false,
        }
    }

    /// The conventional per-user location: `<data_dir>/day-deck/tasks.db`.
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join("day-deck").join("tasks.db"))
    }
}

/// Application state shared with the UI. The card window, selected task, and
/// view state are the collections and flags a frontend binds to directly.
pub struct AppState {
    pub(crate) store: Store,
    pub(crate) loading: LoadTracker,
    /// The rolling week of day cards, rebuilt by [`commands::refresh`]
    pub days: Vec<Card>,
    /// The task whose details are on screen, if any
    pub current_task: Option<TaskItem>,
    /// Which screen the UI should show
    pub view: ViewState,
}

impl AppState {
    pub(crate) fn new(store: Store) -> Self {
        Self {
            store,
            loading: LoadTracker::new(),
            days: Vec::new(),
            current_task: None,
            view: ViewState::List,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The load-suppression tracker. A UI performing its own bulk population
    /// holds a token from here so flag setters do not write back.
    pub fn loading(&self) -> &LoadTracker {
        &self.loading
    }
}

/// Open (or create) the store and build the application state.
///
/// Creates the parent directory, honors the reset flag, seeds demo data when
/// the store file did not exist yet, and logs a warning if any detail rows
/// reference a missing task.
pub fn bootstrap(config: &AppConfig) -> DomainResult<AppState> {
    if let Some(parent) = config.db_path.parent() {
        fs::create_dir_all(parent)?;
    }

    if config.reset && config.db_path.exists() {
        log::info!("reset: removing store at {}", config.db_path.display());
        fs::remove_file(&config.db_path)?;
    }

    let fresh = !config.db_path.exists();
    let store = Store::open(&config.db_path)?;

    if fresh {
        log::info!("first run: seeding demo data");
        seed::insert_all(&store, &seed::demo_rows(Local::now().naive_local()))?;
    }

    let orphans = DetailRepository::new(store.clone()).count_orphans()?;
    if orphans > 0 {
        log::warn!("store contains {} orphaned detail row(s)", orphans);
    }

    Ok(AppState::new(store))
}
