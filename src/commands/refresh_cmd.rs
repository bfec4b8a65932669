//! Refresh Command
//!
//! Rebuilds the rolling week of day cards and loads each card's tasks.

use chrono::{Duration, Local, NaiveDate};

use crate::domain::{Card, DomainResult};
use crate::repository::TaskRepository;
use crate::AppState;

/// Days shown in the week view
pub const WINDOW_DAYS: i64 = 7;

/// Rebuild the card window starting today.
pub fn refresh(state: &mut AppState) -> DomainResult<()> {
    refresh_from(state, Local::now().date_naive())
}

/// Rebuild the card window starting at an explicit anchor day.
pub fn refresh_from(state: &mut AppState, start: NaiveDate) -> DomainResult<()> {
    let repo = TaskRepository::new(state.store.clone());

    let mut days = Vec::with_capacity(WINDOW_DAYS as usize);
    for offset in 0..WINDOW_DAYS {
        let mut card = Card::new(start + Duration::days(offset));
        card.tasks = repo.list_for_day(card.date)?;
        days.push(card);
    }
    state.days = days;
    Ok(())
}
