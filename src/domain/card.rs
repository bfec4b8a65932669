//! Card Entity
//!
//! One calendar day in the rolling week view. Cards are rebuilt in memory on
//! every refresh; the `card` table only exists for seeded demo rows.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;
use super::task_item::TaskItem;

/// A single day of the week view, holding the tasks scheduled on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: String,
    /// The calendar day this card represents
    pub date: NaiveDate,
    /// Tasks whose timestamp falls on this day (populated at query time)
    pub tasks: Vec<TaskItem>,
}

impl Card {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            tasks: Vec::new(),
        }
    }

    /// Display label relative to the current date
    pub fn label(&self) -> String {
        self.label_for(Local::now().date_naive())
    }

    /// Display label relative to an explicit "today" (derived, never stored)
    pub fn label_for(&self, today: NaiveDate) -> String {
        if self.date == today {
            "Today".to_string()
        } else if self.date == today.succ_opt().unwrap_or(today) {
            "Tomorrow".to_string()
        } else {
            self.date.format("%A").to_string()
        }
    }
}

impl Entity for Card {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(); // a Monday
        assert_eq!(Card::new(today).label_for(today), "Today");
        assert_eq!(
            Card::new(today.succ_opt().unwrap()).label_for(today),
            "Tomorrow"
        );
        let wednesday = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(Card::new(wednesday).label_for(today), "Wednesday");
    }

    #[test]
    fn label_for_past_days_uses_weekday_name() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(Card::new(sunday).label_for(today), "Sunday");
    }
}
