//! Reminder filtering and the today view.
//!
//! # Responsibility
//! - Apply optional, AND-combined filters over the loaded sequence.
//! - Keep each match paired with its original store position so results feed
//!   straight into index-addressed mutations.
//!
//! # Invariants
//! - Date filters never match reminders without a due date.
//! - Requesting completed and uncompleted at once is an error, not a
//!   silently-resolved preference.
//! - The today view is the same engine with an `on = today` filter; there is
//!   no second filtering path.

use crate::model::reminder::Reminder;
use chrono::{Local, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type QueryResult<T> = Result<T, QueryError>;

/// Error for filter combinations that cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// Both completion states were requested at once.
    ConflictingStatusFilter,
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConflictingStatusFilter => write!(
                f,
                "conflicting filters: completed and uncompleted are mutually exclusive"
            ),
        }
    }
}

impl Error for QueryError {}

/// Optional filters combined with logical AND.
///
/// The two status flags mirror the CLI surface; [`filter_reminders`] rejects
/// the case where both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderFilter {
    /// Keep only reminders whose text exactly equals this string.
    pub text: Option<String>,
    /// Keep only completed reminders.
    pub completed: bool,
    /// Keep only pending reminders.
    pub uncompleted: bool,
    /// Keep only reminders due exactly on this date.
    pub due_on: Option<NaiveDate>,
    /// Keep only reminders due strictly after this date.
    pub due_after: Option<NaiveDate>,
    /// Keep only reminders due strictly before this date.
    pub due_before: Option<NaiveDate>,
}

impl ReminderFilter {
    /// Resolves the status flags into one optional completion state.
    fn status(&self) -> QueryResult<Option<bool>> {
        match (self.completed, self.uncompleted) {
            (true, true) => Err(QueryError::ConflictingStatusFilter),
            (true, false) => Ok(Some(true)),
            (false, true) => Ok(Some(false)),
            (false, false) => Ok(None),
        }
    }
}

/// One filter hit, carrying the reminder's position in the full sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderMatch {
    /// Index into the unfiltered store, valid for complete/delete.
    pub index: usize,
    pub reminder: Reminder,
}

/// Applies all set filters and returns matches with their original indices.
pub fn filter_reminders(
    reminders: &[Reminder],
    filter: &ReminderFilter,
) -> QueryResult<Vec<ReminderMatch>> {
    let status = filter.status()?;

    let matches = reminders
        .iter()
        .enumerate()
        .filter(|(_, reminder)| {
            if let Some(text) = &filter.text {
                if reminder.text != *text {
                    return false;
                }
            }
            if let Some(completed) = status {
                if reminder.completed != completed {
                    return false;
                }
            }
            matches_date_filters(reminder, filter)
        })
        .map(|(index, reminder)| ReminderMatch {
            index,
            reminder: reminder.clone(),
        })
        .collect();
    Ok(matches)
}

/// Returns reminders due on the current local date.
pub fn due_today(reminders: &[Reminder]) -> QueryResult<Vec<ReminderMatch>> {
    let filter = ReminderFilter {
        due_on: Some(Local::now().date_naive()),
        ..ReminderFilter::default()
    };
    filter_reminders(reminders, &filter)
}

fn matches_date_filters(reminder: &Reminder, filter: &ReminderFilter) -> bool {
    let wants_date =
        filter.due_on.is_some() || filter.due_after.is_some() || filter.due_before.is_some();
    let Some(date) = reminder.date else {
        return !wants_date;
    };

    if let Some(on) = filter.due_on {
        if date != on {
            return false;
        }
    }
    if let Some(after) = filter.due_after {
        if date <= after {
            return false;
        }
    }
    if let Some(before) = filter.due_before {
        if date >= before {
            return false;
        }
    }
    true
}
