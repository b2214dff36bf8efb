//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical reminder record and its lifecycle helpers.
//! - Enforce the text invariants the line-oriented store depends on.
//!
//! # Invariants
//! - `text` is non-empty after trimming.
//! - `text` never contains a line break; one reminder is always one line
//!   in the backing file.
//! - `completed` starts `false` and `complete()` is idempotent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for reminder construction and read-back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Text is empty or whitespace-only.
    EmptyText,
    /// Text contains `\n` or `\r` and would break the one-line record format.
    MultilineText,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "reminder text cannot be empty"),
            Self::MultilineText => write!(f, "reminder text cannot span multiple lines"),
        }
    }
}

impl Error for ReminderValidationError {}

/// Canonical reminder record persisted one-per-line in the store file.
///
/// There is deliberately no ID field: position in the store is the only
/// addressing scheme, and deleting an entry shifts all later positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Completion flag; encoded as the `[X]`/`[-]` status marker.
    pub completed: bool,
    /// Reminder body. Single line, non-empty.
    pub text: String,
    /// Optional due date (local calendar date, no time component).
    pub date: Option<NaiveDate>,
}

impl Reminder {
    /// Creates a pending reminder without a due date.
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    /// - `MultilineText` when `text` contains a line break.
    pub fn new(text: impl Into<String>) -> Result<Self, ReminderValidationError> {
        let reminder = Self {
            completed: false,
            text: text.into(),
            date: None,
        };
        reminder.validate()?;
        Ok(reminder)
    }

    /// Creates a pending reminder with a due date.
    pub fn with_date(
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ReminderValidationError> {
        let mut reminder = Self::new(text)?;
        reminder.date = Some(date);
        Ok(reminder)
    }

    /// Re-checks model invariants, used on the read path so invalid persisted
    /// state is rejected instead of masked.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.text.trim().is_empty() {
            return Err(ReminderValidationError::EmptyText);
        }
        if self.text.contains(['\n', '\r']) {
            return Err(ReminderValidationError::MultilineText);
        }
        Ok(())
    }

    /// Marks this reminder as done. Completing a completed reminder is a
    /// no-op.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Returns whether this reminder still needs doing.
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}
