//! Reminder use-case service.
//!
//! # Responsibility
//! - Provide add/list/today/complete/delete entry points for callers.
//! - Run mutations as read-modify-write against the repository.
//!
//! # Invariants
//! - Mutations persist the full sequence via `save`; a failed save leaves
//!   the on-disk store at its pre-mutation content.
//! - `add` appends without rewriting existing lines.
//! - Log events carry metadata only, never reminder text.

use crate::model::reminder::{Reminder, ReminderValidationError};
use crate::mutate::{complete_at, delete_at, MutateError};
use crate::query::{due_today, filter_reminders, QueryError, ReminderFilter, ReminderMatch};
use crate::repo::{ReminderRepository, RepoError};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error envelope for reminder use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input rejected by model validation.
    Validation(ReminderValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Unsatisfiable filter combination.
    Query(QueryError),
    /// Index addressing failure.
    Mutate(MutateError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Query(err) => write!(f, "{err}"),
            Self::Mutate(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Query(err) => Some(err),
            Self::Mutate(err) => Some(err),
        }
    }
}

impl From<ReminderValidationError> for ServiceError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<QueryError> for ServiceError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}

impl From<MutateError> for ServiceError {
    fn from(value: MutateError) -> Self {
        Self::Mutate(value)
    }
}

/// Use-case facade over a reminder repository implementation.
pub struct ReminderService<R: ReminderRepository> {
    repo: R,
}

impl<R: ReminderRepository> ReminderService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a new pending reminder, returning the stored record.
    pub fn add(&self, text: &str, date: Option<NaiveDate>) -> ServiceResult<Reminder> {
        let reminder = match date {
            Some(date) => Reminder::with_date(text, date)?,
            None => Reminder::new(text)?,
        };
        self.repo.append(&reminder)?;
        info!(
            "event=reminder_add module=core status=ok dated={}",
            reminder.date.is_some()
        );
        Ok(reminder)
    }

    /// Lists reminders matching the filter, paired with store indices.
    pub fn list(&self, filter: &ReminderFilter) -> ServiceResult<Vec<ReminderMatch>> {
        let reminders = self.repo.load()?;
        let matches = filter_reminders(&reminders, filter)?;
        info!(
            "event=reminder_list module=core status=ok total={} matched={}",
            reminders.len(),
            matches.len()
        );
        Ok(matches)
    }

    /// Lists reminders due on the current local date.
    pub fn today(&self) -> ServiceResult<Vec<ReminderMatch>> {
        let reminders = self.repo.load()?;
        let matches = due_today(&reminders)?;
        info!(
            "event=reminder_today module=core status=ok total={} matched={}",
            reminders.len(),
            matches.len()
        );
        Ok(matches)
    }

    /// Marks the reminder at the signed index as done and persists the store.
    pub fn complete(&self, index: i64) -> ServiceResult<Reminder> {
        let mut reminders = self.repo.load()?;
        let completed = complete_at(&mut reminders, index)?.clone();
        self.repo.save(&reminders)?;
        info!("event=reminder_complete module=core status=ok index={index}");
        Ok(completed)
    }

    /// Deletes the reminder at the signed index and persists the store.
    pub fn delete(&self, index: i64) -> ServiceResult<Reminder> {
        let mut reminders = self.repo.load()?;
        let removed = delete_at(&mut reminders, index)?;
        self.repo.save(&reminders)?;
        info!(
            "event=reminder_delete module=core status=ok index={index} remaining={}",
            reminders.len()
        );
        Ok(removed)
    }
}
