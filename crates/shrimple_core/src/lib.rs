//! Core engine for the shrimple reminders manager.
//! This crate is the single source of truth for the store format, filters
//! and index-addressed mutations; the CLI crate stays a thin collaborator.

pub mod codec;
pub mod date;
pub mod logging;
pub mod model;
pub mod mutate;
pub mod query;
pub mod repo;
pub mod service;

pub use codec::{decode, encode, RecordError, RecordResult, STATUS_DONE, STATUS_PENDING};
pub use date::{format_date, parse_date, parse_date_in_year, DateError, DateResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{Reminder, ReminderValidationError};
pub use mutate::{complete_at, delete_at, resolve_index, MutateError, MutateResult};
pub use query::{
    due_today, filter_reminders, QueryError, QueryResult, ReminderFilter, ReminderMatch,
};
pub use repo::{
    FileReminderRepository, ReminderRepository, RepoError, RepoResult, DEFAULT_STORE_FILE,
};
pub use service::{ReminderService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
