//! Reminder persistence contracts and the flat-file implementation.
//!
//! # Responsibility
//! - Provide stable load/save/append APIs over the one-line-per-reminder
//!   store file.
//! - Keep file-format details behind the repository boundary.
//!
//! # Invariants
//! - Load must reject the whole store on the first malformed line, naming
//!   the line number, rather than skipping bad entries.
//! - An absent store file is an empty store, not an error.
//! - No file locking is taken; concurrent writers are unsupported and may
//!   corrupt the file.

pub mod reminder_repo;

pub use reminder_repo::{
    FileReminderRepository, ReminderRepository, RepoError, RepoResult, DEFAULT_STORE_FILE,
};
