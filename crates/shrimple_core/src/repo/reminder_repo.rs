//! Reminder repository contract and flat-file implementation.
//!
//! # Responsibility
//! - Load the ordered reminder sequence from the backing file.
//! - Persist the full sequence, or append a single record without rewriting
//!   the rest.
//!
//! # Invariants
//! - File order is store order; line 1 is index 0.
//! - `save` builds the whole buffer first and writes it in one call, so a
//!   failed save never leaves a half-encoded sequence behind at the API
//!   level. Crash-atomicity of the underlying write is not promised.
//! - Blank lines are tolerated on load; any other undecodable line aborts
//!   the load with its 1-based line number.

use crate::codec::{decode, encode, RecordError};
use crate::model::reminder::Reminder;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default backing file, resolved relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "shrimple-reminders.txt";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for store file access and decoding.
#[derive(Debug)]
pub enum RepoError {
    /// The store file could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A stored line violates the record grammar; the store is rejected as a
    /// whole so corruption is never silently dropped.
    CorruptRecord {
        path: PathBuf,
        /// 1-based line number of the offending record.
        line: usize,
        source: RecordError,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access store `{}`: {source}", path.display())
            }
            Self::CorruptRecord { path, line, source } => write!(
                f,
                "corrupt store `{}` at line {line}: {source}",
                path.display()
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::CorruptRecord { source, .. } => Some(source),
        }
    }
}

/// Repository interface for reminder persistence.
///
/// The seam exists so services and tests can swap the backing store without
/// touching the engine logic.
pub trait ReminderRepository {
    /// Loads the full ordered sequence, creating an empty store on first use.
    fn load(&self) -> RepoResult<Vec<Reminder>>;
    /// Replaces the store content with the given sequence.
    fn save(&self, reminders: &[Reminder]) -> RepoResult<()>;
    /// Appends one record without rewriting existing lines.
    fn append(&self, reminder: &Reminder) -> RepoResult<()>;
}

/// Flat-file reminder repository.
pub struct FileReminderRepository {
    path: PathBuf,
}

impl FileReminderRepository {
    /// Creates a repository over the given store file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReminderRepository for FileReminderRepository {
    fn load(&self) -> RepoResult<Vec<Reminder>> {
        if !self.path.exists() {
            // First access: materialize an empty store so later appends and
            // saves observe the same file.
            std::fs::File::create(&self.path).map_err(|err| self.io_error(err))?;
            debug!("event=store_created module=core status=ok");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        let mut reminders = Vec::new();
        for (line_index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let reminder = decode(line).map_err(|source| RepoError::CorruptRecord {
                path: self.path.clone(),
                line: line_index + 1,
                source,
            })?;
            reminders.push(reminder);
        }
        debug!(
            "event=store_load module=core status=ok count={}",
            reminders.len()
        );
        Ok(reminders)
    }

    fn save(&self, reminders: &[Reminder]) -> RepoResult<()> {
        let mut buffer = String::new();
        for reminder in reminders {
            buffer.push_str(&encode(reminder));
        }
        std::fs::write(&self.path, buffer).map_err(|err| self.io_error(err))?;
        debug!(
            "event=store_save module=core status=ok count={}",
            reminders.len()
        );
        Ok(())
    }

    fn append(&self, reminder: &Reminder) -> RepoResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_error(err))?;
        file.write_all(encode(reminder).as_bytes())
            .map_err(|err| self.io_error(err))?;
        debug!("event=store_append module=core status=ok");
        Ok(())
    }
}
