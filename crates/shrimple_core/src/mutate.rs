//! Index-addressed mutations over the reminder sequence.
//!
//! # Responsibility
//! - Resolve signed indices (negative counts from the end) with bounds
//!   checking.
//! - Apply complete/delete mutations in memory; persistence stays with the
//!   repository layer.
//!
//! # Invariants
//! - An empty store is reported as its own condition, checked before any
//!   bounds check.
//! - Completing an already-completed reminder is a no-op success.
//! - Deletion shifts every later index down by one.

use crate::model::reminder::Reminder;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MutateResult<T> = Result<T, MutateError>;

/// Error for index-addressed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutateError {
    /// The store holds no reminders at all.
    EmptyStore,
    /// The index falls outside the valid signed range for the store length.
    IndexOutOfRange { index: i64, len: usize },
}

impl Display for MutateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStore => write!(f, "no reminders to act on"),
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "index {index} out of range; valid range is -{len}..={}",
                *len as i64 - 1
            ),
        }
    }
}

impl Error for MutateError {}

/// Resolves a signed index into a position, `-1` meaning the last entry.
///
/// # Errors
/// - `EmptyStore` when `len == 0`, regardless of the index.
/// - `IndexOutOfRange` when `index >= len` or `index < -len`.
pub fn resolve_index(len: usize, index: i64) -> MutateResult<usize> {
    if len == 0 {
        return Err(MutateError::EmptyStore);
    }
    let len_i64 = len as i64;
    if index >= len_i64 || index < -len_i64 {
        return Err(MutateError::IndexOutOfRange { index, len });
    }
    if index >= 0 {
        Ok(index as usize)
    } else {
        Ok((len_i64 + index) as usize)
    }
}

/// Marks the reminder at `index` as done and returns a reference to it.
pub fn complete_at(reminders: &mut [Reminder], index: i64) -> MutateResult<&Reminder> {
    let position = resolve_index(reminders.len(), index)?;
    reminders[position].complete();
    Ok(&reminders[position])
}

/// Removes the reminder at `index` and returns it, shifting later entries
/// down by one.
pub fn delete_at(reminders: &mut Vec<Reminder>, index: i64) -> MutateResult<Reminder> {
    let position = resolve_index(reminders.len(), index)?;
    Ok(reminders.remove(position))
}

#[cfg(test)]
mod tests {
    use super::{complete_at, delete_at, resolve_index, MutateError};
    use crate::model::reminder::Reminder;

    fn store_of(texts: &[&str]) -> Vec<Reminder> {
        texts
            .iter()
            .map(|text| Reminder::new(*text).expect("valid test reminder"))
            .collect()
    }

    #[test]
    fn positive_indices_count_from_the_start() {
        assert_eq!(resolve_index(3, 0).expect("in range"), 0);
        assert_eq!(resolve_index(3, 2).expect("in range"), 2);
    }

    #[test]
    fn negative_indices_count_from_the_end() {
        assert_eq!(resolve_index(3, -1).expect("in range"), 2);
        assert_eq!(resolve_index(3, -3).expect("in range"), 0);
    }

    #[test]
    fn out_of_range_reports_index_and_length() {
        let err = resolve_index(3, 3).expect_err("past the end must fail");
        assert_eq!(err, MutateError::IndexOutOfRange { index: 3, len: 3 });

        let err = resolve_index(3, -4).expect_err("before the start must fail");
        assert_eq!(err, MutateError::IndexOutOfRange { index: -4, len: 3 });
    }

    #[test]
    fn empty_store_wins_over_bounds_checking() {
        assert_eq!(
            resolve_index(0, 0).expect_err("empty store must fail"),
            MutateError::EmptyStore
        );
        assert_eq!(
            resolve_index(0, -1).expect_err("empty store must fail"),
            MutateError::EmptyStore
        );
    }

    #[test]
    fn complete_sets_flag_and_preserves_the_rest() {
        let mut store = store_of(&["A", "B"]);
        let completed = complete_at(&mut store, 0).expect("in range");
        assert!(completed.completed);
        assert_eq!(completed.text, "A");
        assert!(store[1].is_pending());
    }

    #[test]
    fn complete_is_idempotent() {
        let mut store = store_of(&["A"]);
        complete_at(&mut store, 0).expect("in range");
        complete_at(&mut store, 0).expect("re-completing succeeds");
        assert!(store[0].completed);
    }

    #[test]
    fn delete_with_negative_index_removes_the_last_entry() {
        let mut store = store_of(&["A", "B", "C"]);
        let removed = delete_at(&mut store, -1).expect("in range");
        assert_eq!(removed.text, "C");
        assert_eq!(store.len(), 2);
        assert_eq!(store[1].text, "B");
    }

    #[test]
    fn delete_shifts_later_indices_down() {
        let mut store = store_of(&["A", "B", "C"]);
        delete_at(&mut store, 0).expect("in range");
        assert_eq!(store[0].text, "B");
        assert_eq!(store[1].text, "C");
    }
}
