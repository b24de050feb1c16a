//! In-memory task list

mod error;

pub use error::{Result, TaskError};

use chrono::{Local, NaiveDateTime};
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::export;

/// Ordered list of task descriptions.
///
/// Positions are 1-based and derived from the current order every time they
/// are read, so they stay contiguous after deletions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<String>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Tasks paired with their display position, starting at 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| (idx + 1, task.as_str()))
    }

    /// Append a task. Blank input is ignored; returns whether a task was added.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.tasks.push(text.to_string());
        debug!(len = self.tasks.len(), "task added");
        true
    }

    /// Delete the task at a position typed by the user, returning its text.
    pub fn delete(&mut self, raw_position: &str) -> Result<String> {
        let position = self.parse_position(raw_position)?;
        self.remove(position)
    }

    /// Delete the task at a 1-based position, returning its text.
    pub fn remove(&mut self, position: i64) -> Result<String> {
        let len = self.tasks.len();
        let index = usize::try_from(position)
            .ok()
            .filter(|p| (1..=len).contains(p))
            .map(|p| p - 1)
            .ok_or(TaskError::OutOfRange { len })?;

        let removed = self.tasks.remove(index);
        debug!(position, len = self.tasks.len(), "task deleted");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
        debug!("task list cleared");
    }

    /// Write the list to a timestamped file in `dir`, returning its path.
    pub fn export_snapshot(&self, dir: &Path) -> Result<PathBuf> {
        self.export_snapshot_at(dir, Local::now().naive_local())
    }

    pub fn export_snapshot_at(&self, dir: &Path, timestamp: NaiveDateTime) -> Result<PathBuf> {
        if self.tasks.is_empty() {
            return Err(TaskError::EmptyList);
        }
        export::write_snapshot(dir, &self.tasks, timestamp)
    }

    fn parse_position(&self, raw: &str) -> Result<i64> {
        match raw.trim().parse::<i64>() {
            Ok(position) => Ok(position),
            Err(e) => match e.kind() {
                // Digits that overflow are still a number, just not a listed one
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(TaskError::OutOfRange {
                        len: self.tasks.len(),
                    })
                }
                _ => Err(TaskError::InvalidInput),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(tasks: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for task in tasks {
            assert!(store.add(task));
        }
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_trims_and_appends_in_order() {
        let mut store = TaskStore::new();
        assert!(store.add("  Buy milk "));
        assert!(store.add("Walk dog"));
        assert_eq!(store.tasks(), &["Buy milk", "Walk dog"]);
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let mut store = store_with(&["one"]);
        assert!(!store.add(""));
        assert!(!store.add("   "));
        assert!(!store.add("\t\n"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_counts_only_non_blank_calls() {
        let mut store = TaskStore::new();
        let inputs = ["a", " ", "b", "", "  c  ", "\t"];
        let added = inputs.iter().filter(|s| store.add(s)).count();
        assert_eq!(added, 3);
        assert_eq!(store.tasks(), &["a", "b", "c"]);
    }

    #[test]
    fn test_numbered_starts_at_one() {
        let store = store_with(&["first", "second"]);
        let numbered: Vec<_> = store.numbered().collect();
        assert_eq!(numbered, vec![(1, "first"), (2, "second")]);
    }

    #[test]
    fn test_delete_shifts_following_tasks() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        assert_eq!(store.delete("2").unwrap(), "b");
        let numbered: Vec<_> = store.numbered().collect();
        assert_eq!(numbered, vec![(1, "a"), (2, "c"), (3, "d")]);
    }

    #[test]
    fn test_delete_first_and_last() {
        let mut store = store_with(&["a", "b", "c"]);
        assert_eq!(store.delete("3").unwrap(), "c");
        assert_eq!(store.delete("1").unwrap(), "a");
        assert_eq!(store.tasks(), &["b"]);
    }

    #[test]
    fn test_delete_accepts_surrounding_whitespace_and_plus_sign() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.delete(" 2 ").unwrap(), "b");
        assert_eq!(store.delete("+1").unwrap(), "a");
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_zero_is_out_of_range() {
        let mut store = store_with(&["a"]);
        let err = store.delete("0").unwrap_err();
        assert!(matches!(err, TaskError::OutOfRange { len: 1 }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_negative_is_out_of_range() {
        let mut store = store_with(&["a", "b"]);
        let err = store.delete("-1").unwrap_err();
        assert!(matches!(err, TaskError::OutOfRange { len: 2 }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_past_end_is_out_of_range() {
        let mut store = store_with(&["a", "b"]);
        let err = store.delete("3").unwrap_err();
        assert_eq!(err.to_string(), "Task number must be between 1 and 2");
        assert_eq!(store.tasks(), &["a", "b"]);
    }

    #[test]
    fn test_delete_on_empty_list_reports_zero_bound() {
        let mut store = TaskStore::new();
        let err = store.delete("1").unwrap_err();
        assert_eq!(err.to_string(), "Task number must be between 1 and 0");
    }

    #[test]
    fn test_delete_overflowing_number_is_out_of_range() {
        let mut store = store_with(&["a"]);
        let err = store.delete("99999999999999999999999").unwrap_err();
        assert!(matches!(err, TaskError::OutOfRange { len: 1 }));
    }

    #[test]
    fn test_delete_non_numeric_is_invalid() {
        let mut store = store_with(&["a"]);
        for raw in ["abc", "", "   ", "1.5", "1a", "one"] {
            let err = store.delete(raw).unwrap_err();
            assert!(matches!(err, TaskError::InvalidInput), "input {raw:?}");
            assert_eq!(err.to_string(), "Please enter a valid number");
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_typed_position() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.remove(1).unwrap(), "a");
        assert!(matches!(
            store.remove(2),
            Err(TaskError::OutOfRange { len: 1 })
        ));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = store_with(&["a", "b"]);
        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_export_empty_list_fails_without_writing() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TaskStore::new();
        let err = store.export_snapshot(dir.path()).unwrap_err();
        assert!(matches!(err, TaskError::EmptyList));
        assert_eq!(err.to_string(), "No tasks to export");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_user_error_classification() {
        assert!(TaskError::InvalidInput.is_user_error());
        assert!(TaskError::OutOfRange { len: 3 }.is_user_error());
        assert!(TaskError::EmptyList.is_user_error());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!TaskError::from(io).is_user_error());
    }
}
