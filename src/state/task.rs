//! Task labels and immutable task-list snapshots.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::Serialize;

use crate::memo::SameRef;

/// A task label. Identity is its text and position only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Task {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Task {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Immutable, ordered snapshot of tasks.
///
/// Every mutation goes through [`TaskList::with_appended`], which builds a new
/// allocation, so two snapshots share an allocation only if nothing changed
/// between them. `PartialEq` compares contents; [`SameRef`] compares
/// snapshot identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList(Arc<[Task]>);

impl TaskList {
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// `"Todo 1"` through `"Todo {count}"`.
    pub fn numbered(count: usize) -> Self {
        (1..=count).map(|i| Task::new(format!("Todo {}", i))).collect()
    }

    /// New snapshot with `task` appended. `self` is left untouched.
    pub fn with_appended(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.0.len() + 1);
        tasks.extend_from_slice(&self.0);
        tasks.push(task);
        Self(Arc::from(tasks))
    }

    pub fn last(&self) -> Option<&Task> {
        self.0.last()
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TaskList {
    type Target = [Task];

    fn deref(&self) -> &[Task] {
        &self.0
    }
}

impl SameRef for TaskList {
    fn same_ref(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<T: IntoIterator<Item = Task>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for TaskList {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(Task::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_snapshot() {
        let list = TaskList::numbered(3);
        let texts: Vec<&str> = list.iter().map(Task::as_str).collect();
        assert_eq!(texts, vec!["Todo 1", "Todo 2", "Todo 3"]);
    }

    #[test]
    fn test_append_produces_new_snapshot() {
        let before = TaskList::numbered(2);
        let after = before.with_appended(Task::from("New todo"));

        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 3);
        assert!(!before.same_ref(&after));
        assert_eq!(after.last().map(Task::as_str), Some("New todo"));
    }

    #[test]
    fn test_clone_shares_snapshot() {
        let list = TaskList::numbered(1);
        let copy = list.clone();
        assert!(list.same_ref(&copy));
    }

    #[test]
    fn test_equal_contents_distinct_snapshots() {
        let a: TaskList = ["x", "y"].into_iter().collect();
        let b: TaskList = ["x", "y"].into_iter().collect();
        assert_eq!(a, b);
        assert!(!a.same_ref(&b));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(Task::from("héllo").char_len(), 5);
    }

    #[test]
    fn test_serializes_as_plain_strings() {
        let list: TaskList = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    }
}
