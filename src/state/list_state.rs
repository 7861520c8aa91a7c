//! Owner of the task snapshot and the auxiliary UI state.

use serde::Serialize;

use crate::error::{AppError, AppResult, ValidationError, MIN_TASK_LEN_EXCLUSIVE};

use super::task::{Task, TaskList};

/// Text appended by [`ListState::add_default`].
pub const DEFAULT_TASK_TEXT: &str = "New todo";

/// The task list, the input draft, the validation error and the counter.
///
/// All mutation goes through the methods below; the task list is replaced
/// with a fresh snapshot on every change.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    todos: TaskList,
    draft: String,
    error: Option<ValidationError>,
    counter: u64,
}

/// Serializable view of [`ListState`], used for log output.
#[derive(Debug, Serialize)]
pub struct StateSnapshot<'a> {
    pub todos: &'a TaskList,
    pub draft: &'a str,
    pub error: Option<String>,
    pub counter: u64,
}

impl ListState {
    pub fn new(todos: TaskList) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    /// State seeded with `"Todo 1"` .. `"Todo {count}"`.
    pub fn with_numbered(count: usize) -> Self {
        Self::new(TaskList::numbered(count))
    }

    /// Current snapshot. Cloning it is cheap and keeps its identity.
    pub fn todos(&self) -> &TaskList {
        &self.todos
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Append [`DEFAULT_TASK_TEXT`].
    pub fn add_default(&mut self) {
        self.push(Task::from(DEFAULT_TASK_TEXT));
    }

    /// Trim `text` and append it if it is long enough.
    ///
    /// On rejection the list is left unchanged and the validation error is
    /// set. On success the draft and the error are cleared.
    pub fn add_validated(&mut self, text: &str) -> Result<(), ValidationError> {
        match validate_task(text) {
            Ok(task) => {
                self.push(task);
                self.draft.clear();
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Append `text` without validation.
    pub fn add_unchecked(&mut self, text: &str) {
        self.push(Task::from(text));
    }

    /// Increase the counter by one.
    ///
    /// Returns [`AppError::CounterOverflow`] and leaves the counter unchanged
    /// when it is already at `u64::MAX`.
    pub fn increment(&mut self) -> AppResult<u64> {
        self.counter = self
            .counter
            .checked_add(1)
            .ok_or(AppError::CounterOverflow)?;
        Ok(self.counter)
    }

    /// Replace the draft verbatim. An explicit edit also dismisses any
    /// validation error.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.error = None;
    }

    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            todos: &self.todos,
            draft: &self.draft,
            error: self.error.as_ref().map(ToString::to_string),
            counter: self.counter,
        }
    }

    fn push(&mut self, task: Task) {
        self.todos = self.todos.with_appended(task);
    }

    #[cfg(test)]
    pub(crate) fn set_counter(&mut self, counter: u64) {
        self.counter = counter;
    }
}

/// Trim `text` and check it is more than [`MIN_TASK_LEN_EXCLUSIVE`]
/// characters long.
pub fn validate_task(text: &str) -> Result<Task, ValidationError> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();
    if len <= MIN_TASK_LEN_EXCLUSIVE {
        return Err(ValidationError::TooShort { len });
    }
    Ok(Task::from(trimmed))
}
