//! Application state: tasks, the input draft, the validation error and the
//! counter.

mod list_state;
mod task;

pub use list_state::{validate_task, ListState, StateSnapshot, DEFAULT_TASK_TEXT};
pub use task::{Task, TaskList};
