//! Reusable UI components.
//!
//! - `TodoListView` - memoized task list with per-row caches
//! - `TodoStats` - aggregate statistics and the stats panel lines
//! - `InputField` - text input with focus handling and inline errors

mod input_field;
mod todo_list;
mod todo_stats;

pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use todo_list::{
    render_item, render_list_uncached, ItemKey, TodoItemProps, TodoListProps, TodoListView,
};
pub use todo_stats::{stats_lines, MemoReport, TodoStats};
