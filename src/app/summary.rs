//! Notification fired when the task count or the counter settles on a new
//! value.

/// Receives `(task_count, counter)` after each settled change.
pub trait SummaryHook {
    fn on_summary_change(&mut self, task_count: usize, counter: u64);
}

impl<F> SummaryHook for F
where
    F: FnMut(usize, u64),
{
    fn on_summary_change(&mut self, task_count: usize, counter: u64) {
        self(task_count, counter)
    }
}

/// Hook that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSummaryHook;

impl SummaryHook for NoopSummaryHook {
    fn on_summary_change(&mut self, _task_count: usize, _counter: u64) {}
}

/// Formats the summary the way the window title shows it.
pub fn summary_title(task_count: usize, counter: u64) -> String {
    format!("Todos: {} • Counter: {}", task_count, counter)
}

/// Remembers the last summary delivered so intermediate states are never
/// reported.
#[derive(Debug, Default)]
pub(crate) struct SummaryTracker {
    last: Option<(usize, u64)>,
}

impl SummaryTracker {
    /// Returns the summary to deliver, if it differs from the last one.
    pub(crate) fn settle(&mut self, task_count: usize, counter: u64) -> Option<(usize, u64)> {
        let current = (task_count, counter);
        if self.last == Some(current) {
            return None;
        }
        self.last = Some(current);
        Some(current)
    }
}
