//! Application controller.
//!
//! [`App`] owns the [`ListState`], turns user actions into state mutations,
//! reports settled summaries to the injected [`SummaryHook`] and keeps the
//! memo caches the UI renders through.

mod handle;
mod keys;
mod messages;
mod summary;
mod types;

pub use handle::AddTodoHandle;
pub use messages::AppMessage;
pub use summary::{summary_title, NoopSummaryHook, SummaryHook};
pub use types::{Action, Focus};

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::error::{AppResult, ValidationError};
use crate::memo::DerivedStats;
use crate::state::{ListState, TaskList};
use crate::ui::components::{MemoReport, TodoListProps, TodoListView, TodoStats};
use summary::SummaryTracker;

/// Text appended by the "add via callback" control.
pub const CALLBACK_TASK_TEXT: &str = "Added via callback";

/// Main application state
pub struct App {
    state: ListState,
    /// Which control group receives key presses
    pub focus: Focus,
    /// Flag to track if app should quit
    pub should_quit: bool,
    /// Dirty flag: the UI only redraws when this is set
    pub needs_redraw: bool,
    /// Memoized task list rendering
    pub list_view: TodoListView,
    /// Memoized aggregate over the task list
    pub stats: DerivedStats<TaskList, TodoStats>,
    add_handle: AddTodoHandle,
    /// Receiver for messages posted through [`AddTodoHandle`]; taken by the
    /// event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    summary: SummaryTracker,
    hook: Box<dyn SummaryHook>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("focus", &self.focus)
            .field("should_quit", &self.should_quit)
            .field("needs_redraw", &self.needs_redraw)
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl App {
    /// App seeded from `config` with a no-op summary hook.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_hook(config, NoopSummaryHook)
    }

    pub fn with_hook(config: &AppConfig, hook: impl SummaryHook + 'static) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: ListState::with_numbered(config.initial_todo_count),
            focus: Focus::default(),
            should_quit: false,
            needs_redraw: true,
            list_view: TodoListView::new(),
            stats: DerivedStats::new("todo_stats", TodoStats::compute),
            add_handle: AddTodoHandle::new(message_tx),
            message_rx: Some(message_rx),
            summary: SummaryTracker::default(),
            hook: Box::new(hook),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn todos(&self) -> &TaskList {
        self.state.todos()
    }

    pub fn counter(&self) -> u64 {
        self.state.counter()
    }

    pub fn input_draft(&self) -> &str {
        self.state.draft()
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.state.error()
    }

    /// The stable add handle. Every call returns an equal handle.
    pub fn add_handle(&self) -> AddTodoHandle {
        self.add_handle.clone()
    }

    /// Props for the memoized list view.
    pub fn list_props(&self) -> TodoListProps {
        TodoListProps {
            todos: self.state.todos().clone(),
            on_add: self.add_handle(),
        }
    }

    /// Stats for the current snapshot, recomputed only after the list changed.
    pub fn current_stats(&mut self) -> TodoStats {
        *self.stats.get(self.state.todos())
    }

    pub fn memo_report(&self) -> MemoReport {
        MemoReport {
            list: self.list_view.list_stats(),
            rows: self.list_view.row_stats(),
            stats: self.stats.stats(),
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn add_default(&mut self) {
        self.state.add_default();
        tracing::debug!(len = self.todos().len(), "added default todo");
        self.mark_dirty();
    }

    /// Validate and append `text`. Returns whether it was accepted; on
    /// rejection the error is kept on the state for display.
    pub fn add_validated(&mut self, text: &str) -> bool {
        let accepted = match self.state.add_validated(text) {
            Ok(()) => {
                tracing::debug!(len = self.todos().len(), "added validated todo");
                true
            }
            Err(err) => {
                tracing::debug!(code = err.error_code(), "rejected todo");
                false
            }
        };
        self.mark_dirty();
        accepted
    }

    /// Submit the current draft through [`App::add_validated`].
    pub fn submit_draft(&mut self) -> bool {
        let draft = self.state.draft().to_string();
        self.add_validated(&draft)
    }

    /// Append `text` unconditionally.
    pub fn add_via_handle(&mut self, text: &str) {
        self.state.add_unchecked(text);
        tracing::debug!(len = self.todos().len(), "added todo via handle");
        self.mark_dirty();
    }

    pub fn increment(&mut self) -> AppResult<u64> {
        let value = self.state.increment()?;
        self.mark_dirty();
        Ok(value)
    }

    pub fn set_input_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
        self.mark_dirty();
    }

    pub fn push_draft_char(&mut self, c: char) {
        let mut draft = self.state.draft().to_string();
        draft.push(c);
        self.set_input_draft(draft);
    }

    pub fn pop_draft_char(&mut self) {
        let mut draft = self.state.draft().to_string();
        if draft.pop().is_some() {
            self.set_input_draft(draft);
        }
    }

    /// Apply an [`Action`].
    pub fn dispatch(&mut self, action: Action) -> AppResult<()> {
        match action {
            Action::AddDefaultTodo => self.add_default(),
            Action::SubmitValidatedTodo(text) => {
                self.add_validated(&text);
            }
            Action::AddViaHandle(text) => self.add_via_handle(&text),
            Action::IncrementCounter => {
                self.increment()?;
            }
            Action::UpdateDraft(text) => self.set_input_draft(text),
        }
        Ok(())
    }

    /// Apply a message posted from outside the key path.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::AddTodo(text) => self.add_via_handle(&text),
        }
    }

    /// Drain pending messages when the receiver has not been taken by the
    /// event loop. Returns how many were applied.
    pub fn process_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut applied = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            applied += 1;
        }
        self.message_rx = Some(rx);
        applied
    }

    /// Deliver the summary hook if the task count or counter changed since
    /// the last delivery. Call once per event-loop iteration, after all
    /// mutations for that iteration were applied.
    pub fn settle(&mut self) -> bool {
        let len = self.state.todos().len();
        let counter = self.state.counter();
        match self.summary.settle(len, counter) {
            Some((len, counter)) => {
                tracing::debug!(len, counter, "summary changed");
                self.hook.on_summary_change(len, counter);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_app() -> (App, Rc<RefCell<Vec<(usize, u64)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let app = App::with_hook(&AppConfig::default(), move |n: usize, c: u64| {
            sink.borrow_mut().push((n, c))
        });
        (app, seen)
    }

    #[test]
    fn test_initial_state() {
        let app = App::default();
        assert_eq!(app.todos().len(), 5);
        assert_eq!(app.todos()[0].as_str(), "Todo 1");
        assert_eq!(app.counter(), 0);
        assert!(app.needs_redraw);
        assert_eq!(app.focus, Focus::Controls);
    }

    #[test]
    fn test_actions_mark_dirty() {
        let mut app = App::default();
        app.needs_redraw = false;
        app.add_default();
        assert!(app.needs_redraw);

        app.needs_redraw = false;
        app.increment().unwrap();
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_dispatch_covers_every_action() {
        let mut app = App::default();
        app.dispatch(Action::AddDefaultTodo).unwrap();
        app.dispatch(Action::SubmitValidatedTodo("tiny".into())).unwrap();
        app.dispatch(Action::UpdateDraft("typing".into())).unwrap();
        app.dispatch(Action::AddViaHandle("x".into())).unwrap();
        app.dispatch(Action::IncrementCounter).unwrap();

        assert_eq!(app.todos().len(), 7);
        assert_eq!(app.todos().last().unwrap().as_str(), "x");
        assert_eq!(app.input_draft(), "typing");
        assert!(app.validation_error().is_none());
        assert_eq!(app.counter(), 1);
    }

    #[test]
    fn test_submit_draft() {
        let mut app = App::default();
        app.set_input_draft("  write docs  ");
        assert!(app.submit_draft());
        assert_eq!(app.todos().last().unwrap().as_str(), "write docs");
        assert_eq!(app.input_draft(), "");
    }

    #[test]
    fn test_draft_char_editing() {
        let mut app = App::default();
        app.push_draft_char('o');
        app.push_draft_char('k');
        app.pop_draft_char();
        assert_eq!(app.input_draft(), "o");

        app.pop_draft_char();
        app.pop_draft_char();
        assert_eq!(app.input_draft(), "");
    }

    #[test]
    fn test_settle_fires_once_per_change() {
        let (mut app, seen) = recording_app();

        assert!(app.settle());
        assert!(!app.settle());

        // Several mutations in one iteration produce one notification
        app.add_default();
        app.add_default();
        app.increment().unwrap();
        assert!(app.settle());

        // Draft edits do not affect the summary
        app.set_input_draft("abc");
        assert!(!app.settle());

        assert_eq!(*seen.borrow(), vec![(5, 0), (7, 1)]);
    }

    #[test]
    fn test_rejected_submission_does_not_notify() {
        let (mut app, seen) = recording_app();
        app.settle();
        app.add_validated("hi");
        app.settle();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_handle_is_stable() {
        let app = App::default();
        assert_eq!(app.add_handle(), app.add_handle());
    }

    #[test]
    fn test_handle_messages_are_applied() {
        let mut app = App::default();
        let handle = app.add_handle();
        handle.add(CALLBACK_TASK_TEXT);
        handle.add("tiny");

        assert_eq!(app.process_messages(), 2);
        assert_eq!(app.todos().len(), 7);
        assert_eq!(app.todos()[5].as_str(), "Added via callback");
        assert_eq!(app.todos()[6].as_str(), "tiny");
        assert_eq!(app.process_messages(), 0);
    }

    #[test]
    fn test_process_messages_without_receiver() {
        let mut app = App::default();
        let _rx = app.message_rx.take();
        assert_eq!(app.process_messages(), 0);
    }

    #[test]
    fn test_stats_follow_snapshot() {
        let mut app = App::default();
        assert_eq!(app.current_stats().count, 5);
        assert_eq!(app.current_stats().count, 5);
        app.increment().unwrap();
        app.current_stats();
        assert_eq!(app.stats.stats().misses, 1);

        app.add_default();
        assert_eq!(app.current_stats().count, 6);
        assert_eq!(app.stats.stats().misses, 2);
    }

    #[test]
    fn test_counter_overflow_propagates() {
        let mut app = App::default();
        app.state.set_counter(u64::MAX);
        app.needs_redraw = false;
        assert!(matches!(
            app.dispatch(Action::IncrementCounter),
            Err(AppError::CounterOverflow)
        ));
        assert!(!app.needs_redraw);
    }
}
