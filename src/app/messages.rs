//! Messages posted to the App from outside the key handling path.

/// Messages drained by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Append a task without validation (sent by [`super::AddTodoHandle`])
    AddTodo(String),
}
