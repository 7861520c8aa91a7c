//! Type definitions for the application state.

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys trigger the buttons (add, increment, add via handle)
    #[default]
    Controls,
    /// Keys edit the task draft
    Input,
}

/// User actions, independent of how they were triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddDefaultTodo,
    SubmitValidatedTodo(String),
    AddViaHandle(String),
    IncrementCounter,
    UpdateDraft(String),
}
