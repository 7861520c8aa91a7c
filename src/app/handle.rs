//! Stable action handle for adding tasks.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::messages::AppMessage;
use crate::memo::SameRef;

/// Adds tasks to the App that created it.
///
/// The App creates exactly one handle and hands out clones. Clones compare
/// equal to each other, so a handle carried in memoized props never causes a
/// cache miss by itself.
#[derive(Debug, Clone)]
pub struct AddTodoHandle {
    inner: Arc<mpsc::UnboundedSender<AppMessage>>,
}

impl AddTodoHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { inner: Arc::new(tx) }
    }

    /// Queue `text` for appending. Returns false if the App is gone.
    pub fn add(&self, text: impl Into<String>) -> bool {
        let sent = self.inner.send(AppMessage::AddTodo(text.into())).is_ok();
        if !sent {
            tracing::warn!("add handle used after the app was dropped");
        }
        sent
    }
}

impl PartialEq for AddTodoHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for AddTodoHandle {}

impl SameRef for AddTodoHandle {
    fn same_ref(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_are_equal() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let handle = AddTodoHandle::new(tx);
        assert_eq!(handle, handle.clone());
    }

    #[test]
    fn test_separately_created_handles_differ() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let a = AddTodoHandle::new(tx.clone());
        let b = AddTodoHandle::new(tx);
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_posts_message() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = AddTodoHandle::new(tx);

        assert!(handle.add("Added via callback"));
        assert_eq!(
            rx.try_recv().ok(),
            Some(AppMessage::AddTodo("Added via callback".to_string()))
        );
    }

    #[test]
    fn test_add_after_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        assert!(!AddTodoHandle::new(tx).add("lost"));
    }
}
