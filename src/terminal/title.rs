//! Window-title summary hook.

use crossterm::{execute, terminal::SetTitle};
use std::io::{self, Write};

use crate::app::{summary_title, SummaryHook};

/// Writes `"Todos: N • Counter: C"` to the terminal title.
pub struct TitleHook<W: Write> {
    writer: W,
}

impl TitleHook<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TitleHook<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SummaryHook for TitleHook<W> {
    fn on_summary_change(&mut self, task_count: usize, counter: u64) {
        let title = summary_title(task_count, counter);
        if let Err(e) = execute!(self.writer, SetTitle(&title)) {
            tracing::warn!("failed to set terminal title: {}", e);
        }
    }
}
