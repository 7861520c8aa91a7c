//! Task list rendering with a list-level memo and one memo per row.
//!
//! The list view re-renders only when it receives a new snapshot (or a
//! different add handle). When it does, each row goes through its own cache
//! keyed by text and position, so rows whose props did not change reuse
//! their previous line.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::app::AddTodoHandle;
use crate::memo::{CacheStats, KeyedMemo, MemoizedView, RefEq, SameRef};
use crate::state::{Task, TaskList};
use crate::ui::theme::{COLOR_DIM, COLOR_HINT};

/// Row identity: the task text together with its position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub text: Task,
    pub index: usize,
}

/// Props of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemProps {
    pub index: usize,
    pub text: Task,
}

impl TodoItemProps {
    pub fn key(&self) -> ItemKey {
        ItemKey {
            text: self.text.clone(),
            index: self.index,
        }
    }
}

/// Props of the whole list.
#[derive(Debug, Clone)]
pub struct TodoListProps {
    pub todos: TaskList,
    pub on_add: AddTodoHandle,
}

impl SameRef for TodoListProps {
    fn same_ref(&self, other: &Self) -> bool {
        self.todos.same_ref(&other.todos) && self.on_add.same_ref(&other.on_add)
    }
}

/// Render one row as `"{n}. {text}"`.
pub fn render_item(props: &TodoItemProps) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}. ", props.index + 1),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw(props.text.as_str().to_string()),
    ])
}

/// Render every row plus the footer without any caching.
pub fn render_list_uncached(props: &TodoListProps) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = props
        .todos
        .iter()
        .enumerate()
        .map(|(index, text)| {
            render_item(&TodoItemProps {
                index,
                text: text.clone(),
            })
        })
        .collect();
    lines.push(footer_line());
    lines
}

fn footer_line() -> Line<'static> {
    Line::from(Span::styled(
        "[c] Add via callback",
        Style::default().fg(COLOR_HINT),
    ))
}

/// Memoized list rendering.
#[derive(Debug)]
pub struct TodoListView {
    list: MemoizedView<TodoListProps, Vec<Line<'static>>, RefEq>,
    rows: KeyedMemo<ItemKey, TodoItemProps, Line<'static>>,
}

impl Default for TodoListView {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListView {
    pub fn new() -> Self {
        Self {
            list: MemoizedView::with_eq("todo_list", RefEq),
            rows: KeyedMemo::new("todo_item"),
        }
    }

    /// Lines for `props`, identical to [`render_list_uncached`].
    pub fn render(&mut self, props: &TodoListProps) -> &[Line<'static>] {
        let rows = &mut self.rows;
        self.list
            .render_with(props, |p| render_rows(p, rows))
            .as_slice()
    }

    pub fn list_stats(&self) -> CacheStats {
        self.list.stats()
    }

    pub fn row_stats(&self) -> CacheStats {
        self.rows.stats()
    }

    pub fn row_key_stats(&self, key: &ItemKey) -> Option<CacheStats> {
        self.rows.key_stats(key)
    }

    /// Number of live row caches.
    pub fn cached_rows(&self) -> usize {
        self.rows.len()
    }

    /// Drop every cached line, e.g. after the palette changed.
    pub fn invalidate(&mut self) {
        self.list.invalidate();
        self.rows.clear();
    }
}

fn render_rows(
    props: &TodoListProps,
    rows: &mut KeyedMemo<ItemKey, TodoItemProps, Line<'static>>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(props.todos.len() + 1);
    for (index, text) in props.todos.iter().enumerate() {
        let item = TodoItemProps {
            index,
            text: text.clone(),
        };
        lines.push(rows.render_with(&item.key(), &item, render_item).clone());
    }
    rows.sweep();
    lines.push(footer_line());
    lines
}
