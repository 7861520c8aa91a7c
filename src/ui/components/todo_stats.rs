//! Aggregate statistics over the task list.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::memo::CacheStats;
use crate::state::{Task, TaskList};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Aggregates shown in the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TodoStats {
    pub count: usize,
    /// Sum of task lengths in characters
    pub total_chars: usize,
    /// Length of the longest task in characters
    pub longest: usize,
    /// Mean task length, 0.0 for an empty list
    pub average_len: f64,
}

impl TodoStats {
    /// Fold the whole list. Deterministic and side-effect free.
    pub fn compute(todos: &TaskList) -> Self {
        let (total_chars, longest) = todos
            .iter()
            .map(Task::char_len)
            .fold((0, 0), |(total, longest), len| (total + len, longest.max(len)));
        let average_len = if todos.is_empty() {
            0.0
        } else {
            total_chars as f64 / todos.len() as f64
        };
        Self {
            count: todos.len(),
            total_chars,
            longest,
            average_len,
        }
    }
}

/// Cache counters shown under the stats.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoReport {
    pub list: CacheStats,
    pub rows: CacheStats,
    pub stats: CacheStats,
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value, Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
    ])
}

fn cache_line(label: &str, stats: CacheStats) -> Line<'static> {
    stat_line(label, format!("{} hit / {} miss", stats.hits, stats.misses))
}

/// Lines for the stats panel.
pub fn stats_lines(stats: &TodoStats, report: &MemoReport) -> Vec<Line<'static>> {
    vec![
        stat_line("Total tasks", stats.count.to_string()),
        stat_line("Characters", stats.total_chars.to_string()),
        stat_line("Longest", stats.longest.to_string()),
        stat_line("Average", format!("{:.1}", stats.average_len)),
        Line::default(),
        cache_line("List view", report.list),
        cache_line("Row views", report.rows),
        cache_line("Stats", report.stats),
    ]
}
