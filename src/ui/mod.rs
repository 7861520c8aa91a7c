//! UI rendering.
//!
//! One screen:
//! - Header with the counter and the control hints
//! - Input field for validated tasks, with the inline validation error
//! - Task list (memoized, see [`components::TodoListView`]) and the stats
//!   panel (memoized through `DerivedStats`), side by side or stacked

pub mod components;
mod layout;
mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_HINT, COLOR_INPUT_BG,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use components::{
    calculate_input_field_height, render_input_field, stats_lines, InputFieldConfig,
};

const TITLE: &str = "Task Management with memoized views";
const INPUT_PLACEHOLDER: &str = "Enter custom task (>5 chars)";

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let error = app.validation_error().map(|e| e.user_message());
    let input_config = InputFieldConfig::new("New task", app.input_draft())
        .focused(app.focus == Focus::Input)
        .placeholder(INPUT_PLACEHOLDER)
        .error(error.as_deref());
    let input_height = calculate_input_field_height(&input_config);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Header
            Constraint::Length(input_height), // Input
            Constraint::Min(0),               // Panels yield first
            Constraint::Length(1),            // Hints
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_input_field(frame, chunks[1], &input_config);
    render_panels(frame, chunks[2], app, &ctx);
    render_hints(frame, chunks[3], app.focus);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Counter: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                app.counter().to_string(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn panel_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title, Style::default().fg(COLOR_ACCENT)))
}

fn render_panels(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let chunks = if ctx.should_stack_panels() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(10)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(ctx.stats_panel_width()),
            ])
            .split(area)
    };

    let props = app.list_props();
    let list_lines = app.list_view.render(&props).to_vec();
    let list_title = format!("Todos ({})", props.todos.len());
    frame.render_widget(
        Paragraph::new(list_lines).block(panel_block(list_title)),
        chunks[0],
    );

    let stats = app.current_stats();
    let report = app.memo_report();
    frame.render_widget(
        Paragraph::new(stats_lines(&stats, &report))
            .block(panel_block("Stats (memoized)".to_string())),
        chunks[1],
    );
}

fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(COLOR_HINT)),
        Span::styled(label, Style::default().fg(COLOR_DIM)),
    ]
}

fn render_hints(frame: &mut Frame, area: Rect, focus: Focus) {
    let hints: Vec<[Span<'static>; 2]> = match focus {
        Focus::Controls => vec![
            hint("[a]", " add todo  "),
            hint("[+]", " increment  "),
            hint("[c]", " add via callback  "),
            hint("[tab]", " type task  "),
            hint("[q]", " quit"),
        ],
        Focus::Input => vec![
            hint("[enter]", " submit  "),
            hint("[esc]", " back  "),
            hint("[ctrl+c]", " quit"),
        ],
    };
    let spans: Vec<Span<'static>> = hints.into_iter().flatten().collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
