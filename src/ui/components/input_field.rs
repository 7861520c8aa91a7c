//! Input Field Component
//!
//! A single-line text input with focus handling, a placeholder and an
//! inline error line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows needed: label (1) + input box (3) + error (1, if present).
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 4;
    if config.error.is_some() {
        height += 1;
    }
    height
}

/// Render label, input box and optional error. Returns the rows consumed.
///
/// When `area` is too short for everything, the box shrinks before the error
/// line does.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    if area.height == 0 {
        return 0;
    }
    let error_rows = u16::from(config.error.is_some());
    let mut y_offset = 0;

    let label_style = if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );
    y_offset += 1;

    let input_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: 3.min(area.height.saturating_sub(y_offset + error_rows)),
    };
    let border_color = if config.focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let content = match (config.value.is_empty(), config.placeholder) {
        (true, Some(placeholder)) => Span::styled(
            placeholder.to_string(),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ),
        _ => Span::raw(config.value.to_string()),
    };
    let mut spans = vec![content];
    if config.focused {
        spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);
    y_offset += input_area.height;

    if let Some(error) = config.error {
        if y_offset < area.height {
            let error_area = Rect {
                x: area.x,
                y: area.y + y_offset,
                width: area.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    error.to_string(),
                    Style::default().fg(COLOR_ERROR),
                ))),
                error_area,
            );
            y_offset += 1;
        }
    }

    y_offset
}
