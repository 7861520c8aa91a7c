//! Color theme constants.

use ratatui::style::Color;

/// Panel border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and focused elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Keybind hints
pub const COLOR_HINT: Color = Color::Cyan;

/// Validation errors
pub const COLOR_ERROR: Color = Color::Red;

/// Background for the input box
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);
