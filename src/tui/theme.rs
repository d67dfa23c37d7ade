//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Blue background: the selected tab / direction / action button
//! - Cyan: focused input and keybinding hints
//! - Green: computed results
//! - Dim: placeholders, inactive controls, help line

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Computed result text — green.
pub const STYLE_RESULT: Style = Style::new().fg(Color::Green);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text (help descriptions) — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Selected tab or direction button.
pub const STYLE_ACTIVE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// Unselected tab button.
pub const STYLE_TAB: Style = Style::new().fg(Color::Gray).bg(Color::Black);

/// Unselected direction button.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Gray);

/// The Convert button.
pub const STYLE_CONVERT: Style = Style::new().fg(Color::White).bg(Color::Blue);

/// Border of the focused input.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border of an unfocused input.
pub const STYLE_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Placeholder text in an empty input.
pub const STYLE_PLACEHOLDER: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::ITALIC);

// ============================================================================
// TESTS
// ============================================================================
