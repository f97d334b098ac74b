//! List color theme

use ratatui::style::{Color, Modifier, Style};

pub const PRIMARY: Color = Color::Cyan;
pub const SECONDARY: Color = Color::Blue;
pub const ERROR: Color = Color::Red;
pub const DIM: Color = Color::DarkGray;

/// Row background when selected
pub const SELECTED_BG: Color = Color::Green;
/// Row background when not selected
pub const UNSELECTED_BG: Color = Color::Red;

/// Title style (headers)
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Dimmed/inactive text
pub fn dim() -> Style {
    Style::default().fg(DIM)
}

/// Selected row
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

/// Row that is not selected
pub fn unselected() -> Style {
    Style::default().fg(Color::White).bg(UNSELECTED_BG)
}

/// Error banner
pub fn error() -> Style {
    Style::default().fg(ERROR)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(PRIMARY)
}

/// Key hint style
pub fn key_hint() -> Style {
    Style::default().fg(SECONDARY)
}
