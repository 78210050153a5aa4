//! Shared colors and block builders

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use gympro_core::Role;

/// Highlight for the focused field, selected tab and drawer cursor
pub const FOCUS_COLOR: Color = Color::Yellow;

pub const HELP_COLOR: Color = Color::DarkGray;

pub const HEADER_COLOR: Color = Color::Cyan;

pub const POSITIVE_COLOR: Color = Color::Green;

pub const NEGATIVE_COLOR: Color = Color::Red;

pub const WARNING_COLOR: Color = Color::Yellow;

/// Accent used for the role badge in the header and drawer
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Admin => Color::Magenta,
        Role::Trainer => Color::LightBlue,
        Role::Member => Color::Green,
    }
}

/// Bordered block whose border turns yellow when focused.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {title} "))
}

/// Bordered section block with a cyan title
pub fn section_block(title: &str) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(Span::styled(
        format!(" {title} "),
        Style::default()
            .fg(HEADER_COLOR)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn header_style() -> Style {
    Style::default()
        .fg(HEADER_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn help_style() -> Style {
    Style::default().fg(HELP_COLOR)
}
