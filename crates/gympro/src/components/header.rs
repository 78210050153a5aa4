use gympro_core::Role;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::styles::{header_style, help_style, role_color};

/// One-line header: menu hint, brand and the signed-in role.
pub fn render_header(frame: &mut Frame, area: Rect, role: Role, drawer_open: bool) {
    let menu = if drawer_open { "[m] ✕ " } else { "[m] ☰ " };
    let line = Line::from(vec![
        Span::styled(menu, help_style()),
        Span::styled("GymPro", header_style()),
        Span::raw("  "),
        Span::styled(
            format!("{} Dashboard", role.label()),
            Style::default()
                .fg(role_color(role))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
