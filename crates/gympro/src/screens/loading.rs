use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::modals::centered_rect;
use crate::util::styles::header_style;

/// Shown while the persisted session is being read. Nothing else mounts.
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::styled("GymPro", header_style()),
        Line::raw(""),
        Line::styled("Loading session…", Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        centered_rect(30, 3, area),
    );
}
