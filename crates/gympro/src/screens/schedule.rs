use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult};
use crate::data::mock;
use crate::state::AppState;
use crate::util::format::format_date;
use crate::util::styles::{help_style, section_block};

/// Trainer sessions grouped by day
pub struct ScheduleScreen;

impl ScheduleScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScheduleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ScheduleScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let mut lines: Vec<Line> = Vec::new();
        let mut current_day = None;

        for slot in mock::schedule() {
            if current_day != Some(slot.date) {
                if current_day.is_some() {
                    lines.push(Line::raw(""));
                }
                lines.push(Line::styled(
                    format!(" {}", format_date(slot.date)),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
                current_day = Some(slot.date);
            }
            lines.push(Line::from(vec![
                Span::styled(format!("   {:<10}", slot.time), Style::default().fg(Color::Yellow)),
                Span::raw(format!("{:<16}", slot.client)),
                Span::styled(slot.kind, help_style()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(section_block("Schedule")), area);
    }
}
