use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Row, Table},
};

use crate::components::{Component, EventResult};
use crate::data::mock;
use crate::state::AppState;
use crate::util::format::format_short_date;
use crate::util::styles::{HELP_COLOR, header_style, section_block};

/// Trainer's client list with goals and progress
pub struct ClientsScreen;

impl ClientsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClientsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ClientsScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let clients = mock::clients();
        let rows: Vec<Row> = clients
            .iter()
            .map(|c| {
                let next = match c.next_session {
                    Some(date) => Line::raw(format_short_date(date)),
                    None => Line::styled("not booked", Style::default().fg(HELP_COLOR)),
                };
                Row::new(vec![
                    Line::raw(c.name),
                    Line::raw(c.goal),
                    Line::raw(c.sessions_completed.to_string()),
                    next,
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Min(12),
            ],
        )
        .header(Row::new(vec!["Client", "Goal", "Sessions", "Next"]).style(header_style()))
        .block(section_block(&format!("Clients ({})", clients.len())));

        frame.render_widget(table, area);
    }
}
