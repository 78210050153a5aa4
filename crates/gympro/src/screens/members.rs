use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Row, Table, TableState},
};

use crate::components::{Component, EventResult};
use crate::data::mock::{self, MemberRow, MemberStatus};
use crate::state::AppState;
use crate::util::format::format_date;
use crate::util::styles::{
    FOCUS_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR, WARNING_COLOR, header_style, section_block,
};

/// Admin member directory
pub struct MembersScreen {
    rows: Vec<MemberRow>,
    selected: usize,
}

impl MembersScreen {
    pub fn new() -> Self {
        Self {
            rows: mock::members(),
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn status_color(status: MemberStatus) -> Color {
        match status {
            MemberStatus::Active => POSITIVE_COLOR,
            MemberStatus::Expiring => WARNING_COLOR,
            MemberStatus::Lapsed => NEGATIVE_COLOR,
        }
    }
}

impl Default for MembersScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MembersScreen {
    fn handle_key(&mut self, key: KeyEvent, _state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let header = Row::new(vec!["Name", "Email", "Plan", "Joined", "Status"])
            .style(header_style());

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|m| {
                Row::new(vec![
                    Line::raw(m.name),
                    Line::raw(m.email),
                    Line::raw(m.plan),
                    Line::raw(format_date(m.joined)),
                    Line::styled(
                        m.status.label(),
                        Style::default().fg(Self::status_color(m.status)),
                    ),
                ])
            })
            .collect();

        let active = self
            .rows
            .iter()
            .filter(|m| m.status != MemberStatus::Lapsed)
            .count();
        let title = format!("Members ({active} active of {})", self.rows.len());

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Min(22),
                Constraint::Length(9),
                Constraint::Length(18),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(section_block(&title))
        .row_highlight_style(
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        let mut table_state = TableState::default();
        table_state.select(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}
