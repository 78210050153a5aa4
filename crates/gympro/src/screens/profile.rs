use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult};
use crate::data::mock::{self, GYM_CONTACT};
use crate::state::AppState;
use crate::util::format::format_date;
use crate::util::styles::{help_style, section_block};

pub struct ProfileScreen;

impl ProfileScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<10}"), help_style()),
        Span::raw(value),
    ])
}

impl Component for ProfileScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let profile = mock::profile();
        let role = state
            .navigator
            .as_ref()
            .and_then(|n| n.role())
            .unwrap_or_default();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Personal
                Constraint::Length(5), // Membership
                Constraint::Min(5),    // Contact
            ])
            .split(area);

        let personal = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {}", profile.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  ({})", role.label()), help_style()),
            ]),
            field_line("Email", profile.email.to_string()),
            field_line("Phone", profile.phone.to_string()),
            field_line("Birthday", format_date(profile.birthday)),
        ];
        frame.render_widget(
            Paragraph::new(personal).block(section_block("Personal Information")),
            chunks[0],
        );

        let membership = vec![
            field_line("Plan", profile.plan.to_string()),
            field_line("Joined", format_date(profile.joined)),
            field_line("Expires", format_date(profile.expires)),
        ];
        frame.render_widget(
            Paragraph::new(membership).block(section_block("Membership Details")),
            chunks[1],
        );

        let contact: Vec<Line> = GYM_CONTACT
            .iter()
            .map(|(label, value)| field_line(label, value.to_string()))
            .collect();
        frame.render_widget(
            Paragraph::new(contact).block(section_block("Contact Information")),
            chunks[2],
        );
    }
}
