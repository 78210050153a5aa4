use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult};
use crate::data::mock::{CURRENT_PLAN, MEMBERSHIP_PLANS};
use crate::state::AppState;
use crate::util::format::format_currency;
use crate::util::styles::{focused_block, help_style};

/// Plan comparison with the member's current plan highlighted
pub struct MembershipScreen;

impl MembershipScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MembershipScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MembershipScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, MEMBERSHIP_PLANS.len() as u32);
                MEMBERSHIP_PLANS.len()
            ])
            .split(area);

        for (plan, col) in MEMBERSHIP_PLANS.iter().zip(cols.iter()) {
            let current = plan.name == CURRENT_PLAN;

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {}", format_currency(plan.monthly_price_cents)),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" / month", help_style()),
                ]),
                Line::raw(""),
            ];
            lines.extend(
                plan.benefits
                    .iter()
                    .map(|b| Line::raw(format!(" ✓ {b}"))),
            );
            if current {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    " Current plan",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            let title = if current {
                format!("{} ★", plan.name)
            } else {
                plan.name.to_string()
            };
            frame.render_widget(
                Paragraph::new(lines).block(focused_block(&title, current)),
                *col,
            );
        }
    }
}
