//! Role-specific home screen.

use crossterm::event::KeyEvent;
use gympro_core::Role;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::components::{Component, EventResult};
use crate::data::mock::{self, Stat};
use crate::state::AppState;
use crate::util::styles::{help_style, role_color, section_block};

pub struct DashboardScreen;

impl DashboardScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_banner(frame: &mut Frame, area: Rect, role: Role) {
        let text = vec![
            Line::styled(
                "Welcome back!",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("{} Dashboard", role.label()),
                Style::default().fg(role_color(role)),
            ),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }

    fn render_stats(frame: &mut Frame, area: Rect, title: &str, stats: &[Stat]) {
        let block = section_block(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if stats.is_empty() {
            return;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, stats.len() as u32); stats.len()])
            .split(inner);

        for (stat, col) in stats.iter().zip(cols.iter()) {
            let text = vec![
                Line::styled(
                    stat.value.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(stat.label, help_style()),
            ];
            frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *col);
        }
    }

    fn render_actions(frame: &mut Frame, area: Rect, actions: &[&str]) {
        let spans: Vec<Span> = actions
            .iter()
            .flat_map(|a| {
                [
                    Span::styled(format!("[ {a} ]"), Style::default().fg(Color::Cyan)),
                    Span::raw("  "),
                ]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .block(section_block("Quick Actions")),
            area,
        );
    }

    fn render_todays_schedule(frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = mock::todays_schedule()
            .iter()
            .map(|slot| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<9}", slot.time),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        format!("{:<16}", slot.client),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(slot.kind, help_style()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(section_block("Today's Schedule")),
            area,
        );
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DashboardScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let role = state
            .navigator
            .as_ref()
            .and_then(|n| n.role())
            .unwrap_or_default();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Banner
                Constraint::Length(4), // Primary section
                Constraint::Min(4),    // Secondary section
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_banner(frame, chunks[0], role);

        match role {
            Role::Admin => {
                Self::render_stats(frame, chunks[1], "Business Overview", &mock::admin_stats());
                Self::render_actions(frame, chunks[2], &mock::ADMIN_QUICK_ACTIONS);
            }
            Role::Trainer => {
                Self::render_stats(frame, chunks[1], "Client Overview", &mock::trainer_stats());
                Self::render_todays_schedule(frame, chunks[2]);
            }
            Role::Member => {
                Self::render_stats(
                    frame,
                    chunks[1],
                    "My Fitness Journey",
                    &mock::member_stats(),
                );
                Self::render_actions(frame, chunks[2], &mock::MEMBER_QUICK_ACTIONS);
            }
        }

        frame.render_widget(
            Paragraph::new(Line::styled("Need help? Contact support", help_style()))
                .alignment(Alignment::Center),
            chunks[3],
        );
    }
}
