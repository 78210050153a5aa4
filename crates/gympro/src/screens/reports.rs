use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
};

use crate::components::{Component, EventResult};
use crate::data::mock;
use crate::state::AppState;
use crate::util::format::{format_currency_short, format_percentage};
use crate::util::styles::{NEGATIVE_COLOR, POSITIVE_COLOR, header_style, section_block};

/// Revenue and attendance summary
pub struct ReportsScreen;

impl ReportsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReportsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ReportsScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let reports = mock::monthly_reports();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(4)])
            .split(area);

        let total_revenue: i64 = reports.iter().map(|r| r.revenue_cents).sum();
        let total_new: u32 = reports.iter().map(|r| r.new_members).sum();
        let summary = vec![
            Line::from(vec![
                Span::raw(" Revenue (last 4 months): "),
                Span::styled(
                    format_currency_short(total_revenue),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::raw(" New members: "),
                Span::styled(total_new.to_string(), Style::default().fg(Color::Yellow)),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(summary).block(section_block("Summary")),
            chunks[0],
        );

        let mut previous: Option<i64> = None;
        let rows: Vec<Row> = reports
            .iter()
            .map(|r| {
                let trend = match previous {
                    Some(p) if r.revenue_cents >= p => {
                        Span::styled("▲", Style::default().fg(POSITIVE_COLOR))
                    }
                    Some(_) => Span::styled("▼", Style::default().fg(NEGATIVE_COLOR)),
                    None => Span::raw(" "),
                };
                previous = Some(r.revenue_cents);
                Row::new(vec![
                    Line::raw(r.month),
                    Line::from(vec![
                        Span::raw(format!("{} ", format_currency_short(r.revenue_cents))),
                        trend,
                    ]),
                    Line::raw(r.new_members.to_string()),
                    Line::raw(format_percentage(r.attendance_rate)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(14),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(Row::new(vec!["Month", "Revenue", "New", "Attendance"]).style(header_style()))
        .block(section_block("Monthly Reports"));

        frame.render_widget(table, chunks[1]);
    }
}
