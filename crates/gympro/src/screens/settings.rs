use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult};
use crate::platform::SESSION_FILE_NAME;
use crate::state::AppState;
use crate::util::styles::{help_style, section_block};

/// Read-only view of where the app talks to and writes to
pub struct SettingsScreen;

impl SettingsScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn entries(state: &AppState) -> Vec<(&'static str, String)> {
        vec![
            ("API URL", state.config.api_base_url.clone()),
            (
                "Timeout",
                format!("{} s", state.config.request_timeout_secs),
            ),
            ("Data dir", state.data_dir.display().to_string()),
            (
                "Session",
                state.data_dir.join(SESSION_FILE_NAME).display().to_string(),
            ),
            ("Log file", state.log_path().display().to_string()),
        ]
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SettingsScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines: Vec<Line> = Self::entries(state)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!(" {label:<10}"), help_style()),
                    Span::styled(value, Style::default().fg(Color::White)),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            " Edit config.yaml in the data directory to change these values.",
            help_style(),
        ));

        frame.render_widget(
            Paragraph::new(lines).block(section_block("App Settings")),
            area,
        );
    }
}
