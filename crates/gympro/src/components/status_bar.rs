use super::{Component, EventResult};
use crate::state::{AppState, InFlight};
use crossterm::event::KeyEvent;
use gympro_core::Route;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn help_text(state: &AppState) -> &'static str {
        if state.is_pending(InFlight::Login) {
            return "Signing in... | Ctrl+C: quit";
        }
        if state.is_pending(InFlight::Register) {
            return "Creating account... | Ctrl+C: quit";
        }
        let Some(navigator) = state.navigator.as_ref() else {
            return "Loading session... | q: quit";
        };
        match navigator.current_route() {
            Route::Login => "Tab: next field | Enter: sign in | Ctrl+N: create account | Ctrl+C: quit",
            Route::SignUp => {
                "Tab: next field | ←/→: role | Enter: register | Esc: back to login | Ctrl+C: quit"
            }
            Route::MainApp { .. } if navigator.is_drawer_open() => {
                "↑/↓: select | Enter: open | Esc/m: close menu | q: quit"
            }
            Route::MainApp { .. } => {
                "1-9/←/→: tabs | m: menu | p: profile | s: settings | L: logout | q: quit"
            }
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
