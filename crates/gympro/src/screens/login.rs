use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::components::text_input::render_text_input;
use crate::components::{Component, EventResult};
use crate::modals::centered_rect;
use crate::modals::helpers::HelpText;
use crate::platform::WorkerRequest;
use crate::state::{AppState, InFlight, LoginField, TextField};
use crate::util::styles::header_style;

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 16;

pub struct LoginScreen;

impl LoginScreen {
    pub fn new() -> Self {
        Self
    }

    fn submit(state: &mut AppState) {
        let credentials = state.login_form.credentials();
        if let Err(e) = credentials.validate() {
            state.show_auth_error("Login Failed", &e);
            return;
        }
        state.submit(WorkerRequest::Login(credentials));
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared line-editing keys for form inputs
pub(crate) fn edit_field(field: &mut TextField, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field.insert_char(c)
        }
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.home(),
        KeyCode::End => field.end(),
        _ => return false,
    }
    true
}

impl Component for LoginScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.is_pending(InFlight::Login) {
            // Swallow input until the request settles
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(navigator) = state.navigator.as_mut()
                    && let Err(e) = navigator.push_sign_up()
                {
                    tracing::debug!(error = %e, "Sign-up unavailable");
                }
                EventResult::Handled
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                state.login_form.next_field();
                EventResult::Handled
            }
            KeyCode::Enter => {
                if state.login_form.focus == LoginField::Email {
                    state.login_form.next_field();
                } else {
                    Self::submit(state);
                }
                EventResult::Handled
            }
            _ => {
                if edit_field(state.login_form.focused_field(), key) {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let form_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" GymPro ", header_style()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(1), // Spacing
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(1), // Spacing
                Constraint::Length(1), // Status
                Constraint::Min(0),
                Constraint::Length(1), // Help
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Welcome Back",
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[0],
        );

        let form = &state.login_form;
        render_text_input(
            frame,
            chunks[2],
            "Email",
            &form.email,
            form.focus == LoginField::Email,
            "you@example.com",
        );
        render_text_input(
            frame,
            chunks[3],
            "Password",
            &form.password,
            form.focus == LoginField::Password,
            "",
        );

        if state.is_pending(InFlight::Login) {
            frame.render_widget(
                Paragraph::new(Line::styled("Signing in…", Style::default().fg(Color::Yellow)))
                    .alignment(Alignment::Center),
                chunks[5],
            );
        }

        let help = HelpText::new()
            .key("[Enter]", Color::Green, "Login")
            .key("[Ctrl+N]", Color::Cyan, "Sign Up")
            .build_centered();
        frame.render_widget(help, chunks[7]);
    }
}
