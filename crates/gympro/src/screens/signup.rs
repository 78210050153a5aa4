use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::login::edit_field;
use crate::components::text_input::render_text_input;
use crate::components::{Component, EventResult};
use crate::modals::centered_rect;
use crate::modals::helpers::HelpText;
use crate::platform::WorkerRequest;
use crate::state::{AppState, InFlight, ROLE_CHOICES, SignUpField};
use crate::util::styles::{FOCUS_COLOR, focused_block, header_style};

const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 24;

pub struct SignUpScreen;

impl SignUpScreen {
    pub fn new() -> Self {
        Self
    }

    fn submit(state: &mut AppState) {
        let registration = state.signup_form.registration();
        if let Err(e) = registration.validate() {
            state.show_auth_error("Registration Failed", &e);
            return;
        }
        state.submit(WorkerRequest::Register(registration));
    }

    fn render_role_selector(frame: &mut Frame, area: Rect, state: &AppState) {
        let form = &state.signup_form;
        let focused = form.focus == SignUpField::Role;

        let mut spans = vec![Span::raw(" ")];
        for role in ROLE_CHOICES {
            let selected = role == form.role;
            let marker = if selected { "(•) " } else { "( ) " };
            let style = if selected {
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("{marker}{}", role.label()), style));
            spans.push(Span::raw("   "));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(focused_block("Role", focused)),
            area,
        );
    }
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SignUpScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.is_pending(InFlight::Register) {
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Esc => {
                if let Some(navigator) = state.navigator.as_mut() {
                    navigator.back();
                }
                EventResult::Handled
            }
            KeyCode::Tab | KeyCode::Down => {
                state.signup_form.next_field();
                EventResult::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.signup_form.previous_field();
                EventResult::Handled
            }
            KeyCode::Enter => {
                if state.signup_form.focus == SignUpField::Role {
                    Self::submit(state);
                } else {
                    state.signup_form.next_field();
                }
                EventResult::Handled
            }
            KeyCode::Left | KeyCode::Right if state.signup_form.focus == SignUpField::Role => {
                state
                    .signup_form
                    .cycle_role(key.code == KeyCode::Right);
                EventResult::Handled
            }
            _ => match state.signup_form.focused_field() {
                Some(field) => {
                    if edit_field(field, key) {
                        EventResult::Handled
                    } else {
                        EventResult::NotHandled
                    }
                }
                None => EventResult::NotHandled,
            },
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
                Constraint::Length(3), // First name
                Constraint::Length(3), // Last name
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(3), // Role
                Constraint::Length(1), // Status
                Constraint::Min(0),
                Constraint::Length(1), // Help
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Create Account",
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[0],
        );

        let form = &state.signup_form;
        for (i, field) in SignUpField::ALL.iter().enumerate() {
            if let Some(input) = form.field(*field) {
                render_text_input(
                    frame,
                    chunks[i + 1],
                    field.label(),
                    input,
                    form.focus == *field,
                    "",
                );
            }
        }
        Self::render_role_selector(frame, chunks[5], state);

        if state.is_pending(InFlight::Register) {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "Creating account…",
                    Style::default().fg(Color::Yellow),
                ))
                .alignment(Alignment::Center),
                chunks[6],
            );
        }

        let help = HelpText::new()
            .key("[Enter]", Color::Green, "Next/Register")
            .key("[Esc]", Color::Yellow, "Back to Login")
            .build_centered();
        frame.render_widget(help, chunks[8]);
    }
}
