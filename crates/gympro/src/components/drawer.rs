use crossterm::event::{KeyCode, KeyEvent};
use gympro_core::{DrawerAction, DrawerOutcome};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{FOCUS_COLOR, header_style, role_color};

pub const DRAWER_WIDTH: u16 = 26;

/// Side menu of the authenticated layout
pub struct Drawer;

impl Drawer {
    pub fn new() -> Self {
        Self
    }

    /// Area the drawer covers on the left of `area`
    pub fn area(area: Rect) -> Rect {
        Rect {
            width: DRAWER_WIDTH.min(area.width),
            ..area
        }
    }

    fn apply(outcome: DrawerOutcome, state: &mut AppState) {
        match outcome {
            DrawerOutcome::LogoutRequested => state.logout_now(),
            DrawerOutcome::ShowTabs | DrawerOutcome::ShowScreen(_) => {}
        }
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Drawer {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let Some(navigator) = state.navigator.as_mut() else {
            return EventResult::NotHandled;
        };
        if !navigator.is_drawer_open() {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => navigator.move_drawer_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => navigator.move_drawer_selection(1),
            KeyCode::Esc | KeyCode::Char('m') => navigator.close_drawer(),
            KeyCode::Enter => match navigator.activate_selected_drawer_item() {
                Ok(outcome) => Self::apply(outcome, state),
                Err(e) => tracing::warn!(error = %e, "Drawer activation failed"),
            },
            // Leave q and Ctrl+C to the app
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(navigator) = state.navigator.as_ref() else {
            return;
        };
        let Some(role) = navigator.role() else {
            return;
        };
        if !navigator.is_drawer_open() {
            return;
        }

        let drawer_area = Self::area(area);
        frame.render_widget(Clear, drawer_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(FOCUS_COLOR))
            .title(" Menu ");
        let inner = block.inner(drawer_area);
        frame.render_widget(block, drawer_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Brand
                Constraint::Length(1), // Role
                Constraint::Length(1), // Spacing
                Constraint::Min(1),    // Items
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(" GymPro", header_style()))),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", role.as_str().to_uppercase()),
                Style::default()
                    .fg(role_color(role))
                    .add_modifier(Modifier::BOLD),
            ))),
            chunks[1],
        );

        let current = navigator.current_screen();
        let items: Vec<ListItem> = navigator
            .drawer_items()
            .iter()
            .map(|item| {
                let style = match item.action {
                    DrawerAction::Logout => Style::default().fg(Color::Red),
                    DrawerAction::Open(screen) if Some(screen) == current => {
                        Style::default().add_modifier(Modifier::BOLD)
                    }
                    _ => Style::default(),
                };
                ListItem::new(Line::from(Span::styled(item.label, style)))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(navigator.drawer_selection());
        frame.render_stateful_widget(list, chunks[3], &mut list_state);
    }
}
