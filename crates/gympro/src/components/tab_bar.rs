use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::FOCUS_COLOR;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Role tab strip: `[1] Dashboard  [2] Members ...`
pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let Some(navigator) = state.navigator.as_mut() else {
            return EventResult::NotHandled;
        };
        if !navigator.is_authenticated() || navigator.is_drawer_open() {
            return EventResult::NotHandled;
        }

        let result = match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index >= navigator.tabs().len() {
                    return EventResult::NotHandled;
                }
                navigator.select_tab(index)
            }
            KeyCode::Right | KeyCode::Char(']') => navigator.next_tab(),
            KeyCode::Left | KeyCode::Char('[') => navigator.previous_tab(),
            _ => return EventResult::NotHandled,
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "Tab change rejected");
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(navigator) = state.navigator.as_ref() else {
            return;
        };
        // An overlay screen (Settings, Profile from the drawer) leaves no tab selected
        let active = navigator
            .active_tab_index()
            .filter(|_| navigator.current_screen() == navigator.active_tab());

        let titles: Vec<Line> = navigator
            .tabs()
            .iter()
            .enumerate()
            .map(|(idx, screen)| {
                let content = format!("[{}] {}", idx + 1, screen.name());
                if Some(idx) == active {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(FOCUS_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(active)
            .highlight_style(
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
