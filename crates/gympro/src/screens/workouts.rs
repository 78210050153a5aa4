use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult};
use crate::data::mock::{self, WORKOUT_TEMPLATES};
use crate::state::AppState;
use crate::util::format::format_short_date;
use crate::util::styles::{NEGATIVE_COLOR, POSITIVE_COLOR, help_style, section_block};

/// Member workout plan and class bookings
pub struct WorkoutsScreen;

impl WorkoutsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WorkoutsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for WorkoutsScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let mut plan: Vec<Line> = Vec::new();
        for template in &WORKOUT_TEMPLATES {
            plan.push(Line::styled(
                format!(" {}", template.name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            for exercise in template.exercises {
                plan.push(Line::raw(format!("   • {exercise}")));
            }
        }
        frame.render_widget(
            Paragraph::new(plan).block(section_block("Workout Plan")),
            chunks[0],
        );

        let mut classes: Vec<Line> = Vec::new();
        for class in mock::classes() {
            let availability = if class.is_full() {
                Span::styled("Full", Style::default().fg(NEGATIVE_COLOR))
            } else {
                Span::styled(
                    format!("{}/{} spots", class.spots_left, class.total_spots),
                    Style::default().fg(POSITIVE_COLOR),
                )
            };
            classes.push(Line::from(vec![
                Span::styled(
                    format!(" {}", class.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                availability,
            ]));
            classes.push(Line::styled(
                format!(
                    "   {} {} · {} min · {}",
                    format_short_date(class.date),
                    class.time,
                    class.duration_min,
                    class.trainer
                ),
                help_style(),
            ));
        }
        frame.render_widget(
            Paragraph::new(classes).block(section_block("Class Bookings")),
            chunks[1],
        );
    }
}
