use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::modals::helpers::{calculate_scroll, render_cursor_line};
use crate::state::TextField;
use crate::util::styles::{focused_block, help_style};

/// Draw a bordered single-line input. The cursor is only shown when focused.
pub fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &TextField,
    focused: bool,
    placeholder: &str,
) {
    let block = focused_block(label, focused);
    let display = field.display_value();

    let line = if focused {
        let view = calculate_scroll(&display, field.cursor_pos, area.width as usize);
        render_cursor_line(&view.display_value, view.cursor_pos, "")
    } else if display.is_empty() {
        Line::styled(placeholder.to_string(), help_style())
    } else {
        let view = calculate_scroll(&display, 0, area.width as usize);
        Line::raw(view.display_value)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
