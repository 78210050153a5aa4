//! Rendering helpers shared by modals and form screens.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

// ========== Cursor Rendering ==========

fn cursor_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

/// A line of text with the character at `cursor_pos` drawn inverted.
///
/// A cursor past the last character is drawn as an inverted blank.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let mut spans = Vec::new();
    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let chars: Vec<char> = display_value.chars().collect();
    let split = cursor_pos.min(chars.len());
    let before: String = chars[..split].iter().collect();
    if !before.is_empty() {
        spans.push(Span::raw(before));
    }

    match chars.get(split) {
        Some(c) => {
            spans.push(Span::styled(c.to_string(), cursor_style()));
            let after: String = chars[split + 1..].iter().collect();
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
        }
        None => spans.push(Span::styled(" ", cursor_style())),
    }

    Line::from(spans)
}

// ========== Horizontal Scroll ==========

/// Visible slice of a text input that is wider than its box
#[derive(Debug, PartialEq, Eq)]
pub struct ScrolledView {
    pub display_value: String,
    /// Cursor position within `display_value`
    pub cursor_pos: usize,
}

/// Slice `value` so the cursor stays visible inside `max_width` columns.
///
/// Two columns are reserved for the border. Positions are in characters.
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let input_width = max_width.saturating_sub(2);
    let chars: Vec<char> = value.chars().collect();

    // Keep one column free for a cursor sitting past the end
    if chars.len() < input_width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let visible = input_width.saturating_sub(1).max(1);
    let end = (cursor_pos + 1)
        .min(chars.len())
        .max(visible.min(chars.len()));
    let start = end.saturating_sub(visible);

    ScrolledView {
        display_value: chars[start..end].iter().collect(),
        cursor_pos: cursor_pos - start,
    }
}

// ========== Modal Frame ==========

/// Layout of a rendered modal frame
pub struct ModalFrame {
    /// Area inside the border
    pub inner: Rect,
    pub chunks: Rc<[Rect]>,
}

/// Clear a centered area, draw a titled border and split the inside vertically.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { inner, chunks }
}

// ========== Help Text Builder ==========

/// Builds a one-line key legend such as `[Enter] Submit  [Esc] Back`.
pub struct HelpText {
    items: Vec<(String, Color, String)>,
    separator: String,
}

impl HelpText {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            separator: "  ".to_string(),
        }
    }

    pub fn separator(mut self, sep: &str) -> Self {
        self.separator = sep.to_string();
        self
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn line(self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(self.separator.clone()));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {desc}")));
        }
        Line::from(spans)
    }

    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(self.line())
    }

    pub fn build_centered(self) -> Paragraph<'static> {
        self.build().alignment(Alignment::Center)
    }
}

impl Default for HelpText {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_cursor_line_at_end_adds_block() {
        let line = render_cursor_line("abc", 3, " ");
        assert_eq!(line_text(&line), " abc ");
        assert_eq!(line.spans.last().unwrap().style, cursor_style());
    }

    #[test]
    fn test_cursor_line_mid_text() {
        let line = render_cursor_line("abc", 1, "");
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "b");
        assert_eq!(line.spans[1].style, cursor_style());
    }

    #[test]
    fn test_short_value_is_not_scrolled() {
        let view = calculate_scroll("hello", 5, 20);
        assert_eq!(view.display_value, "hello");
        assert_eq!(view.cursor_pos, 5);
    }

    #[test]
    fn test_long_value_keeps_cursor_visible() {
        let value = "abcdefghijklmnopqrstuvwxyz";
        // 10 columns: 8 inside the border, 7 chars plus the cursor
        let view = calculate_scroll(value, 26, 10);
        assert_eq!(view.display_value, "tuvwxyz");
        assert_eq!(view.cursor_pos, 7);

        let view = calculate_scroll(value, 2, 10);
        assert_eq!(view.display_value, "abcdefg");
        assert_eq!(view.cursor_pos, 2);
    }

    #[test]
    fn test_help_text_line() {
        let line = HelpText::new()
            .key("[Enter]", Color::Green, "Submit")
            .key("[Esc]", Color::Yellow, "Back")
            .line();
        assert_eq!(line_text(&line), "[Enter] Submit  [Esc] Back");
    }
}
