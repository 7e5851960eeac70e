//! Username input bar
//!
//! A single-line editor plus its rendering. While a lookup is in flight the
//! bar shows the submit action as disabled.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Editable single line of text with a char-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    /// Cursor position in chars, 0..=len
    cursor: usize,
}

impl InputLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Render the input bar and place the terminal cursor when focused
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    app.hit.input = area;
    let theme = &app.theme;
    let ui = app.controller.affordances();
    let focused = app.focus == Focus::Input;

    let hint = if ui.submit_enabled {
        Span::styled(" Enter: check ", Style::default().fg(theme.title))
    } else {
        Span::styled(
            " checking… ",
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::DIM),
        )
    };

    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Username ")
        .title_bottom(Line::from(hint).right_aligned());

    let paragraph = Paragraph::new(app.input.text())
        .style(Style::default().fg(theme.fg))
        .block(block);
    f.render_widget(paragraph, area);

    if focused && area.width > 2 && area.height > 2 {
        let prefix: String = app.input.text().chars().take(app.input.cursor()).collect();
        let offset = unicode_width::UnicodeWidthStr::width(prefix.as_str()) as u16;
        let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputLine {
        let mut line = InputLine::default();
        text.chars().for_each(|c| line.insert(c));
        line
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut line = typed("jon");
        line.left();
        line.insert('h');

        assert_eq!(line.text(), "john");
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn backspace_and_delete() {
        let mut line = typed("abcd");
        line.backspace();
        assert_eq!(line.text(), "abc");

        line.home();
        line.backspace();
        assert_eq!(line.text(), "abc");

        line.delete();
        assert_eq!(line.text(), "bc");

        line.end();
        line.delete();
        assert_eq!(line.text(), "bc");
    }

    #[test]
    fn cursor_is_char_indexed() {
        let mut line = typed("né");
        line.backspace();
        assert_eq!(line.text(), "n");

        line.insert('ö');
        line.left();
        line.left();
        line.insert('x');
        assert_eq!(line.text(), "xnö");
    }

    #[test]
    fn set_and_clear() {
        let mut line = InputLine::default();
        line.set("abhq");
        assert_eq!(line.cursor(), 4);

        line.clear();
        assert_eq!(line.text(), "");
        assert_eq!(line.cursor(), 0);
    }
}
