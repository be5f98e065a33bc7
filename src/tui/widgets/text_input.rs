//! Single-line text field used by the search box and the entry form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Editable line of text with a cursor.
///
/// Text is held as characters so cursor moves and deletes never split a
/// multi-byte character.
#[derive(Debug, Clone)]
pub struct TextInput {
    chars: Vec<char>,
    cursor: usize,
    label: String,
    placeholder: String,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            label: label.into(),
            placeholder: String::new(),
        }
    }

    /// Hint shown dimmed while the field is empty and unfocused.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Starts with `value`, cursor at the end.
    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.chars = value.chars().collect();
        self.cursor = self.chars.len();
        self
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Inserts pasted text at the cursor. Line breaks become spaces.
    pub fn insert_text(&mut self, text: &str) {
        let pasted: Vec<char> = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let count = pasted.len();
        self.chars.splice(self.cursor..self.cursor, pasted);
        self.cursor += count;
    }

    /// Applies a key press. Returns `false` for keys the field ignores so
    /// the screen can act on them.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control(key.code);
        }

        match key.code {
            KeyCode::Char(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Backspace | KeyCode::Delete => {}
            _ => return false,
        }
        true
    }

    /// Readline-style shortcuts.
    fn handle_control(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('a') => self.cursor = 0,
            KeyCode::Char('e') => self.cursor = self.chars.len(),
            KeyCode::Char('u') => {
                self.chars.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Char('k') => self.chars.truncate(self.cursor),
            KeyCode::Char('w') => {
                let end = self.cursor;
                let mut start = end;
                while start > 0 && self.chars[start - 1] == ' ' {
                    start -= 1;
                }
                while start > 0 && self.chars[start - 1] != ' ' {
                    start -= 1;
                }
                self.chars.drain(start..end);
                self.cursor = start;
            }
            _ => return false,
        }
        true
    }

    /// First character to draw so the cursor stays inside `width` columns.
    fn scroll_start(&self, width: usize) -> usize {
        let mut used = 1; // the cursor cell
        let mut start = self.cursor;
        while start > 0 {
            let w = self.chars[start - 1].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }
        start
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", self.label));
        let inner = block.inner(area);
        block.render(area, buf);

        if !focused {
            let line = if self.chars.is_empty() {
                Line::from(Span::styled(
                    self.placeholder.as_str(),
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::from(self.value())
            };
            Paragraph::new(line).render(inner, buf);
            return;
        }

        let start = self.scroll_start(usize::from(inner.width));
        let before: String = self.chars[start..self.cursor].iter().collect();
        let under = self.chars.get(self.cursor).copied().unwrap_or(' ');
        let after: String = self.chars.iter().skip(self.cursor + 1).collect();

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(
                under.to_string(),
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(after),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
