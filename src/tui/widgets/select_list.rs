//! Scrollable pick list with type-ahead.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListState, StatefulWidget},
};

const PAGE: usize = 10;

/// Outcome of a key press on a [`SelectList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Keep the list open
    None,
    /// Enter on the highlighted row
    Confirm,
    /// Esc
    Cancel,
}

/// Single-choice list. Arrow keys move, a printable character jumps to
/// the next row starting with it.
#[derive(Debug, Clone)]
pub struct SelectList {
    items: Vec<String>,
    state: ListState,
    title: String,
}

impl SelectList {
    pub fn new<T: ToString>(items: Vec<T>) -> Self {
        let items: Vec<String> = items.iter().map(ToString::to_string).collect();
        let state = ListState::default().with_selected((!items.is_empty()).then_some(0));
        Self {
            items,
            state,
            title: String::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Highlights `index` instead of the first row, if it exists.
    #[must_use]
    pub fn with_selected(mut self, index: usize) -> Self {
        if index < self.items.len() {
            self.state.select(Some(index));
        }
        self
    }

    pub const fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Moves by `delta` rows. Single steps wrap around, page jumps clamp.
    fn step(&mut self, delta: isize) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        let current = self.state.selected().unwrap_or(0);
        let next = match delta {
            1 if current == last => 0,
            -1 if current == 0 => last,
            _ => current.saturating_add_signed(delta).min(last),
        };
        self.state.select(Some(next));
    }

    /// Highlights the next row after the current one whose label starts
    /// with `c`, ignoring case.
    fn jump_to(&mut self, c: char) {
        let len = self.items.len();
        let current = self.state.selected().unwrap_or(0);
        let needle: String = c.to_lowercase().collect();
        let hit = (1..=len)
            .map(|offset| (current + offset) % len)
            .find(|&i| self.items[i].to_lowercase().starts_with(&needle));
        if hit.is_some() {
            self.state.select(hit);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SelectAction {
        match key.code {
            KeyCode::Esc => return SelectAction::Cancel,
            KeyCode::Enter if self.state.selected().is_some() => return SelectAction::Confirm,
            KeyCode::Up => self.step(-1),
            KeyCode::Down => self.step(1),
            KeyCode::PageUp => self.step(-(PAGE as isize)),
            KeyCode::PageDown => self.step(PAGE as isize),
            KeyCode::Home if !self.items.is_empty() => self.state.select(Some(0)),
            KeyCode::End if !self.items.is_empty() => {
                self.state.select(Some(self.items.len() - 1));
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL) && !self.items.is_empty() =>
            {
                self.jump_to(c);
            }
            _ => {}
        }
        SelectAction::None
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        if !self.title.is_empty() {
            block = block.title(format!(" {} ", self.title));
        }

        let list = List::new(self.items.iter().map(String::as_str))
            .block(block)
            .highlight_symbol("> ")
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}
