//! Yes/no dialog for destructive actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::{centered_rect, event::TuiEvent, run, AppResult, TuiApp};

/// Highlighted button. Starts on `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Yes,
    No,
}

impl Choice {
    const fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

pub struct ConfirmDialog {
    message: String,
    detail: Option<String>,
    choice: Choice,
}

impl ConfirmDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
            choice: Choice::No,
        }
    }

    /// Dimmed line under the message naming what is affected.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[allow(clippy::cast_possible_truncation)]
    fn popup_size(&self) -> (u16, u16) {
        let widest = self
            .detail
            .as_deref()
            .map_or(0, UnicodeWidthStr::width)
            .max(self.message.width());
        let rows = if self.detail.is_some() { 4 } else { 3 };
        ((widest as u16).max(20) + 4, rows + 2)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppResult<bool>> {
        match key.code {
            KeyCode::Char('y' | 'Y') => Some(AppResult::Done(true)),
            KeyCode::Char('n' | 'N') => Some(AppResult::Done(false)),
            KeyCode::Esc => Some(AppResult::Cancelled),
            KeyCode::Enter => Some(AppResult::Done(self.choice == Choice::Yes)),
            KeyCode::Left | KeyCode::Char('h') => {
                self.choice = Choice::Yes;
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.choice = Choice::No;
                None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.choice = self.choice.toggled();
                None
            }
            _ => None,
        }
    }

    fn button(&self, label: &'static str, choice: Choice, color: Color) -> Span<'static> {
        if self.choice == choice {
            Span::styled(
                format!("[{label}]"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray))
        }
    }
}

impl TuiApp for ConfirmDialog {
    type Output = bool;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        if event.is_interrupt() {
            return Some(AppResult::Cancelled);
        }
        match event {
            TuiEvent::Key(key) => self.handle_key(*key),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let (width, height) = self.popup_size();
        let popup = centered_rect(width, height, frame.area());
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm ");
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines = vec![Line::from(self.message.as_str())];
        if let Some(detail) = &self.detail {
            lines.push(Line::styled(
                detail.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let [text_area, buttons_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        frame.render_widget(Paragraph::new(lines), text_area);

        let buttons = Line::from(vec![
            self.button("Yes", Choice::Yes, Color::Green),
            Span::raw("   "),
            self.button("No", Choice::No, Color::Red),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            buttons_area,
        );
    }
}

/// Asks a yes/no question.
///
/// Returns `Some(answer)`, or `None` if dismissed with Esc or Ctrl+C.
pub fn confirm(message: &str, detail: Option<&str>) -> Result<Option<bool>> {
    let mut dialog = ConfirmDialog::new(message);
    if let Some(detail) = detail {
        dialog = dialog.with_detail(detail);
    }
    run(dialog)
}
