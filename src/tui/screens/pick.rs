//! Tab picker for commands run without `--id`.

use anyhow::{bail, Result};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::{
    entry::Entry,
    tui::{event::TuiEvent, run, AppResult, TuiApp},
};

const PAGE: usize = 10;

struct EntryPicker<'a> {
    prompt: &'a str,
    entries: &'a [&'a Entry],
    state: TableState,
}

impl<'a> EntryPicker<'a> {
    fn new(prompt: &'a str, entries: &'a [&'a Entry]) -> Self {
        Self {
            prompt,
            entries,
            state: TableState::default().with_selected(Some(0)),
        }
    }

    fn move_by(&mut self, delta: isize) {
        let last = self.entries.len().saturating_sub(1);
        let current = self.state.selected().unwrap_or(0);
        self.state
            .select(Some(current.saturating_add_signed(delta).min(last)));
    }
}

impl TuiApp for EntryPicker<'_> {
    type Output = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<usize>> {
        if event.is_interrupt() {
            return Some(AppResult::Cancelled);
        }
        let TuiEvent::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(AppResult::Cancelled),
            KeyCode::Enter => return self.state.selected().map(AppResult::Done),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::PageDown => self.move_by(PAGE as isize),
            KeyCode::PageUp => self.move_by(-(PAGE as isize)),
            KeyCode::Home | KeyCode::Char('g') => self.state.select(Some(0)),
            KeyCode::End | KeyCode::Char('G') => {
                self.state.select(Some(self.entries.len().saturating_sub(1)));
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame) {
        let [prompt_area, table_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Span::styled(
                self.prompt,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            prompt_area,
        );

        let header = Row::new(["Song", "Artist", "Category"]).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
        let rows = self
            .entries
            .iter()
            .map(|e| Row::new([e.song(), e.artist(), e.category()]));
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(45),
                Constraint::Percentage(35),
                Constraint::Percentage(20),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_symbol("> ")
        .row_highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_stateful_widget(table, table_area, &mut self.state);

        let key = Style::default().fg(Color::Cyan);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Enter", key),
                Span::raw(" choose  "),
                Span::styled("j/k", key),
                Span::raw(" move  "),
                Span::styled("Esc", key),
                Span::raw(" cancel"),
            ])),
            help_area,
        );
    }
}

/// Lets the user choose one of `entries`. Returns its index, or `None`
/// if the picker was cancelled.
pub fn pick_entry(prompt: &str, entries: &[&Entry]) -> Result<Option<usize>> {
    if entries.is_empty() {
        bail!("No tabs to choose from");
    }
    run(EntryPicker::new(prompt, entries))
}
