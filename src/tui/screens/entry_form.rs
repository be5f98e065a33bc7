//! Entry form screen.
//!
//! Collects artist, song and category for a new or edited tab. The tab
//! body is written in the external editor afterwards.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::{event::TuiEvent, widgets::TextInput, AppResult, TuiApp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Artist,
    Song,
    Category,
}

impl Field {
    const fn next(self) -> Self {
        match self {
            Self::Artist => Self::Song,
            Self::Song => Self::Category,
            Self::Category => Self::Artist,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Artist => Self::Category,
            Self::Song => Self::Artist,
            Self::Category => Self::Song,
        }
    }
}

/// Header fields entered in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutput {
    pub artist: String,
    pub song: String,
    pub category: String,
}

/// Form for the header fields of a tab.
pub struct EntryForm {
    artist: TextInput,
    song: TextInput,
    category: TextInput,
    focus: Field,
    existing_categories: Vec<String>,
    is_editing: bool,
    error: Option<&'static str>,
}

impl EntryForm {
    /// Create an empty form. `existing_categories` is shown as a hint.
    pub fn new(existing_categories: Vec<String>) -> Self {
        Self {
            artist: TextInput::new("Artist"),
            song: TextInput::new("Song"),
            category: TextInput::new("Category").with_placeholder("Uncategorized"),
            focus: Field::Artist,
            existing_categories,
            is_editing: false,
            error: None,
        }
    }

    /// Pre-populate the fields.
    #[must_use]
    pub fn with_values(mut self, artist: &str, song: &str, category: &str) -> Self {
        self.artist = self.artist.with_value(artist);
        self.song = self.song.with_value(song);
        self.category = self.category.with_value(category);
        self
    }

    /// Mark this form as editing an existing tab (changes header text).
    #[must_use]
    pub const fn for_editing(mut self) -> Self {
        self.is_editing = true;
        self
    }

    fn input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Artist => &mut self.artist,
            Field::Song => &mut self.song,
            Field::Category => &mut self.category,
        }
    }

    fn submit(&mut self) -> Option<AppResult<FormOutput>> {
        let artist = self.artist.value();
        let song = self.song.value();
        if artist.trim().is_empty() {
            self.error = Some("Artist is required");
            self.focus = Field::Artist;
            return None;
        }
        if song.trim().is_empty() {
            self.error = Some("Song is required");
            self.focus = Field::Song;
            return None;
        }
        Some(AppResult::Done(FormOutput {
            artist: artist.trim().to_string(),
            song: song.trim().to_string(),
            category: self.category.value().trim().to_string(),
        }))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppResult<FormOutput>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(AppResult::Cancelled),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Esc => Some(AppResult::Cancelled),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Enter => {
                if self.focus == Field::Category {
                    self.submit()
                } else {
                    self.focus = self.focus.next();
                    None
                }
            }
            _ => {
                if self.input_mut().handle_key(key) {
                    self.error = None;
                }
                None
            }
        }
    }
}

impl TuiApp for EntryForm {
    type Output = FormOutput;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Paste(content) => {
                self.input_mut().insert_text(content);
                None
            }
            TuiEvent::Key(key) => self.handle_key(*key),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Artist
            Constraint::Length(3), // Song
            Constraint::Length(3), // Category
            Constraint::Min(1),    // Hint
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

        let mode = if self.is_editing { "Edit Tab" } else { "New Tab" };
        let header = Paragraph::new("The tab body opens in your editor next.").block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {mode} ")),
        );
        frame.render_widget(header, chunks[0]);

        let buf = frame.buffer_mut();
        self.artist.render(chunks[1], buf, self.focus == Field::Artist);
        self.song.render(chunks[2], buf, self.focus == Field::Song);
        self.category
            .render(chunks[3], buf, self.focus == Field::Category);

        let hint = if let Some(error) = self.error {
            Line::from(Span::styled(error, Style::default().fg(Color::Yellow)))
        } else if self.focus == Field::Category && !self.existing_categories.is_empty() {
            Line::from(vec![
                Span::styled(
                    "Existing: ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.existing_categories.join(", "),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(hint).wrap(Wrap { trim: true }), chunks[4]);

        let key = Style::default().fg(Color::Cyan);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", key),
            Span::raw(" Next field  "),
            Span::styled("Ctrl+S", key),
            Span::raw(" Save  "),
            Span::styled("Esc", key),
            Span::raw(" Cancel"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, chunks[5]);
    }
}
