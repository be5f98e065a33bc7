//! Terminal event polling.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events delivered to TUI screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press
    Key(KeyEvent),
    /// Bracketed paste content
    Paste(String),
    /// Terminal was resized
    Resize,
    /// No input within the tick interval
    Tick,
}

impl TuiEvent {
    /// True for Ctrl+C, which every screen treats as cancel.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Self::Key(key)
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
        )
    }
}

/// Polls crossterm for input with a fixed tick.
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    tick: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(250),
        }
    }
}

impl EventHandler {
    /// Waits for the next event, or returns `Tick` after the interval.
    ///
    /// Key releases and repeats are dropped so each press is seen once.
    pub fn next(&self) -> Result<TuiEvent> {
        if !event::poll(self.tick).context("event polling failed")? {
            return Ok(TuiEvent::Tick);
        }

        let event = match event::read().context("failed to read event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => TuiEvent::Key(key),
            Event::Paste(text) => TuiEvent::Paste(text),
            Event::Resize(..) => TuiEvent::Resize,
            _ => TuiEvent::Tick,
        };
        Ok(event)
    }
}
