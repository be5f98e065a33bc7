//! Full-screen terminal views for tabtome.
//!
//! Every screen is a [`TuiApp`] driven by [`run`], which owns the terminal
//! for exactly as long as the screen is up. Commands that need the editor
//! between screens therefore get a normal terminal back as soon as `run`
//! returns.

pub mod event;
pub mod screens;
pub mod terminal;
pub mod widgets;

use anyhow::Result;
use ratatui::{layout::Rect, Frame};

use self::{
    event::{EventHandler, TuiEvent},
    terminal::TerminalGuard,
};

/// How a screen finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult<T> {
    Done(T),
    /// Esc, Ctrl+C or an explicit cancel
    Cancelled,
}

/// A screen that reacts to events and draws itself.
pub trait TuiApp {
    type Output;

    /// Returns `Some` to close the screen.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>>;

    fn render(&mut self, frame: &mut Frame);
}

/// Shows `app` until it finishes. `Ok(None)` means it was cancelled.
pub fn run<A: TuiApp>(mut app: A) -> Result<Option<A::Output>> {
    let mut guard = TerminalGuard::new()?;
    let events = EventHandler::default();

    let result = loop {
        guard.terminal().draw(|frame| app.render(frame))?;

        let event = events.next()?;
        if event == TuiEvent::Tick {
            continue;
        }
        if let Some(result) = app.handle_event(&event) {
            break result;
        }
    };

    Ok(match result {
        AppResult::Done(output) => Some(output),
        AppResult::Cancelled => None,
    })
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(6, 2, area), Rect::new(2, 1, 6, 2));
        assert_eq!(centered_rect(40, 9, area), area);
    }
}
