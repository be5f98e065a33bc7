//! # UI Utilities
//!
//! Interactive-mode resolution and the small messages shared by commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::Config, entry::Entry, tui::screens::confirm};

// =============================================================================
// Interactive Mode Resolution
// =============================================================================

/// The `--interactive` / `--no-interactive` flag pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveArgs {
    /// Force interactive mode
    pub interactive: bool,
    /// Force non-interactive mode
    pub no_interactive: bool,
}

impl InteractiveArgs {
    /// Resolves interactive mode from flags and config.
    ///
    /// Priority: explicit `--interactive` > explicit `--no-interactive` > config default
    pub const fn resolve(&self, config_default: bool) -> bool {
        if self.interactive {
            true
        } else if self.no_interactive {
            false
        } else {
            config_default
        }
    }

    /// Resolved mode, and only when stdout is a terminal.
    pub fn should_run(&self, config: &Config) -> bool {
        self.resolve(config.interactive()) && std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Asks whether to delete `entry` unless `assume_yes` is set.
///
/// Cancelling the dialog counts as no.
pub fn confirm_delete(entry: &Entry, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let detail = format!("{} by {}", entry.song(), entry.artist());
    Ok(confirm("Delete this tab?", Some(&detail))?.unwrap_or(false))
}

/// Prints `✓ {verb} tab: {song} by {artist} [{id}]`.
pub fn print_success(verb: &str, entry: &Entry) {
    println!(
        "{} {} tab: {} by {} {}",
        "✓".green(),
        verb,
        entry.song().bold(),
        entry.artist(),
        format!("[{}]", entry.id()).dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryFields;

    #[test]
    fn test_interactive_resolution() {
        let forced = InteractiveArgs {
            interactive: true,
            no_interactive: true,
        };
        assert!(forced.resolve(false));

        let off = InteractiveArgs {
            interactive: false,
            no_interactive: true,
        };
        assert!(!off.resolve(true));
        assert!(InteractiveArgs::default().resolve(true));
        assert!(!InteractiveArgs::default().resolve(false));
    }

    #[test]
    fn test_assume_yes_skips_dialog() {
        let entry = Entry::new("1", EntryFields::new("Alice", "Sunrise", "Flute", "1 2 3"));
        assert!(confirm_delete(&entry, true).unwrap());
    }
}
