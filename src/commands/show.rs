//! # Show Command
//!
//! Prints a single tab with its annotations highlighted.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::Config, entry::Entry, markup, ui::InteractiveArgs};

/// Arguments for the show command
#[derive(Debug, Default)]
pub struct ShowArgs {
    /// Tab id (unique prefix accepted); picked interactively when absent
    pub id: Option<String>,
    /// Print only the raw tab body
    pub plain: bool,
}

/// Executes the show command.
pub fn execute(args: &ShowArgs) -> Result<()> {
    let config = Config::load()?;
    let store = config.open_store();
    let interactive = InteractiveArgs::default().should_run(&config);
    let Some(entry) = super::pick_entry(&store, args.id.as_deref(), interactive, "Show tab")?
    else {
        return Ok(());
    };

    if args.plain {
        println!("{}", entry.content());
    } else {
        print_entry(&entry);
    }

    Ok(())
}

/// Prints the header lines and the highlighted body.
pub fn print_entry(entry: &Entry) {
    println!("{} by {}", entry.song().bold(), entry.artist());
    println!(
        "{}  {}",
        entry.category().dimmed(),
        format!("[{}]", entry.id()).dimmed()
    );
    println!();
    println!("{}", markup::render_ansi(entry.content()));
}
