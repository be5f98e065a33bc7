//! # List Command
//!
//! Lists tabs sorted by song, with optional search and filters.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::browse::BrowseArgs;
use crate::{
    config::Config,
    query::{self, ViewQuery},
    ui::InteractiveArgs,
};

/// Search and filter options for listing
#[derive(Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive substring of song or artist
    pub search: Option<String>,
    /// Exact artist
    pub artist: Option<String>,
    /// Exact category
    pub category: Option<String>,
    pub interactive: InteractiveArgs,
}

impl ListArgs {
    /// Builds the view query for these options.
    pub fn query(&self) -> ViewQuery {
        ViewQuery {
            search: self.search.clone().unwrap_or_default(),
            artist: self.artist.clone(),
            category: self.category.clone(),
        }
    }
}

/// Executes the list command.
///
/// Interactive mode opens the browser with the same search and filters.
pub fn execute(args: ListArgs) -> Result<()> {
    let config = Config::load()?;
    if args.interactive.should_run(&config) {
        return super::browse::execute(BrowseArgs {
            search: args.search,
            artist: args.artist,
            category: args.category,
        });
    }

    let store = config.open_store();
    let entries = query::project(store.entries(), &args.query());

    if entries.is_empty() {
        let message = if store.is_empty() {
            "Your tome is empty. Add a tab with `tome add` or `tome import`."
        } else {
            "No tabs found."
        };
        println!("{}", message.dimmed());
        return Ok(());
    }

    // Tab-separated for scripts: id, song, artist, category
    for entry in &entries {
        println!(
            "{}\t{}\t{}\t{}",
            entry.id(),
            entry.song(),
            entry.artist(),
            entry.category()
        );
    }

    Ok(())
}
