//! # Add Command
//!
//! Adds a new tab to the collection.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    editor,
    entry::{Entry, EntryFields},
    query::Facets,
    storage::KeyValueStore,
    store::Store,
    tui::{self, screens::EntryForm},
    ui::{self, InteractiveArgs},
};

/// Arguments for the add command
#[derive(Debug, Default)]
pub struct AddArgs {
    pub artist: Option<String>,
    pub song: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub file: Option<PathBuf>,
    pub interactive: InteractiveArgs,
}

/// Executes the add command.
///
/// Missing fields are asked for in the entry form and the editor when
/// running interactively. Otherwise they stay empty and validation
/// reports the first one missing.
pub fn execute(args: AddArgs) -> Result<()> {
    let config = Config::load()?;
    let mut store = config.open_store();
    let content = super::read_content(args.content, args.file.as_deref())?;

    let complete = args.artist.is_some() && args.song.is_some() && content.is_some();
    if !complete && args.interactive.should_run(&config) {
        let prefill = EntryFields::new(
            args.artist.unwrap_or_default(),
            args.song.unwrap_or_default(),
            args.category.unwrap_or_default(),
            content.unwrap_or_default(),
        );
        match add_interactively(&config, &mut store, prefill)? {
            Some(entry) => ui::print_success("Added", &entry),
            None => println!("{}", "Cancelled.".dimmed()),
        }
        return Ok(());
    }

    let fields = EntryFields::new(
        args.artist.unwrap_or_default(),
        args.song.unwrap_or_default(),
        args.category.unwrap_or_default(),
        content.unwrap_or_default(),
    );
    let entry = store.create(fields)?;
    ui::print_success("Added", &entry);

    Ok(())
}

/// Runs the entry form and the editor, then saves the new tab.
///
/// The editor is skipped when `prefill` already carries content.
/// Returns `None` if the user cancelled the form.
pub fn add_interactively<B: KeyValueStore>(
    config: &Config,
    store: &mut Store<B>,
    prefill: EntryFields,
) -> Result<Option<Entry>> {
    let categories = Facets::from_entries(store.entries()).categories;
    let form = EntryForm::new(categories).with_values(
        &prefill.artist,
        &prefill.song,
        &prefill.category,
    );
    let Some(header) = tui::run(form)? else {
        return Ok(None);
    };

    let content = if prefill.content.trim().is_empty() {
        editor::edit_text("", config)?
    } else {
        prefill.content
    };

    let entry = store.create(EntryFields::new(
        header.artist,
        header.song,
        header.category,
        content,
    ))?;
    Ok(Some(entry))
}
