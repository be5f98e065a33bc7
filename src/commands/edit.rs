//! # Edit Command
//!
//! Changes an existing tab. The id never changes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{bail, Result};
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

/// Arguments for the edit command
#[derive(Debug, Default)]
pub struct EditArgs {
    /// Tab id (unique prefix accepted); picked interactively when absent
    pub id: Option<String>,
    pub artist: Option<String>,
    pub song: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub file: Option<PathBuf>,
    pub interactive: InteractiveArgs,
}

impl EditArgs {
    const fn has_changes(&self) -> bool {
        self.artist.is_some()
            || self.song.is_some()
            || self.category.is_some()
            || self.content.is_some()
            || self.file.is_some()
    }
}

/// Executes the edit command.
///
/// With field flags only those fields change. Without any, the entry
/// form and the editor open on the current values.
pub fn execute(args: EditArgs) -> Result<()> {
    let config = Config::load()?;
    let mut store = config.open_store();
    let interactive = args.interactive.should_run(&config);
    let Some(current) = super::pick_entry(&store, args.id.as_deref(), interactive, "Edit tab")?
    else {
        return Ok(());
    };

    if !args.has_changes() {
        if !interactive {
            bail!("Nothing to change. Pass --artist, --song, --category, --content or --file");
        }
        match edit_interactively(&config, &mut store, &current)? {
            Some(entry) => ui::print_success("Updated", &entry),
            None => println!("{}", "Cancelled.".dimmed()),
        }
        return Ok(());
    }

    let content = super::read_content(args.content, args.file.as_deref())?;
    let mut fields = current.fields();
    if let Some(artist) = args.artist {
        fields.artist = artist;
    }
    if let Some(song) = args.song {
        fields.song = song;
    }
    if let Some(category) = args.category {
        fields.category = category;
    }
    if let Some(content) = content {
        fields.content = content;
    }

    let entry = store.update(current.id(), fields)?;
    ui::print_success("Updated", &entry);

    Ok(())
}

/// Runs the entry form and the editor on `current`, then saves.
///
/// Returns `None` if the user cancelled the form.
pub fn edit_interactively<B: KeyValueStore>(
    config: &Config,
    store: &mut Store<B>,
    current: &Entry,
) -> Result<Option<Entry>> {
    let categories = Facets::from_entries(store.entries()).categories;
    let form = EntryForm::new(categories)
        .with_values(current.artist(), current.song(), current.category())
        .for_editing();
    let Some(header) = tui::run(form)? else {
        return Ok(None);
    };

    let content = editor::edit_text(current.content(), config)?;

    let entry = store.update(
        current.id(),
        EntryFields::new(header.artist, header.song, header.category, content),
    )?;
    Ok(Some(entry))
}
