//! # Browse Command
//!
//! Full-screen browser over the collection. Edits and deletes requested
//! in the browser are applied here, then the browser reopens on the same
//! view.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use anyhow::{bail, Result};

use crate::{
    config::Config,
    entry::EntryFields,
    query::ViewQuery,
    storage::KeyValueStore,
    store::Store,
    tui::{
        self,
        screens::{BrowseAction, BrowseScreen, BrowseState},
    },
    ui,
};

use super::{add::add_interactively, edit::edit_interactively};

/// Initial search and filters for the browser
#[derive(Debug, Default)]
pub struct BrowseArgs {
    pub search: Option<String>,
    pub artist: Option<String>,
    pub category: Option<String>,
}

/// Executes the browse command.
pub fn execute(args: BrowseArgs) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("tome browse needs a terminal (use `tome list` in scripts)");
    }

    let config = Config::load()?;
    let mut store = config.open_store();
    let mut state = BrowseState::new(ViewQuery {
        search: args.search.unwrap_or_default(),
        artist: args.artist,
        category: args.category,
    });

    while let Some(action) = tui::run(BrowseScreen::new(&store, &mut state))? {
        if let Err(err) = apply(&config, &mut store, &mut state, action) {
            log::warn!("browser action failed: {err:#}");
            state.notify(format!("{err:#}"));
        }
    }

    Ok(())
}

fn apply<B: KeyValueStore>(
    config: &Config,
    store: &mut Store<B>,
    state: &mut BrowseState,
    action: BrowseAction,
) -> Result<()> {
    match action {
        BrowseAction::New => {
            if let Some(entry) = add_interactively(config, store, EntryFields::default())? {
                state.select(Some(entry.id().to_string()));
                state.notify(format!("Added {}", entry.song()));
            }
        }
        BrowseAction::Edit(id) => {
            let Some(current) = store.get(&id).cloned() else {
                return Ok(());
            };
            if let Some(entry) = edit_interactively(config, store, &current)? {
                state.notify(format!("Updated {}", entry.song()));
            }
        }
        BrowseAction::Delete(id) => {
            let Some(current) = store.get(&id).cloned() else {
                return Ok(());
            };
            if ui::confirm_delete(&current, false)? {
                let removed = store.remove(&id)?;
                state.select(None);
                state.notify(format!("Deleted {}", removed.song()));
            }
        }
    }
    Ok(())
}
