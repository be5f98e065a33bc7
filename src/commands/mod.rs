//! # Commands
//!
//! CLI command implementations for tabtome.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod browse;
pub mod completions;
pub mod edit;
pub mod export;
pub mod facets;
pub mod import;
pub mod list;
pub mod piano;
pub mod remove;
pub mod setup;
pub mod show;

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{bail, Context, Result};

pub use self::{
    add::{execute as add, AddArgs},
    browse::{execute as browse, BrowseArgs},
    completions::execute as completions,
    edit::{execute as edit, EditArgs},
    export::{execute as export, ExportArgs},
    facets::{execute_artists as artists, execute_categories as categories},
    import::{execute as import, ImportArgs},
    list::{execute as list, ListArgs},
    piano::execute as piano,
    remove::{execute as remove, RemoveArgs},
    setup::execute as setup,
    show::{execute as show, ShowArgs},
};
use crate::{
    entry::Entry,
    query::{self, ViewQuery},
    storage::KeyValueStore,
    store::Store,
    tui::screens,
};

/// Finds an entry by exact id or unique id prefix.
pub fn find_entry<'a, B: KeyValueStore>(store: &'a Store<B>, id: &str) -> Result<&'a Entry> {
    if let Some(entry) = store.get(id) {
        return Ok(entry);
    }

    let matches: Vec<&Entry> = store
        .entries()
        .iter()
        .filter(|entry| entry.id().starts_with(id))
        .collect();

    match matches.as_slice() {
        [] => bail!("No tab found matching '{id}'"),
        [entry] => Ok(*entry),
        _ => {
            let ids: Vec<String> = matches
                .iter()
                .map(|e| format!("{}  {} by {}", e.id(), e.song(), e.artist()))
                .collect();
            bail!("Multiple tabs match '{id}':\n  {}", ids.join("\n  "));
        }
    }
}

/// Resolves the tab a command acts on.
///
/// An explicit id wins. Without one, an interactive session picks from
/// the sorted collection; `Ok(None)` means the picker was cancelled.
pub(crate) fn pick_entry<B: KeyValueStore>(
    store: &Store<B>,
    id: Option<&str>,
    interactive: bool,
    prompt: &str,
) -> Result<Option<Entry>> {
    if let Some(id) = id {
        return find_entry(store, id).cloned().map(Some);
    }
    if !interactive {
        bail!("A tab id is required (--id <ID>)");
    }
    if store.is_empty() {
        bail!("Your tome is empty");
    }

    let entries = query::project(store.entries(), &ViewQuery::default());
    let picked = screens::pick_entry(prompt, &entries)?;
    Ok(picked.map(|index| Entry::clone(entries[index])))
}

/// Reads a tab body from `--content` or `--file` (`-` reads stdin).
pub(crate) fn read_content(
    content: Option<String>,
    file: Option<&Path>,
) -> Result<Option<String>> {
    match (content, file) {
        (Some(_), Some(_)) => bail!("Use either --content or --file, not both"),
        (Some(content), None) => Ok(Some(content)),
        (None, Some(path)) if path == Path::new("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read tab content from stdin")?;
            Ok(Some(buf))
        }
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
            .map(Some),
        (None, None) => Ok(None),
    }
}
