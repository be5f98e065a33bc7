//! # Remove Command
//!
//! Deletes a tab after confirmation.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    ui::{self, InteractiveArgs},
};

/// Arguments for the remove command
#[derive(Debug, Default)]
pub struct RemoveArgs {
    /// Tab id (unique prefix accepted); picked interactively when absent
    pub id: Option<String>,
    /// Skip the confirmation dialog
    pub yes: bool,
}

/// Executes the remove command.
pub fn execute(args: &RemoveArgs) -> Result<()> {
    let config = Config::load()?;
    let mut store = config.open_store();
    if !args.yes && !std::io::stdout().is_terminal() {
        bail!("Refusing to delete without confirmation (pass --yes)");
    }

    let interactive = InteractiveArgs::default().should_run(&config);
    let Some(entry) = super::pick_entry(&store, args.id.as_deref(), interactive, "Remove tab")?
    else {
        return Ok(());
    };
    if !ui::confirm_delete(&entry, args.yes)? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }

    let removed = store.remove(entry.id())?;
    ui::print_success("Removed", &removed);

    Ok(())
}
