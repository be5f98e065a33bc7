//! # Export Command
//!
//! Writes the whole collection as a JSON backup.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::{config::Config, error::TomeError, export};

/// Arguments for the export command
#[derive(Debug, Default)]
pub struct ExportArgs {
    /// Output file; the configured export file name when absent
    pub path: Option<PathBuf>,
    /// Overwrite an existing file
    pub force: bool,
    /// Print the backup instead of writing a file
    pub stdout: bool,
}

/// Executes the export command.
pub fn execute(args: ExportArgs) -> Result<()> {
    let config = Config::load()?;
    let store = config.open_store();

    if store.is_empty() {
        return Err(TomeError::EmptyCollection.into());
    }

    if args.stdout {
        println!("{}", export::to_json(&store)?);
        return Ok(());
    }

    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(config.export_file()));
    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let count = export::write_backup(&store, &path)?;
    println!(
        "{} Exported {} {} to {}",
        "✓".green(),
        count,
        if count == 1 { "tab" } else { "tabs" },
        path.display()
    );

    Ok(())
}
