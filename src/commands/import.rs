//! # Import Command
//!
//! Merges a JSON backup or a legacy XML file into the collection.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    import::{self, ImportFormat},
};

/// Arguments for the import command
#[derive(Debug)]
pub struct ImportArgs {
    pub file: PathBuf,
    /// Explicit format; detected from the extension when absent
    pub format: Option<ImportFormat>,
}

/// Executes the import command.
pub fn execute(args: &ImportArgs) -> Result<()> {
    let config = Config::load()?;
    let mut store = config.open_store();

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let format = args
        .format
        .unwrap_or_else(|| ImportFormat::detect(&args.file));
    log::debug!("importing {} as {format}", args.file.display());

    let report = import::import(&mut store, format, &text)?;

    println!(
        "{} Imported {} new {} from {}",
        "✓".green(),
        report.admitted,
        if report.admitted == 1 { "tab" } else { "tabs" },
        args.file.display()
    );
    if report.skipped > 0 {
        println!(
            "{}",
            format!("  {} skipped (incomplete or already present)", report.skipped).dimmed()
        );
    }

    Ok(())
}
