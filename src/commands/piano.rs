//! # Piano Command
//!
//! Opens the virtual piano page in the default browser.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::config::Config;

/// Executes the piano command.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let url = config.piano_url();

    println!("Opening {url}");
    open::that(url).with_context(|| format!("Failed to open {url}"))?;

    Ok(())
}
