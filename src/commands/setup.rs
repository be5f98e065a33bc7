//! # Setup Command
//!
//! One-time setup for tabtome: writes the commented global config and
//! creates the data directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fs;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::{Config, GlobalConfig};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    eprintln!("{}\n", "Setting up tabtome...".bold());

    let (path, created) = GlobalConfig::create_default_if_missing()?;
    if created {
        eprintln!("{} Created global config: {}", "✓".green(), path.display());
    } else {
        eprintln!(
            "{} Global config already exists: {}",
            "✓".green(),
            path.display()
        );
    }

    let config = Config::load()?;
    let data = config.data_path();
    fs::create_dir_all(&data)
        .with_context(|| format!("Failed to create directory: {}", data.display()))?;
    eprintln!("{} Data directory: {}", "✓".green(), data.display());

    eprintln!(
        "\n{} Setup complete! Shell completions: tome completions <SHELL>",
        "✓".green().bold()
    );

    Ok(())
}
