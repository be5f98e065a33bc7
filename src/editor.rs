//! # Editor Integration
//!
//! Launches the user's preferred editor for writing tab bodies.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, io::IsTerminal, path::Path, process::Command};

use anyhow::{Context, Result};

use crate::config::Config;

/// Opens a file in the user's configured editor.
///
/// The editor is determined by (in order of priority):
/// 1. `editor` setting in config
/// 2. `$VISUAL` environment variable
/// 3. `$EDITOR` environment variable
/// 4. Fallback to `vi`
pub fn open(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor().unwrap_or_else(|| "vi".to_string());

    // Split editor command in case it has arguments (e.g., "code --wait")
    let parts = shlex::split(&editor).context("Invalid editor command")?;
    let (program, args) = parts.split_first().context("Empty editor command")?;

    log::debug!("launching editor {program} on {}", path.display());

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor: {editor}"))?;

    if !status.success() {
        anyhow::bail!("Editor exited with error: {status}");
    }

    Ok(())
}

/// Edits `initial` in the editor through the draft file and returns the
/// saved text.
///
/// The draft lives in the data directory and is removed afterwards.
pub fn edit_text(initial: &str, config: &Config) -> Result<String> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("Editing tab content requires a terminal (use --content or --file)");
    }

    let draft = config.draft_path();
    if let Some(parent) = draft.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&draft, initial)
        .with_context(|| format!("Failed to write draft: {}", draft.display()))?;

    let edited = open(&draft, config).and_then(|()| {
        fs::read_to_string(&draft)
            .with_context(|| format!("Failed to read draft: {}", draft.display()))
    });

    if let Err(e) = fs::remove_file(&draft) {
        log::warn!("could not remove draft {}: {e}", draft.display());
    }

    edited
}
