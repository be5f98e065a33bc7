//! # Completions Command
//!
//! Prints a completion script for `tome` in the requested shell's syntax.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;

/// Writes the script for `shell` to stdout, built from the full CLI
/// definition in `cmd`.
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let bin = cmd.get_bin_name().unwrap_or("tome").to_string();
    let mut out = io::stdout().lock();
    clap_complete::generate(shell, cmd, bin, &mut out);
    out.flush().context("Failed to write completion script")
}
