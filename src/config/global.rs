//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/tabtome/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_EXPORT_FILE, DEFAULT_PIANO_URL, GLOBAL_CONFIG_DIR,
    GLOBAL_CONFIG_FILENAME,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config and data to a temp
    /// directory without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Returns the home directory, honoring the test override.
pub fn home_dir() -> Option<PathBuf> {
    get_home_override().or_else(dirs::home_dir)
}

/// Global configuration stored at ~/.config/tabtome/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Directory holding the tab collection (default: ~/.local/share/tabtome)
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Editor command (e.g., "nvim", "code --wait")
    #[serde(default)]
    pub editor: Option<String>,

    /// Whether to enable interactive mode (TUI browser, prompts, confirmations)
    #[serde(default = "default_true")]
    pub interactive: bool,

    /// Page opened by `tome piano`
    #[serde(default)]
    pub piano_url: Option<String>,

    /// Default file name for `tome export`
    #[serde(default)]
    pub export_file: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            editor: None,
            interactive: true,
            piano_url: None,
            export_file: None,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

/// Template written by `tome setup`, listing every option.
const CONFIG_TEMPLATE: &str = "\
# tabtome configuration

# Directory holding your tabs (default: ~/.local/share/tabtome)
# data_dir = \"~/.local/share/tabtome\"

# Editor for tab bodies (default: $VISUAL, then $EDITOR, then vi)
# editor = \"nvim\"

# Open the browser, prompts and confirmations when running in a terminal
interactive = true

# Page opened by `tome piano`
# piano_url = \"https://sauryelle.github.io/gw2-virtual-piano/\"

# File name used by `tome export` when no path is given
# export_file = \"tome-backup.json\"
";

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/tabtome/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/tabtome)
    pub fn dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Writes the commented template unless a config file already exists.
    ///
    /// Returns the path and whether a file was created.
    pub fn create_default_if_missing() -> Result<(PathBuf, bool)> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if path.exists() {
            return Ok((path, false));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok((path, true))
    }

    /// Returns the configured data directory (unexpanded)
    pub fn data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    /// Returns the virtual piano URL
    pub fn piano_url(&self) -> &str {
        self.piano_url.as_deref().unwrap_or(DEFAULT_PIANO_URL)
    }

    /// Returns the default export file name
    pub fn export_file(&self) -> &str {
        self.export_file.as_deref().unwrap_or(DEFAULT_EXPORT_FILE)
    }
}
