//! # Configuration
//!
//! Resolved configuration: the global config file plus the paths derived
//! from it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use self::global::{set_home_override, GlobalConfig};
use crate::{
    constants::DRAFT_FILENAME,
    storage::FileStore,
    store::Store,
};

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Home directory used to resolve relative paths
    pub home: PathBuf,
}

impl Config {
    /// Loads the global configuration.
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;
        let home = global::home_dir().context("Could not determine home directory")?;
        Ok(Self { global, home })
    }

    /// Returns the directory holding the tab collection.
    ///
    /// `~/` and relative paths resolve against the home directory.
    pub fn data_path(&self) -> PathBuf {
        let dir = self.global.data_dir();
        let dir = dir.strip_prefix("~/").unwrap_or(dir);
        let path = Path::new(dir);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.home.join(path)
        }
    }

    /// Opens the tab store in the data directory.
    pub fn open_store(&self) -> Store<FileStore> {
        let backend = FileStore::new(self.data_path());
        log::debug!("opening store in {}", backend.dir().display());
        Store::open(backend)
    }

    /// Returns the draft file used for editing tab bodies
    pub fn draft_path(&self) -> PathBuf {
        self.data_path().join(DRAFT_FILENAME)
    }

    /// Returns the effective editor command
    pub fn editor(&self) -> Option<String> {
        self.global.editor.clone().or_else(|| {
            std::env::var("VISUAL")
                .ok()
                .or_else(|| std::env::var("EDITOR").ok())
        })
    }

    /// Whether interactive mode is enabled by default
    pub const fn interactive(&self) -> bool {
        self.global.interactive
    }

    /// Returns the virtual piano URL
    pub fn piano_url(&self) -> &str {
        self.global.piano_url()
    }

    /// Returns the default export file name
    pub fn export_file(&self) -> &str {
        self.global.export_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(data_dir: Option<&str>) -> Config {
        Config {
            global: GlobalConfig {
                data_dir: data_dir.map(String::from),
                ..GlobalConfig::default()
            },
            home: PathBuf::from("/home/user"),
        }
    }

    #[test]
    fn test_default_data_path() {
        assert_eq!(
            config_with(None).data_path(),
            PathBuf::from("/home/user/.local/share/tabtome")
        );
    }

    #[test]
    fn test_tilde_data_path() {
        assert_eq!(
            config_with(Some("~/tabs")).data_path(),
            PathBuf::from("/home/user/tabs")
        );
    }

    #[test]
    fn test_absolute_data_path() {
        assert_eq!(
            config_with(Some("/srv/tabs")).data_path(),
            PathBuf::from("/srv/tabs")
        );
    }

    #[test]
    fn test_draft_in_data_dir() {
        assert_eq!(
            config_with(None).draft_path(),
            PathBuf::from("/home/user/.local/share/tabtome/DRAFT_TAB.txt")
        );
    }
}
