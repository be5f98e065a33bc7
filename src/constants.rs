//! # Constants
//!
//! Centralized constants for magic values used throughout tabtome.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Entry Defaults
// =============================================================================

/// Category assigned when a manual save leaves the category blank.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Artist assigned when a record carries no usable artist.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Category forced onto every record imported from the legacy XML format.
pub const LEGACY_CATEGORY: &str = "Legacy Import";

/// Separator between artist and song in legacy titles.
pub const LEGACY_TITLE_SEPARATOR: &str = " - ";

// =============================================================================
// Legacy XML Format
// =============================================================================

/// Element wrapping one legacy tab record.
pub const LEGACY_TAB_ELEMENT: &[u8] = b"Tab";

/// Child element holding the "Artist - Song" title.
pub const LEGACY_TITLE_ELEMENT: &[u8] = b"title";

/// Child element holding the tab body.
pub const LEGACY_BODY_ELEMENT: &[u8] = b"tab";

// =============================================================================
// Storage
// =============================================================================

/// Key of the durable record holding the whole collection.
pub const STORAGE_KEY: &str = "music-tabs";

/// File extension used by the file-backed key-value store.
pub const STORAGE_FILE_EXTENSION: &str = "json";

/// Default data directory (relative to home).
pub const DEFAULT_DATA_DIR: &str = ".local/share/tabtome";

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "tabtome";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Draft file used when editing a tab body in an external editor.
pub const DRAFT_FILENAME: &str = "DRAFT_TAB.txt";

// =============================================================================
// Import / Export
// =============================================================================

/// Default file name for JSON backups.
pub const DEFAULT_EXPORT_FILE: &str = "tome-backup.json";

/// File extension that selects the legacy XML importer.
pub const LEGACY_FILE_EXTENSION: &str = "xml";

// =============================================================================
// External
// =============================================================================

/// Default virtual piano page opened by `tome piano`.
pub const DEFAULT_PIANO_URL: &str = "https://sauryelle.github.io/gw2-virtual-piano/";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "TOME_LOG";
