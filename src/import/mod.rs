//! # Import
//!
//! Turns external payloads into candidate entries and merges them into a
//! [`Store`] by id.
//!
//! Two formats are supported:
//! - **JSON backup**: the array written by [`crate::export`]
//! - **Legacy XML**: `<Tab>` elements with `<title>` and `<tab>` children
//!
//! A malformed payload aborts the whole import with
//! [`TomeError::Format`](crate::error::TomeError::Format)
//! and leaves the store untouched. A malformed single record is only
//! counted as skipped.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod json;
pub mod legacy;

use std::{fmt, path::Path};

use chrono::Utc;

use crate::{
    constants::LEGACY_FILE_EXTENSION,
    entry::Entry,
    error::Result,
    storage::KeyValueStore,
    store::Store,
};

/// Supported import formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ImportFormat {
    /// JSON backup produced by `tome export`
    #[default]
    Json,
    /// Legacy XML with `<Tab>` elements
    Legacy,
}

impl ImportFormat {
    /// Picks a format from the file extension (`.xml` is legacy).
    pub fn detect(path: &Path) -> Self {
        let is_xml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(LEGACY_FILE_EXTENSION));
        if is_xml {
            Self::Legacy
        } else {
            Self::Json
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// Candidates parsed from a payload, before admission.
#[derive(Debug, Default)]
pub struct ParsedBatch {
    /// Records that decoded into entries
    pub candidates: Vec<Entry>,
    /// Records dropped while parsing
    pub malformed: usize,
}

/// Outcome of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records added to the store
    pub admitted: usize,
    /// Records dropped (malformed, incomplete, or duplicate id)
    pub skipped: usize,
}

/// Imports a JSON backup into the store.
pub fn import_json<B: KeyValueStore>(store: &mut Store<B>, text: &str) -> Result<ImportReport> {
    let batch = json::parse(text)?;
    admit(store, batch)
}

/// Imports a legacy XML document into the store.
pub fn import_legacy<B: KeyValueStore>(store: &mut Store<B>, text: &str) -> Result<ImportReport> {
    let batch = legacy::parse(text, Utc::now(), |id| store.contains(id))?;
    admit(store, batch)
}

/// Imports `text` in the given format.
pub fn import<B: KeyValueStore>(
    store: &mut Store<B>,
    format: ImportFormat,
    text: &str,
) -> Result<ImportReport> {
    match format {
        ImportFormat::Json => import_json(store, text),
        ImportFormat::Legacy => import_legacy(store, text),
    }
}

fn admit<B: KeyValueStore>(store: &mut Store<B>, batch: ParsedBatch) -> Result<ImportReport> {
    let merged = store.merge(batch.candidates)?;
    let report = ImportReport {
        admitted: merged.admitted,
        skipped: merged.skipped + batch.malformed,
    };
    log::info!(
        "import admitted {} tabs, skipped {}",
        report.admitted,
        report.skipped
    );
    Ok(report)
}
