//! # JSON Backup Parser
//!
//! Reads the array-of-entries document written by `tome export`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde::Deserialize;
use serde_json::Value;

use super::ParsedBatch;
use crate::{
    constants::{DEFAULT_CATEGORY, UNKNOWN_ARTIST},
    entry::{Entry, EntryFields},
    error::{Result, TomeError},
};

/// One element of a backup array. Every field is optional so that a
/// partial record decodes and can be judged on its own.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BackupRecord {
    id: Option<String>,
    artist: Option<String>,
    song: Option<String>,
    category: Option<String>,
    content: Option<String>,
}

impl BackupRecord {
    /// Converts to an entry if id, song and content are present.
    ///
    /// Fields that are present are taken verbatim, blank ones included, so
    /// a backup restores exactly what was exported. Only an absent artist
    /// or category falls back to its default.
    fn into_entry(self) -> Option<Entry> {
        let id = self.id.filter(|v| !v.is_empty())?;
        let song = self.song.filter(|v| !v.is_empty())?;
        let content = self.content.filter(|v| !v.is_empty())?;
        let artist = self.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
        let category = self
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Some(Entry::new(
            id,
            EntryFields {
                artist,
                song,
                category,
                content,
            },
        ))
    }
}

/// Parses a backup document.
///
/// Fails with [`TomeError::Format`] unless the top-level value is an array.
/// Elements that are not objects, carry non-string fields, or lack an id,
/// song or content are counted as malformed.
pub fn parse(text: &str) -> Result<ParsedBatch> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| TomeError::Format(format!("not valid JSON: {e}")))?;

    let Value::Array(elements) = value else {
        return Err(TomeError::Format(
            "expected a list of tabs at the top level".to_string(),
        ));
    };

    let mut batch = ParsedBatch::default();
    for (index, element) in elements.into_iter().enumerate() {
        let entry = serde_json::from_value::<BackupRecord>(element)
            .ok()
            .and_then(BackupRecord::into_entry);
        match entry {
            Some(entry) => batch.candidates.push(entry),
            None => {
                log::debug!("skipping malformed backup record #{index}");
                batch.malformed += 1;
            }
        }
    }

    Ok(batch)
}
