//! # Entry
//!
//! A single stored tab: who wrote it, what it is called, where it is filed,
//! and the raw tab body.
//!
//! The body may contain `(...)` and `[...]` annotations. They are only
//! interpreted at render time (see [`crate::markup`]); entries store the
//! text verbatim.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_CATEGORY,
    error::{Result, TomeError},
};

/// One tab record. The `id` never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: String,
    artist: String,
    song: String,
    category: String,
    content: String,
}

impl Entry {
    /// Creates an entry from an id and its editable fields.
    pub fn new(id: impl Into<String>, fields: EntryFields) -> Self {
        let EntryFields {
            artist,
            song,
            category,
            content,
        } = fields;
        Self {
            id: id.into(),
            artist,
            song,
            category,
            content,
        }
    }

    /// Returns the id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Returns the song title
    pub fn song(&self) -> &str {
        &self.song
    }

    /// Returns the category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the raw tab body
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns a copy of the editable fields.
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            artist: self.artist.clone(),
            song: self.song.clone(),
            category: self.category.clone(),
            content: self.content.clone(),
        }
    }

    /// Replaces every field except the id.
    pub(crate) fn replace_fields(&mut self, fields: EntryFields) {
        self.artist = fields.artist;
        self.song = fields.song;
        self.category = fields.category;
        self.content = fields.content;
    }

    /// True when the fields required for admission are all present.
    pub(crate) fn is_admissible(&self) -> bool {
        !self.id.is_empty() && !self.song.is_empty() && !self.content.is_empty()
    }
}

/// The user-editable part of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    pub artist: String,
    pub song: String,
    pub category: String,
    pub content: String,
}

impl EntryFields {
    /// Creates a field set from raw values.
    pub fn new(
        artist: impl Into<String>,
        song: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            artist: artist.into(),
            song: song.into(),
            category: category.into(),
            content: content.into(),
        }
    }

    /// Normalizes the fields the way a manual save does.
    ///
    /// Every field is trimmed and a blank category becomes `Uncategorized`.
    /// Artist, song and content must be non-empty afterwards.
    pub fn validated(self) -> Result<Self> {
        let artist = self.artist.trim().to_string();
        let song = self.song.trim().to_string();
        let content = self.content.trim().to_string();
        let category = match self.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            category => category.to_string(),
        };

        if artist.is_empty() {
            return Err(TomeError::MissingField("artist"));
        }
        if song.is_empty() {
            return Err(TomeError::MissingField("song"));
        }
        if content.is_empty() {
            return Err(TomeError::MissingField("tab content"));
        }

        Ok(Self {
            artist,
            song,
            category,
            content,
        })
    }
}
