//! # Query and Projection
//!
//! Computes what the user sees from the store: the filtered, sorted list
//! of entries and the facet values (artists, categories) that drive the
//! filter selectors. This module is the single source of truth for
//! filtering, used by both the CLI commands and the browser.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod collate;

use crate::{entry::Entry, storage::KeyValueStore, store::Store};

// =============================================================================
// View Query
// =============================================================================

/// Search and filter state for a view.
///
/// Empty search and `None` (or empty) filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against song and artist
    pub search: String,
    /// Exact artist filter
    pub artist: Option<String>,
    /// Exact category filter
    pub category: Option<String>,
}

impl ViewQuery {
    /// Creates a query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the artist filter.
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Sets the category filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && active(self.artist.as_ref()).is_none()
            && active(self.category.as_ref()).is_none()
    }
}

fn active(filter: Option<&String>) -> Option<&str> {
    filter.map(String::as_str).filter(|value| !value.is_empty())
}

// =============================================================================
// Filter Matching
// =============================================================================

/// Checks if an entry matches all parts of the query.
pub fn matches(entry: &Entry, query: &ViewQuery) -> bool {
    if !matches_search_text(entry.song(), entry.artist(), &query.search) {
        return false;
    }

    if let Some(artist) = active(query.artist.as_ref()) {
        if entry.artist() != artist {
            return false;
        }
    }

    if let Some(category) = active(query.category.as_ref()) {
        if entry.category() != category {
            return false;
        }
    }

    true
}

/// Checks if song or artist contains `search` (case-insensitive).
///
/// An empty search matches everything.
pub fn matches_search_text(song: &str, artist: &str, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    song.to_lowercase().contains(&needle) || artist.to_lowercase().contains(&needle)
}

// =============================================================================
// Projection
// =============================================================================

/// Returns the matching entries sorted by song.
///
/// Songs are ordered with [`collate::compare`]; equal songs fall back to
/// artist and then id so the order is stable across runs.
pub fn project<'a>(entries: &'a [Entry], query: &ViewQuery) -> Vec<&'a Entry> {
    let mut matched: Vec<&Entry> = entries.iter().filter(|e| matches(e, query)).collect();
    matched.sort_by(|a, b| {
        collate::compare(a.song(), b.song())
            .then_with(|| collate::compare(a.artist(), b.artist()))
            .then_with(|| a.id().cmp(b.id()))
    });
    matched
}

// =============================================================================
// Facets
// =============================================================================

/// Distinct artists and categories across the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub artists: Vec<String>,
    pub categories: Vec<String>,
}

impl Facets {
    /// Computes facets from every entry (filters do not apply).
    pub fn from_entries(entries: &[Entry]) -> Self {
        Self {
            artists: collate::sorted_unique(entries.iter().map(|e| e.artist().to_string())),
            categories: collate::sorted_unique(entries.iter().map(|e| e.category().to_string())),
        }
    }
}

/// Facets cached against the store revision.
///
/// Search and filter changes never touch the store, so they reuse the
/// cached facets. Any mutation bumps the revision and forces a rebuild.
#[derive(Debug, Clone, Default)]
pub struct FacetCache {
    revision: Option<u64>,
    facets: Facets,
}

impl FacetCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns facets for the store, rebuilding only if it changed.
    pub fn get<B: KeyValueStore>(&mut self, store: &Store<B>) -> &Facets {
        if self.revision != Some(store.revision()) {
            log::debug!("rebuilding facets at revision {}", store.revision());
            self.facets = Facets::from_entries(store.entries());
            self.revision = Some(store.revision());
        }
        &self.facets
    }

    /// Revision the cached facets were computed at.
    pub const fn revision(&self) -> Option<u64> {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryFields;

    fn entry(id: &str, artist: &str, song: &str, category: &str) -> Entry {
        Entry::new(id, EntryFields::new(artist, song, category, "1 2 3"))
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("1", "Alice", "Sunrise", "Jazz"),
            entry("2", "Bob", "Sunset", "Jazz"),
            entry("3", "Alice", "Moonlight", "Classical"),
        ]
    }

    fn songs(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.song().to_string()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let entries = sample();
        assert_eq!(project(&entries, &ViewQuery::new()).len(), 3);
        assert!(ViewQuery::new().is_empty());
    }

    #[test]
    fn test_artist_and_search_are_conjunctive() {
        let entries = sample();
        let query = ViewQuery::new().with_artist("Alice").with_search("sun");
        let result = project(&entries, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), "1");
    }

    #[test]
    fn test_search_matches_artist_case_insensitive() {
        let entries = sample();
        let result = project(&entries, &ViewQuery::new().with_search("BOB"));
        assert_eq!(songs(&result), ["Sunset"]);
    }

    #[test]
    fn test_filters_are_exact() {
        let entries = sample();
        assert!(project(&entries, &ViewQuery::new().with_artist("alice")).is_empty());
        assert!(project(&entries, &ViewQuery::new().with_category("Jaz")).is_empty());
        assert_eq!(
            songs(&project(&entries, &ViewQuery::new().with_category("Jazz"))),
            ["Sunrise", "Sunset"]
        );
    }

    #[test]
    fn test_empty_filter_string_is_inactive() {
        let entries = sample();
        let query = ViewQuery::new().with_artist("").with_category("");
        assert!(query.is_empty());
        assert_eq!(project(&entries, &query).len(), 3);
    }

    #[test]
    fn test_sorted_by_song() {
        let entries = vec![
            entry("1", "A", "Zeta", "C"),
            entry("2", "A", "alpha", "C"),
            entry("3", "A", "Beta", "C"),
        ];
        assert_eq!(
            songs(&project(&entries, &ViewQuery::new())),
            ["alpha", "Beta", "Zeta"]
        );
    }

    #[test]
    fn test_facets_cover_whole_collection() {
        let entries = sample();
        let facets = Facets::from_entries(&entries);
        assert_eq!(facets.artists, ["Alice", "Bob"]);
        assert_eq!(facets.categories, ["Classical", "Jazz"]);
    }

    #[test]
    fn test_facets_fold_accented_artists() {
        let entries = vec![
            entry("1", "Zofia", "A", "Folk"),
            entry("2", "Łukasz", "B", "Folk"),
            entry("3", "Šimon", "C", "Étude"),
            entry("4", "Martin", "D", "Dance"),
        ];
        let facets = Facets::from_entries(&entries);
        assert_eq!(facets.artists, ["Łukasz", "Martin", "Šimon", "Zofia"]);
        assert_eq!(facets.categories, ["Dance", "Étude", "Folk"]);
    }
}
