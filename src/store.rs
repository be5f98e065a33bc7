//! # Store
//!
//! Owns the authoritative tab collection and keeps durable storage in sync.
//!
//! Every mutation persists before it returns. If the write fails the
//! mutation is rolled back, so the in-memory collection never runs ahead
//! of what is on disk.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::HashSet;

use chrono::Utc;

use crate::{
    constants::STORAGE_KEY,
    entry::{Entry, EntryFields},
    error::{Result, TomeError},
    id,
    storage::KeyValueStore,
};

/// Counts from merging a batch of candidates into the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Candidates added to the store
    pub admitted: usize,
    /// Candidates rejected (missing fields or id already present)
    pub skipped: usize,
}

/// The tab collection plus the backend it persists to.
#[derive(Debug)]
pub struct Store<B: KeyValueStore> {
    backend: B,
    entries: Vec<Entry>,
    revision: u64,
}

impl<B: KeyValueStore> Store<B> {
    /// Opens the store, loading whatever the backend holds.
    pub fn open(backend: B) -> Self {
        let entries = Self::load(&backend);
        Self {
            backend,
            entries,
            revision: 0,
        }
    }

    /// Reads the persisted collection.
    ///
    /// Missing or unreadable state is treated as a first run and yields an
    /// empty collection. Duplicate ids in the stored record keep their first
    /// occurrence.
    pub fn load(backend: &B) -> Vec<Entry> {
        let raw = match backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no stored tabs, starting empty");
                return Vec::new();
            }
            Err(err) => {
                log::warn!("could not read stored tabs, starting empty: {err}");
                return Vec::new();
            }
        };

        let entries: Vec<Entry> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("stored tabs are corrupt, starting empty: {err}");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let total = entries.len();
        let entries: Vec<Entry> = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id().to_string()))
            .collect();
        if entries.len() != total {
            log::warn!(
                "dropped {} stored tabs with duplicate ids",
                total - entries.len()
            );
        }

        log::debug!("loaded {} tabs", entries.len());
        entries
    }

    /// Discards in-memory state and loads the backend again.
    pub fn reload(&mut self) {
        self.entries = Self::load(&self.backend);
        self.revision += 1;
    }

    /// Returns all entries in storage order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// True if an entry with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Counter bumped by every change to the collection.
    ///
    /// Views use it to decide when derived data (facets) must be rebuilt.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Inserts an entry and persists.
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        if self.contains(entry.id()) {
            return Err(TomeError::DuplicateId(entry.id().to_string()));
        }

        self.entries.push(entry);
        if let Err(err) = self.persist() {
            self.entries.pop();
            return Err(err);
        }
        self.revision += 1;
        Ok(())
    }

    /// Validates `fields` like a manual save, assigns a fresh id, and inserts.
    pub fn create(&mut self, fields: EntryFields) -> Result<Entry> {
        let fields = fields.validated()?;
        let id = id::generate(Utc::now(), |candidate| self.contains(candidate));
        let entry = Entry::new(id, fields);
        self.add(entry.clone())?;
        log::info!("created tab {}", entry.id());
        Ok(entry)
    }

    /// Replaces every field of an existing entry except its id.
    pub fn update(&mut self, id: &str, fields: EntryFields) -> Result<Entry> {
        let fields = fields.validated()?;
        let index = self.position(id)?;

        let previous = self.entries[index].fields();
        self.entries[index].replace_fields(fields);
        if let Err(err) = self.persist() {
            self.entries[index].replace_fields(previous);
            return Err(err);
        }
        self.revision += 1;
        log::info!("updated tab {id}");
        Ok(self.entries[index].clone())
    }

    /// Deletes an entry and persists.
    pub fn remove(&mut self, id: &str) -> Result<Entry> {
        let index = self.position(id)?;

        let removed = self.entries.remove(index);
        if let Err(err) = self.persist() {
            self.entries.insert(index, removed);
            return Err(err);
        }
        self.revision += 1;
        log::info!("removed tab {id}");
        Ok(removed)
    }

    /// Merges candidates by id, skipping duplicates.
    ///
    /// A candidate is admitted if its id, song and content are non-empty and
    /// its id is not yet present, counting candidates admitted earlier in the
    /// same batch. The store persists once at the end.
    pub fn merge<I>(&mut self, candidates: I) -> Result<MergeReport>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut ids: HashSet<String> = self
            .entries
            .iter()
            .map(|entry| entry.id().to_string())
            .collect();
        let original_len = self.entries.len();
        let mut report = MergeReport::default();

        for candidate in candidates {
            if !candidate.is_admissible() {
                log::debug!("skipping incomplete record '{}'", candidate.id());
                report.skipped += 1;
                continue;
            }
            if !ids.insert(candidate.id().to_string()) {
                log::debug!("skipping duplicate id '{}'", candidate.id());
                report.skipped += 1;
                continue;
            }
            self.entries.push(candidate);
            report.admitted += 1;
        }

        if let Err(err) = self.persist() {
            self.entries.truncate(original_len);
            return Err(err);
        }
        if report.admitted > 0 {
            self.revision += 1;
        }
        Ok(report)
    }

    /// Writes the full collection to the backend.
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.backend.set(STORAGE_KEY, &json)?;
        log::debug!("persisted {} tabs", self.entries.len());
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or_else(|| TomeError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::storage::MemoryStore;

    fn entry(id: &str, song: &str) -> Entry {
        Entry::new(id, EntryFields::new("Artist", song, "Cat", "1 2 3"))
    }

    /// Backend whose writes always fail.
    struct ReadOnly;

    impl KeyValueStore for ReadOnly {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(TomeError::Storage {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn test_open_empty() {
        let store = Store::open(MemoryStore::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_corrupt_is_empty() {
        let store = Store::open(MemoryStore::with_value(STORAGE_KEY, "{not json"));
        assert!(store.is_empty());

        let store = Store::open(MemoryStore::with_value(STORAGE_KEY, "null"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let raw = r#"[
            {"id":"1","artist":"A","song":"First","category":"C","content":"x"},
            {"id":"1","artist":"A","song":"Second","category":"C","content":"y"}
        ]"#;
        let store = Store::open(MemoryStore::with_value(STORAGE_KEY, raw));
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].song(), "First");
    }

    #[test]
    fn test_add_duplicate_leaves_collection() {
        let mut store = Store::open(MemoryStore::new());
        store.add(entry("1", "One")).unwrap();

        let err = store.add(entry("1", "Other")).unwrap_err();
        assert!(matches!(err, TomeError::DuplicateId(ref id) if id == "1"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].song(), "One");
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = Store::open(MemoryStore::new());
        let a = store
            .create(EntryFields::new("A", "One", "", "x"))
            .unwrap();
        let b = store
            .create(EntryFields::new("A", "Two", "", "y"))
            .unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.category(), "Uncategorized");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = Store::open(MemoryStore::new());
        let err = store
            .update("nope", EntryFields::new("A", "B", "C", "D"))
            .unwrap_err();
        assert!(matches!(err, TomeError::NotFound(_)));
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut store = Store::open(MemoryStore::new());
        assert!(matches!(
            store.remove("nope").unwrap_err(),
            TomeError::NotFound(_)
        ));
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut store = Store::open(MemoryStore::new());
        let start = store.revision();

        store.add(entry("1", "One")).unwrap();
        assert_eq!(store.revision(), start + 1);

        store.persist().unwrap();
        assert_eq!(store.revision(), start + 1);

        let report = store.merge(vec![entry("1", "Again")]).unwrap();
        assert_eq!(report.admitted, 0);
        assert_eq!(store.revision(), start + 1);

        store.remove("1").unwrap();
        assert_eq!(store.revision(), start + 2);
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let mut store = Store::open(ReadOnly);

        assert!(store.add(entry("1", "One")).is_err());
        assert!(store.is_empty());

        assert!(store.merge(vec![entry("2", "Two")]).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_merge_skips_within_batch_duplicates() {
        let mut store = Store::open(MemoryStore::new());
        let report = store
            .merge(vec![entry("1", "One"), entry("1", "Dup"), entry("2", "Two")])
            .unwrap();
        assert_eq!(
            report,
            MergeReport {
                admitted: 2,
                skipped: 1
            }
        );
        assert_eq!(store.get("1").unwrap().song(), "One");
    }

    #[test]
    fn test_merge_skips_incomplete() {
        let mut store = Store::open(MemoryStore::new());
        let no_content = Entry::new("3", EntryFields::new("A", "Song", "C", ""));
        let no_song = Entry::new("4", EntryFields::new("A", "", "C", "x"));
        let no_id = Entry::new("", EntryFields::new("A", "Song", "C", "x"));

        let report = store.merge(vec![no_content, no_song, no_id]).unwrap();
        assert_eq!(report.admitted, 0);
        assert_eq!(report.skipped, 3);
        assert!(store.is_empty());
    }
}
