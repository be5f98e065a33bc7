//! # Export
//!
//! Serializes the whole collection into a portable JSON backup that the
//! JSON importer reads back without loss.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::Path};

use crate::{
    error::{Result, TomeError},
    storage::KeyValueStore,
    store::Store,
};

/// Renders the backup document (pretty-printed JSON array).
///
/// Fails with [`TomeError::EmptyCollection`] if the store has no entries.
pub fn to_json<B: KeyValueStore>(store: &Store<B>) -> Result<String> {
    if store.is_empty() {
        return Err(TomeError::EmptyCollection);
    }
    let document = serde_json::to_string_pretty(store.entries())?;
    log::debug!("exported {} tabs", store.len());
    Ok(document)
}

/// Writes the backup document to `path`.
///
/// Nothing is written when the store is empty.
pub fn write_backup<B: KeyValueStore>(store: &Store<B>, path: &Path) -> Result<usize> {
    let document = to_json(store)?;
    fs::write(path, document).map_err(|source| TomeError::Storage {
        key: path.display().to_string(),
        source,
    })?;
    Ok(store.len())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::{
        entry::{Entry, EntryFields},
        storage::MemoryStore,
    };

    #[test]
    fn test_empty_store_fails() {
        let store = Store::open(MemoryStore::new());
        assert!(matches!(
            to_json(&store).unwrap_err(),
            TomeError::EmptyCollection
        ));
    }

    #[test]
    fn test_empty_store_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("backup.json");
        let store = Store::open(MemoryStore::new());

        assert!(write_backup(&store, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_document_is_pretty_array() {
        let mut store = Store::open(MemoryStore::new());
        store
            .add(Entry::new("1", EntryFields::new("A", "S", "C", "x (y)")))
            .unwrap();

        let document = to_json(&store).unwrap();
        assert!(document.starts_with("[\n  {\n    \"id\": \"1\""));
        let value: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert_eq!(value[0]["content"], "x (y)");
    }
}
