//! # Storage
//!
//! Durable key-value string storage scoped to the application. The store
//! keeps its whole collection under one key, so backends only need to read
//! and replace string values.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{
    constants::STORAGE_FILE_EXTENSION,
    error::{Result, TomeError},
};

/// A durable string store addressed by key.
pub trait KeyValueStore {
    /// Reads the value for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// =============================================================================
// File Backend
// =============================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{STORAGE_FILE_EXTENSION}"))
    }
}

fn storage_error(key: &str, source: io::Error) -> TomeError {
    TomeError::Storage {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(key, err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| storage_error(key, e))?;

        // Write beside the target and rename so a crash never leaves half a file
        let path = self.path_for(key);
        let tmp = path.with_extension(format!("{STORAGE_FILE_EXTENSION}.tmp"));
        fs::write(&tmp, value).map_err(|e| storage_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| storage_error(key, e))?;

        log::debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// In-memory store. Clones share the same map, so a caller can keep a handle
/// and inspect what a [`crate::store::Store`] persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Returns the raw value for `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
