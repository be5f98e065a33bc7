//! # Errors
//!
//! Error taxonomy for the catalog core (store, importers, exporter).
//!
//! Per-record import problems are not errors: they are counted as skipped
//! in [`crate::import::ImportReport`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use thiserror::Error;

/// Errors raised by the catalog core.
#[derive(Debug, Error)]
pub enum TomeError {
    /// The top-level import payload is malformed; nothing was admitted.
    #[error("invalid import file: {0}")]
    Format(String),

    /// An entry with this id is already in the store.
    #[error("a tab with id '{0}' already exists")]
    DuplicateId(String),

    /// No entry with this id is in the store.
    #[error("no tab found with id '{0}'")]
    NotFound(String),

    /// Export was requested on an empty store.
    #[error("your tome is empty, there is nothing to export")]
    EmptyCollection,

    /// A required field was empty on manual save.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// The durable store could not be read or written.
    #[error("storage error for '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: io::Error,
    },

    /// The collection could not be encoded.
    #[error("failed to encode tabs: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, TomeError>;
