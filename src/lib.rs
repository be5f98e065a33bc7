//! # tabtome
//!
//! A personal catalog of music tabs for in-game instruments, kept in a
//! single JSON record and browsed from the terminal.
//!
//! ## Features
//!
//! - **Catalog**: Add, edit and remove tabs (artist, song, category, body)
//! - **Browse**: Live search plus artist and category filters, songs sorted naturally
//! - **Import**: JSON backups and the legacy XML `<Tab>` format, merged by id
//! - **Export**: Portable JSON backups that import back without loss
//! - **Markup**: `( ... )` and `[ ... ]` annotations highlighted when reading
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod entry;
pub mod error;
pub mod export;
pub mod id;
pub mod import;
pub mod markup;
pub mod query;
pub mod storage;
pub mod store;
pub mod tui;
pub mod ui;

pub use config::{set_home_override, Config};
pub use entry::{Entry, EntryFields};
pub use error::TomeError;
pub use import::{ImportFormat, ImportReport};
pub use query::{Facets, ViewQuery};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{MergeReport, Store};
