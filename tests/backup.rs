//! # Backup Tests
//!
//! Tests for `tome export` and `tome import`: JSON backups, the legacy XML
//! format, and merging by id.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::fs;

use common::{create_test_entry, read, seed_collection, setup_test_env, GlobalConfigBuilder, TestEnv};
use tabtome::{
    commands::{self, ExportArgs, ImportArgs},
    export, import, Entry, EntryFields, ImportFormat, MemoryStore, Store, TomeError,
};

const LEGACY_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Tabs>
  <Tab>
    <title>Alice - Sunrise</title>
    <tab>1 2 3 (4 5)</tab>
  </Tab>
  <Tab>
    <title>Untitled Melody</title>
    <tab>[6] 7 8</tab>
  </Tab>
  <Tab>
    <title> - Dangling</title>
    <tab>9 0</tab>
  </Tab>
  <Tab>
    <title>No Body</title>
  </Tab>
</Tabs>"#;

#[test]
fn test_export_then_import_restores_collection() {
    let env = setup_test_env();
    seed_collection(&env);
    let before = env.store().entries().to_vec();

    commands::export(ExportArgs {
        path: Some(env.work_path("backup.json")),
        ..ExportArgs::default()
    })
    .expect("export should succeed");

    // Start over with an empty collection
    fs::remove_file(env.collection_path()).expect("remove collection");
    assert!(env.store().is_empty());

    commands::import(&ImportArgs {
        file: env.work_path("backup.json"),
        format: None,
    })
    .expect("import should succeed");

    assert_eq!(env.store().entries(), before.as_slice());
}

#[test]
fn test_reimport_is_idempotent() {
    let env = setup_test_env();
    seed_collection(&env);
    let path = env.work_path("backup.json");
    export::write_backup(&env.store(), &path).expect("write backup");

    let mut store = env.store();
    let report = import::import_json(&mut store, &read(&path)).expect("import");
    assert_eq!(report.admitted, 0);
    assert_eq!(report.skipped, 3);
    assert_eq!(env.store().len(), 3);
}

#[test]
fn test_export_uses_configured_file_name() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().export_file("mine.json").build());
    seed_collection(&env);

    commands::export(ExportArgs::default()).expect("export should succeed");

    let text = read(&env.work_path("mine.json"));
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert!(text.contains("\n  "), "backup should be pretty-printed");
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let env = setup_test_env();
    seed_collection(&env);
    let path = env.write_file("backup.json", "keep me");

    let err = commands::export(ExportArgs {
        path: Some(path.clone()),
        ..ExportArgs::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("--force"));
    assert_eq!(read(&path), "keep me");

    commands::export(ExportArgs {
        path: Some(path.clone()),
        force: true,
        ..ExportArgs::default()
    })
    .expect("forced export should succeed");
    assert!(read(&path).starts_with('['));
}

#[test]
fn test_export_empty_collection_writes_nothing() {
    let env = setup_test_env();
    let path = env.work_path("backup.json");

    let err = commands::export(ExportArgs {
        path: Some(path.clone()),
        ..ExportArgs::default()
    })
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TomeError>(),
        Some(TomeError::EmptyCollection)
    ));
    assert!(!path.exists());
}

#[test]
fn test_export_empty_collection_reported_before_overwrite_check() {
    let env = setup_test_env();
    let path = env.write_file("backup.json", "keep me");

    let err = commands::export(ExportArgs {
        path: Some(path.clone()),
        ..ExportArgs::default()
    })
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TomeError>(),
        Some(TomeError::EmptyCollection)
    ));
    assert_eq!(read(&path), "keep me");
}

#[test]
fn test_import_legacy_detected_from_extension() {
    let env = setup_test_env();
    let path = env.write_file("old-tabs.xml", LEGACY_DOC);

    commands::import(&ImportArgs {
        file: path,
        format: None,
    })
    .expect("import should succeed");

    let store = env.store();
    assert_eq!(store.len(), 3, "the tab without a body is skipped");

    let sunrise = store.entries().iter().find(|e| e.song() == "Sunrise").unwrap();
    assert_eq!(sunrise.artist(), "Alice");
    assert_eq!(sunrise.category(), "Legacy Import");
    assert_eq!(sunrise.content(), "1 2 3 (4 5)");

    let melody = store
        .entries()
        .iter()
        .find(|e| e.song() == "Untitled Melody")
        .unwrap();
    assert_eq!(melody.artist(), "Unknown Artist");

    let dangling = store
        .entries()
        .iter()
        .find(|e| e.content() == "9 0")
        .unwrap();
    assert_eq!(dangling.artist(), "Unknown Artist");
}

#[test]
fn test_import_malformed_leaves_store_unchanged() {
    let env = setup_test_env();
    create_test_entry(&env, "1700000000001", "Alice", "Sunrise", "Flute", "1 2 3");

    let json = env.write_file("broken.json", "{\"id\": \"1\"}");
    let err = commands::import(&ImportArgs {
        file: json,
        format: None,
    })
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TomeError>(),
        Some(TomeError::Format(_))
    ));

    let xml = env.write_file("broken.xml", "<Tabs><Tab><title>x</title>");
    assert!(commands::import(&ImportArgs {
        file: xml,
        format: None,
    })
    .is_err());

    assert_eq!(env.store().len(), 1);
}

#[test]
fn test_import_explicit_format_overrides_extension() {
    let env = setup_test_env();
    let path = env.write_file("tabs.txt", LEGACY_DOC);

    commands::import(&ImportArgs {
        file: path,
        format: Some(ImportFormat::Legacy),
    })
    .expect("import should succeed");

    assert_eq!(env.store().len(), 3);
}

#[test]
fn test_json_import_defaults_absent_fields_and_skips_incomplete() {
    let mut store = Store::open(MemoryStore::new());
    let payload = r#"[
        {"id": "1", "artist": "", "song": "A", "category": "", "content": "1 2"},
        {"id": "2", "song": "B", "content": "3 4"},
        {"id": "3", "artist": "C", "song": "", "content": "5"},
        {"id": "4", "artist": "D", "song": "E"},
        {"id": "1", "artist": "F", "song": "G", "content": "dup"},
        "not an object"
    ]"#;

    let report = import::import(&mut store, ImportFormat::Json, payload).expect("import");

    assert_eq!(report.admitted, 2);
    assert_eq!(report.skipped, 4);
    let first = store.get("1").unwrap();
    assert_eq!(first.artist(), "");
    assert_eq!(first.category(), "");
    assert_eq!(first.content(), "1 2");
    let second = store.get("2").unwrap();
    assert_eq!(second.artist(), "Unknown Artist");
    assert_eq!(second.category(), "Uncategorized");
}

#[test]
fn test_backup_round_trip_keeps_blank_fields() {
    let mut store = Store::open(MemoryStore::new());
    store
        .add(Entry::new("1", EntryFields::new("", "Song", "", "1 2 3")))
        .expect("add");
    store
        .add(Entry::new("2", EntryFields::new("Bob", " Padded ", "Harp", " 4 5 ")))
        .expect("add");
    let document = export::to_json(&store).expect("export");

    let mut restored = Store::open(MemoryStore::new());
    let report = import::import_json(&mut restored, &document).expect("import");

    assert_eq!(report.admitted, 2);
    assert_eq!(restored.entries(), store.entries());
}
