//! # Test Harness
//!
//! Provides utilities for integration testing tabtome without touching the
//! user's configuration or tab collection. The library side is redirected
//! through the thread-local home override; the `tome` binary gets `HOME`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tabtome::{set_home_override, Entry, EntryFields, FileStore, Store};
use tempfile::TempDir;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary home and working directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home
    pub home_dir: TempDir,
    /// Temporary working directory (relative export paths land here)
    pub work_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let work_dir = TempDir::new().expect("Failed to create temp work dir");
        let original_cwd = env::current_dir().expect("Failed to get current dir");

        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(work_dir.path()).expect("Failed to change to work dir");

        Self {
            home_dir,
            work_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("tabtome")
            .join("config")
    }

    /// Returns the default data directory.
    pub fn data_path(&self) -> PathBuf {
        self.home_dir.path().join(".local/share/tabtome")
    }

    /// Returns the file holding the persisted collection.
    pub fn collection_path(&self) -> PathBuf {
        self.data_path().join("music-tabs.json")
    }

    /// Returns a path inside the working directory.
    pub fn work_path(&self, name: &str) -> PathBuf {
        self.work_dir.path().join(name)
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Writes a file into the working directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_path(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Opens the collection the commands operate on.
    pub fn store(&self) -> Store<FileStore> {
        Store::open(FileStore::new(self.data_path()))
    }

    /// Creates a `tome` command running inside this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tome").expect("tome binary should build");
        cmd.current_dir(self.work_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("VISUAL");
        cmd.env_remove("EDITOR");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Creates a test environment whose config disables interactive mode.
pub fn setup_test_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().build());
    env
}

/// Adds a tab with a fixed id directly through the store.
pub fn create_test_entry(
    env: &TestEnv,
    id: &str,
    artist: &str,
    song: &str,
    category: &str,
    content: &str,
) -> Entry {
    let entry = Entry::new(id, EntryFields::new(artist, song, category, content));
    env.store()
        .add(entry.clone())
        .expect("Failed to add test entry");
    entry
}

/// Seeds the collection used by most listing tests.
pub fn seed_collection(env: &TestEnv) {
    create_test_entry(env, "1700000000001", "Alice", "Song 10", "Flute", "1 2 3");
    create_test_entry(env, "1700000000002", "Bob", "Song 2", "Harp", "4 (5) 6");
    create_test_entry(env, "1700000000003", "alice", "Moonrise", "Flute", "[7] 8");
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for creating test configurations.
pub struct GlobalConfigBuilder {
    data_dir: Option<String>,
    editor: Option<String>,
    interactive: bool,
    export_file: Option<String>,
}

impl Default for GlobalConfigBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            editor: Some("true".to_string()), // no-op editor
            interactive: false,
            export_file: None,
        }
    }
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_dir(mut self, dir: impl Into<String>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn export_file(mut self, name: impl Into<String>) -> Self {
        self.export_file = Some(name.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(dir) = &self.data_dir {
            lines.push(format!("data_dir = \"{dir}\""));
        }
        if let Some(editor) = &self.editor {
            lines.push(format!("editor = \"{editor}\""));
        }
        lines.push(format!("interactive = {}", self.interactive));
        if let Some(name) = &self.export_file {
            lines.push(format!("export_file = \"{name}\""));
        }
        lines.join("\n")
    }
}

/// Reads a file to a string, panicking with the path on failure.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
