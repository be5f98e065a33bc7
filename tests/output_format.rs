//! # Output Format Tests
//!
//! Runs the `tome` binary and checks that non-interactive output is plain
//! and scriptable, and that failures exit non-zero with an error line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{seed_collection, setup_test_env};
use predicates::prelude::*;

// =============================================================================
// list
// =============================================================================

#[test]
fn test_list_tab_separated_sorted_by_song() {
    let env = setup_test_env();
    seed_collection(&env);

    env.cmd()
        .args(["list", "--no-interactive"])
        .assert()
        .success()
        .stdout(
            "1700000000003\tMoonrise\talice\tFlute\n\
             1700000000001\tSong 10\tAlice\tFlute\n\
             1700000000002\tSong 2\tBob\tHarp\n",
        );
}

#[test]
fn test_list_search_is_case_insensitive() {
    let env = setup_test_env();
    seed_collection(&env);

    env.cmd()
        .args(["list", "--search", "ALICE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moonrise"))
        .stdout(predicate::str::contains("Song 10"))
        .stdout(predicate::str::contains("Song 2").not());
}

#[test]
fn test_list_filters_are_exact() {
    let env = setup_test_env();
    seed_collection(&env);

    env.cmd()
        .args(["list", "--artist", "Alice", "--category", "Flute"])
        .assert()
        .success()
        .stdout("1700000000001\tSong 10\tAlice\tFlute\n");

    env.cmd()
        .args(["list", "--category", "flute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tabs found."));
}

#[test]
fn test_list_empty_collection_hint() {
    let env = setup_test_env();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your tome is empty"));
}

// =============================================================================
// facets
// =============================================================================

#[test]
fn test_artists_and_categories_one_per_line() {
    let env = setup_test_env();
    seed_collection(&env);

    env.cmd()
        .arg("artists")
        .assert()
        .success()
        .stdout("alice\nAlice\nBob\n");

    env.cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout("Flute\nHarp\n");
}

// =============================================================================
// show / add / remove
// =============================================================================

#[test]
fn test_show_plain_prints_raw_body() {
    let env = setup_test_env();
    seed_collection(&env);

    env.cmd()
        .args(["show", "--id", "1700000000002", "--plain"])
        .assert()
        .success()
        .stdout("4 (5) 6\n");
}

#[test]
fn test_show_ambiguous_prefix_fails() {
    let env = setup_test_env();
    seed_collection(&env);

    env.cmd()
        .args(["show", "--id", "17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("Multiple tabs match"));
}

#[test]
fn test_add_then_list() {
    let env = setup_test_env();

    env.cmd()
        .args(["add", "-a", "Carol", "-s", "Lullaby", "--content", "1 1 5 5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added tab"));

    env.cmd()
        .args(["list", "--no-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tLullaby\tCarol\tUncategorized\n"));
}

#[test]
fn test_add_content_from_stdin() {
    let env = setup_test_env();

    env.cmd()
        .args(["add", "-a", "Carol", "-s", "Lullaby", "--file", "-"])
        .write_stdin("1 1 5 5\n")
        .assert()
        .success();

    assert_eq!(env.store().entries()[0].content(), "1 1 5 5");
}

#[test]
fn test_add_missing_song_fails() {
    let env = setup_test_env();

    env.cmd()
        .args(["add", "-a", "Carol", "--content", "1 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("song"));

    assert!(env.store().is_empty());
}

#[test]
fn test_remove_requires_yes_without_terminal() {
    let env = setup_test_env();
    seed_collection(&env);

    env.cmd()
        .args(["remove", "--id", "1700000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    env.cmd()
        .args(["remove", "--id", "1700000000001", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed tab"));

    assert_eq!(env.store().len(), 2);
}

// =============================================================================
// import / export / completions
// =============================================================================

#[test]
fn test_export_stdout_then_import_roundtrip() {
    let env = setup_test_env();
    seed_collection(&env);

    let output = env.cmd().args(["export", "--stdout"]).output().unwrap();
    assert!(output.status.success());
    let backup = env.work_path("backup.json");
    std::fs::write(&backup, &output.stdout).unwrap();

    env.cmd()
        .args(["import"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 new tabs"))
        .stdout(predicate::str::contains("3 skipped"));
}

#[test]
fn test_export_empty_collection_fails() {
    let env = setup_test_env();

    env.cmd()
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    assert!(!env.work_path("tome-backup.json").exists());
}

#[test]
fn test_import_missing_file_fails() {
    let env = setup_test_env();

    env.cmd()
        .args(["import", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_completions_bash() {
    let env = setup_test_env();

    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tome"));
}
