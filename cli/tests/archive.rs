//! # ArcRS CLI Archive Integration Tests
//!
//! File: cli/tests/archive.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! End-to-end tests for `arcrs archive` and `arcrs extract`, driving the
//! compiled binary inside temporary directories. Each test runs with the
//! temp dir as its working directory so no project `.arcrs.toml` interferes.
//!

mod common;

use common::arcrs_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Builds `<root>/proj` containing a small mixed tree.
fn make_fixture_tree(root: &Path) {
    let src = root.join("proj");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.txt"), "alpha").unwrap();
    fs::write(src.join("b.bin"), [0u8, 159, 146, 150]).unwrap();
    fs::create_dir(src.join("sub")).unwrap();
    fs::write(src.join("sub/c.txt"), "gamma").unwrap();
}

#[test]
fn test_archive_then_extract_round_trip() {
    let temp = tempdir().unwrap();
    make_fixture_tree(temp.path());

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["archive", "proj", "-f", "out.tar.zst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive created"));

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["extract", "out.tar.zst", "restored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive extracted"));

    let restored = temp.path().join("restored/proj");
    assert_eq!(fs::read_to_string(restored.join("a.txt")).unwrap(), "alpha");
    assert_eq!(
        fs::read(restored.join("b.bin")).unwrap(),
        vec![0u8, 159, 146, 150]
    );
    assert_eq!(
        fs::read_to_string(restored.join("sub/c.txt")).unwrap(),
        "gamma"
    );
}

#[test]
fn test_archive_zip_round_trip() {
    let temp = tempdir().unwrap();
    make_fixture_tree(temp.path());

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["archive", "proj", "-f", "out.zip", "-t", "zip"])
        .assert()
        .success();

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["extract", "out.zip", "restored"])
        .assert()
        .success();

    let restored = temp.path().join("restored/proj");
    assert_eq!(fs::read_to_string(restored.join("a.txt")).unwrap(), "alpha");
    assert_eq!(
        fs::read_to_string(restored.join("sub/c.txt")).unwrap(),
        "gamma"
    );
}

#[test]
fn test_archive_missing_source_fails_without_output() {
    let temp = tempdir().unwrap();

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["archive", "no-such-dir", "-f", "out.tar.zst"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to archive"));

    assert!(!temp.path().join("out.tar.zst").exists());
}

#[test]
fn test_archive_with_include_filter() {
    let temp = tempdir().unwrap();
    make_fixture_tree(temp.path());

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["archive", "proj", "-f", "out.tar.gz", "-c", "gz", "-i", r".*\.txt$"])
        .assert()
        .success();

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["extract", "out.tar.gz", "restored"])
        .assert()
        .success();

    // Only the .txt files survive the include filter (directory entries do
    // not match the pattern either, so files are restored bare).
    let restored = temp.path().join("restored");
    assert!(restored.join("proj/a.txt").exists());
    assert!(restored.join("proj/sub/c.txt").exists());
    assert!(!restored.join("proj/b.bin").exists());
}

#[test]
fn test_archive_unknown_compression_key_rejected() {
    let temp = tempdir().unwrap();
    make_fixture_tree(temp.path());

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["archive", "proj", "-f", "out.tar.foo", "-c", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported compression format"));

    assert!(!temp.path().join("out.tar.foo").exists());
}

#[test]
fn test_archive_current_directory_places_entries_at_root() {
    let temp = tempdir().unwrap();
    make_fixture_tree(temp.path());
    let src = temp.path().join("proj");
    let out = temp.path().join("out.tar.gz");

    // Archive "." from inside proj: entries carry no "proj/" prefix.
    arcrs_cmd()
        .current_dir(&src)
        .args(["archive", ".", "-f"])
        .arg(&out)
        .assert()
        .success();

    let restored = temp.path().join("restored");
    arcrs_cmd()
        .current_dir(temp.path())
        .args(["extract", "out.tar.gz", "restored"])
        .assert()
        .success();

    assert!(restored.join("a.txt").exists());
    assert!(restored.join("sub/c.txt").exists());
    assert!(!restored.join("proj").exists());
}

#[test]
fn test_project_config_sets_default_exclude() {
    let temp = tempdir().unwrap();
    make_fixture_tree(temp.path());
    fs::write(
        temp.path().join(".arcrs.toml"),
        "[defaults]\nexclude = [\"\\\\.bin$\"]\n",
    )
    .unwrap();

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["archive", "proj", "-f", "out.tar.zst"])
        .assert()
        .success();

    arcrs_cmd()
        .current_dir(temp.path())
        .args(["extract", "out.tar.zst", "restored"])
        .assert()
        .success();

    let restored = temp.path().join("restored/proj");
    assert!(restored.join("a.txt").exists());
    assert!(!restored.join("b.bin").exists());
}
