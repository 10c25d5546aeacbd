//! # ArcRS CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This integration test file focuses on verifying the top-level behavior
//! of the `arcrs` command-line interface, such as handling standard flags
//! like `--version` and `--help`, and the `help` subcommand itself.
//!

// Declare and use the common module for helpers like `arcrs_cmd()`
mod common;

use common::arcrs_cmd;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    arcrs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("archive"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("compress"))
        .stdout(predicate::str::contains("decompress"));
}

#[test]
fn test_version_flag() {
    arcrs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_subcommand() {
    arcrs_cmd()
        .args(["help", "archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"));
}

#[test]
fn test_unknown_subcommand_fails() {
    arcrs_cmd().arg("frobnicate").assert().failure();
}
