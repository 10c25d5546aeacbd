//! # ArcRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across multiple integration test files (`archive.rs`, `codec.rs`,
//! etc.). This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs`
//! file in that directory (that isn't a module like this one) is compiled as
//! a separate test crate linked against the main `arcrs` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;

/// # Get ArcRS Command (`arcrs_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `arcrs` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `arcrs` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn arcrs_cmd() -> Command {
    Command::cargo_bin("arcrs").expect("Failed to find arcrs binary for testing")
}
