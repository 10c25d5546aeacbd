//! # ArcRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module aggregates the command handlers of the ArcRS CLI. Each
//! subcommand lives in its own module with an `XxxArgs` struct (parsed by
//! Clap) and an async `handle_xxx` function invoked from `main.rs`:
//!
//! - `archive`: create an archive from a directory tree.
//! - `extract`: extract an archive, auto-identifying its format.
//! - `compress`: compress a single file.
//! - `decompress`: decompress a single file.
//!
//! Handlers resolve format keys against the registry, build filters, and
//! delegate the actual work to the orchestrators in `common::archive` and
//! `common::codec`.
//!
pub mod archive;
pub mod compress;
pub mod decompress;
pub mod extract;
