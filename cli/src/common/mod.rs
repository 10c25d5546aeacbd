//! # ArcRS Common Utilities
//!
//! File: cli/src/common/mod.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module aggregates the shared capability modules used by the command
//! handlers. Each submodule owns one concern:
//!
//! - `archive`: format registry, archive creation and extraction.
//! - `codec`: in-memory compression/decompression.
//! - `filter`: include/exclude name filters over regex pattern lists.
//! - `fs`: filesystem helpers (source tree enumeration).
//!
//! Command modules under `commands/` call into these; nothing here parses
//! arguments or prints to the terminal.
//!
pub mod archive;
pub mod codec;
pub mod filter;
pub mod fs;
