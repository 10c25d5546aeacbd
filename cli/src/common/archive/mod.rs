//! # ArcRS Archive Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module is the organizational unit for archive container handling:
//! turning directory trees into single archive files and back. Codec and
//! container internals live in external crates; these submodules only select
//! formats and wire streams together.
//!
//! ## Architecture
//!
//! - **`format`**: the format registry: key-to-handle lookup for compression
//!   (`gz`, `bz2`, `xz`, `zst`, `lz4`, `br`) and archival (`tar`, `zip`)
//!   formats, the codec reader/writer seam, and archive identification.
//! - **`create`**: the archive orchestrator (enumerate → filter → stream).
//! - **`extract`**: auto-identifying extraction to a destination directory.
//!
pub mod create;
pub mod extract;
pub mod format;
