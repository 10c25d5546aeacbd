//! # ArcRS Filesystem Utilities Module (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module aggregates filesystem helpers shared by the archive
//! orchestrators. Today that is source-tree enumeration:
//!
//! - **`walk`**: flattens a directory tree into an ordered list of
//!   [`walk::FileEntry`] values carrying each file's on-disk path and its
//!   path inside the archive.
//!
pub mod walk;
