//! # ArcRS Source Tree Enumeration (`common::fs::walk`)
//!
//! File: cli/src/common/fs/walk.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module maps files on disk to their paths inside an archive. Given a
//! source directory it produces a flat, ordered list of [`FileEntry`] values;
//! the archive orchestrator filters that list and streams it into a
//! container. Traversal itself is delegated to the `walkdir` crate;
//! symlink policy and ordering are whatever `walkdir` provides.
//!
//! ## Architecture
//!
//! Two pieces:
//!
//! - `archive_root_name` computes the top-level directory name entries are
//!   nested under inside the archive: the base name of the cleaned source
//!   path, except that archiving the current directory (`.`) nests nothing and
//!   entries land at the archive root.
//! - `collect_entries` walks the tree depth-first and emits one entry per
//!   file or directory, with `archive_path` already carrying the nesting
//!   prefix. Any traversal failure aborts enumeration with an
//!   `ArcrsError::Enumeration`.
//!
use crate::core::error::{ArcrsError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// # File Entry (`FileEntry`)
///
/// One file or directory to be archived: where it lives on disk, where it
/// goes inside the archive, and whether it is a directory. Entries are
/// produced by [`collect_entries`] and only ever filtered and forwarded;
/// nothing downstream mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Location of the file on disk.
    pub disk_path: PathBuf,
    /// Path the entry takes inside the archive (relative, '/'-separated
    /// once rendered by the container writer).
    pub archive_path: PathBuf,
    /// Whether this entry is a directory.
    pub is_dir: bool,
}

impl FileEntry {
    /// The entry's base file name, the string name filters match against.
    pub fn name(&self) -> String {
        self.disk_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// # Archive Root Name (`archive_root_name`)
///
/// The top-level name source files are nested under inside the archive.
/// Archiving `foo/` nests entries under `foo/...`; archiving the current
/// directory (`.`) returns `None` and entries are placed at the archive
/// root with no prefix.
pub fn archive_root_name(dir: &Path) -> Option<String> {
    if dir == Path::new(".") {
        return None;
    }
    dir.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// # Collect File Entries (`collect_entries`)
///
/// Walks `src` recursively and returns a flat list of entries, each mapped
/// to its in-archive path. The source directory itself becomes an entry only
/// when a nesting `root_name` is present (there is nothing to name it when
/// entries sit at the archive root).
///
/// ## Arguments
///
/// * `src` - The directory to enumerate. Must exist.
/// * `root_name` - Optional top-level directory name inside the archive,
///   as computed by [`archive_root_name`].
///
/// ## Returns
///
/// * `Result<Vec<FileEntry>>` - Entries in traversal order (parents before
///   children), ready for filtering and streaming.
///
/// ## Errors
///
/// Returns `ArcrsError::Enumeration` if any step of the traversal fails
/// (unreadable directory, permission denied, dangling entry).
pub fn collect_entries(src: &Path, root_name: Option<&str>) -> Result<Vec<FileEntry>> {
    debug!("Enumerating source tree: {}", src.display());
    let mut entries = Vec::new();

    for walk_result in WalkDir::new(src) {
        let walk_entry = walk_result.map_err(|e| {
            ArcrsError::Enumeration(format!(
                "Error while traversing '{}': {}",
                src.display(),
                e
            ))
        })?;

        let rel = walk_entry.path().strip_prefix(src).map_err(|e| {
            ArcrsError::Enumeration(format!(
                "Entry '{}' escaped source root '{}': {}",
                walk_entry.path().display(),
                src.display(),
                e
            ))
        })?;

        let is_dir = walk_entry.file_type().is_dir();

        // The source root itself: emitted only when nested under a name.
        if rel.as_os_str().is_empty() {
            if let Some(name) = root_name {
                entries.push(FileEntry {
                    disk_path: walk_entry.path().to_path_buf(),
                    archive_path: PathBuf::from(name),
                    is_dir,
                });
            }
            continue;
        }

        let archive_path = match root_name {
            Some(name) => Path::new(name).join(rel),
            None => rel.to_path_buf(),
        };

        entries.push(FileEntry {
            disk_path: walk_entry.path().to_path_buf(),
            archive_path,
            is_dir,
        });
    }

    debug!(
        "Enumerated {} entries under '{}'",
        entries.len(),
        src.display()
    );
    Ok(entries)
}
