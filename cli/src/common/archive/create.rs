//! # ArcRS Archive Creation (`common::archive::create`)
//!
//! File: cli/src/common/archive/create.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module produces a single archive file from a directory tree. It owns
//! the orchestration only; enumeration comes from `common::fs::walk`,
//! filtering from `common::filter`, and the container/codec work from the
//! `tar`/`zip` crates wired through the format registry.
//!
//! ## Architecture
//!
//! `create_archive` runs a fixed sequence:
//!
//! 1. Remove any pre-existing file or directory at the destination ("start
//!    clean"; a missing destination is not an error).
//! 2. Fail fast if the source directory does not exist.
//! 3. Compute the top-level in-archive name from the source path (`.`
//!    nests nothing).
//! 4. Enumerate the tree into a flat entry list.
//! 5. Drop entries the optional name filter excludes, preserving order.
//! 6. Create the destination file.
//! 7. Stream the entries through the chosen compression+archival pair.
//!
//! The destination handle is scoped to the call and released on every exit
//! path. On a streaming failure the destination may be left truncated or
//! partial, as there is no atomic-rename guarantee; callers needing atomicity
//! must archive to a temporary path and rename themselves.
//!
//! ZIP is the one special case: the container compresses entries internally
//! (Deflate), so the outer compression layer is skipped entirely.
//!
use crate::common::archive::format::{Archival, Compression};
use crate::common::filter::NameFilter;
use crate::common::fs::walk::{archive_root_name, collect_entries, FileEntry};
use crate::core::error::{ArcrsError, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::debug;

/// # Create Archive (`create_archive`)
///
/// Archives the contents of `src_dir` into `dest` using the chosen
/// compression and archival formats, optionally dropping entries whose file
/// name the `filter` excludes.
///
/// ## Arguments
///
/// * `src_dir` - Directory to archive (may be `.`; see module docs for the
///   nesting rule).
/// * `dest` - Destination archive file; any pre-existing file or directory
///   at this path is removed first.
/// * `compression` - Stream codec for TAR output; ignored for ZIP.
/// * `archival` - Container format (`tar` or `zip`).
/// * `filter` - Optional name filter; `None` archives everything.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` once the archive is fully written and flushed.
///
/// ## Errors
///
/// * `ArcrsError::Io` - removing a stale destination or creating the new one
///   failed.
/// * `ArcrsError::NotFound` - the source directory does not exist.
/// * `ArcrsError::Enumeration` - traversing the source tree failed.
/// * `ArcrsError::Archival` - any container/codec streaming failure; the
///   destination file may be left partial.
pub fn create_archive(
    src_dir: &Path,
    dest: &Path,
    compression: Compression,
    archival: Archival,
    filter: Option<&NameFilter>,
) -> Result<()> {
    debug!(
        "Starting archival of '{}' into '{}' ({} + {})",
        src_dir.display(),
        dest.display(),
        compression.key(),
        archival.key()
    );

    // Start clean: drop whatever currently occupies the destination path.
    remove_existing(dest)?;

    if !src_dir.exists() {
        return Err(ArcrsError::NotFound(src_dir.display().to_string()).into());
    }

    let root_name = archive_root_name(src_dir);
    debug!("Top-level archive name: {:?}", root_name);

    let mut entries = collect_entries(src_dir, root_name.as_deref())?;

    if let Some(filter) = filter {
        let before = entries.len();
        entries.retain(|entry| !filter.is_excluded(&entry.name()));
        debug!("Filter kept {} of {} entries", entries.len(), before);
    }

    let out = File::create(dest).map_err(|e| {
        ArcrsError::Io(format!(
            "Failed to create output file '{}': {}",
            dest.display(),
            e
        ))
    })?;

    match archival {
        Archival::Tar => write_tar(out, dest, compression, &entries),
        Archival::Zip => {
            debug!(
                "zip archival compresses internally; skipping outer {} stream",
                compression.key()
            );
            write_zip(out, dest, &entries)
        }
    }?;

    debug!("Archive created successfully: {}", dest.display());
    Ok(())
}

/// Removes a pre-existing file or directory at `dest`. Absence is fine.
fn remove_existing(dest: &Path) -> Result<()> {
    match fs::symlink_metadata(dest) {
        Ok(meta) => {
            debug!("Removing existing output path: {}", dest.display());
            let removal = if meta.is_dir() {
                fs::remove_dir_all(dest)
            } else {
                fs::remove_file(dest)
            };
            removal.map_err(|e| {
                ArcrsError::Io(format!(
                    "Failed to remove existing output '{}': {}",
                    dest.display(),
                    e
                ))
                .into()
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ArcrsError::Io(format!(
            "Failed to inspect output path '{}': {}",
            dest.display(),
            e
        ))
        .into()),
    }
}

/// Streams `entries` into a TAR container wrapped in the compression codec.
/// Both the tar structure and the codec stream are explicitly finalized.
fn write_tar(
    out: File,
    dest: &Path,
    compression: Compression,
    entries: &[FileEntry],
) -> Result<()> {
    let archival_err = |stage: &str, e: &dyn std::fmt::Display| {
        ArcrsError::Archival(format!("{} for '{}': {}", stage, dest.display(), e))
    };

    let encoder = compression
        .writer(Box::new(out))
        .map_err(|e| archival_err("Failed to open compression stream", &e))?;
    let mut builder = tar::Builder::new(encoder);

    for entry in entries {
        let result = if entry.is_dir {
            builder.append_dir(&entry.archive_path, &entry.disk_path)
        } else {
            builder.append_path_with_name(&entry.disk_path, &entry.archive_path)
        };
        result.map_err(|e| archival_err("Failed to append entry", &e))?;
    }

    // into_inner writes the tar terminator blocks and hands back the encoder.
    let encoder = builder
        .into_inner()
        .map_err(|e| archival_err("Failed to finalize tar structure", &e))?;
    encoder
        .finish()
        .map_err(|e| archival_err("Failed to finish compression stream", &e))?;

    Ok(())
}

/// Streams `entries` into a ZIP container with Deflate-compressed entries.
fn write_zip(out: File, dest: &Path, entries: &[FileEntry]) -> Result<()> {
    let archival_err = |stage: &str, e: &dyn std::fmt::Display| {
        ArcrsError::Archival(format!("{} for '{}': {}", stage, dest.display(), e))
    };

    let mut zip = zip::ZipWriter::new(out);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for entry in entries {
        // ZIP names are '/'-separated regardless of platform.
        let name = entry.archive_path.to_string_lossy().replace('\\', "/");

        let mut entry_options = options;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(meta) = fs::metadata(&entry.disk_path) {
                entry_options = entry_options.unix_permissions(meta.permissions().mode());
            }
        }

        if entry.is_dir {
            zip.add_directory(&name, entry_options)
                .map_err(|e| archival_err("Failed to add directory entry", &e))?;
        } else {
            zip.start_file(&name, entry_options)
                .map_err(|e| archival_err("Failed to start file entry", &e))?;
            let mut source = File::open(&entry.disk_path)
                .map_err(|e| archival_err("Failed to open source file", &e))?;
            io::copy(&mut source, &mut zip)
                .map_err(|e| archival_err("Failed to stream file entry", &e))?;
        }
    }

    zip.finish()
        .map_err(|e| archival_err("Failed to finalize zip structure", &e))?;
    Ok(())
}
