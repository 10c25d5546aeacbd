//! # ArcRS Archive Extraction (`common::archive::extract`)
//!
//! File: cli/src/common/archive/extract.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module restores a directory tree from an archive file. The archive
//! format is identified automatically (magic bytes, then extension; see
//! `common::archive::format::identify_archive`), so callers never pass format
//! flags when extracting.
//!
//! ## Architecture
//!
//! - Compressed TAR input is chained through the codec's reader into
//!   `tar::Archive::unpack`, which creates directories and guards against
//!   entries escaping the destination.
//! - ZIP input is walked entry by entry; names are sanitized through
//!   `enclosed_name` before any path is touched, parent directories are
//!   created as needed, and unix permissions are restored where recorded.
//!
//! The destination directory is created (with parents) when absent.
//!
use crate::common::archive::format::{identify_archive, ArchiveKind, Compression};
use crate::core::error::{ArcrsError, Result};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// # Extract Archive (`extract_archive`)
///
/// Extracts `archive_path` into `dest_dir`, identifying the format
/// automatically.
///
/// ## Arguments
///
/// * `archive_path` - The archive file to extract. Must exist.
/// * `dest_dir` - Directory to extract into; created if absent.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` once every entry has been written.
///
/// ## Errors
///
/// * `ArcrsError::NotFound` - the archive file does not exist.
/// * `ArcrsError::Io` - the destination directory cannot be created.
/// * `ArcrsError::Archival` - unidentifiable input or any failure while
///   reading the container / writing entries.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    if !archive_path.exists() {
        return Err(ArcrsError::NotFound(archive_path.display().to_string()).into());
    }

    let kind = identify_archive(archive_path)?;
    debug!(
        "Extracting '{}' into '{}' as {:?}",
        archive_path.display(),
        dest_dir.display(),
        kind
    );

    fs::create_dir_all(dest_dir).map_err(|e| {
        ArcrsError::Io(format!(
            "Failed to create destination directory '{}': {}",
            dest_dir.display(),
            e
        ))
    })?;

    match kind {
        ArchiveKind::Tar(compression) => extract_tar(archive_path, compression, dest_dir),
        ArchiveKind::Zip => extract_zip(archive_path, dest_dir),
    }?;

    debug!("Archive extracted to: {}", dest_dir.display());
    Ok(())
}

/// Unpacks a (possibly compressed) TAR archive into `dest_dir`.
fn extract_tar(archive_path: &Path, compression: Option<Compression>, dest_dir: &Path) -> Result<()> {
    let archival_err = |stage: &str, e: &dyn std::fmt::Display| {
        ArcrsError::Archival(format!("{} for '{}': {}", stage, archive_path.display(), e))
    };

    let file = File::open(archive_path).map_err(|e| {
        ArcrsError::Io(format!(
            "Failed to open archive '{}': {}",
            archive_path.display(),
            e
        ))
    })?;

    let reader: Box<dyn Read> = match compression {
        Some(compression) => compression
            .reader(Box::new(file))
            .map_err(|e| archival_err("Failed to open decompression stream", &e))?,
        None => Box::new(file),
    };

    let mut archive = tar::Archive::new(reader);
    archive
        .unpack(dest_dir)
        .map_err(|e| archival_err("Failed to unpack tar archive", &e))?;
    Ok(())
}

/// Extracts a ZIP archive entry by entry into `dest_dir`.
fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let archival_err = |stage: &str, e: &dyn std::fmt::Display| {
        ArcrsError::Archival(format!("{} for '{}': {}", stage, archive_path.display(), e))
    };

    let file = File::open(archive_path).map_err(|e| {
        ArcrsError::Io(format!(
            "Failed to open archive '{}': {}",
            archive_path.display(),
            e
        ))
    })?;

    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| archival_err("Failed to read zip archive", &e))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| archival_err("Failed to read zip entry", &e))?;

        // Reject entries whose name would escape the destination.
        let safe_name = entry.enclosed_name().ok_or_else(|| {
            ArcrsError::Archival(format!(
                "Unsafe entry name '{}' in '{}'",
                entry.name(),
                archive_path.display()
            ))
        })?;
        let out_path = dest_dir.join(safe_name);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .map_err(|e| archival_err("Failed to create directory entry", &e))?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| archival_err("Failed to create parent directory", &e))?;
            }
            let mut out_file = File::create(&out_path)
                .map_err(|e| archival_err("Failed to create extracted file", &e))?;
            io::copy(&mut entry, &mut out_file)
                .map_err(|e| archival_err("Failed to write extracted file", &e))?;
        }

        // Restore recorded unix permissions where the platform supports it.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode)).ok();
            }
        }
    }

    Ok(())
}
