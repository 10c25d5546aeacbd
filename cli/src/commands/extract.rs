//! # ArcRS Extract Command
//!
//! File: cli/src/commands/extract.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module implements the `arcrs extract` command, which restores a
//! directory tree from an archive file. The archive format is identified
//! automatically from its magic bytes (falling back to the extension), so no
//! format flags exist here.
//!
//! ## Examples
//!
//! ```bash
//! # Extract into the current directory
//! arcrs extract backup.tar.zst
//!
//! # Extract into a named directory (created if absent)
//! arcrs extract backup.zip restored/
//! ```
//!
use crate::common::archive::extract::extract_archive;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Extract Command Arguments (`ExtractArgs`)
///
/// Defines the command-line arguments accepted by the `arcrs extract`
/// subcommand.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Archive file to extract.
    pub archive: PathBuf,

    /// Destination directory; created (with parents) if absent.
    #[arg(default_value = ".")]
    pub destination: PathBuf,
}

/// # Handle Extract Command (`handle_extract`)
///
/// Runs the auto-identifying extraction orchestrator.
pub async fn handle_extract(args: ExtractArgs) -> Result<()> {
    info!("Handling extract command...");

    extract_archive(&args.archive, &args.destination)
        .with_context(|| format!("Failed to extract '{}'", args.archive.display()))?;

    println!("Archive extracted to: {}", args.destination.display());
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_with_default_destination() {
        let args = ExtractArgs::try_parse_from(["extract", "backup.tar.zst"]).unwrap();
        assert_eq!(args.archive, PathBuf::from("backup.tar.zst"));
        assert_eq!(args.destination, PathBuf::from("."));
    }

    #[test]
    fn test_parses_with_explicit_destination() {
        let args =
            ExtractArgs::try_parse_from(["extract", "backup.zip", "restored"]).unwrap();
        assert_eq!(args.destination, PathBuf::from("restored"));
    }

    #[test]
    fn test_missing_archive_fails_parsing() {
        assert!(ExtractArgs::try_parse_from(["extract"]).is_err());
    }
}
