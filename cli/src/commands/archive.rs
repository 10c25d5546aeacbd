//! # ArcRS Archive Command
//!
//! File: cli/src/commands/archive.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module implements the `arcrs archive` command, which bundles a
//! directory tree into a single archive file. It handles:
//! - Resolving compression/archival format keys (flags, then config defaults)
//! - Building the optional include/exclude name filter
//! - Delegating creation to the archive orchestrator
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! # Archive the current directory as out.tar.zst (configured defaults)
//! arcrs archive -f out.tar.zst
//!
//! # Archive ./src as gzipped tar, excluding editor backups
//! arcrs archive src -f src.tar.gz -c gz -x '~$'
//!
//! # Zip only the text files
//! arcrs archive notes -f notes.zip -t zip -i '\.txt$'
//! ```
//!
use crate::common::archive::create::create_archive;
use crate::common::archive::format::{Archival, Compression};
use crate::common::filter::NameFilter;
use crate::core::config;
use crate::core::error::{ArcrsError, Result};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Archive Command Arguments (`ArchiveArgs`)
///
/// Defines the command-line arguments accepted by the `arcrs archive`
/// subcommand. Format flags are optional; omitted ones fall back to the
/// configured defaults (`zst` + `tar` out of the box).
#[derive(Parser, Debug)]
pub struct ArchiveArgs {
    /// Source directory to archive. Archiving `.` places entries at the
    /// archive root; a named directory nests entries under its name.
    #[arg(default_value = ".")]
    pub source: PathBuf,

    /// Output archive file (replaced if it already exists).
    #[arg(short = 'f', long = "file")]
    pub output: PathBuf,

    /// Compression format: gz, bz2, xz, zst, lz4, br. Ignored for zip.
    #[arg(short = 'c', long)]
    pub compression: Option<String>,

    /// Archival format: tar, zip.
    #[arg(short = 't', long)]
    pub archival: Option<String>,

    /// Exclude entries whose file name matches this regex (repeatable).
    #[arg(short = 'x', long = "exclude", conflicts_with = "include")]
    pub exclude: Vec<String>,

    /// Keep only entries whose file name matches one of these regexes
    /// (repeatable).
    #[arg(short = 'i', long = "include")]
    pub include: Vec<String>,
}

/// # Handle Archive Command (`handle_archive`)
///
/// Resolves formats and filters, then runs the archive orchestrator.
///
/// ## Arguments
///
/// * `args`: The parsed `ArchiveArgs`.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` after the archive is written; any resolution or
///   orchestration error otherwise. Unknown format keys are rejected here,
///   before the orchestrator runs.
pub async fn handle_archive(args: ArchiveArgs) -> Result<()> {
    info!("Handling archive command...");

    let cfg = config::load_config().context("Failed to load ArcRS configuration")?;

    let compression_key = args.compression.unwrap_or(cfg.defaults.compression);
    let compression = Compression::from_key(&compression_key).ok_or_else(|| {
        anyhow!(ArcrsError::ArgumentParsing(format!(
            "Unsupported compression format: {compression_key}"
        )))
    })?;

    let archival_key = args.archival.unwrap_or(cfg.defaults.archival);
    let archival = Archival::from_key(&archival_key).ok_or_else(|| {
        anyhow!(ArcrsError::ArgumentParsing(format!(
            "Unsupported archival format: {archival_key}"
        )))
    })?;

    let filter = build_filter(&args.include, &args.exclude, &cfg.defaults.exclude)?;

    create_archive(
        &args.source,
        &args.output,
        compression,
        archival,
        filter.as_ref(),
    )
    .with_context(|| format!("Failed to archive '{}'", args.source.display()))?;

    println!("Archive created: {}", args.output.display());
    Ok(())
}

/// Builds the effective name filter for this invocation.
///
/// Include patterns take precedence (clap already rejects mixing `-i` and
/// `-x`); explicit exclude flags override the configured exclude list rather
/// than appending to it.
fn build_filter(
    include: &[String],
    exclude: &[String],
    config_exclude: &[String],
) -> Result<Option<NameFilter>> {
    if !include.is_empty() {
        return Ok(Some(NameFilter::include(include)?));
    }
    let patterns = if !exclude.is_empty() {
        exclude
    } else {
        config_exclude
    };
    if patterns.is_empty() {
        Ok(None)
    } else {
        Ok(Some(NameFilter::exclude(patterns)?))
    }
}
