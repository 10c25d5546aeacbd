//! # ArcRS Compress Command
//!
//! File: cli/src/commands/compress.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module implements the `arcrs compress` command, which compresses a
//! single file with one of the registered codecs. The input is read fully
//! into memory, run through the codec orchestrator, and the compressed bytes
//! are written to the output path.
//!
//! ## Examples
//!
//! ```bash
//! # Compress with the configured default codec (zst out of the box)
//! arcrs compress notes.txt -o notes.txt.zst
//!
//! # Pick a codec explicitly
//! arcrs compress logs.json -o logs.json.br -t br
//! ```
//!
use crate::common::archive::format::Compression;
use crate::common::codec;
use crate::core::config;
use crate::core::error::{ArcrsError, Result};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// # Compress Command Arguments (`CompressArgs`)
///
/// Defines the command-line arguments accepted by the `arcrs compress`
/// subcommand.
#[derive(Parser, Debug)]
pub struct CompressArgs {
    /// File to compress.
    pub input: PathBuf,

    /// Output file for the compressed bytes.
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Compression format: gz, bz2, xz, zst, lz4, br.
    #[arg(short = 't', long)]
    pub compression: Option<String>,
}

/// # Handle Compress Command (`handle_compress`)
///
/// Resolves the codec, reads the input, compresses, and writes the output.
/// Unknown format keys are rejected before any file is touched.
pub async fn handle_compress(args: CompressArgs) -> Result<()> {
    info!("Handling compress command...");

    let cfg = config::load_config().context("Failed to load ArcRS configuration")?;
    let compression_key = args.compression.unwrap_or(cfg.defaults.compression);
    let compression = Compression::from_key(&compression_key).ok_or_else(|| {
        anyhow!(ArcrsError::ArgumentParsing(format!(
            "Unsupported compression format: {compression_key}"
        )))
    })?;

    let data = fs::read(&args.input)
        .with_context(|| format!("Failed to read input file '{}'", args.input.display()))?;

    let compressed = codec::compress(&data, compression)?;

    fs::write(&args.output, &compressed)
        .with_context(|| format!("Failed to write output file '{}'", args.output.display()))?;

    println!(
        "Compressed '{}' to '{}' ({} -> {} bytes)",
        args.input.display(),
        args.output.display(),
        data.len(),
        compressed.len()
    );
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_invocation() {
        let args =
            CompressArgs::try_parse_from(["compress", "notes.txt", "-o", "notes.txt.zst"])
                .unwrap();
        assert_eq!(args.input, PathBuf::from("notes.txt"));
        assert_eq!(args.output, PathBuf::from("notes.txt.zst"));
        assert!(args.compression.is_none());
    }

    #[test]
    fn test_parses_explicit_codec() {
        let args = CompressArgs::try_parse_from([
            "compress", "a.json", "-o", "a.json.br", "-t", "br",
        ])
        .unwrap();
        assert_eq!(args.compression.as_deref(), Some("br"));
    }

    #[test]
    fn test_missing_output_fails_parsing() {
        assert!(CompressArgs::try_parse_from(["compress", "notes.txt"]).is_err());
    }
}
