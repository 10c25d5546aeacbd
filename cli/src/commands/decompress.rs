//! # ArcRS Decompress Command
//!
//! File: cli/src/commands/decompress.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module implements the `arcrs decompress` command, the inverse of
//! `arcrs compress`: the compressed input file is read fully into memory,
//! run through the codec orchestrator, and the restored bytes are written to
//! the output path. Truncated or corrupt input fails with a codec error from
//! the underlying decoder.
//!
//! ## Examples
//!
//! ```bash
//! arcrs decompress notes.txt.zst -o notes.txt
//! arcrs decompress logs.json.br -o logs.json -t br
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

/// # Decompress Command Arguments (`DecompressArgs`)
///
/// Defines the command-line arguments accepted by the `arcrs decompress`
/// subcommand.
#[derive(Parser, Debug)]
pub struct DecompressArgs {
    /// Compressed file to decompress.
    pub input: PathBuf,

    /// Output file for the restored bytes.
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Compression format: gz, bz2, xz, zst, lz4, br.
    #[arg(short = 't', long)]
    pub compression: Option<String>,
}

/// # Handle Decompress Command (`handle_decompress`)
///
/// Resolves the codec, reads the input, decompresses, and writes the output.
/// Unknown format keys are rejected before any file is touched.
pub async fn handle_decompress(args: DecompressArgs) -> Result<()> {
    info!("Handling decompress command...");

    let cfg = config::load_config().context("Failed to load ArcRS configuration")?;
    let compression_key = args.compression.unwrap_or(cfg.defaults.compression);
    let compression = Compression::from_key(&compression_key).ok_or_else(|| {
        anyhow!(ArcrsError::ArgumentParsing(format!(
            "Unsupported compression format: {compression_key}"
        )))
    })?;

    let data = fs::read(&args.input)
        .with_context(|| format!("Failed to read input file '{}'", args.input.display()))?;

    let decompressed = codec::decompress(&data, compression)?;

    fs::write(&args.output, &decompressed)
        .with_context(|| format!("Failed to write output file '{}'", args.output.display()))?;

    println!(
        "Decompressed '{}' to '{}' ({} -> {} bytes)",
        args.input.display(),
        args.output.display(),
        data.len(),
        decompressed.len()
    );
    Ok(())
}
