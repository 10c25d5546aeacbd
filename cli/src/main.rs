//! # ArcRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ArcRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each command (`archive`, `extract`, `compress`, `decompress`) is a
//!   variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic ArcRS usage:
//!
//! ```bash
//! # Get help
//! arcrs --help
//!
//! # Archive a directory with debug logging enabled
//! arcrs -vv archive src -f src.tar.zst
//!
//! # Extract it again
//! arcrs x src.tar.zst restored/
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (RUST_LOG overrides)
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (archive, extract, etc.)
mod common; // Contains shared utilities (archive, codec, filter, fs)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "arcrs",
    about = "📦 ArcRS: archive and compress from one CLI",
    long_about = "Create/extract archives (tar, zip) and compress/decompress single files\n\
                  (gz, bz2, xz, zst, lz4, br), with optional include/exclude name filters.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Archive(commands::archive::ArchiveArgs),
    #[command(alias = "x")]
    Extract(commands::extract::ExtractArgs),
    #[command(alias = "c")]
    Compress(commands::compress::CompressArgs),
    #[command(alias = "d")]
    Decompress(commands::decompress::DecompressArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Archive(args) => commands::archive::handle_archive(args).await,
        Commands::Extract(args) => commands::extract::handle_extract(args).await,
        Commands::Compress(args) => commands::compress::handle_compress(args).await,
        Commands::Decompress(args) => commands::decompress::handle_decompress(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn arcrs_cmd() -> Command {
        Command::cargo_bin("arcrs").expect("Failed to find arcrs binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        arcrs_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        arcrs_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
