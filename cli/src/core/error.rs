//! # ArcRS Error Types
//!
//! File: cli/src/core/error.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the ArcRS application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ArcrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the operation taxonomy of the tool:
//! - Filter pattern compilation errors
//! - Missing source paths
//! - Plain filesystem errors (create/remove)
//! - Directory traversal errors
//! - Archive container/codec streaming errors
//! - In-memory codec errors
//! - Configuration and argument parsing errors
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !source.exists() {
//!     return Err(ArcrsError::NotFound(source.display().to_string()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let data = fs::read(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
//! Every error produced below the CLI boundary is returned to the immediate
//! caller; there is no local recovery or retry anywhere in this layer. The
//! CLI boundary decides whether to log-and-exit or propagate further.
//!
use thiserror::Error;

/// Custom error type for the ArcRS application.
#[derive(Error, Debug)]
pub enum ArcrsError {
    #[error("Invalid filter pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Path '{0}' not found")]
    NotFound(String),

    #[error("Filesystem error: {0}")]
    Io(String),

    #[error("Directory traversal failed: {0}")]
    Enumeration(String),

    #[error("Archive streaming failed: {0}")]
    Archival(String),

    #[error("Codec error: {0}")]
    Codec(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let not_found = ArcrsError::NotFound("missing-dir".to_string());
        assert_eq!(not_found.to_string(), "Path 'missing-dir' not found");

        let codec_err = ArcrsError::Codec("truncated zstd frame".to_string());
        assert_eq!(codec_err.to_string(), "Codec error: truncated zstd frame");

        let arg_err = ArcrsError::ArgumentParsing("Unsupported compression format: foo".into());
        assert_eq!(
            arg_err.to_string(),
            "Argument parsing error: Unsupported compression format: foo"
        );
    }

    #[test]
    fn test_pattern_error_carries_offending_pattern() {
        let bad = regex::Regex::new("[unclosed").unwrap_err();
        let err = ArcrsError::Pattern {
            pattern: "[unclosed".to_string(),
            source: bad,
        };
        assert!(err.to_string().contains("'[unclosed'"));
        // The regex error stays reachable through the source chain.
        assert!(std::error::Error::source(&err).is_some());
    }
}
