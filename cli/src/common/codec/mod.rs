//! # ArcRS Codec Operations (`common::codec`)
//!
//! File: cli/src/common/codec/mod.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module compresses and decompresses in-memory byte buffers through the
//! streaming codecs registered in `common::archive::format`. It contains no
//! codec logic of its own: it opens the format's writer/reader over an
//! in-memory sink, moves the bytes, and makes sure the stream is finalized
//! and released on every exit path.
//!
//! ## Architecture
//!
//! Both operations are pure with respect to their inputs: the same bytes and
//! format produce the same output bytes (determinism inherited from the
//! underlying codec). The writer returned by `Compression::writer` is scoped
//! to the call and explicitly finished before the accumulated buffer is
//! returned; failures at any stage surface as `ArcrsError::Codec` with the
//! format key and failing stage in the message.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive::format::Compression, codec};
//!
//! let compressed = codec::compress(b"payload", Compression::Zst)?;
//! let restored = codec::decompress(&compressed, Compression::Zst)?;
//! assert_eq!(restored, b"payload");
//! ```
//!
use crate::common::archive::format::Compression;
use crate::core::error::{ArcrsError, Result};
use std::io::{self, Write};
use tracing::debug;

/// # Compress Bytes (`compress`)
///
/// Compresses `data` with the chosen format and returns the accumulated
/// compressed bytes.
///
/// ## Arguments
///
/// * `data` - The raw bytes to compress.
/// * `compression` - The format handle resolved from the registry.
///
/// ## Returns
///
/// * `Result<Vec<u8>>` - The complete compressed stream, including the
///   format's terminator.
///
/// ## Errors
///
/// Returns `ArcrsError::Codec` if the encoder cannot be opened, the write
/// fails, or finalizing the stream fails.
pub fn compress(data: &[u8], compression: Compression) -> Result<Vec<u8>> {
    debug!("Compressing {} bytes as {}", data.len(), compression.key());

    let mut sink = Vec::new();
    let mut writer = compression.writer(Box::new(&mut sink)).map_err(|e| {
        ArcrsError::Codec(format!(
            "Failed to open {} compressor: {}",
            compression.key(),
            e
        ))
    })?;

    writer.write_all(data).map_err(|e| {
        ArcrsError::Codec(format!(
            "Write to {} compressor failed: {}",
            compression.key(),
            e
        ))
    })?;

    writer.finish().map_err(|e| {
        ArcrsError::Codec(format!(
            "Finalizing {} stream failed: {}",
            compression.key(),
            e
        ))
    })?;

    debug!(
        "Compressed to {} bytes as {}",
        sink.len(),
        compression.key()
    );
    Ok(sink)
}

/// # Decompress Bytes (`decompress`)
///
/// Decompresses `data` with the chosen format and returns the accumulated
/// decompressed bytes.
///
/// ## Arguments
///
/// * `data` - The compressed input, a complete stream for the format.
/// * `compression` - The format handle resolved from the registry.
///
/// ## Returns
///
/// * `Result<Vec<u8>>` - All bytes the decoder produced.
///
/// ## Errors
///
/// Returns `ArcrsError::Codec` if the decoder cannot be opened or the copy
/// fails, including truncated or corrupt input, as reported by the codec.
pub fn decompress(data: &[u8], compression: Compression) -> Result<Vec<u8>> {
    debug!(
        "Decompressing {} bytes as {}",
        data.len(),
        compression.key()
    );

    let mut reader = compression.reader(Box::new(data)).map_err(|e| {
        ArcrsError::Codec(format!(
            "Failed to open {} decompressor: {}",
            compression.key(),
            e
        ))
    })?;

    let mut sink = Vec::new();
    io::copy(&mut reader, &mut sink).map_err(|e| {
        ArcrsError::Codec(format!(
            "Read from {} decompressor failed: {}",
            compression.key(),
            e
        ))
    })?;

    debug!(
        "Decompressed to {} bytes as {}",
        sink.len(),
        compression.key()
    );
    Ok(sink)
}
