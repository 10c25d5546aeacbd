//! # ArcRS Format Registry (`common::archive::format`)
//!
//! File: cli/src/common/archive/format.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module is the single place where the short format keys accepted on the
//! command line (`gz`, `bz2`, `xz`, `zst`, `lz4`, `br` for compression and
//! `tar`, `zip` for archival) are mapped to concrete codec and container
//! implementations. Everything else in the codebase works in terms of the
//! `Compression` and `Archival` enums defined here and never names a codec
//! crate directly.
//!
//! ## Architecture
//!
//! Three pieces make up the registry:
//!
//! - **`Compression` / `Archival`**: `Copy` enums covering the fixed key sets.
//!   `from_key` performs the lookup; unknown keys return `None` so the caller
//!   can reject them *before* any orchestrator runs.
//! - **Codec seam**: `Compression::writer` wraps an output stream in the
//!   format's encoder and returns it behind the `FinishWrite` trait, which
//!   extends `Write` with an explicit `finish()`, since several codecs (zstd, lz4,
//!   xz) do not finalize their stream on drop, so every success path must call
//!   `finish()`. `Compression::reader` is the matching decompression side.
//! - **Identification**: `identify_archive` sniffs the leading magic bytes of
//!   an archive file and falls back to the file extension for formats without
//!   a signature (brotli, plain tar).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::format::Compression;
//!
//! let compression = Compression::from_key("zst")
//!     .ok_or_else(|| anyhow::anyhow!("unknown key"))?;
//! let mut sink = Vec::new();
//! let mut writer = compression.writer(Box::new(&mut sink))?;
//! writer.write_all(b"payload")?;
//! writer.finish()?;
//! ```
//!
use crate::core::error::{ArcrsError, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

/// Buffer size handed to the brotli encoder/decoder.
const BROTLI_BUFFER_SIZE: usize = 4096;
/// Brotli quality (0-11) and window size used for compression.
const BROTLI_QUALITY: u32 = 6;
const BROTLI_LG_WINDOW: u32 = 22;
/// XZ preset level (0-9).
const XZ_PRESET: u32 = 6;

/// A compression writer that must be explicitly finalized.
///
/// Dropping an encoder mid-stream leaves some formats (zstd, lz4, xz) without
/// their terminating frame, producing output the matching reader rejects.
/// `finish()` consumes the writer and flushes that terminator.
pub trait FinishWrite: Write {
    /// Finalizes the compressed stream and releases the underlying writer.
    fn finish(self: Box<Self>) -> io::Result<()>;
}

impl<W: Write> FinishWrite for flate2::write::GzEncoder<W> {
    fn finish(self: Box<Self>) -> io::Result<()> {
        (*self).finish().map(drop)
    }
}

impl<W: Write> FinishWrite for bzip2::write::BzEncoder<W> {
    fn finish(self: Box<Self>) -> io::Result<()> {
        (*self).finish().map(drop)
    }
}

impl<W: Write> FinishWrite for xz2::write::XzEncoder<W> {
    fn finish(self: Box<Self>) -> io::Result<()> {
        (*self).finish().map(drop)
    }
}

impl<W: Write> FinishWrite for zstd::stream::write::Encoder<'static, W> {
    fn finish(self: Box<Self>) -> io::Result<()> {
        (*self).finish().map(drop)
    }
}

impl<W: Write> FinishWrite for lz4_flex::frame::FrameEncoder<W> {
    fn finish(self: Box<Self>) -> io::Result<()> {
        (*self)
            .finish()
            .map(drop)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

impl<W: Write> FinishWrite for brotli::CompressorWriter<W> {
    fn finish(self: Box<Self>) -> io::Result<()> {
        // The brotli writer emits its terminal meta-block when dropped.
        drop(self);
        Ok(())
    }
}

/// # Compression Formats (`Compression`)
///
/// The byte-level codecs the tool supports, one variant per registry key.
/// The set is fixed at compile time and resolved from user input through
/// `from_key` before any operation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gz,
    Bz2,
    Xz,
    Zst,
    Lz4,
    Br,
}

impl Compression {
    /// Every supported compression format, in registry-key order.
    pub const ALL: [Compression; 6] = [
        Compression::Gz,
        Compression::Bz2,
        Compression::Xz,
        Compression::Zst,
        Compression::Lz4,
        Compression::Br,
    ];

    /// Resolves a registry key (case-insensitive) to a format handle.
    ///
    /// Returns `None` for unknown keys; callers reject those at the CLI or
    /// configuration boundary before invoking the orchestrators.
    pub fn from_key(key: &str) -> Option<Compression> {
        match key.to_ascii_lowercase().as_str() {
            "gz" => Some(Compression::Gz),
            "bz2" => Some(Compression::Bz2),
            "xz" => Some(Compression::Xz),
            "zst" => Some(Compression::Zst),
            "lz4" => Some(Compression::Lz4),
            "br" => Some(Compression::Br),
            _ => None,
        }
    }

    /// The registry key for this format (also its file extension).
    pub fn key(&self) -> &'static str {
        match self {
            Compression::Gz => "gz",
            Compression::Bz2 => "bz2",
            Compression::Xz => "xz",
            Compression::Zst => "zst",
            Compression::Lz4 => "lz4",
            Compression::Br => "br",
        }
    }

    /// # Open Compression Writer (`writer`)
    ///
    /// Wraps `out` in this format's streaming encoder. The returned writer
    /// buffers/encodes everything written to it; callers must call
    /// `finish()` on success so the stream terminator reaches `out`.
    ///
    /// ## Errors
    ///
    /// Returns an `io::Error` if the encoder cannot be constructed (only the
    /// zstd encoder can fail at this point).
    pub fn writer<'a>(&self, out: Box<dyn Write + 'a>) -> io::Result<Box<dyn FinishWrite + 'a>> {
        Ok(match self {
            Compression::Gz => Box::new(flate2::write::GzEncoder::new(
                out,
                flate2::Compression::default(),
            )),
            Compression::Bz2 => Box::new(bzip2::write::BzEncoder::new(
                out,
                bzip2::Compression::default(),
            )),
            Compression::Xz => Box::new(xz2::write::XzEncoder::new(out, XZ_PRESET)),
            Compression::Zst => Box::new(zstd::stream::write::Encoder::new(
                out,
                zstd::DEFAULT_COMPRESSION_LEVEL,
            )?),
            Compression::Lz4 => Box::new(lz4_flex::frame::FrameEncoder::new(out)),
            Compression::Br => Box::new(brotli::CompressorWriter::new(
                out,
                BROTLI_BUFFER_SIZE,
                BROTLI_QUALITY,
                BROTLI_LG_WINDOW,
            )),
        })
    }

    /// # Open Decompression Reader (`reader`)
    ///
    /// Wraps `input` in this format's streaming decoder. Corrupt or truncated
    /// input surfaces as read errors from the returned reader.
    ///
    /// ## Errors
    ///
    /// Returns an `io::Error` if the decoder cannot be constructed (only the
    /// zstd decoder can fail at this point).
    pub fn reader<'a>(&self, input: Box<dyn Read + 'a>) -> io::Result<Box<dyn Read + 'a>> {
        Ok(match self {
            Compression::Gz => Box::new(flate2::read::GzDecoder::new(input)),
            Compression::Bz2 => Box::new(bzip2::read::BzDecoder::new(input)),
            Compression::Xz => Box::new(xz2::read::XzDecoder::new(input)),
            Compression::Zst => Box::new(zstd::stream::read::Decoder::new(input)?),
            Compression::Lz4 => Box::new(lz4_flex::frame::FrameDecoder::new(input)),
            Compression::Br => Box::new(brotli::Decompressor::new(input, BROTLI_BUFFER_SIZE)),
        })
    }
}

/// # Archival Formats (`Archival`)
///
/// The container layouts the tool supports. TAR combines with any
/// `Compression`; ZIP carries its own internal Deflate and skips the outer
/// compression layer entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archival {
    Tar,
    Zip,
}

impl Archival {
    /// Every supported archival format, in registry-key order.
    pub const ALL: [Archival; 2] = [Archival::Tar, Archival::Zip];

    /// Resolves a registry key (case-insensitive) to a format handle.
    pub fn from_key(key: &str) -> Option<Archival> {
        match key.to_ascii_lowercase().as_str() {
            "tar" => Some(Archival::Tar),
            "zip" => Some(Archival::Zip),
            _ => None,
        }
    }

    /// The registry key for this format.
    pub fn key(&self) -> &'static str {
        match self {
            Archival::Tar => "tar",
            Archival::Zip => "zip",
        }
    }
}

/// The identified on-disk layout of an existing archive file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// A ZIP container (compression is internal to the container).
    Zip,
    /// A TAR container, optionally wrapped in one of the stream codecs.
    Tar(Option<Compression>),
}

/// # Identify Archive Format (`identify_archive`)
///
/// Determines how to read an existing archive file. Magic bytes are checked
/// first (most reliable); formats without a usable signature (brotli streams
/// and plain uncompressed tar) fall back to the file extension.
///
/// ## Arguments
///
/// * `path` - The archive file to identify. Must exist and be readable.
///
/// ## Returns
///
/// * `Result<ArchiveKind>` - The container layout and, for compressed tars,
///   the codec to decompress with.
///
/// ## Errors
///
/// Returns an `Err` if the file cannot be opened/read (`ArcrsError::Io`) or
/// if neither the magic bytes nor the extension identify a supported format
/// (`ArcrsError::Archival`).
pub fn identify_archive(path: &Path) -> Result<ArchiveKind> {
    let file = File::open(path).map_err(|e| {
        ArcrsError::Io(format!(
            "Failed to open archive '{}' for identification: {}",
            path.display(),
            e
        ))
    })?;

    // Read at most 8 bytes; shorter files simply match fewer patterns.
    let mut magic = Vec::with_capacity(8);
    file.take(8).read_to_end(&mut magic).map_err(|e| {
        ArcrsError::Io(format!(
            "Failed to read magic bytes from '{}': {}",
            path.display(),
            e
        ))
    })?;

    if let Some(kind) = identify_by_magic(&magic) {
        debug!("Identified archive '{}' by magic bytes: {:?}", path.display(), kind);
        return Ok(kind);
    }

    identify_by_extension(path)
}

/// Matches the leading bytes of the file against known codec signatures.
fn identify_by_magic(magic: &[u8]) -> Option<ArchiveKind> {
    match magic {
        // ZIP: PK\x03\x04 (local header), PK\x05\x06 (empty), PK\x07\x08 (spanned)
        [0x50, 0x4B, 0x03, 0x04, ..]
        | [0x50, 0x4B, 0x05, 0x06, ..]
        | [0x50, 0x4B, 0x07, 0x08, ..] => Some(ArchiveKind::Zip),

        // Gzip: \x1F\x8B
        [0x1F, 0x8B, ..] => Some(ArchiveKind::Tar(Some(Compression::Gz))),

        // Bzip2: "BZh"
        [0x42, 0x5A, 0x68, ..] => Some(ArchiveKind::Tar(Some(Compression::Bz2))),

        // XZ: \xFD"7zXZ"\x00
        [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, ..] => Some(ArchiveKind::Tar(Some(Compression::Xz))),

        // Zstandard frame
        [0x28, 0xB5, 0x2F, 0xFD, ..] => Some(ArchiveKind::Tar(Some(Compression::Zst))),

        // LZ4 frame
        [0x04, 0x22, 0x4D, 0x18, ..] => Some(ArchiveKind::Tar(Some(Compression::Lz4))),

        _ => None,
    }
}

/// Extension fallback for formats without a signature (brotli has none; a
/// plain tar's "ustar" marker sits past the first block and is not sniffed).
fn identify_by_extension(path: &Path) -> Result<ArchiveKind> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "tar" => Ok(ArchiveKind::Tar(None)),
        "br" | "tbr" => Ok(ArchiveKind::Tar(Some(Compression::Br))),
        "zip" => Ok(ArchiveKind::Zip),
        _ => Err(ArcrsError::Archival(format!(
            "Could not identify archive format of '{}'",
            path.display()
        ))
        .into()),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_from_key_known() {
        assert_eq!(Compression::from_key("gz"), Some(Compression::Gz));
        assert_eq!(Compression::from_key("bz2"), Some(Compression::Bz2));
        assert_eq!(Compression::from_key("xz"), Some(Compression::Xz));
        assert_eq!(Compression::from_key("zst"), Some(Compression::Zst));
        assert_eq!(Compression::from_key("lz4"), Some(Compression::Lz4));
        assert_eq!(Compression::from_key("br"), Some(Compression::Br));
        // Lookup is case-insensitive, matching the CLI surface.
        assert_eq!(Compression::from_key("ZST"), Some(Compression::Zst));
    }

    #[test]
    fn test_compression_from_key_unknown() {
        assert_eq!(Compression::from_key("rar"), None);
        assert_eq!(Compression::from_key(""), None);
        assert_eq!(Compression::from_key("gzip "), None);
    }

    #[test]
    fn test_archival_from_key() {
        assert_eq!(Archival::from_key("tar"), Some(Archival::Tar));
        assert_eq!(Archival::from_key("zip"), Some(Archival::Zip));
        assert_eq!(Archival::from_key("7z"), None);
    }

    #[test]
    fn test_key_round_trips_through_from_key() {
        for compression in Compression::ALL {
            assert_eq!(Compression::from_key(compression.key()), Some(compression));
        }
        for archival in Archival::ALL {
            assert_eq!(Archival::from_key(archival.key()), Some(archival));
        }
    }

    #[test]
    fn test_identify_by_magic() {
        let zip_magic = [0x50, 0x4B, 0x03, 0x04, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(identify_by_magic(&zip_magic), Some(ArchiveKind::Zip));

        let gz_magic = [0x1F, 0x8B, 0x08, 0x00];
        assert_eq!(
            identify_by_magic(&gz_magic),
            Some(ArchiveKind::Tar(Some(Compression::Gz)))
        );

        let zst_magic = [0x28, 0xB5, 0x2F, 0xFD, 0x00];
        assert_eq!(
            identify_by_magic(&zst_magic),
            Some(ArchiveKind::Tar(Some(Compression::Zst)))
        );

        // Brotli output has no signature and must not match anything.
        assert_eq!(identify_by_magic(b"\x1b\x02\x00"), None);
        assert_eq!(identify_by_magic(b""), None);
    }

    #[test]
    fn test_identify_by_extension_fallback() {
        assert_eq!(
            identify_by_extension(Path::new("backup.tar")).unwrap(),
            ArchiveKind::Tar(None)
        );
        assert_eq!(
            identify_by_extension(Path::new("backup.tar.br")).unwrap(),
            ArchiveKind::Tar(Some(Compression::Br))
        );
        assert!(identify_by_extension(Path::new("backup.dat")).is_err());
    }

    #[test]
    fn test_writer_finish_produces_readable_stream() {
        // Each codec's writer output must be accepted by its own reader,
        // including the formats that require an explicit finish (zstd, lz4).
        for compression in Compression::ALL {
            let mut sink = Vec::new();
            {
                let mut writer = compression
                    .writer(Box::new(&mut sink))
                    .unwrap_or_else(|e| panic!("{} writer: {}", compression.key(), e));
                writer.write_all(b"format seam test payload").unwrap();
                writer.finish().unwrap();
            }
            assert!(!sink.is_empty(), "{} produced no output", compression.key());

            let mut reader = compression.reader(Box::new(sink.as_slice())).unwrap();
            let mut restored = Vec::new();
            reader.read_to_end(&mut restored).unwrap();
            assert_eq!(restored, b"format seam test payload");
        }
    }
}
