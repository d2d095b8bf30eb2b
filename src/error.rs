//! Error types for archive parsing, decompression and extraction.
//!
//! Everything in the library returns [`Result<T>`]. Format errors name
//! the field or entry that failed so a corrupt archive can be diagnosed
//! from the message alone. The binary wraps these in `anyhow` for
//! reporting.

use thiserror::Error;

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the imploded-stream decoder.
#[derive(Debug, Error)]
pub enum ExplodeError {
    #[error("invalid literal mode {0} (expected 0 or 1)")]
    InvalidLiteralMode(u8),

    #[error("invalid dictionary size exponent {0} (expected 4, 5 or 6)")]
    InvalidDictionarySize(u8),

    #[error("no {table} code matches the input; data is probably not imploded")]
    UnknownCode { table: &'static str },

    #[error("copy distance {dist} reaches past the {available} bytes of history")]
    DistanceTooFar { dist: usize, available: usize },

    #[error("{bits} unexpected bits after the end-of-stream marker")]
    TrailingData { bits: usize },

    #[error("compressed stream ended before the end-of-stream marker")]
    Truncated,

    #[error("data fed to a decoder that already finished")]
    AlreadyFinished,
}

/// Errors from reading InstallShield archives.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid magic: {0:08x}")]
    InvalidMagic(u32),

    #[error("invalid header size: {0:#04x} != 0x3a")]
    InvalidHeaderSize(u8),

    #[error("unexpected end of file reading {what} at offset {offset}")]
    ShortRead { what: &'static str, offset: u64 },

    #[error("{table} table: {reason}")]
    CorruptTable { table: &'static str, reason: String },

    #[error("{table} table size mismatch: entries cover {consumed} bytes, header declares {declared}")]
    TableSizeMismatch {
        table: &'static str,
        consumed: u64,
        declared: u64,
    },

    #[error("{table} entry {index} declares size {declared}, expected {expected}")]
    EntrySizeMismatch {
        table: &'static str,
        index: usize,
        declared: u64,
        expected: u64,
    },

    #[error("{table} entry {index}: name is not NUL-terminated")]
    UnterminatedName { table: &'static str, index: usize },

    #[error("file entry {index} refers to directory {dir_id}, but only {count} exist")]
    DirectoryOutOfRange {
        index: usize,
        dir_id: u16,
        count: usize,
    },

    #[error("part {part_id} not found at {}", path.display())]
    MissingPart {
        part_id: u8,
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("{path}: refusing to extract outside the destination directory")]
    UnsafePath { path: String },

    #[error("{path}: entry is not valid for extraction from part {part_id}, open part 1 first")]
    NotExtractable { path: String, part_id: u8 },

    #[error("{path}: part {part_id} data range is invalid ({reason})")]
    InvalidDataRange {
        path: String,
        part_id: u8,
        reason: String,
    },

    #[error("{path}: read {actual} compacted bytes, expected {expected}")]
    CompactedSizeMismatch {
        path: String,
        actual: u64,
        expected: u64,
    },

    #[error("{path}: wrote {actual} bytes, expected {expected}")]
    OriginalSizeMismatch {
        path: String,
        actual: u64,
        expected: u64,
    },

    #[error("{path}: {source}")]
    Explode {
        path: String,
        #[source]
        source: ExplodeError,
    },
}
