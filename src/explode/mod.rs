//! PKWARE Data Compression Library ("imploding") decoder.
//!
//! InstallShield 3.0 compresses each file of a `.Z` archive with the
//! PKWARE DCL. A stream starts with two header bytes (literal mode and
//! dictionary size) followed by an LSB-first bitstream of instructions:
//!
//! - `0` + literal: a raw 8-bit value, or a prefix-coded byte when the
//!   literal mode is 1
//! - `1` + length + distance: copy `length` bytes from `distance + 1`
//!   bytes back; a length of 519 ends the stream
//!
//! The pieces are layered bottom-up:
//!
//! - [`bits`]: the incremental bit cursor with checkpoints
//! - [`tree`]: prefix-code tries built from [`tables`]
//! - [`window`]: the output buffer that resolves back-references
//! - [`decoder`]: the push-based state machine tying them together

pub mod bits;
mod decoder;
pub mod tables;
pub mod tree;
pub mod window;

pub use bits::{BitReader, Checkpoint, NeedMoreData};
pub use decoder::{END_OF_STREAM, ExplodeDecoder, LiteralMode};
pub use tree::PrefixCodeTable;
pub use window::SlidingWindow;

use crate::error::ExplodeError;

/// Why a decode step stopped early.
#[derive(Debug)]
pub enum Interrupt {
    /// Input ran out; rewind and wait for the next chunk.
    NeedMoreData,
    /// The stream is corrupt.
    Fatal(ExplodeError),
}

impl From<NeedMoreData> for Interrupt {
    fn from(_: NeedMoreData) -> Self {
        Interrupt::NeedMoreData
    }
}

impl From<ExplodeError> for Interrupt {
    fn from(e: ExplodeError) -> Self {
        Interrupt::Fatal(e)
    }
}
