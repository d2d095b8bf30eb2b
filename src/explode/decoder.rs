use tracing::{debug, trace};

use super::bits::BitReader;
use super::tree::{LENGTHS, LITERALS, OFFSETS};
use super::window::SlidingWindow;
use super::Interrupt;
use crate::error::ExplodeError;

/// Copy length that marks the end of the compressed stream.
pub const END_OF_STREAM: u16 = 519;

/// How literals are stored in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralMode {
    /// Raw 8-bit values.
    Raw,
    /// Prefix-coded with the fixed literal table.
    Coded,
}

impl LiteralMode {
    pub fn from_u8(value: u8) -> Result<Self, ExplodeError> {
        match value {
            0 => Ok(LiteralMode::Raw),
            1 => Ok(LiteralMode::Coded),
            other => Err(ExplodeError::InvalidLiteralMode(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingHeader,
    Decoding {
        literals: LiteralMode,
        dict_bits: u8,
    },
    Finished,
}

enum Step {
    Continue,
    End,
}

/// Push-based decoder for PKWARE "imploded" data.
///
/// Compressed bytes go in through [`feed`](Self::feed) in chunks of any
/// size; each call returns the output that became available. An
/// instruction cut off by the end of a chunk is retried from scratch on
/// the next feed.
///
/// ```
/// use runshield::explode::ExplodeDecoder;
///
/// let mut decoder = ExplodeDecoder::new();
/// let out = decoder.feed(&[0x00, 0x04, 0x82, 0x24, 0x25, 0x8F, 0x80, 0x7F]).unwrap();
/// assert!(decoder.is_finished());
/// assert_eq!(out, b"AIAIAIAIAIAIA");
/// ```
#[derive(Debug)]
pub struct ExplodeDecoder {
    state: State,
    bits: BitReader,
    window: SlidingWindow,
}

impl Default for ExplodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplodeDecoder {
    pub fn new() -> Self {
        Self {
            state: State::AwaitingHeader,
            bits: BitReader::new(),
            window: SlidingWindow::new(),
        }
    }

    /// True once the end-of-stream marker has been decoded.
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Size of the history window, or zero before the header is read.
    pub fn dictionary_size(&self) -> usize {
        match self.state {
            State::Decoding { dict_bits, .. } => 1 << (6 + dict_bits),
            _ => 0,
        }
    }

    /// Feed the next chunk of compressed data and collect new output.
    pub fn feed(&mut self, data: &[u8]) -> Result<Vec<u8>, ExplodeError> {
        if self.is_finished() {
            return Err(ExplodeError::AlreadyFinished);
        }
        trace!(len = data.len(), "explode feed");
        self.bits.push(data);

        let mut ended = false;
        loop {
            let checkpoint = self.bits.checkpoint();
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::End) => {
                    ended = true;
                    break;
                }
                Err(Interrupt::NeedMoreData) => {
                    self.bits.restore(checkpoint);
                    break;
                }
                Err(Interrupt::Fatal(e)) => return Err(e),
            }
        }
        self.bits.purge();

        if ended {
            if !self.bits.is_drained() {
                return Err(ExplodeError::TrailingData {
                    bits: self.bits.available(),
                });
            }
            self.state = State::Finished;
            debug!("explode stream finished");
            return Ok(self.window.drain(0));
        }
        Ok(self.window.drain(self.dictionary_size()))
    }

    /// Check that the stream reached its end marker.
    ///
    /// A stream that stopped short would otherwise look like one still
    /// waiting for input.
    pub fn finish(&self) -> Result<(), ExplodeError> {
        if self.is_finished() {
            Ok(())
        } else {
            Err(ExplodeError::Truncated)
        }
    }

    /// Decode the header or one literal/copy instruction.
    fn step(&mut self) -> Result<Step, Interrupt> {
        let (literals, dict_bits) = match self.state {
            State::AwaitingHeader => {
                self.read_header()?;
                return Ok(Step::Continue);
            }
            State::Decoding {
                literals,
                dict_bits,
            } => (literals, dict_bits),
            State::Finished => return Ok(Step::End),
        };

        if !self.bits.read_bit()? {
            let byte = match literals {
                LiteralMode::Coded => LITERALS.read_symbol(&mut self.bits)? as u8,
                LiteralMode::Raw => self.bits.read_uint(8)? as u8,
            };
            self.window.push(&[byte]);
            return Ok(Step::Continue);
        }

        let length = LENGTHS.read_symbol(&mut self.bits)?;
        if length == END_OF_STREAM {
            return Ok(Step::End);
        }

        let high = OFFSETS.read_symbol(&mut self.bits)? as u32;
        let extra_bits = if length == 2 { 2 } else { dict_bits as u32 };
        let low = self.bits.read_uint(extra_bits)?;
        let dist = (high << extra_bits) + low;

        self.window.copy(dist as usize, length as usize)?;
        Ok(Step::Continue)
    }

    fn read_header(&mut self) -> Result<(), Interrupt> {
        let mode = self.bits.read_uint(8)? as u8;
        let dict_bits = self.bits.read_uint(8)? as u8;

        let literals = LiteralMode::from_u8(mode)?;
        if !(4..=6).contains(&dict_bits) {
            return Err(ExplodeError::InvalidDictionarySize(dict_bits).into());
        }
        debug!(?literals, dictionary = 1usize << (6 + dict_bits), "explode header");
        self.state = State::Decoding {
            literals,
            dict_bits,
        };
        Ok(())
    }
}
