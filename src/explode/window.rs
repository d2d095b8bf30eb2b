//! Output accumulator with LZ77-style back-references.

use crate::error::ExplodeError;

/// Decoded bytes not yet handed out, doubling as the copy history.
#[derive(Debug, Default)]
pub struct SlidingWindow {
    buffer: Vec<u8>,
}

impl SlidingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append literal bytes.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Append `size` bytes starting `dist + 1` bytes back from the end.
    ///
    /// The source may overlap the bytes being appended, so a short
    /// distance repeats the tail of the buffer.
    pub fn copy(&mut self, dist: usize, size: usize) -> Result<(), ExplodeError> {
        let available = self.buffer.len();
        let start = available
            .checked_sub(dist + 1)
            .ok_or(ExplodeError::DistanceTooFar { dist, available })?;

        self.buffer.reserve(size);
        let mut remaining = size;
        while remaining > 0 {
            // Only bytes that already exist can be copied in one pass.
            let end = (start + remaining).min(self.buffer.len());
            self.buffer.extend_from_within(start..end);
            remaining -= end - start;
        }
        Ok(())
    }

    /// Hand out everything except the last `keep` bytes, which stay as history.
    pub fn drain(&mut self, keep: usize) -> Vec<u8> {
        let split = self.buffer.len().saturating_sub(keep);
        let retained = self.buffer.split_off(split);
        std::mem::replace(&mut self.buffer, retained)
    }
}
