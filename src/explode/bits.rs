//! Incremental LSB-first bit cursor.

/// Signal that the bit buffer ran dry before a read could complete.
///
/// This is not an error: the decoder rolls back to its last checkpoint
/// and waits for the next chunk of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeedMoreData;

/// Saved cursor position, see [`BitReader::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    generation: u64,
    position: usize,
}

/// Bit reader over an appendable byte buffer.
///
/// Bytes are consumed least-significant bit first, and multi-bit fields
/// are assembled with the first bit read as the least significant one.
#[derive(Debug, Default)]
pub struct BitReader {
    buffer: Vec<u8>,
    /// Cursor in bits from the start of `buffer`.
    position: usize,
    /// Bumped on every purge so stale checkpoints can be detected.
    generation: u64,
}

impl BitReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the end of the stream.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Number of unconsumed bits.
    pub fn available(&self) -> usize {
        self.buffer.len() * 8 - self.position
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool, NeedMoreData> {
        if self.available() == 0 {
            return Err(NeedMoreData);
        }
        let bit = self.bit_at(self.position);
        self.position += 1;
        Ok(bit)
    }

    /// Read `count` bits in stream order.
    ///
    /// The cursor does not move when fewer than `count` bits remain.
    pub fn read(&mut self, count: usize) -> Result<Vec<bool>, NeedMoreData> {
        if count > self.available() {
            return Err(NeedMoreData);
        }
        let bits = (self.position..self.position + count)
            .map(|i| self.bit_at(i))
            .collect();
        self.position += count;
        Ok(bits)
    }

    /// Read `count` bits (at most 32) as an unsigned integer, first bit lowest.
    pub fn read_uint(&mut self, count: u32) -> Result<u32, NeedMoreData> {
        debug_assert!(count <= 32);
        if count as usize > self.available() {
            return Err(NeedMoreData);
        }
        let mut value = 0u32;
        for shift in 0..count {
            if self.bit_at(self.position) {
                value |= 1 << shift;
            }
            self.position += 1;
        }
        Ok(value)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            generation: self.generation,
            position: self.position,
        }
    }

    /// Undo every read made since `checkpoint` was taken.
    ///
    /// # Panics
    ///
    /// Panics if [`purge`](Self::purge) ran after the checkpoint.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        assert_eq!(
            checkpoint.generation, self.generation,
            "bit reader purged between checkpoint and restore"
        );
        self.position = checkpoint.position;
    }

    /// Drop fully consumed bytes from the front of the buffer.
    pub fn purge(&mut self) {
        let consumed = self.position / 8;
        self.buffer.drain(..consumed);
        self.position %= 8;
        self.generation += 1;
    }

    /// True when only zero padding (fewer than eight bits) is left.
    pub fn is_drained(&self) -> bool {
        self.available() < 8 && (self.position..self.buffer.len() * 8).all(|i| !self.bit_at(i))
    }

    fn bit_at(&self, index: usize) -> bool {
        (self.buffer[index / 8] >> (index % 8)) & 1 == 1
    }
}
