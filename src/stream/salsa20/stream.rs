//! Counter-mode Salsa20 keystream.
//!
//! Blocks are produced strictly in counter order. A partially consumed block
//! is kept in an internal buffer so that consecutive calls continue the same
//! keystream regardless of how the input is split.

use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BLOCK_SIZE;
use super::core::{Extraction, init_state, salsa20_core, serialize};
use crate::error::{Error, Result};
use crate::utils::bytes::xor_in_place;

/// Salsa20/20 stream cipher with a 64-bit nonce and a 64-bit block counter.
///
/// Encryption and decryption are the same operation: the keystream is XORed
/// into the data.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    /// Initial state with the counter words (8 and 9) left at zero.
    state: [u32; 16],

    /// Most recently generated keystream block.
    buffer: [u8; BLOCK_SIZE],

    /// Number of bytes of `buffer` already consumed. `BLOCK_SIZE` when the
    /// buffer holds nothing usable.
    buffer_pos: usize,

    /// Counter of the next block to generate.
    counter: u64,

    /// Set once the block at counter `u64::MAX` has been generated.
    exhausted: bool,
}

impl Salsa20 {
    /// Creates a keystream positioned at block 0.
    pub fn new(key: &[u8; 32], nonce: &[u8; 8]) -> Self {
        let mut input = [0u8; 16];
        input[..8].copy_from_slice(nonce);

        Self {
            state: init_state(key, &input),
            buffer: [0u8; BLOCK_SIZE],
            buffer_pos: BLOCK_SIZE,
            counter: 0,
            exhausted: false,
        }
    }

    /// XORs the next `data.len()` keystream bytes into `data`.
    ///
    /// # Errors
    /// - `CounterOverflow` if the request would need a block past counter
    ///   `u64::MAX`. Nothing is written in that case.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        self.check_remaining(data.len())?;

        // Leftover bytes of the buffered block come first
        let leftover = (BLOCK_SIZE - self.buffer_pos).min(data.len());
        if leftover > 0 {
            let start = self.buffer_pos;
            xor_in_place(&mut data[..leftover], &self.buffer[start..start + leftover]);
            self.buffer_pos += leftover;
        }

        let mut chunks = data[leftover..].chunks_exact_mut(BLOCK_SIZE);
        for chunk in &mut chunks {
            let mut block = self.next_block();
            xor_in_place(chunk, &block);
            block.zeroize();
        }

        let rem = chunks.into_remainder();
        if !rem.is_empty() {
            self.buffer = self.next_block();
            xor_in_place(rem, &self.buffer[..rem.len()]);
            self.buffer_pos = rem.len();
        }

        Ok(())
    }

    /// Writes the next `out.len()` keystream bytes into `out`.
    ///
    /// # Errors
    /// - `CounterOverflow` as for [`apply_keystream`](Self::apply_keystream).
    ///   `out` is left as it was.
    pub fn keystream(&mut self, out: &mut [u8]) -> Result<()> {
        self.check_remaining(out.len())?;

        out.fill(0);
        self.apply_keystream(out)
    }

    /// Repositions the keystream at the start of block `block`.
    ///
    /// Any buffered partial block is discarded.
    pub fn seek_block(&mut self, block: u64) {
        self.buffer.zeroize();
        self.buffer_pos = BLOCK_SIZE;
        self.counter = block;
        self.exhausted = false;
    }

    /// Counter of the next block that will be generated.
    ///
    /// Bytes still pending in a buffered partial block belong to the block
    /// before this one. Once the block at `u64::MAX` has been generated the
    /// counter cannot advance and this keeps returning `u64::MAX`; use
    /// [`is_exhausted`](Self::is_exhausted) to tell the two states apart.
    pub fn block_position(&self) -> u64 {
        self.counter
    }

    /// Returns `true` once the block at counter `u64::MAX` has been
    /// generated. Only its buffered tail, if any, can still be served.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Rejects requests that would run the counter past `u64::MAX`.
    fn check_remaining(&self, len: usize) -> Result<()> {
        let buffered = BLOCK_SIZE - self.buffer_pos;
        if len <= buffered {
            return Ok(());
        }

        let needed = (len - buffered).div_ceil(BLOCK_SIZE) as u128;
        let available = if self.exhausted {
            0
        } else {
            (u64::MAX - self.counter) as u128 + 1
        };

        if needed > available {
            warn!(
                requested_bytes = len,
                next_block = self.counter,
                "salsa20 keystream request exceeds the block counter range"
            );
            return Err(Error::CounterOverflow);
        }

        Ok(())
    }

    /// Generates the block at the current counter and advances it.
    fn next_block(&mut self) -> [u8; BLOCK_SIZE] {
        let mut input = self.state;
        input[8] = self.counter as u32;
        input[9] = (self.counter >> 32) as u32;

        let mut words = salsa20_core(&input, Extraction::Stream);
        let block = serialize(&words);

        input.zeroize();
        words.zeroize();

        match self.counter.checked_add(1) {
            Some(next) => self.counter = next,
            None => self.exhausted = true,
        }

        block
    }
}

impl core::fmt::Debug for Salsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Salsa20")
            .field("block_position", &self.counter)
            .finish_non_exhaustive()
    }
}
