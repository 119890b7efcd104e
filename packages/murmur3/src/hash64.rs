//! MurmurHash 64-bit
//!
//! Block mixing follows the 64A scramble. The finalizer deliberately does not fold the total
//! length into the accumulator; published digests depend on that.

use crate::error::checked_range;
use crate::mix::{cascade_u64, read_u64_le, C0};
use crate::source::drain_reader;
use crate::Result;
use std::io::Read;

/// Bytes consumed per mixing step
pub const BLOCK_LEN: usize = 8;

/// Running state of a 64-bit hash
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State64 {
    accumulator: u64,
    length: u64,
    buffer: [u8; BLOCK_LEN],
    remaining: usize,
}

#[inline]
fn scramble64(h: u64, mut k: u64) -> u64 {
    k = k.wrapping_mul(C0);
    k ^= k >> 47;
    k = k.wrapping_mul(C0);
    (h ^ k).wrapping_mul(C0)
}

impl State64 {
    /// Fresh, zeroed state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accumulator: 0,
            length: 0,
            buffer: [0; BLOCK_LEN],
            remaining: 0,
        }
    }

    /// Total number of bytes fed so far
    #[must_use]
    pub const fn total_len(&self) -> u64 {
        self.length
    }

    /// Bytes held in the carry buffer, waiting for a full block
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer[..self.remaining]
    }

    /// Fold `data` into the state
    pub fn update(&mut self, mut data: &[u8]) {
        self.length += data.len() as u64;

        if self.remaining > 0 {
            let take = (BLOCK_LEN - self.remaining).min(data.len());
            self.buffer[self.remaining..self.remaining + take].copy_from_slice(&data[..take]);
            self.remaining += take;
            data = &data[take..];

            if self.remaining < BLOCK_LEN {
                return;
            }
            self.accumulator = scramble64(self.accumulator, u64::from_le_bytes(self.buffer));
            self.remaining = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.accumulator = scramble64(self.accumulator, read_u64_le(block, 0));
        }

        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.remaining = tail.len();
    }

    /// Fold `data[offset..offset + length]` into the state
    ///
    /// # Errors
    ///
    /// Returns `HashError::OutOfBounds` without touching the state if the range does not fit.
    pub fn update_range(&mut self, data: &[u8], offset: usize, length: usize) -> Result<()> {
        let range = checked_range(data.len(), offset, length)?;
        self.update(&data[range]);
        Ok(())
    }

    /// Read `reader` to EOF, folding every byte into the state
    ///
    /// Returns the number of bytes read.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Io` if a read fails. The state then holds whatever was read before
    /// the failure and should be discarded.
    pub fn update_reader<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<u64> {
        drain_reader(reader, |chunk| self.update(chunk))
    }

    /// Fold the tail, avalanche, and return the raw 64-bit hash
    #[must_use]
    pub fn finalize_raw(self) -> u64 {
        let mut h = self.accumulator;

        if self.remaining > 0 {
            h ^= cascade_u64(&self.buffer[..self.remaining]);
            h = h.wrapping_mul(C0);
        }

        h ^= h >> 47;
        h = h.wrapping_mul(C0);
        h ^= h >> 47;
        h
    }

    /// Finish the hash, returning the big-endian digest
    #[must_use]
    pub fn finalize(self) -> [u8; 8] {
        self.finalize_raw().to_be_bytes()
    }
}

/// One-shot 64-bit hash of `data`
#[must_use]
pub fn compute_hash64(data: &[u8]) -> [u8; 8] {
    let mut state = State64::new();
    state.update(data);
    state.finalize()
}

/// One-shot 64-bit hash of `data[offset..offset + length]`
///
/// # Errors
///
/// Returns `HashError::OutOfBounds` if the range does not fit inside `data`.
pub fn compute_hash64_range(data: &[u8], offset: usize, length: usize) -> Result<[u8; 8]> {
    let mut state = State64::new();
    state.update_range(data, offset, length)?;
    Ok(state.finalize())
}

/// One-shot 64-bit hash of everything `reader` yields until EOF
///
/// # Errors
///
/// Returns `HashError::Io` if a read fails.
pub fn compute_hash64_reader<R: Read + ?Sized>(reader: &mut R) -> Result<[u8; 8]> {
    let mut state = State64::new();
    state.update_reader(reader)?;
    Ok(state.finalize())
}
