//! MurmurHash3 x64 128-bit
//!
//! Two interleaved 64-bit lanes over 16-byte blocks, with a carry buffer so input can be split
//! at any offset across update calls.

use crate::error::checked_range;
use crate::mix::{cascade_u64, fmix64, read_u64_le, C1, C2};
use crate::source::drain_reader;
use crate::Result;
use std::io::Read;

/// Bytes consumed per mixing step
pub const BLOCK_LEN: usize = 16;

const HALF: usize = BLOCK_LEN / 2;

/// Running state of a 128-bit hash
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State128 {
    h1: u64,
    h2: u64,
    length: u64,
    buffer: [u8; BLOCK_LEN],
    remaining: usize,
}

#[inline]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

impl State128 {
    /// Fresh, zeroed state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            h1: 0,
            h2: 0,
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

    #[inline]
    fn scramble(&mut self, block: &[u8]) {
        let k1 = read_u64_le(block, 0);
        let k2 = read_u64_le(block, HALF);

        self.h1 ^= mix_k1(k1);
        self.h1 = self
            .h1
            .rotate_left(27)
            .wrapping_add(self.h2)
            .wrapping_mul(5)
            .wrapping_add(0x52DC_E729);

        self.h2 ^= mix_k2(k2);
        self.h2 = self
            .h2
            .rotate_left(31)
            .wrapping_add(self.h1)
            .wrapping_mul(5)
            .wrapping_add(0x3849_5AB5);
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
            let block = self.buffer;
            self.scramble(&block);
            self.remaining = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            self.scramble(block);
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

    /// Fold the tail, avalanche both lanes, and return them as `(h1, h2)`
    #[must_use]
    pub fn finalize_raw(self) -> (u64, u64) {
        let mut h1 = self.h1;
        let mut h2 = self.h2;
        let tail = &self.buffer[..self.remaining];

        // Upper half first: bytes 8..15 go to the second lane.
        if tail.len() > HALF {
            h2 ^= mix_k2(cascade_u64(&tail[HALF..]));
        }
        if !tail.is_empty() {
            h1 ^= mix_k1(cascade_u64(&tail[..tail.len().min(HALF)]));
        }

        h1 ^= self.length;
        h2 ^= self.length;

        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);

        h1 = fmix64(h1);
        h2 = fmix64(h2);

        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);

        (h1, h2)
    }

    /// Finish the hash, returning `h1` then `h2`, each big-endian
    #[must_use]
    pub fn finalize(self) -> [u8; 16] {
        let (h1, h2) = self.finalize_raw();
        let mut digest = [0u8; 16];
        digest[..HALF].copy_from_slice(&h1.to_be_bytes());
        digest[HALF..].copy_from_slice(&h2.to_be_bytes());
        digest
    }
}

/// One-shot 128-bit hash of `data`
#[must_use]
pub fn compute_hash128(data: &[u8]) -> [u8; 16] {
    let mut state = State128::new();
    state.update(data);
    state.finalize()
}

/// One-shot 128-bit hash of `data[offset..offset + length]`
///
/// # Errors
///
/// Returns `HashError::OutOfBounds` if the range does not fit inside `data`.
pub fn compute_hash128_range(data: &[u8], offset: usize, length: usize) -> Result<[u8; 16]> {
    let mut state = State128::new();
    state.update_range(data, offset, length)?;
    Ok(state.finalize())
}

/// One-shot 128-bit hash of everything `reader` yields until EOF
///
/// # Errors
///
/// Returns `HashError::Io` if a read fails.
pub fn compute_hash128_reader<R: Read + ?Sized>(reader: &mut R) -> Result<[u8; 16]> {
    let mut state = State128::new();
    state.update_reader(reader)?;
    Ok(state.finalize())
}
