//! MurmurHash3 x86 32-bit
//!
//! The 32-bit state has no carry buffer. Each update call folds its own 1–3 byte tail straight
//! into the accumulator, so feeding input across several calls reproduces the one-shot digest
//! only when every call boundary falls on a multiple of 4 bytes.

use crate::error::checked_range;
use crate::mix::{fmix32, read_u32_le, scramble32};
use crate::Result;

/// Running state of a 32-bit hash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State32 {
    accumulator: u32,
    length: u64,
}

impl State32 {
    /// Fresh, zeroed state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accumulator: 0,
            length: 0,
        }
    }

    /// Total number of bytes fed so far
    #[must_use]
    pub const fn total_len(&self) -> u64 {
        self.length
    }

    /// Fold `data` into the state
    pub fn update(&mut self, data: &[u8]) {
        let mut h = self.accumulator;
        let blocks = data.len() / 4 * 4;

        for offset in (0..blocks).step_by(4) {
            h ^= scramble32(read_u32_le(data, offset));
            h = h.rotate_left(13);
            h = h.wrapping_mul(5).wrapping_add(0xE654_6B64);
        }

        let tail = &data[blocks..];
        if !tail.is_empty() {
            let k = tail
                .iter()
                .rev()
                .fold(0u32, |k, &b| (k << 8) | u32::from(b));
            h ^= scramble32(k);
        }

        self.accumulator = h;
        self.length += data.len() as u64;
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

    /// Avalanche the accumulator and return the raw 32-bit hash
    #[must_use]
    pub fn finalize_raw(self) -> u32 {
        // Only the low 32 bits of the length take part.
        fmix32(self.accumulator ^ self.length as u32)
    }

    /// Finish the hash, returning the big-endian digest
    #[must_use]
    pub fn finalize(self) -> [u8; 4] {
        self.finalize_raw().to_be_bytes()
    }
}

/// One-shot 32-bit hash of `data`
#[must_use]
pub fn compute_hash32(data: &[u8]) -> [u8; 4] {
    let mut state = State32::new();
    state.update(data);
    state.finalize()
}

/// One-shot 32-bit hash of `data[offset..offset + length]`
///
/// # Errors
///
/// Returns `HashError::OutOfBounds` if the range does not fit inside `data`.
pub fn compute_hash32_range(data: &[u8], offset: usize, length: usize) -> Result<[u8; 4]> {
    let mut state = State32::new();
    state.update_range(data, offset, length)?;
    Ok(state.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashError;
    use hex_literal::hex;

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_hash32(b""), [0u8; 4]);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(compute_hash32(b"test"), hex!("ba6bd213"));
        assert_eq!(compute_hash32(b"Hello, world!"), hex!("c0363e43"));
        assert_eq!(
            compute_hash32(b"The quick brown fox jumps over the lazy dog"),
            hex!("2e4ff723")
        );
    }

    #[test]
    fn test_range_matches_copy() -> Result<()> {
        assert_eq!(compute_hash32_range(b" test", 1, 4)?, hex!("ba6bd213"));
        Ok(())
    }

    #[test]
    fn test_aligned_split_matches_one_shot() {
        let data = b"Hello, world! Hello, world!";
        let mut state = State32::new();
        state.update(&data[..8]);
        state.update(&data[8..]);
        assert_eq!(state.total_len(), data.len() as u64);
        assert_eq!(state.finalize(), compute_hash32(data));
    }

    #[test]
    fn test_unaligned_split_diverges() {
        // No carry buffer: a split inside a word is hashed as two separate tails.
        let data = b"Hello, world!";
        let mut state = State32::new();
        state.update(&data[..5]);
        state.update(&data[5..]);
        assert_ne!(state.finalize(), compute_hash32(data));
    }

    #[test]
    fn test_out_of_bounds_leaves_state_untouched() {
        let mut state = State32::new();
        state.update(b"abcd");
        let before = state;
        let err = state.update_range(b"abc", 2, 2);
        assert!(matches!(err, Err(HashError::OutOfBounds { .. })));
        assert_eq!(state, before);
    }

    #[test]
    fn test_raw_matches_digest() {
        let mut state = State32::new();
        state.update(b"test");
        assert_eq!(state.finalize_raw().to_be_bytes(), state.finalize());
    }
}
