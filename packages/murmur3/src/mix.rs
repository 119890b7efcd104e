//! Integer mixing primitives shared by every MurmurHash3 variant

/// Multiplier used by the 64-bit block scramble and avalanche
pub const C0: u64 = 0xC6A4_A793_5BD1_E995;

/// First lane multiplier of the 128-bit variant
pub const C1: u64 = 0x87C3_7B91_1142_53D5;

/// Second lane multiplier of the 128-bit variant
pub const C2: u64 = 0x4CF5_AD43_2745_937F;

const C32_1: u32 = 0xCC9E_2D51;
const C32_2: u32 = 0x1B87_3593;

/// Scramble a single 32-bit input word before it is folded into the accumulator
#[inline]
#[must_use]
pub const fn scramble32(k: u32) -> u32 {
    k.wrapping_mul(C32_1).rotate_left(15).wrapping_mul(C32_2)
}

/// 32-bit avalanche
#[inline]
#[must_use]
pub const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

/// 64-bit avalanche used by both lanes of the 128-bit variant
#[inline]
#[must_use]
pub const fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    k ^= k >> 33;
    k = k.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    k ^= k >> 33;
    k
}

/// Decode four bytes starting at `offset` as a little-endian word
#[inline]
#[must_use]
pub(crate) fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Decode eight bytes starting at `offset` as a little-endian word
#[inline]
#[must_use]
pub(crate) fn read_u64_le(buf: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_le_bytes(word)
}

/// Fold `tail` into a word, highest index first, byte 0 landing in the low bits
///
/// Equivalent to the fall-through byte cascade of the reference tail handling.
#[inline]
#[must_use]
pub(crate) fn cascade_u64(tail: &[u8]) -> u64 {
    tail.iter()
        .enumerate()
        .fold(0u64, |k, (i, &b)| k ^ (u64::from(b) << (8 * i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmix_zero_is_fixed_point() {
        assert_eq!(fmix32(0), 0);
        assert_eq!(fmix64(0), 0);
        assert_eq!(scramble32(0), 0);
    }

    #[test]
    fn test_little_endian_decode() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(read_u32_le(&bytes, 0), 0x0403_0201);
        assert_eq!(read_u32_le(&bytes, 4), 0x0807_0605);
        assert_eq!(read_u64_le(&bytes, 0), 0x0807_0605_0403_0201);
    }

    #[test]
    fn test_cascade_matches_padded_decode() {
        let tail = [0xAA, 0xBB, 0xCC];
        let mut padded = [0u8; 8];
        padded[..3].copy_from_slice(&tail);
        assert_eq!(cascade_u64(&tail), u64::from_le_bytes(padded));
        assert_eq!(cascade_u64(&[]), 0);
    }

    #[test]
    fn test_scramble32_known_word() {
        // "test" as a little-endian word
        let k = read_u32_le(b"test", 0);
        let expected = k
            .wrapping_mul(0xCC9E_2D51)
            .rotate_left(15)
            .wrapping_mul(0x1B87_3593);
        assert_eq!(scramble32(k), expected);
    }
}
