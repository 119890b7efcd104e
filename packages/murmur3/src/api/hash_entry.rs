//! Entry point for the fluent hashing API

use super::murmur3_builder::Murmur3Builder;
use crate::variant::Murmur3Variant;

/// Entry point for hash operations
pub struct Hash;

impl Hash {
    /// Use MurmurHash3 32-bit
    #[must_use]
    pub fn murmur3_32() -> Murmur3Builder {
        Murmur3Builder::new(Murmur3Variant::Bits32)
    }

    /// Use MurmurHash 64-bit
    #[must_use]
    pub fn murmur3_64() -> Murmur3Builder {
        Murmur3Builder::new(Murmur3Variant::Bits64)
    }

    /// Use MurmurHash3 128-bit
    #[must_use]
    pub fn murmur3_128() -> Murmur3Builder {
        Murmur3Builder::new(Murmur3Variant::Bits128)
    }

    /// Use a variant chosen at runtime, e.g. parsed from configuration
    #[must_use]
    pub fn murmur3(variant: Murmur3Variant) -> Murmur3Builder {
        Murmur3Builder::new(variant)
    }
}
