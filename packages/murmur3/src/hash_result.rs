//! Digest wrapper with encoding support

use crate::variant::Murmur3Variant;

/// Result of a hash operation with encoding options
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashResult {
    variant: Murmur3Variant,
    /// Raw digest bytes, most significant first
    bytes: Vec<u8>,
}

impl HashResult {
    /// Wrap a finished digest
    #[must_use]
    pub fn new(variant: Murmur3Variant, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), variant.digest_len());
        Self { variant, bytes }
    }

    /// Variant that produced this digest
    #[must_use]
    pub fn variant(&self) -> Murmur3Variant {
        self.variant
    }

    /// Get the raw bytes of the hash
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Get the hash as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Get the hash as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Get the hash as a base64url string (URL-safe)
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.bytes)
    }

    /// Get the length of the hash in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the hash is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<[u8; 4]> for HashResult {
    fn from(digest: [u8; 4]) -> Self {
        Self::new(Murmur3Variant::Bits32, digest.to_vec())
    }
}

impl From<[u8; 8]> for HashResult {
    fn from(digest: [u8; 8]) -> Self {
        Self::new(Murmur3Variant::Bits64, digest.to_vec())
    }
}

impl From<[u8; 16]> for HashResult {
    fn from(digest: [u8; 16]) -> Self {
        Self::new(Murmur3Variant::Bits128, digest.to_vec())
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.bytes
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
