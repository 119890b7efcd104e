//! MurmurHash3 hashing: 32, 64 and 128-bit variants
//!
//! Non-cryptographic, unseeded, deterministic fingerprints of byte sequences. Input may be a
//! whole buffer, a sub-range of one, a sequential byte source, or any number of chunks fed to an
//! incremental state. The 64 and 128-bit states carry partial blocks between calls, so any
//! chunking reproduces the one-shot digest; the 32-bit state does not (see [`State32`]).
//!
//! Digests are fixed-size byte arrays, most significant byte first.

#![forbid(unsafe_code)]

pub mod api;
pub mod async_result;
pub mod error;
pub mod hash128;
pub mod hash32;
pub mod hash64;
pub mod hash_result;
pub mod mix;
mod source;
pub mod streaming;
pub mod variant;

// Re-export error types
pub use error::{HashError, Result};

pub use api::{Hash, Murmur3Builder};
pub use async_result::{AsyncHashResult, AsyncHashResultWithError};
pub use hash_result::HashResult;
pub use variant::Murmur3Variant;

pub use hash128::{compute_hash128, compute_hash128_range, compute_hash128_reader, State128};
pub use hash32::{compute_hash32, compute_hash32_range, State32};
pub use hash64::{compute_hash64, compute_hash64_range, compute_hash64_reader, State64};

pub use streaming::{
    collect_hash, hash128_async_read, hash64_async_read, stream_murmur3_128, stream_murmur3_64,
    StreamHashChunk, StreamHashResult, StreamingHasher,
};
