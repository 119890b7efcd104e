//! Error handling for murmur3 hashing

use crate::variant::Murmur3Variant;
use std::ops::Range;
use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// `offset + length` does not fit inside the input buffer
    #[error("Range out of bounds: offset {offset} + length {length} exceeds buffer of {len} bytes")]
    OutOfBounds {
        /// Requested start of the range
        offset: usize,
        /// Requested number of bytes
        length: usize,
        /// Actual buffer length
        len: usize,
    },

    /// An argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The byte source failed while being read
    #[error("I/O error while reading byte source: {0}")]
    Io(#[from] std::io::Error),

    /// The operation needs a carry buffer, which the 32-bit variant does not have
    #[error("Unsupported variant for incremental hashing: {0}")]
    UnsupportedVariant(Murmur3Variant),

    /// An async stream finished without producing its digest
    #[error("Stream processing error: {0}")]
    StreamProcessing(String),
}

impl HashError {
    /// Create an `invalid_argument` error
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Validate `offset..offset + length` against a buffer of `len` bytes
pub(crate) fn checked_range(len: usize, offset: usize, length: usize) -> Result<Range<usize>> {
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(HashError::OutOfBounds {
            offset,
            length,
            len,
        }),
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
