//! MurmurHash3 builder
//!
//! One builder serves all three widths; the variant decides which state machine runs.

use crate::streaming::StreamingHasher;
use crate::variant::Murmur3Variant;
use crate::{
    compute_hash128, compute_hash128_range, compute_hash128_reader, compute_hash32,
    compute_hash32_range, compute_hash64, compute_hash64_range, compute_hash64_reader,
    AsyncHashResult, HashResult, Result,
};
use futures::Stream;
use std::io::Read;
use tokio::sync::oneshot;

/// MurmurHash3 builder for a fixed variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Murmur3Builder {
    variant: Murmur3Variant,
}

impl Murmur3Builder {
    /// Create a builder for `variant`
    #[must_use]
    pub fn new(variant: Murmur3Variant) -> Self {
        Self { variant }
    }

    /// Variant this builder hashes with
    #[must_use]
    pub fn variant(&self) -> Murmur3Variant {
        self.variant
    }

    /// Hash the whole of `data`
    #[must_use]
    pub fn compute<T: AsRef<[u8]>>(&self, data: T) -> HashResult {
        let data = data.as_ref();
        match self.variant {
            Murmur3Variant::Bits32 => compute_hash32(data).into(),
            Murmur3Variant::Bits64 => compute_hash64(data).into(),
            Murmur3Variant::Bits128 => compute_hash128(data).into(),
        }
    }

    /// Hash `data[offset..offset + length]`
    ///
    /// # Errors
    ///
    /// Returns `HashError::OutOfBounds` if the range does not fit inside `data`.
    pub fn compute_range(&self, data: &[u8], offset: usize, length: usize) -> Result<HashResult> {
        Ok(match self.variant {
            Murmur3Variant::Bits32 => compute_hash32_range(data, offset, length)?.into(),
            Murmur3Variant::Bits64 => compute_hash64_range(data, offset, length)?.into(),
            Murmur3Variant::Bits128 => compute_hash128_range(data, offset, length)?.into(),
        })
    }

    /// Hash everything `reader` yields until EOF
    ///
    /// The 32-bit variant cannot carry bytes between updates, so its input is read into memory
    /// and hashed in a single call.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Io` if a read fails.
    pub fn compute_reader<R: Read + ?Sized>(&self, reader: &mut R) -> Result<HashResult> {
        Ok(match self.variant {
            Murmur3Variant::Bits32 => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                compute_hash32(&data).into()
            }
            Murmur3Variant::Bits64 => compute_hash64_reader(reader)?.into(),
            Murmur3Variant::Bits128 => compute_hash128_reader(reader)?.into(),
        })
    }

    /// Hash `data` on tokio's blocking pool
    ///
    /// Must be called from within a tokio runtime.
    pub fn compute_async<T: Into<Vec<u8>>>(self, data: T) -> AsyncHashResult {
        let data = data.into();
        let (tx, rx) = oneshot::channel();

        tokio::task::spawn_blocking(move || {
            let result = self.compute(&data);
            let _ = tx.send(Ok(result));
        });

        AsyncHashResult::new(rx)
    }

    /// Hash a stream of byte chunks incrementally
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedVariant` for the 32-bit variant.
    pub fn stream<S>(self, input: S) -> Result<StreamingHasher<S>>
    where
        S: Stream<Item = Vec<u8>>,
    {
        StreamingHasher::new(input, self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Hash;
    use crate::HashError;
    use std::io::Cursor;

    #[test]
    fn test_builder_variants() {
        assert_eq!(Hash::murmur3_32().compute(b"test").to_hex(), "ba6bd213");
        assert_eq!(Hash::murmur3_64().compute("test").to_hex(), "ba1dc49aa6cfea13");
        assert_eq!(
            Hash::murmur3_128().compute(b"hello".to_vec()).to_hex(),
            "cbd8a7b341bd9b025b1e906a48ae1d19"
        );
    }

    #[test]
    fn test_builder_range() -> Result<()> {
        let result = Hash::murmur3_64().compute_range(b" test", 1, 4)?;
        assert_eq!(result.to_hex(), "ba1dc49aa6cfea13");

        let err = Hash::murmur3_128().compute_range(b"abc", 2, 5);
        assert!(matches!(err, Err(HashError::OutOfBounds { .. })));
        Ok(())
    }

    #[test]
    fn test_builder_reader_for_every_variant() -> Result<()> {
        let data = b"The quick brown fox jumps over the lazy dog";
        for variant in [
            Murmur3Variant::Bits32,
            Murmur3Variant::Bits64,
            Murmur3Variant::Bits128,
        ] {
            let builder = Hash::murmur3(variant);
            let streamed = builder.compute_reader(&mut Cursor::new(data))?;
            assert_eq!(streamed, builder.compute(data), "{variant}");
            assert_eq!(streamed.len(), variant.digest_len());
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_compute_async_matches_sync() -> Result<()> {
        let data = b"Hello, world!".to_vec();
        let builder = Hash::murmur3_128();
        let result = builder.compute_async(data.clone()).await?;
        assert_eq!(result, builder.compute(&data));
        Ok(())
    }

    #[test]
    fn test_stream_rejects_32_bit() {
        let input = futures::stream::iter(vec![b"abc".to_vec()]);
        let err = Hash::murmur3_32().stream(input);
        assert!(matches!(
            err,
            Err(HashError::UnsupportedVariant(Murmur3Variant::Bits32))
        ));
    }
}
