//! Streaming hash computation over async inputs
//!
//! Chunks are folded into the same carry-buffered state machines the synchronous API uses, so
//! any chunking of the input yields the one-shot digest. Only the incremental variants (64 and
//! 128-bit) are accepted.

use crate::variant::Murmur3Variant;
use crate::{HashError, HashResult, Result, State128, State64};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt};

pin_project! {
    /// Streaming hasher that processes chunks incrementally
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        variant: Murmur3Variant,
        hasher_state: Option<HasherState>,
        total_bytes: u64,
    }
}

/// Internal hasher state for the incremental variants
#[derive(Debug, Clone)]
enum HasherState {
    Bits64(State64),
    Bits128(State128),
}

impl HasherState {
    fn new(variant: Murmur3Variant) -> Result<Self> {
        match variant {
            Murmur3Variant::Bits64 => Ok(Self::Bits64(State64::new())),
            Murmur3Variant::Bits128 => Ok(Self::Bits128(State128::new())),
            Murmur3Variant::Bits32 => Err(HashError::UnsupportedVariant(variant)),
        }
    }

    fn update(&mut self, chunk: &[u8]) {
        match self {
            Self::Bits64(state) => state.update(chunk),
            Self::Bits128(state) => state.update(chunk),
        }
    }

    fn finalize(self) -> HashResult {
        match self {
            Self::Bits64(state) => state.finalize().into(),
            Self::Bits128(state) => state.finalize().into(),
        }
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Create a new streaming hasher for the specified variant
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedVariant` for the 32-bit variant, which cannot carry bytes
    /// between chunks.
    pub fn new(input: S, variant: Murmur3Variant) -> Result<Self> {
        Ok(Self {
            input,
            variant,
            hasher_state: Some(HasherState::new(variant)?),
            total_bytes: 0,
        })
    }

    /// Get the total number of bytes processed so far
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Variant being computed
    pub fn variant(&self) -> Murmur3Variant {
        self.variant
    }
}

/// Result of streaming hash computation
#[derive(Debug, Clone)]
pub struct StreamHashResult {
    /// The final hash value
    pub hash: HashResult,
    /// Total bytes processed
    pub total_bytes: u64,
    /// Variant used
    pub variant: Murmur3Variant,
}

/// Chunk result from streaming hash computation
#[derive(Debug, Clone)]
pub struct StreamHashChunk {
    /// Bytes processed in this chunk
    pub bytes_processed: u64,
    /// Total bytes processed so far
    pub total_bytes: u64,
    /// Whether this is the final chunk with hash result
    pub is_final: bool,
    /// Final hash (only present if `is_final` = true)
    pub final_hash: Option<HashResult>,
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamHashChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        let Some(state) = this.hasher_state.as_mut() else {
            return Poll::Ready(None);
        };

        match this.input.as_mut().poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                let chunk_size = chunk.len() as u64;
                *this.total_bytes += chunk_size;
                state.update(&chunk);

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: chunk_size,
                    total_bytes: *this.total_bytes,
                    is_final: false,
                    final_hash: None,
                })))
            }
            Poll::Ready(None) => {
                let final_hash = this.hasher_state.take().map(HasherState::finalize);

                tracing::debug!(
                    variant = %this.variant,
                    total_bytes = *this.total_bytes,
                    "streaming hash complete"
                );

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: 0,
                    total_bytes: *this.total_bytes,
                    is_final: true,
                    final_hash,
                })))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Create a streaming 64-bit hasher from any stream of byte chunks
pub fn stream_murmur3_64<S>(input: S) -> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    StreamingHasher {
        input,
        variant: Murmur3Variant::Bits64,
        hasher_state: Some(HasherState::Bits64(State64::new())),
        total_bytes: 0,
    }
}

/// Create a streaming 128-bit hasher from any stream of byte chunks
pub fn stream_murmur3_128<S>(input: S) -> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    StreamingHasher {
        input,
        variant: Murmur3Variant::Bits128,
        hasher_state: Some(HasherState::Bits128(State128::new())),
        total_bytes: 0,
    }
}

/// Collect the final hash result from a streaming hasher
///
/// # Errors
///
/// Returns `HashError::StreamProcessing` if the stream ends without producing its digest.
pub async fn collect_hash<S>(mut hasher: StreamingHasher<S>) -> Result<StreamHashResult>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    let variant = hasher.variant;
    let mut total_bytes = 0;
    let mut final_hash = None;

    while let Some(chunk_result) = hasher.next().await {
        let chunk = chunk_result?;
        total_bytes = chunk.total_bytes;

        if chunk.is_final {
            final_hash = chunk.final_hash;
            break;
        }
    }

    let hash = final_hash.ok_or_else(|| {
        HashError::StreamProcessing("Stream ended without producing final hash".to_string())
    })?;

    Ok(StreamHashResult {
        hash,
        total_bytes,
        variant,
    })
}

/// Read `reader` to EOF, handing every chunk to `sink` in order
async fn drain_async_reader<R, F>(reader: &mut R, mut sink: F) -> Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
    F: FnMut(&[u8]),
{
    let mut chunk = vec![0u8; crate::source::READ_CHUNK];
    let mut total = 0u64;

    loop {
        match reader.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                sink(&chunk[..n]);
                total += n as u64;
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    tracing::trace!(bytes_read = total, "async byte source drained");
    Ok(total)
}

/// 64-bit hash of everything an async reader yields until EOF
///
/// # Errors
///
/// Returns `HashError::Io` if a read fails.
pub async fn hash64_async_read<R>(reader: &mut R) -> Result<[u8; 8]>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut state = State64::new();
    drain_async_reader(reader, |chunk| state.update(chunk)).await?;
    Ok(state.finalize())
}

/// 128-bit hash of everything an async reader yields until EOF
///
/// # Errors
///
/// Returns `HashError::Io` if a read fails.
pub async fn hash128_async_read<R>(reader: &mut R) -> Result<[u8; 16]>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut state = State128::new();
    drain_async_reader(reader, |chunk| state.update(chunk)).await?;
    Ok(state.finalize())
}
