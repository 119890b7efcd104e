//! Async hash result resolved from a blocking hash task

use crate::{HashError, HashResult, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Concrete async hash resolution result
pub struct AsyncHashResult {
    receiver: oneshot::Receiver<Result<HashResult>>,
}

/// Async hash result with error transformation
pub struct AsyncHashResultWithError<E> {
    receiver: oneshot::Receiver<Result<HashResult>>,
    error_handler: E,
}

impl AsyncHashResult {
    /// Create a new `AsyncHashResult` from a oneshot receiver
    pub(crate) fn new(receiver: oneshot::Receiver<Result<HashResult>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncHashResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<HashResult>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create an `AsyncHashResult` that yields an error
    #[must_use]
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }

    /// Transform errors, passing successful digests through untouched
    pub fn on_error<E>(self, handler: E) -> AsyncHashResultWithError<E>
    where
        E: Fn(HashError) -> HashError + Unpin,
    {
        AsyncHashResultWithError {
            receiver: self.receiver,
            error_handler: handler,
        }
    }
}

fn task_dropped() -> HashError {
    HashError::StreamProcessing("hash task dropped before completing".to_string())
}

impl Future for AsyncHashResult {
    type Output = Result<HashResult>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(task_dropped())),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<E> Future for AsyncHashResultWithError<E>
where
    E: Fn(HashError) -> HashError + Unpin,
{
    type Output = Result<HashResult>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(Ok(value))) => Poll::Ready(Ok(value)),
            Poll::Ready(Ok(Err(e))) => Poll::Ready(Err((this.error_handler)(e))),
            Poll::Ready(Err(_)) => Poll::Ready(Err((this.error_handler)(task_dropped()))),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_hash64;

    #[tokio::test]
    async fn test_ready_result_resolves() -> Result<()> {
        let digest = HashResult::from(compute_hash64(b"test"));
        let resolved = AsyncHashResult::ready(Ok(digest.clone())).await?;
        assert_eq!(resolved, digest);
        Ok(())
    }

    #[tokio::test]
    async fn test_error_handler_transforms_errors() {
        let result = AsyncHashResult::error(HashError::invalid_argument("boom"))
            .on_error(|e| HashError::StreamProcessing(format!("wrapped: {e}")))
            .await;
        match result {
            Err(HashError::StreamProcessing(msg)) => {
                assert_eq!(msg, "wrapped: Invalid argument: boom");
            }
            other => panic!("expected wrapped error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dropped_sender_reports_error() {
        let (tx, rx) = oneshot::channel::<Result<HashResult>>();
        drop(tx);
        let result = AsyncHashResult::new(rx).await;
        assert!(matches!(result, Err(HashError::StreamProcessing(_))));
    }
}
