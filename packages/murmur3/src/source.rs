//! Draining sequential byte sources into a hash state

use crate::Result;
use std::io::{ErrorKind, Read};

/// Read size used when staging a byte source into a state
pub(crate) const READ_CHUNK: usize = 8 * 1024;

/// Read `reader` to EOF, handing every chunk to `sink` in order
///
/// Returns the number of bytes read. The reader is borrowed, never closed.
pub(crate) fn drain_reader<R, F>(reader: &mut R, mut sink: F) -> Result<u64>
where
    R: Read + ?Sized,
    F: FnMut(&[u8]),
{
    let mut chunk = [0u8; READ_CHUNK];
    let mut total = 0u64;

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                sink(&chunk[..n]);
                total += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                tracing::debug!(bytes_read = total, "byte source interrupted, retrying read");
            }
            Err(e) => {
                tracing::debug!(bytes_read = total, error = %e, "byte source failed");
                return Err(e.into());
            }
        }
    }

    tracing::trace!(bytes_read = total, "byte source drained");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashError;
    use std::io::{self, Cursor};

    /// Reader that yields one byte per call and interrupts every other call
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        interrupt_next: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupt_next {
                self.interrupt_next = false;
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            self.interrupt_next = true;
            if self.pos >= self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_drain_collects_everything() -> Result<()> {
        let data: Vec<u8> = (0..=255u8).cycle().take(READ_CHUNK * 2 + 17).collect();
        let mut seen = Vec::new();
        let n = drain_reader(&mut Cursor::new(&data), |c| seen.extend_from_slice(c))?;
        assert_eq!(n, data.len() as u64);
        assert_eq!(seen, data);
        Ok(())
    }

    #[test]
    fn test_drain_retries_interrupted_and_short_reads() -> Result<()> {
        let mut reader = Trickle {
            data: b"short reads".to_vec(),
            pos: 0,
            interrupt_next: true,
        };
        let mut seen = Vec::new();
        let n = drain_reader(&mut reader, |c| seen.extend_from_slice(c))?;
        assert_eq!(n, 11);
        assert_eq!(seen, b"short reads");
        Ok(())
    }

    #[test]
    fn test_drain_propagates_io_error() {
        let err = drain_reader(&mut Broken, |_| {});
        match err {
            Err(HashError::Io(e)) => assert_eq!(e.kind(), ErrorKind::BrokenPipe),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
