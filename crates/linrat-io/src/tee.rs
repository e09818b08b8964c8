//! A writer that duplicates every byte into two sinks.

use std::io::{self, Write};

use tracing::warn;

/// Forwards all writes and flushes to two underlying writers.
///
/// The second writer is always attempted, even when the first one fails;
/// the first error encountered is the one reported.
#[derive(Debug)]
pub struct TeeWriter<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    /// Creates a writer that sends everything to `first` and `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Borrows both sinks.
    pub fn get_ref(&self) -> (&A, &B) {
        (&self.first, &self.second)
    }

    /// Unwraps the two sinks.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

fn both(first: io::Result<()>, second: io::Result<()>) -> io::Result<()> {
    match (first, second) {
        (Ok(()), result) => result,
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(other)) => {
            warn!(error = %other, "second tee sink also failed");
            Err(e)
        }
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // partial writes would desynchronize the two sinks
        self.write_all(buf)?;
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let first = self.first.write_all(buf);
        let second = self.second.write_all(buf);
        both(first, second)
    }

    fn flush(&mut self) -> io::Result<()> {
        let first = self.first.flush();
        let second = self.second.flush();
        both(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A sink that rejects every operation.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "flush failed"))
        }
    }

    #[test]
    fn test_duplicates_bytes() {
        let mut tee = TeeWriter::new(Vec::new(), Vec::new());
        tee.write_all(b"hello ").unwrap();
        write!(tee, "{}", 42).unwrap();
        tee.flush().unwrap();
        let (a, b) = tee.into_inner();
        assert_eq!(a, b"hello 42");
        assert_eq!(b, b"hello 42");
    }

    #[test]
    fn test_second_sink_written_when_first_fails() {
        let mut tee = TeeWriter::new(Broken, Vec::new());
        let err = tee.write_all(b"data").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(tee.get_ref().1, b"data");
    }

    #[test]
    fn test_second_sink_error_reported() {
        let mut tee = TeeWriter::new(Vec::new(), Broken);
        assert!(tee.write(b"x").is_err());
        assert!(tee.flush().is_err());
        assert_eq!(tee.get_ref().0, b"x");
    }
}
