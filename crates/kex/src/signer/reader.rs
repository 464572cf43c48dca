//! Reader that mirrors consumed bytes into a transcript

use std::io::{self, Read};

use super::TranscriptSink;

/// Wraps an input so that every byte read is also absorbed by a sink
///
/// Parsing through this reader digests exactly the bytes the parser
/// consumed, with no second encoding pass. Bytes read directly from the
/// inner reader bypass the sink.
pub struct SignerReader<'a, R: Read + ?Sized, S: TranscriptSink + ?Sized> {
    inner: &'a mut R,
    sink: &'a mut S,
}

impl<'a, R: Read + ?Sized, S: TranscriptSink + ?Sized> SignerReader<'a, R, S> {
    pub fn new(inner: &'a mut R, sink: &'a mut S) -> Self {
        Self { inner, sink }
    }
}

impl<R: Read + ?Sized, S: TranscriptSink + ?Sized> Read for SignerReader<'_, R, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.sink.absorb(&buf[..n]);
        Ok(n)
    }
}
