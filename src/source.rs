//! The input-source façade: adapts a byte slice, a `Read` stream, or a
//! filesystem path to the single [`ByteSource`] contract the framer depends on.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::DecodeError;

/// Abstract positioned reader over the input. No seeking: the framer only
/// ever asks for the next `n` bytes.
pub trait ByteSource {
    /// Reads exactly `n` bytes, or fails with
    /// [`DecodeError::UnexpectedEndOfInput`] if fewer remain.
    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, DecodeError>;
}

/// A `ByteSource` over an in-memory buffer.
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        SliceSource { data, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        let available = self.data.len() - self.pos;
        if available < n {
            return Err(DecodeError::UnexpectedEndOfInput { needed: n, available });
        }
        let bytes = self.data[self.pos..self.pos + n].to_vec();
        self.pos += n;
        Ok(bytes)
    }
}

/// A `ByteSource` wrapping any `std::io::Read`.
pub struct ReaderSource<R: Read> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        ReaderSource { inner }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        let mut buf = vec![0u8; n];
        let mut filled = 0;
        while filled < n {
            let read = self.inner.read(&mut buf[filled..])?;
            if read == 0 {
                return Err(DecodeError::UnexpectedEndOfInput {
                    needed: n,
                    available: filled,
                });
            }
            filled += read;
        }
        Ok(buf)
    }
}

/// Opens `path` and wraps it in a [`ReaderSource`].
pub fn open_file_source(path: impl AsRef<Path>) -> Result<ReaderSource<File>, DecodeError> {
    Ok(ReaderSource::new(File::open(path)?))
}
