//! Byte sources feeding the stream driver.

use std::io::{self, Read};

/// Ordered supplier of log bytes.
///
/// End of stream is explicit: `Ok(None)`. A zero-length chunk (`Ok(Some(0))`)
/// only means nothing arrived yet.
pub trait ByteSource {
    /// Fill `buf` with the next bytes, returning how many were written.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>>;
}

/// Adapter turning any [`Read`] (file, device node, in-memory slice) into a
/// [`ByteSource`]. A zero-byte read is treated as end of stream.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        if buf.is_empty() {
            return Ok(Some(0));
        }
        loop {
            match self.reader.read(buf) {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(n)),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        (**self).read_chunk(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_source_signals_end() {
        let mut source = ReaderSource::new(&[1u8, 2, 3][..]);
        let mut buf = [0u8; 2];

        assert_eq!(source.read_chunk(&mut buf).unwrap(), Some(2));
        assert_eq!(buf, [1, 2]);
        assert_eq!(source.read_chunk(&mut buf).unwrap(), Some(1));
        assert_eq!(source.read_chunk(&mut buf).unwrap(), None);
    }

    #[test]
    fn reader_source_propagates_errors() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("device gone"))
            }
        }

        let mut source = ReaderSource::new(Broken);
        let err = source.read_chunk(&mut [0u8; 4]).unwrap_err();
        assert_eq!(err.to_string(), "device gone");
    }
}
