//! # Sequential Byte Reader
//!
//! A cursor over an in-memory image file. Decoders pull the encoded bytes
//! from it as they go.
//!
//! [`ByteReader::read`] is strict: a request for more bytes than remain copies
//! nothing and fails with [`BlockgraphError::PrematureEnd`]. The same rule
//! applies to `io::Read::read_exact`, which is what decoders use when they
//! need a fixed-size chunk. Plain `io::Read::read` keeps the standard
//! short-read contract so buffered decoders can drain the tail of the input.

use std::io::{self, BufRead, Read, Seek, SeekFrom};

use crate::error::{BlockgraphError, Result};

#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy exactly `out.len()` bytes and advance the cursor.
    ///
    /// Returns the number of bytes copied. If fewer bytes remain, nothing is
    /// copied and the cursor stays put.
    pub fn read(&mut self, out: &mut [u8]) -> Result<usize> {
        let remaining = self.remaining();
        if out.len() > remaining {
            return Err(BlockgraphError::PrematureEnd {
                requested: out.len(),
                remaining,
            });
        }
        out.copy_from_slice(&self.tail()[..out.len()]);
        self.pos += out.len();
        Ok(out.len())
    }

    fn tail(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }
}

impl Read for ByteReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.tail()[..n]);
        self.pos += n;
        Ok(n)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        ByteReader::read(self, buf)
            .map(|_| ())
            .map_err(|e| io::Error::new(io::ErrorKind::UnexpectedEof, e.to_string()))
    }
}

impl BufRead for ByteReader<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.tail())
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.data.len());
    }
}

impl Seek for ByteReader<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => (self.data.len() as u64).checked_add_signed(delta),
            SeekFrom::Current(delta) => (self.pos as u64).checked_add_signed(delta),
        };
        let target = target.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek to a negative or overflowing position",
            )
        })?;
        self.pos = usize::try_from(target)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek position too large"))?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_read_advances() {
        let mut reader = ByteReader::new(&[1, 2, 3, 4, 5]);
        let mut buf = [0u8; 3];
        assert_eq!(reader.read(&mut buf).unwrap(), 3);
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.remaining(), 2);

        let mut buf = [0u8; 2];
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(buf, [4, 5]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_strict_read_past_end_copies_nothing() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        let mut buf = [9u8; 4];
        match reader.read(&mut buf) {
            Err(BlockgraphError::PrematureEnd {
                requested,
                remaining,
            }) => {
                assert_eq!(requested, 4);
                assert_eq!(remaining, 3);
            }
            other => panic!("expected PrematureEnd, got {:?}", other),
        }
        assert_eq!(buf, [9u8; 4]);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_zero_length_read() {
        let mut reader = ByteReader::new(&[]);
        assert_eq!(reader.read(&mut []).unwrap(), 0);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_io_read_short_at_end() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        let mut buf = [0u8; 8];
        assert_eq!(Read::read(&mut reader, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
        assert_eq!(Read::read(&mut reader, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_read_exact_is_strict() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        let mut buf = [0u8; 4];
        let err = Read::read_exact(&mut reader, &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_buf_read_and_seek() {
        let mut reader = ByteReader::new(&[10, 20, 30, 40]);
        assert_eq!(reader.fill_buf().unwrap(), &[10, 20, 30, 40]);
        reader.consume(3);
        assert_eq!(reader.fill_buf().unwrap(), &[40]);

        assert_eq!(reader.seek(SeekFrom::Start(1)).unwrap(), 1);
        assert_eq!(reader.seek(SeekFrom::Current(1)).unwrap(), 2);
        assert_eq!(reader.seek(SeekFrom::End(-1)).unwrap(), 3);
        assert!(reader.seek(SeekFrom::Current(-10)).is_err());
        assert_eq!(reader.position(), 3);

        // Past the end behaves like an exhausted reader
        reader.seek(SeekFrom::Start(10)).unwrap();
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.fill_buf().unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_reads_after_seeking_past_end() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        reader.seek(SeekFrom::Start(10)).unwrap();

        assert_eq!(reader.read(&mut []).unwrap(), 0);
        assert!(matches!(
            reader.read(&mut [0u8; 1]),
            Err(BlockgraphError::PrematureEnd {
                requested: 1,
                remaining: 0
            })
        ));
        assert!(Read::read_exact(&mut reader, &mut []).is_ok());
        assert_eq!(
            Read::read_exact(&mut reader, &mut [0u8; 2]).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
        assert_eq!(Read::read(&mut reader, &mut [0u8; 4]).unwrap(), 0);
        assert_eq!(reader.position(), 10);
    }
}
