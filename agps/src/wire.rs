//! Receiver assistance structs, little-endian and packed.

use alloc::vec::Vec;

use crate::error::MemWriterError;

mod ephemeris;
pub use ephemeris::*;

/// Static description of a fixed size wire struct
pub trait WireStructMeta {
    const NAME: &'static str;
    const LEN: usize;
}

/// Abstraction over a byte sink, so that structs can be written into a
/// growable `Vec` or a caller provided buffer.
pub trait MemWriter {
    /// make sure that we have at least `len` bytes for writing
    fn reserve_allocate(&mut self, len: usize) -> Result<(), MemWriterError>;
    fn write(&mut self, buf: &[u8]) -> Result<(), MemWriterError>;
}

impl MemWriter for Vec<u8> {
    fn reserve_allocate(&mut self, len: usize) -> Result<(), MemWriterError> {
        self.reserve(len);
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), MemWriterError> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// [MemWriter] over a fixed slice, fails once the slice is full.
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }
}

impl MemWriter for SliceWriter<'_> {
    fn reserve_allocate(&mut self, len: usize) -> Result<(), MemWriterError> {
        if self.buf.len() - self.pos >= len {
            Ok(())
        } else {
            Err(MemWriterError::NotEnoughMem)
        }
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), MemWriterError> {
        self.reserve_allocate(buf.len())?;
        self.buf[self.pos..self.pos + buf.len()].copy_from_slice(buf);
        self.pos += buf.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_writer_stops_at_capacity() {
        let mut buf = [0u8; 4];
        let mut out = SliceWriter::new(&mut buf);
        assert!(out.is_empty());
        out.write(&[1, 2, 3]).unwrap();
        assert_eq!(out.len(), 3);
        assert!(matches!(
            out.write(&[4, 5]),
            Err(MemWriterError::NotEnoughMem)
        ));
        out.write(&[4]).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }
}
