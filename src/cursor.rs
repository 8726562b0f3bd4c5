use std::io::SeekFrom;

use crate::{
    error::{CodecError, CodecResult},
    wire::{decode_u16, decode_u32},
};

/// Sequential reader over a received DNS message.
///
/// Reads hand out slices of the original buffer and never copy it. The
/// position can be moved with [`ByteCursor::seek`], which is how compressed
/// names jump to an earlier offset and come back.
#[derive(Debug, Clone, Default)]
pub struct ByteCursor<'a> {
    buf: Option<&'a [u8]>,
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf: Some(buf),
            pos: 0,
        }
    }

    fn source(&self) -> CodecResult<&'a [u8]> {
        self.buf.ok_or(CodecError::UninitializedReader)
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.map_or(0, |buf| buf.len() - self.pos)
    }

    /// Returns the next `n` bytes and advances past them. On failure the
    /// position is left untouched.
    pub fn read_bytes(&mut self, n: usize) -> CodecResult<&'a [u8]> {
        let buf = self.source()?;
        let remaining = buf.len() - self.pos;
        if n > remaining {
            return Err(CodecError::InsufficientData {
                requested: n,
                remaining,
            });
        }
        let bytes = &buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> CodecResult<u16> {
        decode_u16(self.read_bytes(2)?)
    }

    pub fn read_u32(&mut self) -> CodecResult<u32> {
        decode_u32(self.read_bytes(4)?)
    }

    /// Moves the cursor and returns the new absolute position. Positions
    /// before the start or past the end of the buffer are rejected.
    pub fn seek(&mut self, target: SeekFrom) -> CodecResult<usize> {
        let buf = self.source()?;
        let len = buf.len();
        let offset = match target {
            SeekFrom::Start(offset) => i64::try_from(offset).unwrap_or(i64::MAX),
            SeekFrom::Current(delta) => (self.pos as i64).saturating_add(delta),
            SeekFrom::End(delta) => (len as i64).saturating_add(delta),
        };
        if offset < 0 || offset > len as i64 {
            return Err(CodecError::InvalidOffset { offset, len });
        }
        self.pos = offset as usize;
        Ok(self.pos)
    }
}
