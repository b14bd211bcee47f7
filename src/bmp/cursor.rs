//! Bounds-checked little-endian reader over a byte slice.
//!
//! Every read fails with [`BitmapError::UnexpectedEof`] on a short read
//! instead of yielding garbage.

use crate::error::BitmapError;

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), BitmapError> {
        if pos > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        let new_pos = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        self.set_position(new_pos)
    }

    /// Borrow the next `n` bytes and advance past them.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], BitmapError> {
        let end = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    pub(crate) fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes()?))
    }

    pub(crate) fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes()?))
    }

    pub(crate) fn get_i32_le(&mut self) -> Result<i32, BitmapError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [0x42, 0x4D, 0x78, 0x56, 0x34, 0x12, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut c = Cursor::new(&data);
        assert_eq!(c.get_u16_le().unwrap(), 0x4D42);
        assert_eq!(c.get_u32_le().unwrap(), 0x1234_5678);
        assert_eq!(c.get_i32_le().unwrap(), -1);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn short_read_is_an_error() {
        let data = [1, 2, 3];
        let mut c = Cursor::new(&data);
        assert!(matches!(c.get_u32_le(), Err(BitmapError::UnexpectedEof)));
        // a failed read does not consume anything
        assert_eq!(c.position(), 0);
        assert_eq!(c.get_u16_le().unwrap(), 0x0201);
        assert!(matches!(c.get_u16_le(), Err(BitmapError::UnexpectedEof)));
    }

    #[test]
    fn seek_past_end_fails() {
        let data = [0u8; 4];
        let mut c = Cursor::new(&data);
        assert!(c.set_position(4).is_ok());
        assert!(c.set_position(5).is_err());
        c.set_position(2).unwrap();
        assert!(c.skip(3).is_err());
        assert!(c.skip(usize::MAX).is_err());
        assert!(c.skip(2).is_ok());
    }
}
