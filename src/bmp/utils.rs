//! Scanline size arithmetic.

use crate::error::BitmapError;

/// Byte sizes of one scanline as stored in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowLayout {
    /// Row size including padding to a multiple of 4 bytes.
    pub padded: usize,
    /// Bytes actually occupied by pixel data.
    pub data: usize,
}

impl RowLayout {
    /// Rows are `4 * floor((bpp * width + 31) / 32)` bytes, of which
    /// `floor((bpp * width + 7) / 8)` carry pixels.
    pub(crate) fn new(width: u32, bit_count: u16) -> Result<Self, BitmapError> {
        let too_large =
            |_: core::num::TryFromIntError| BitmapError::DimensionsTooLarge { width, height: 0 };
        let bits = u64::from(width) * u64::from(bit_count);
        let padded = usize::try_from((bits + 31) / 32 * 4).map_err(too_large)?;
        let data = usize::try_from((bits + 7) / 8).map_err(too_large)?;
        Ok(Self { padded, data })
    }

    /// Pad bytes to skip after each scanline.
    pub(crate) fn padding(&self) -> usize {
        self.padded - self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_five_24bit_has_one_pad_byte() {
        let row = RowLayout::new(5, 24).unwrap();
        assert_eq!(row.padded, 16);
        assert_eq!(row.data, 15);
        assert_eq!(row.padding(), 1);
    }

    #[test]
    fn padding_24bit() {
        let pads: [usize; 4] = [1, 2, 3, 4].map(|w| RowLayout::new(w, 24).unwrap().padding());
        assert_eq!(pads, [1, 2, 3, 0]);
    }

    #[test]
    fn padding_8bit() {
        let pads: [usize; 5] = [1, 2, 3, 4, 5].map(|w| RowLayout::new(w, 8).unwrap().padding());
        assert_eq!(pads, [3, 2, 1, 0, 3]);
    }
}
