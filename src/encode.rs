use alloc::vec::Vec;

use enough::Stop;

use crate::error::BitmapError;
use crate::pixel::PaletteOrder;

enum EncodeFormat<'a> {
    Rgb24,
    Indexed8(&'a [[u8; 3]; 256]),
}

/// Builder for writing an uncompressed BMP.
///
/// Pixel input uses the same bottom-up convention as [`crate::Bitmap`], so
/// decoding the output reproduces the input.
pub struct EncodeRequest<'a> {
    format: EncodeFormat<'a>,
    palette_order: PaletteOrder,
}

impl<'a> EncodeRequest<'a> {
    /// 24-bit direct color. Input is `3 * width * height` RGB bytes.
    pub fn rgb24() -> Self {
        Self {
            format: EncodeFormat::Rgb24,
            palette_order: PaletteOrder::default(),
        }
    }

    /// 8-bit palette color. Input is `width * height` palette indices.
    pub fn indexed8(palette: &'a [[u8; 3]; 256]) -> Self {
        Self {
            format: EncodeFormat::Indexed8(palette),
            palette_order: PaletteOrder::default(),
        }
    }

    /// Byte order used when writing the color table.
    pub fn with_palette_order(mut self, order: PaletteOrder) -> Self {
        self.palette_order = order;
        self
    }

    pub fn encode(
        self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, BitmapError> {
        stop.check()?;
        match self.format {
            EncodeFormat::Rgb24 => crate::bmp::encode_rgb24(pixels, width, height, &stop),
            EncodeFormat::Indexed8(palette) => crate::bmp::encode_indexed8(
                pixels,
                palette,
                self.palette_order,
                width,
                height,
                &stop,
            ),
        }
    }
}
