//! BMP decoder and encoder internals.
//!
//! Use the top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

mod cursor;
mod decode;
mod encode;
pub(crate) mod header;
mod utils;

use crate::decode::Bitmap;
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::PaletteOrder;
use alloc::vec::Vec;
use enough::Stop;

pub use header::BmpInfo;

/// Parse and validate the headers only.
pub(crate) fn probe(data: &[u8]) -> Result<BmpInfo, BitmapError> {
    Ok(header::parse_headers(data)?.summary())
}

/// Decode BMP data to bottom-up RGB.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    palette_order: PaletteOrder,
    stop: &dyn Stop,
) -> Result<Bitmap, BitmapError> {
    let headers = header::parse_headers(data)?;
    if let Some(limits) = limits {
        limits.check(headers.width, headers.height)?;
        limits.check_memory(decode::output_buf_size(&headers)?)?;
    }
    stop.check()?;
    let pixels = decode::decode_pixels(data, &headers, palette_order, stop)?;
    Ok(Bitmap::new(pixels, headers.width, headers.height))
}

/// Encode bottom-up RGB as a 24-bit BMP.
pub(crate) fn encode_rgb24(
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    encode::encode_rgb24(pixels, width, height, stop)
}

/// Encode bottom-up palette indices as an 8-bit BMP.
pub(crate) fn encode_indexed8(
    indices: &[u8],
    palette: &[[u8; 3]; 256],
    order: PaletteOrder,
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    encode::encode_indexed8(indices, palette, order, width, height, stop)
}
