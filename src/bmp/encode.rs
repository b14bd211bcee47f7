//! BMP encoder: uncompressed 24-bit and 8-bit palette BMP.
//!
//! Input buffers use the decoder's convention: row 0 is the bottom
//! scanline, so rows are written in buffer order.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{BI_RGB, FILE_HEADER_SIZE, INFO_HEADER_SIZE, PALETTE_COLORS};
use super::utils::RowLayout;
use crate::error::BitmapError;
use crate::pixel::{PaletteOrder, RGB_BYTES};

const HEADERS_SIZE: usize = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize;
const PALETTE_SIZE: usize = PALETTE_COLORS as usize * 4;

/// Encode bottom-up RGB pixels as a 24-bit BMP.
pub(crate) fn encode_rgb24(
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    let w = width as usize;
    let expected = checked_len(width, height, RGB_BYTES)?;
    check_input(pixels, expected)?;

    let row = RowLayout::new(width, 24)?;
    let (mut out, pixel_data_size) = start_file(width, height, row, 24, 0)?;
    debug_assert_eq!(out.len(), HEADERS_SIZE);

    for (row_idx, src) in pixels[..expected].chunks_exact(w * RGB_BYTES).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in src.chunks_exact(3) {
            out.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        out.extend(core::iter::repeat_n(0u8, row.padding()));
    }
    debug_assert_eq!(out.len(), HEADERS_SIZE + pixel_data_size);

    Ok(out)
}

/// Encode bottom-up palette indices as an 8-bit BMP with a 256-entry table.
pub(crate) fn encode_indexed8(
    indices: &[u8],
    palette: &[[u8; 3]; 256],
    order: PaletteOrder,
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    let w = width as usize;
    let expected = checked_len(width, height, 1)?;
    check_input(indices, expected)?;

    let row = RowLayout::new(width, 8)?;
    let (mut out, _) = start_file(width, height, row, 8, PALETTE_COLORS)?;

    for color in palette {
        out.extend_from_slice(&order.to_entry(*color));
    }
    debug_assert_eq!(out.len(), HEADERS_SIZE + PALETTE_SIZE);

    for (row_idx, src) in indices[..expected].chunks_exact(w).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(src);
        out.extend(core::iter::repeat_n(0u8, row.padding()));
    }

    Ok(out)
}

fn checked_len(width: u32, height: u32, bytes_per_pixel: usize) -> Result<usize, BitmapError> {
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "cannot encode a {width}x{height} bitmap"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(bytes_per_pixel))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}

fn check_input(pixels: &[u8], expected: usize) -> Result<(), BitmapError> {
    if pixels.len() < expected {
        return Err(BitmapError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Allocate the output and write both headers. Returns the buffer and the
/// pixel array size.
fn start_file(
    width: u32,
    height: u32,
    row: RowLayout,
    bpp: u16,
    colors: u32,
) -> Result<(Vec<u8>, usize), BitmapError> {
    let too_large = || BitmapError::DimensionsTooLarge { width, height };
    let pixel_data_size = row
        .padded
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    let data_offset = HEADERS_SIZE + colors as usize * 4;
    let file_size = pixel_data_size
        .checked_add(data_offset)
        .filter(|&size| u32::try_from(size).is_ok())
        .ok_or_else(too_large)?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(
        &mut out,
        file_size as u32,
        data_offset as u32,
        pixel_data_size as u32,
        width,
        height,
        bpp,
        colors,
    );
    Ok((out, pixel_data_size))
}

#[allow(clippy::too_many_arguments)]
fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: u32,
    data_offset: u32,
    pixel_data_size: u32,
    width: u32,
    height: u32,
    bpp: u16,
    colors: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&data_offset.to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(&BI_RGB.to_le_bytes());
    out.extend_from_slice(&pixel_data_size.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&colors.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    #[test]
    fn rgb24_layout() {
        // 1x1 red: 54 header bytes + 3 pixel bytes + 1 pad byte
        let out = encode_rgb24(&[255, 0, 0], 1, 1, &Unstoppable).unwrap();
        assert_eq!(out.len(), 58);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(u32::from_le_bytes(out[2..6].try_into().unwrap()), 58);
        assert_eq!(u32::from_le_bytes(out[10..14].try_into().unwrap()), 54);
        assert_eq!(u16::from_le_bytes(out[28..30].try_into().unwrap()), 24);
        assert_eq!(&out[54..], &[0, 0, 255, 0]);
    }

    #[test]
    fn indexed8_layout() {
        let mut palette = [[0u8; 3]; 256];
        palette[1] = [10, 20, 30];
        let out =
            encode_indexed8(&[1, 0], &palette, PaletteOrder::Bgrx, 2, 1, &Unstoppable).unwrap();
        assert_eq!(out.len(), 54 + 1024 + 4);
        assert_eq!(u32::from_le_bytes(out[10..14].try_into().unwrap()), 1078);
        assert_eq!(u32::from_le_bytes(out[46..50].try_into().unwrap()), 256);
        assert_eq!(&out[58..62], &[30, 20, 10, 0]);
        assert_eq!(&out[1078..], &[1, 0, 0, 0]);
    }

    #[test]
    fn short_input_rejected() {
        assert!(matches!(
            encode_rgb24(&[0; 5], 1, 2, &Unstoppable),
            Err(BitmapError::BufferTooSmall {
                needed: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            encode_rgb24(&[], 0, 3, &Unstoppable),
            Err(BitmapError::InvalidHeader(_))
        ));
    }
}
