//! Pixel extraction for uncompressed 8-bit palette and 24-bit direct color.
//!
//! Scanlines are copied to the output in file order, so row 0 of the result
//! is the bottom row of the image.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;
use log::trace;

use super::cursor::Cursor;
use super::header::Headers;
use super::utils::RowLayout;
use crate::error::BitmapError;
use crate::pixel::{PaletteOrder, RGB_BYTES};

type Palette = [[u8; 3]; 256];

/// Size of the RGB output buffer for the given headers.
pub(crate) fn output_buf_size(headers: &Headers) -> Result<usize, BitmapError> {
    let too_large = BitmapError::DimensionsTooLarge {
        width: headers.width,
        height: headers.height,
    };
    (headers.width as usize)
        .checked_mul(headers.height as usize)
        .and_then(|wh| wh.checked_mul(RGB_BYTES))
        .ok_or(too_large)
}

/// Decode the pixel array described by `headers` into a new RGB buffer.
pub(crate) fn decode_pixels(
    data: &[u8],
    headers: &Headers,
    palette_order: PaletteOrder,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    let row = RowLayout::new(headers.width, headers.info.bit_count)?;
    trace!(
        "BMP row: {} bytes padded, {} data, {} padding",
        row.padded,
        row.data,
        row.padding()
    );

    let mut bytes = Cursor::new(data);

    // Read the palette first so a truncated table fails before allocation.
    let palette = if headers.info.bit_count == 8 {
        bytes.set_position(headers.palette_offset())?;
        Some(read_palette(&mut bytes, palette_order)?)
    } else {
        None
    };

    bytes.set_position(headers.file.data_offset as usize)?;
    trace!("BMP pixel data at offset {}", bytes.position());
    // Every row but the last must carry its padding.
    let pixel_array_len = (headers.height as usize - 1)
        .checked_mul(row.padded)
        .and_then(|n| n.checked_add(row.data))
        .ok_or(BitmapError::UnexpectedEof)?;
    if pixel_array_len > bytes.remaining() {
        return Err(BitmapError::UnexpectedEof);
    }

    let out_width = headers.width as usize * RGB_BYTES;
    let mut buf = vec![0u8; output_buf_size(headers)?];

    for (row_idx, out) in buf.chunks_exact_mut(out_width).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let src = bytes.take(row.data)?;
        match &palette {
            Some(palette) => expand_palette_row(src, out, palette),
            None => swap_bgr_row(src, out),
        }
        bytes.skip(row.padding().min(bytes.remaining()))?;
    }

    Ok(buf)
}

fn read_palette(
    bytes: &mut Cursor<'_>,
    order: PaletteOrder,
) -> Result<Box<Palette>, BitmapError> {
    let mut palette = Box::new([[0u8; 3]; 256]);
    for entry in palette.iter_mut() {
        *entry = order.to_rgb(bytes.read_fixed_bytes::<4>()?);
    }
    Ok(palette)
}

fn swap_bgr_row(src: &[u8], out: &mut [u8]) {
    for (px, bgr) in out.chunks_exact_mut(3).zip(src.chunks_exact(3)) {
        px[0] = bgr[2];
        px[1] = bgr[1];
        px[2] = bgr[0];
    }
}

fn expand_palette_row(src: &[u8], out: &mut [u8], palette: &Palette) {
    for (px, &idx) in out.chunks_exact_mut(3).zip(src) {
        px.copy_from_slice(&palette[usize::from(idx)]);
    }
}
