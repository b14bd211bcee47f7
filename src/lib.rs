//! # bmptex
//!
//! Windows BMP decoder producing RGB buffers ready for texture upload.
//!
//! ## Supported Input
//!
//! - Uncompressed (`BI_RGB`) bitmaps with a 40-byte `BITMAPINFOHEADER`
//! - **24-bit** direct color (B, G, R per pixel)
//! - **8-bit** palette color with a full 256-entry color table
//!
//! Everything else (RLE, bitfields, 1/4/16/32-bit, top-down images) is
//! rejected with a typed error rather than decoded to a blank image.
//!
//! ## Output
//!
//! [`Bitmap`] owns `3 * width * height` bytes of tightly packed R, G, B.
//! Scanlines keep the file's bottom-to-top order: row 0 is the bottom row.
//! Row padding in the file never reaches the output.
//!
//! ## Usage
//!
//! ```no_run
//! use bmptex::{decode_bmp_file, ErrorKind, Unstoppable};
//!
//! match decode_bmp_file("Solar_system/worldtex.bmp", Unstoppable) {
//!     Ok(texture) => {
//!         println!("{}x{}", texture.width, texture.height);
//!         let pixels: Vec<u8> = texture.into_pixels();
//!         // hand `pixels` to the texture upload, then drop it
//!         # drop(pixels);
//!     }
//!     Err(e) if e.kind() == ErrorKind::Io => eprintln!("cannot open: {e}"),
//!     Err(e) => eprintln!("bad bitmap: {e}"),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod encode;
mod error;
mod limits;
mod pixel;

use alloc::vec::Vec;

pub use bmp::BmpInfo;
pub use decode::{Bitmap, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{BitmapError, ErrorKind};
pub use limits::Limits;
pub use pixel::{PaletteOrder, RGB_BYTES};

/// Decode BMP bytes to bottom-up RGB.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Bitmap, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read and decode the BMP file at `path`.
///
/// A file that cannot be opened or read yields [`BitmapError::Io`].
#[cfg(feature = "std")]
pub fn decode_bmp_file(
    path: impl AsRef<std::path::Path>,
    stop: impl Stop,
) -> Result<Bitmap, BitmapError> {
    DecodeRequest::from_path(path).decode(stop)
}

/// Parse only the headers, without decoding pixels.
///
/// Succeeds only for bitmaps [`decode_bmp`] supports; the pixel array
/// itself is not checked.
pub fn probe_bmp(data: &[u8]) -> Result<BmpInfo, BitmapError> {
    bmp::probe(data)
}

/// Encode bottom-up RGB pixels as a 24-bit BMP.
pub fn encode_bmp(
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::rgb24().encode(pixels, width, height, stop)
}

/// Encode bottom-up palette indices as an 8-bit BMP.
pub fn encode_bmp_indexed(
    indices: &[u8],
    palette: &[[u8; 3]; 256],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::indexed8(palette).encode(indices, width, height, stop)
}
