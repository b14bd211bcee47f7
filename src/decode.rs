use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::{PaletteOrder, RGB_BYTES};

/// Decoded bitmap: tightly packed RGB, row 0 is the bottom scanline.
///
/// This is the order BMP stores rows in and the order OpenGL expects for
/// `glTexImage2D` with texture coordinate `t = 0` at the bottom, so the
/// buffer can be uploaded as-is. Use [`Bitmap::to_top_down`] for consumers
/// that want a top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Bitmap {
    pub(crate) fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * RGB_BYTES);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Access the pixel data (`3 * width * height` bytes).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * RGB_BYTES
    }

    /// Row `y`, counted from the bottom of the image.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride();
        self.pixels.get(start..start + self.stride())
    }

    /// RGB triple at column `x` of row `y` (bottom-up).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width {
            return None;
        }
        let off = x as usize * RGB_BYTES;
        let px = self.row(y)?.get(off..off + RGB_BYTES)?;
        Some([px[0], px[1], px[2]])
    }

    /// Copy of the pixels with row 0 at the top of the image.
    pub fn to_top_down(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len());
        for row in self.pixels.rchunks_exact(self.stride()) {
            out.extend_from_slice(row);
        }
        out
    }

    /// Reinterpret pixel data as a typed RGB slice.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        self.pixels().as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] (bottom-up rows).
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(self.as_rgb(), self.width as usize, self.height as usize)
    }
}

enum Source<'a> {
    Bytes(&'a [u8]),
    #[cfg(feature = "std")]
    Path(PathBuf),
}

/// Builder for decoding a BMP from memory or from a file.
///
/// ```no_run
/// use bmptex::{DecodeRequest, Limits, PaletteOrder, Unstoppable};
///
/// let limits = Limits {
///     max_pixels: Some(8192 * 4096),
///     ..Default::default()
/// };
/// let bitmap = DecodeRequest::from_path("Solar_system/2k_sun.bmp")
///     .with_limits(&limits)
///     .with_palette_order(PaletteOrder::Bgrx)
///     .decode(Unstoppable)?;
/// assert_eq!(bitmap.pixels().len(), 3 * bitmap.width as usize * bitmap.height as usize);
/// # Ok::<(), bmptex::BitmapError>(())
/// ```
pub struct DecodeRequest<'a> {
    source: Source<'a>,
    limits: Option<&'a Limits>,
    palette_order: PaletteOrder,
}

impl<'a> DecodeRequest<'a> {
    /// Decode BMP bytes already in memory.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            source: Source::Bytes(data),
            limits: None,
            palette_order: PaletteOrder::default(),
        }
    }

    /// Decode the BMP file at `path`.
    #[cfg(feature = "std")]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::Path(path.as_ref().to_path_buf()),
            limits: None,
            palette_order: PaletteOrder::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Byte order of 8-bit color table entries. Defaults to [`PaletteOrder::Rgbx`].
    pub fn with_palette_order(mut self, order: PaletteOrder) -> Self {
        self.palette_order = order;
        self
    }

    /// Run the decode. All-or-nothing: on error no pixels are returned.
    pub fn decode(self, stop: impl Stop) -> Result<Bitmap, BitmapError> {
        match self.source {
            Source::Bytes(data) => {
                crate::bmp::decode(data, self.limits, self.palette_order, &stop)
            }
            #[cfg(feature = "std")]
            Source::Path(path) => {
                // The file handle is closed before any parsing happens.
                let data = std::fs::read(&path).map_err(|e| {
                    log::debug!("cannot open bitmap {}: {e}", path.display());
                    BitmapError::Io(e)
                })?;
                crate::bmp::decode(&data, self.limits, self.palette_order, &stop)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Bitmap {
        // bottom row: red, green; top row: blue, white
        Bitmap::new(
            alloc::vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
            2,
            2,
        )
    }

    #[test]
    fn rows_are_bottom_up() {
        let bmp = two_by_two();
        assert_eq!(bmp.stride(), 6);
        assert_eq!(bmp.row(0).unwrap(), &[255, 0, 0, 0, 255, 0]);
        assert_eq!(bmp.pixel(0, 1), Some([0, 0, 255]));
        assert_eq!(bmp.pixel(1, 1), Some([255, 255, 255]));
        assert_eq!(bmp.pixel(2, 0), None);
        assert_eq!(bmp.row(2), None);
    }

    #[test]
    fn top_down_flips_rows() {
        let bmp = two_by_two();
        assert_eq!(
            bmp.to_top_down(),
            [0, 0, 255, 255, 255, 255, 255, 0, 0, 0, 255, 0]
        );
        assert_eq!(bmp.into_pixels().len(), 12);
    }
}
