//! BMP file and info headers.
//!
//! Layout (all little-endian):
//!
//! ```text
//! offset  size  field
//!      0     2  signature "BM"
//!      2     4  file size
//!      6     2  reserved
//!      8     2  reserved
//!     10     4  pixel data offset
//!     14     4  info header size (40)
//!     18     4  width  (i32)
//!     22     4  height (i32, positive = bottom-up)
//!     26     2  planes
//!     28     2  bits per pixel
//!     30     4  compression
//!     34     4  image data size
//!     38     4  horizontal pixels per meter
//!     42     4  vertical pixels per meter
//!     46     4  colors used
//!     50     4  important colors
//! ```

use log::{trace, warn};

use super::cursor::Cursor;
use crate::error::BitmapError;

/// `"BM"` read as a little-endian u16.
pub(crate) const BMP_MAGIC: u16 = 0x4D42;
pub(crate) const FILE_HEADER_SIZE: u32 = 14;
pub(crate) const INFO_HEADER_SIZE: u32 = 40;
pub(crate) const BI_RGB: u32 = 0;
pub(crate) const PALETTE_COLORS: u32 = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FileHeader {
    pub file_size: u32,
    pub data_offset: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Header summary of a decodable BMP, from [`crate::probe_bmp`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    /// 8 or 24.
    pub bit_count: u16,
    /// Number of color table entries; 0 for 24-bit images.
    pub palette_len: u32,
    /// Byte offset of the first scanline.
    pub data_offset: u32,
    /// File size as recorded in the header (not verified).
    pub file_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
}

/// Both headers, validated.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Headers {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub width: u32,
    pub height: u32,
    pub palette_len: u32,
}

impl Headers {
    /// Byte offset of the color table (immediately after the info header).
    pub(crate) fn palette_offset(&self) -> usize {
        FILE_HEADER_SIZE as usize + self.info.header_size as usize
    }

    pub(crate) fn summary(&self) -> BmpInfo {
        BmpInfo {
            width: self.width,
            height: self.height,
            bit_count: self.info.bit_count,
            palette_len: self.palette_len,
            data_offset: self.file.data_offset,
            file_size: self.file.file_size,
            x_pixels_per_meter: self.info.x_pixels_per_meter,
            y_pixels_per_meter: self.info.y_pixels_per_meter,
        }
    }
}

fn read_file_header(bytes: &mut Cursor<'_>) -> Result<FileHeader, BitmapError> {
    let magic = bytes.get_u16_le()?;
    if magic != BMP_MAGIC {
        trace!("bad BMP signature: {magic:#06x}");
        return Err(BitmapError::UnrecognizedFormat);
    }
    let file_size = bytes.get_u32_le()?;
    let _reserved1 = bytes.get_u16_le()?;
    let _reserved2 = bytes.get_u16_le()?;
    let data_offset = bytes.get_u32_le()?;
    Ok(FileHeader {
        file_size,
        data_offset,
    })
}

fn read_info_header(bytes: &mut Cursor<'_>) -> Result<InfoHeader, BitmapError> {
    Ok(InfoHeader {
        header_size: bytes.get_u32_le()?,
        width: bytes.get_i32_le()?,
        height: bytes.get_i32_le()?,
        planes: bytes.get_u16_le()?,
        bit_count: bytes.get_u16_le()?,
        compression: bytes.get_u32_le()?,
        image_size: bytes.get_u32_le()?,
        x_pixels_per_meter: bytes.get_i32_le()?,
        y_pixels_per_meter: bytes.get_i32_le()?,
        colors_used: bytes.get_u32_le()?,
        colors_important: bytes.get_u32_le()?,
    })
}

/// Read and validate both headers from the start of `data`.
///
/// Compression is checked before anything else in the info header, so an
/// RLE file reports [`BitmapError::UnsupportedCompression`] even when its
/// other fields are also unusable.
pub(crate) fn parse_headers(data: &[u8]) -> Result<Headers, BitmapError> {
    let mut bytes = Cursor::new(data);
    let file = read_file_header(&mut bytes)?;
    let info = read_info_header(&mut bytes)?;

    trace!("BMP file size: {}", file.file_size);
    trace!("BMP data offset: {}", file.data_offset);
    trace!("BMP info header size: {}", info.header_size);
    trace!("BMP dimensions: {}x{}", info.width, info.height);
    trace!("BMP bit count: {}", info.bit_count);
    trace!("BMP compression: {}", info.compression);
    trace!("BMP image size: {}", info.image_size);
    trace!("BMP colors used: {}", info.colors_used);

    if info.compression != BI_RGB {
        return Err(BitmapError::UnsupportedCompression(info.compression));
    }

    if info.header_size < INFO_HEADER_SIZE {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "info header size {} is smaller than {INFO_HEADER_SIZE}",
            info.header_size
        )));
    }
    if info.header_size != INFO_HEADER_SIZE {
        warn!(
            "BMP info header size is {}, reading only the first {INFO_HEADER_SIZE} bytes",
            info.header_size
        );
    }
    if info.planes != 1 {
        warn!("BMP planes field is {}, expected 1", info.planes);
    }

    let width = positive_dimension("width", info.width)?;
    let height = positive_dimension("height", info.height)?;

    let palette_len = match info.bit_count {
        24 => 0,
        8 => {
            let colors = info.colors_used;
            if colors != PALETTE_COLORS {
                return Err(BitmapError::UnsupportedPalette { colors });
            }
            if info.colors_important > colors {
                warn!(
                    "BMP important colors ({}) exceeds palette size ({colors})",
                    info.colors_important
                );
            }
            colors
        }
        other => return Err(BitmapError::UnsupportedBitDepth(other)),
    };

    Ok(Headers {
        file,
        info,
        width,
        height,
        palette_len,
    })
}

fn positive_dimension(name: &str, value: i32) -> Result<u32, BitmapError> {
    if value <= 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP {name} must be positive, got {value}"
        )));
    }
    Ok(value.unsigned_abs())
}
