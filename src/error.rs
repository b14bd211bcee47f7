use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    /// The file could not be opened or read.
    #[cfg(feature = "std")]
    #[error("cannot open bitmap: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a bitmap: signature is not \"BM\"")]
    UnrecognizedFormat,

    #[error("unsupported BMP compression: {0}")]
    UnsupportedCompression(u32),

    #[error("unsupported BMP bit depth: {0}")]
    UnsupportedBitDepth(u16),

    #[error("unsupported BMP palette: {colors} colors (expected 256)")]
    UnsupportedPalette { colors: u32 },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Coarse classification of a [`BitmapError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The file could not be opened or read.
    Io,
    /// The input is not a readable bitmap: wrong signature, bad or truncated header.
    Format,
    /// A valid bitmap this decoder does not handle (compression, bit depth, palette).
    UnsupportedFormat,
    /// A caller-supplied limit or buffer size was violated.
    Limit,
    /// Decoding was stopped through the [`enough::Stop`] token.
    Cancelled,
}

impl BitmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorKind::Io,
            Self::UnrecognizedFormat | Self::InvalidHeader(_) | Self::UnexpectedEof => {
                ErrorKind::Format
            }
            Self::UnsupportedCompression(_)
            | Self::UnsupportedBitDepth(_)
            | Self::UnsupportedPalette { .. } => ErrorKind::UnsupportedFormat,
            Self::DimensionsTooLarge { .. }
            | Self::LimitExceeded(_)
            | Self::BufferTooSmall { .. } => ErrorKind::Limit,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
