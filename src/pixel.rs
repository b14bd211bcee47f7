/// Bytes per decoded pixel (tightly packed R, G, B).
pub const RGB_BYTES: usize = 3;

/// Byte order of the four-byte entries in an 8-bit color table.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteOrder {
    /// Red, green, blue, unused.
    #[default]
    Rgbx,
    /// Blue, green, red, unused (the Windows `RGBQUAD` layout).
    Bgrx,
}

impl PaletteOrder {
    /// Convert a raw table entry to an RGB triple.
    pub(crate) fn to_rgb(self, entry: [u8; 4]) -> [u8; 3] {
        match self {
            Self::Rgbx => [entry[0], entry[1], entry[2]],
            Self::Bgrx => [entry[2], entry[1], entry[0]],
        }
    }

    /// Convert an RGB triple to a raw table entry.
    pub(crate) fn to_entry(self, [r, g, b]: [u8; 3]) -> [u8; 4] {
        match self {
            Self::Rgbx => [r, g, b, 0],
            Self::Bgrx => [b, g, r, 0],
        }
    }
}
