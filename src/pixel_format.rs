use crate::StrictApi as _;

/// Supported bitmap formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// Single RGBA interleaved plane, 8 bits per channel
    RGBA,

    /// Single intensity channel, 8 bits per sample (alpha-only texture)
    A8,
}

impl PixelFormat {
    /// Number of 8 bit channels per pixel
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::RGBA => 4,
            PixelFormat::A8 => 1,
        }
    }

    /// Calculate the required buffer size in bytes given the [`PixelFormat`] self and image dimensions (in pixel width, height).
    #[deny(clippy::arithmetic_side_effects)]
    pub fn buffer_size(self, width: usize, height: usize) -> usize {
        self.packed_stride(width).strict_mul_(height)
    }

    /// Calculate the stride of a tightly packed row
    #[deny(clippy::arithmetic_side_effects)]
    pub fn packed_stride(self, width: usize) -> usize {
        width.strict_mul_(self.channels())
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        [PixelFormat::RGBA, PixelFormat::A8]
    }
}
