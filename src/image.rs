use crate::{Pixel, PixelFormat};

/// Row-major, top-to-bottom bitmap with tightly packed rows
///
/// `S` is the backing storage, `Vec<u8>` for owned bitmaps (all encoder outputs) or a borrowed
/// `&[u8]` to encode a caller's buffer without copying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap<S = Vec<u8>> {
    format: PixelFormat,
    buffer: S,
    width: usize,
    height: usize,
}

/// Everything that can go wrong when constructing a [`Bitmap`]
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("width or height must not be zero")]
    InvalidDimensions,

    #[error("buffer too small, expected at least {expected} bytes but got {got}")]
    BufferTooSmall { expected: usize, got: usize },
}

impl Bitmap<Vec<u8>> {
    /// Zeroed bitmap, dimensions are not checked
    pub fn blank(format: PixelFormat, width: usize, height: usize) -> Self {
        Self {
            format,
            buffer: vec![0u8; format.buffer_size(width, height)],
            width,
            height,
        }
    }

    /// Build an RGBA bitmap from pixels given in row-major order
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: impl IntoIterator<Item = Pixel>,
    ) -> Result<Self, ImageError> {
        let buffer = pixels
            .into_iter()
            .flat_map(|Pixel { r, g, b, a }| [r, g, b, a])
            .collect();

        Self::from_buffer(PixelFormat::RGBA, buffer, width, height)
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}

impl<S: AsRef<[u8]>> Bitmap<S> {
    pub fn from_buffer(
        format: PixelFormat,
        buffer: S,
        width: usize,
        height: usize,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions);
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(format.channels()))
            .ok_or(ImageError::BufferTooSmall {
                expected: usize::MAX,
                got: buffer.as_ref().len(),
            })?;

        if buffer.as_ref().len() < expected {
            return Err(ImageError::BufferTooSmall {
                expected,
                got: buffer.as_ref().len(),
            });
        }

        Ok(Self {
            format,
            buffer,
            width,
            height,
        })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.format.packed_stride(self.width)
    }

    /// Image bytes without any trailing slack of the backing storage
    pub fn buffer(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.format.buffer_size(self.width, self.height)]
    }

    pub fn into_buffer(self) -> S {
        self.buffer
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.stride();
        &self.buffer()[y * stride..(y + 1) * stride]
    }

    /// Read an RGBA pixel
    ///
    /// # Panics
    ///
    /// If the bitmap is not [`PixelFormat::RGBA`] or the coordinates are out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        assert_eq!(self.format, PixelFormat::RGBA);
        assert!(x < self.width && y < self.height);

        let offset = y * self.stride() + x * 4;
        let rgba = &self.buffer.as_ref()[offset..offset + 4];

        Pixel::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Read a single channel sample
    ///
    /// # Panics
    ///
    /// If the bitmap is not [`PixelFormat::A8`] or the coordinates are out of bounds
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        assert_eq!(self.format, PixelFormat::A8);
        assert!(x < self.width && y < self.height);

        self.buffer.as_ref()[y * self.width + x]
    }

    /// Read a single channel sample as intensity in `0.0..=1.0`
    pub fn intensity(&self, x: usize, y: usize) -> f32 {
        crate::formats::sample_intensity(self.sample(x, y))
    }

    pub(crate) fn as_view(&self) -> Bitmap<&[u8]> {
        Bitmap {
            format: self.format,
            buffer: self.buffer(),
            width: self.width,
            height: self.height,
        }
    }
}
