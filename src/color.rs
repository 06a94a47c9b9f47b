//! RGB to YUV conversion of single pixels

/// 8 bit RGBA pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A pixel converted to YUV, alpha is passed through untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct YuvSample {
    pub y: u8,
    pub u: u8,
    pub v: u8,
    pub a: u8,
}

/// Truncate towards zero and saturate into `0..=255`
///
/// This intentionally does not round, every encoded byte depends on it.
#[inline(always)]
pub fn clamp8(value: f32) -> u8 {
    // float to int `as` casts truncate and saturate (NaN becomes 0)
    value as u8
}

/// Convert a pixel to full range YUV using BT.601 style weights
#[inline]
pub fn rgb_to_yuv(pixel: Pixel) -> YuvSample {
    let r = f32::from(pixel.r);
    let g = f32::from(pixel.g);
    let b = f32::from(pixel.b);

    let y = (0.299 * r) + (0.587 * g) + (0.114 * b);
    let u = (-0.169 * r) + (-0.331 * g) + (0.499 * b) + 128.0;
    let v = (0.499 * r) + (-0.418 * g) + (-0.0813 * b) + 128.0;

    YuvSample {
        y: clamp8(y),
        u: clamp8(u),
        v: clamp8(v),
        a: pixel.a,
    }
}
