mod combined;
mod separate;

pub(crate) use combined::Combined;
pub(crate) use separate::{SeparateAlpha, SeparateChroma, SeparateLuma};

use crate::Pixel;

/// Fills a single destination row of a plane
///
/// Every row only depends on the immutable source, so rows can be visited in any order and from
/// any thread.
pub(crate) trait RowEncoder: Sync {
    fn encode_row(&self, y: usize, dst: &mut [u8]);
}

/// Strategy to drive a [`RowEncoder`] over a plane buffer with the given stride
pub(crate) type VisitRows = fn(&(dyn RowEncoder + Sync), &mut [u8], usize);

#[inline(never)]
pub(crate) fn visit_rows(encoder: &(dyn RowEncoder + Sync), buffer: &mut [u8], stride: usize) {
    for (y, row) in buffer.chunks_exact_mut(stride).enumerate() {
        encoder.encode_row(y, row);
    }
}

#[inline(always)]
pub(crate) fn pixel_at(row: &[u8], x: usize) -> Pixel {
    let rgba = &row[x * 4..x * 4 + 4];

    Pixel::new(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Store an intensity in `0.0..=1.0` as a byte, rounding to nearest
#[inline(always)]
pub(crate) fn quantize_intensity(intensity: f32) -> u8 {
    (intensity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Intensity of an 8 bit sample, as written into single channel planes
#[inline(always)]
pub(crate) fn sample_intensity(sample: u8) -> f32 {
    f32::from(sample) / 255.0
}
