use super::{RowEncoder, pixel_at, quantize_intensity, sample_intensity};
use crate::chroma::{average_block, block_rows, pair_columns};
use crate::{Bitmap, rgb_to_yuv};

/// Full resolution luma plane
pub(crate) struct SeparateLuma<'a> {
    src: &'a Bitmap<&'a [u8]>,
}

impl<'a> SeparateLuma<'a> {
    pub(crate) fn new(src: &'a Bitmap<&'a [u8]>) -> Self {
        Self { src }
    }
}

impl RowEncoder for SeparateLuma<'_> {
    fn encode_row(&self, y: usize, dst: &mut [u8]) {
        let row = self.src.row(y);

        for (x, out) in dst.iter_mut().enumerate() {
            let yuv = rgb_to_yuv(pixel_at(row, x));

            *out = quantize_intensity(sample_intensity(yuv.y));
        }
    }
}

/// 4:2:0 chroma plane, U in the left half and V in the right half of every row
pub(crate) struct SeparateChroma<'a> {
    src: &'a Bitmap<&'a [u8]>,
}

impl<'a> SeparateChroma<'a> {
    pub(crate) fn new(src: &'a Bitmap<&'a [u8]>) -> Self {
        Self { src }
    }
}

impl RowEncoder for SeparateChroma<'_> {
    fn encode_row(&self, y: usize, dst: &mut [u8]) {
        let [y0, y1] = block_rows(self.src.height(), y);
        let top = self.src.row(y0);
        let bottom = self.src.row(y1);

        let width = self.src.width();
        let (u_half, v_half) = dst.split_at_mut(dst.len() / 2);

        for (x, (u_out, v_out)) in u_half.iter_mut().zip(v_half.iter_mut()).enumerate() {
            let [x0, x1] = pair_columns(width, x);

            let yuv00 = rgb_to_yuv(pixel_at(top, x0));
            let yuv01 = rgb_to_yuv(pixel_at(top, x1));
            let yuv10 = rgb_to_yuv(pixel_at(bottom, x0));
            let yuv11 = rgb_to_yuv(pixel_at(bottom, x1));

            let u = average_block([yuv00.u, yuv01.u, yuv10.u, yuv11.u]);
            let v = average_block([yuv00.v, yuv01.v, yuv10.v, yuv11.v]);

            *u_out = quantize_intensity(u);
            *v_out = quantize_intensity(v);
        }
    }
}

/// Full resolution, full precision alpha plane
pub(crate) struct SeparateAlpha<'a> {
    src: &'a Bitmap<&'a [u8]>,
}

impl<'a> SeparateAlpha<'a> {
    pub(crate) fn new(src: &'a Bitmap<&'a [u8]>) -> Self {
        Self { src }
    }
}

impl RowEncoder for SeparateAlpha<'_> {
    fn encode_row(&self, y: usize, dst: &mut [u8]) {
        let row = self.src.row(y);

        for (out, rgba) in dst.iter_mut().zip(row.chunks_exact(4)) {
            *out = quantize_intensity(sample_intensity(rgba[3]));
        }
    }
}
