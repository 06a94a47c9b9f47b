use super::{RowEncoder, pixel_at};
use crate::alpha::pack_nibbles;
use crate::chroma::{average_pair, pair_columns};
use crate::{Bitmap, YuvSample, rgb_to_yuv};

/// Half width RGBA plane, one destination pixel per horizontal source pair
///
/// Without `PACK_ALPHA` a pixel is `[y0, y1, u, v]`, see [`pack_yuva`] for the alpha layout.
pub(crate) struct Combined<'a, const PACK_ALPHA: bool> {
    src: &'a Bitmap<&'a [u8]>,
}

impl<'a, const PACK_ALPHA: bool> Combined<'a, PACK_ALPHA> {
    pub(crate) fn new(src: &'a Bitmap<&'a [u8]>) -> Self {
        Self { src }
    }
}

impl<const PACK_ALPHA: bool> RowEncoder for Combined<'_, PACK_ALPHA> {
    fn encode_row(&self, y: usize, dst: &mut [u8]) {
        let row = self.src.row(y);
        let width = self.src.width();

        for (x, out) in dst.chunks_exact_mut(4).enumerate() {
            let [x0, x1] = pair_columns(width, x);

            let yuv0 = rgb_to_yuv(pixel_at(row, x0));
            let yuv1 = rgb_to_yuv(pixel_at(row, x1));

            let u = average_pair(yuv0.u, yuv1.u);
            let v = average_pair(yuv0.v, yuv1.v);

            let rgba = if PACK_ALPHA {
                pack_yuva(yuv0, yuv1, u, v)
            } else {
                [yuv0.y, yuv1.y, u, v]
            };

            out.copy_from_slice(&rgba);
        }
    }
}

/// Pack a YUV pair and its alpha into a single RGBA pixel
///
/// The two low bits of each luma sample carry the two high bits of U (red) and V (green),
/// blue holds the remaining middle bits `u[5:2]` and `v[5:2]`, alpha holds both alpha samples
/// at 4 bits each. The two lowest bits of U and V are dropped.
#[inline(always)]
pub(crate) fn pack_yuva(yuv0: YuvSample, yuv1: YuvSample, u: u8, v: u8) -> [u8; 4] {
    [
        (yuv0.y & 0xFC) | ((u >> 6) & 0x3),
        (yuv1.y & 0xFC) | ((v >> 6) & 0x3),
        ((u << 2) & 0xF0) | ((v >> 2) & 0xF),
        pack_nibbles(yuv0.a, yuv1.a),
    ]
}
