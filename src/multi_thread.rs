use crate::formats::RowEncoder;
use crate::{Bitmap, EncodeError, Encoded, Variant, encode, encode_with};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// Like [`encode`] but every output plane is split into bands of rows which are encoded in parallel
///
/// Produces exactly the same bytes as [`encode`].
#[inline(never)]
pub fn encode_multi_thread<S: AsRef<[u8]>>(
    src: &Bitmap<S>,
    variant: Variant,
) -> Result<Vec<Encoded>, EncodeError> {
    if num_cpus::get() == 1 {
        return encode(src, variant);
    }

    encode_with(src, variant, visit_rows_multi_thread)
}

fn visit_rows_multi_thread(encoder: &(dyn RowEncoder + Sync), buffer: &mut [u8], stride: usize) {
    let threads = num_cpus::get();

    let rows = buffer.len() / stride;
    let rows_per_band = rows.div_ceil(threads).max(1);

    buffer
        .par_chunks_mut(rows_per_band * stride)
        .enumerate()
        .for_each(|(band, band_rows)| {
            let first_row = band * rows_per_band;

            for (i, row) in band_rows.chunks_exact_mut(stride).enumerate() {
                encoder.encode_row(first_row + i, row);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pixel;

    #[test]
    fn bands_cover_every_row() {
        struct RowIndex;

        impl RowEncoder for RowIndex {
            fn encode_row(&self, y: usize, dst: &mut [u8]) {
                dst.fill(y as u8);
            }
        }

        for rows in [1, 2, 7, 64, 131] {
            let mut buffer = vec![0xFFu8; rows * 3];
            visit_rows_multi_thread(&RowIndex, &mut buffer, 3);

            for (y, row) in buffer.chunks_exact(3).enumerate() {
                assert_eq!(row, [y as u8; 3]);
            }
        }
    }

    #[test]
    fn same_output_as_single_threaded() {
        let (width, height) = (67, 45);
        let src = Bitmap::from_pixels(
            width,
            height,
            (0..width * height).map(|i| {
                let i = i as u32;
                Pixel::new((i * 7) as u8, (i * 13) as u8, (i / 3) as u8, (i * 31) as u8)
            }),
        )
        .unwrap();

        for variant in Variant::variants() {
            assert_eq!(
                encode_multi_thread(&src, variant).unwrap(),
                encode(&src, variant).unwrap()
            );
        }
    }
}
