//! Chroma subsampling of horizontal pairs and 2x2 blocks
//!
//! Both modes replicate edge samples when the source has an odd width or height instead of
//! reading out of bounds or padding with zeros.

/// Average two 8 bit samples, rounding to nearest with ties going up
#[inline(always)]
pub fn average_pair(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b) + 1) >> 1) as u8
}

/// Average four 8 bit samples into an intensity in `0.0..=1.0`
///
/// Unlike [`average_pair`] this does no integer rounding, the sum is divided by `4 * 255`.
#[inline(always)]
pub fn average_block(samples: [u8; 4]) -> f32 {
    let sum: u16 = samples.iter().copied().map(u16::from).sum();

    f32::from(sum) / (255.0 * 4.0)
}

/// Source columns of the pair for output column `x`, the left column is repeated past the right edge
#[inline(always)]
pub(crate) fn pair_columns(width: usize, x: usize) -> [usize; 2] {
    let x0 = x * 2;
    let x1 = x0 + 1;

    if x1 < width { [x0, x1] } else { [x0, x0] }
}

/// Source rows of the block for output row `y`, the top row is repeated past the bottom edge
#[inline(always)]
pub(crate) fn block_rows(height: usize, y: usize) -> [usize; 2] {
    pair_columns(height, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_rounds_ties_up() {
        assert_eq!(average_pair(0, 0), 0);
        assert_eq!(average_pair(0, 1), 1);
        assert_eq!(average_pair(1, 2), 2);
        assert_eq!(average_pair(84, 43), 64);
        assert_eq!(average_pair(255, 21), 138);
        assert_eq!(average_pair(255, 254), 255);
        assert_eq!(average_pair(255, 255), 255);
    }

    #[test]
    fn pair_is_symmetric() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(average_pair(a, b), average_pair(b, a));
            }
        }
    }

    #[test]
    fn block_divides_by_1020() {
        assert_eq!(average_block([0; 4]), 0.0);
        assert_eq!(average_block([255; 4]), 1.0);
        assert_eq!(average_block([255, 0, 0, 0]), 0.25);
        assert_eq!(average_block([1, 0, 0, 0]), 1.0 / 1020.0);
        assert_eq!(average_block([127; 4]), 508.0 / 1020.0);
    }

    #[test]
    fn edge_replication() {
        assert_eq!(pair_columns(4, 0), [0, 1]);
        assert_eq!(pair_columns(4, 1), [2, 3]);
        assert_eq!(pair_columns(5, 2), [4, 4]);
        assert_eq!(pair_columns(1, 0), [0, 0]);

        assert_eq!(block_rows(3, 0), [0, 1]);
        assert_eq!(block_rows(3, 1), [2, 2]);
    }
}
