//! Alpha packing
//!
//! [`Variant::CombinedAlpha`](crate::Variant::CombinedAlpha) keeps 4 bits per alpha sample and
//! stores a horizontal pair in a single byte, the maximum error is `15 / 255`.
//! [`Variant::SeparatePlanarAlpha`](crate::Variant::SeparatePlanarAlpha) keeps the full 8 bits
//! in a plane of its own.

/// Largest difference between an alpha sample and its nibble packed representation
pub const NIBBLE_MAX_ERROR: u8 = 0x0F;

/// Pack the high nibbles of two alpha samples, `a0` into the high and `a1` into the low nibble
#[inline(always)]
pub fn pack_nibbles(a0: u8, a1: u8) -> u8 {
    (a0 & 0xF0) | ((a1 >> 4) & 0x0F)
}

/// Inverse of [`pack_nibbles`], the low nibbles of both samples are lost
#[inline(always)]
pub fn unpack_nibbles(packed: u8) -> (u8, u8) {
    (packed & 0xF0, (packed << 4) & 0xF0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_high_nibbles() {
        assert_eq!(pack_nibbles(255, 128), 0xF8);
        assert_eq!(pack_nibbles(0x12, 0x34), 0x13);
        assert_eq!(pack_nibbles(0x0F, 0x0F), 0x00);
        assert_eq!(pack_nibbles(0xF0, 0xF0), 0xFF);
    }

    #[test]
    fn precision_bound() {
        for a0 in 0..=255u8 {
            for a1 in 0..=255u8 {
                let (u0, u1) = unpack_nibbles(pack_nibbles(a0, a1));

                assert_eq!(u0, a0 & 0xF0);
                assert_eq!(u1, a1 & 0xF0);
                assert!(a0 - u0 <= NIBBLE_MAX_ERROR);
                assert!(a1 - u1 <= NIBBLE_MAX_ERROR);
            }
        }
    }
}
