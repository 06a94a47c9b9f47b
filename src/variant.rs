use crate::plane_decs::{
    COMBINED_ALPHA_PLANES, COMBINED_PLANES, PlaneDesc, SEPARATE_ALPHA_PLANES, SEPARATE_PLANES,
};
use std::fmt;
use std::str::FromStr;

/// Output layout produced by [`encode`](crate::encode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// One RGBA bitmap at half width: two luma samples, averaged U in blue, averaged V in alpha
    Combined,

    /// Like [`Variant::Combined`] but the high chroma bits are folded into the luma channels
    /// to free the alpha channel for two 4 bit alpha samples
    CombinedAlpha,

    /// Full resolution Y plane and a 4:2:0 subsampled UV plane holding U and V side by side
    SeparatePlanar,

    /// [`Variant::SeparatePlanar`] and a full resolution alpha plane
    SeparatePlanarAlpha,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported variant {0:?}")]
pub struct UnsupportedVariantError(pub String);

impl Variant {
    pub fn variants() -> impl IntoIterator<Item = Self> {
        use Variant::*;

        [Combined, CombinedAlpha, SeparatePlanar, SeparatePlanarAlpha]
    }

    pub(crate) fn plane_desc(self) -> &'static [PlaneDesc] {
        match self {
            Variant::Combined => &COMBINED_PLANES,
            Variant::CombinedAlpha => &COMBINED_ALPHA_PLANES,
            Variant::SeparatePlanar => &SEPARATE_PLANES,
            Variant::SeparatePlanarAlpha => &SEPARATE_ALPHA_PLANES,
        }
    }

    /// Name suffixes of the produced bitmaps, in output order
    pub fn suffixes(self) -> impl Iterator<Item = &'static str> {
        self.plane_desc().iter().map(|desc| desc.suffix)
    }

    /// Number of bitmaps produced
    pub fn output_count(self) -> usize {
        self.plane_desc().len()
    }

    /// Dimensions of every output bitmap for a source of the given size, in output order
    pub fn output_dimensions(self, width: usize, height: usize) -> Vec<(usize, usize)> {
        self.plane_desc()
            .iter()
            .map(|desc| desc.dimensions(width, height))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Combined => "combined",
            Variant::CombinedAlpha => "combined-alpha",
            Variant::SeparatePlanar => "separate",
            Variant::SeparatePlanarAlpha => "separate-alpha",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnsupportedVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "combined" | "yuv" => Ok(Variant::Combined),
            "combined-alpha" | "yuva" => Ok(Variant::CombinedAlpha),
            "separate" | "yuv-separate" => Ok(Variant::SeparatePlanar),
            "separate-alpha" | "yuv-separate-alpha" => Ok(Variant::SeparatePlanarAlpha),
            _ => Err(UnsupportedVariantError(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = UnsupportedVariantError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Variant::Combined),
            1 => Ok(Variant::CombinedAlpha),
            2 => Ok(Variant::SeparatePlanar),
            3 => Ok(Variant::SeparatePlanarAlpha),
            _ => Err(UnsupportedVariantError(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Variant::Combined, &["_yuv"])]
    #[case(Variant::CombinedAlpha, &["_yuva"])]
    #[case(Variant::SeparatePlanar, &["_yuv_separate_y", "_yuv_separate_uv"])]
    #[case(
        Variant::SeparatePlanarAlpha,
        &["_yuv_separate_y", "_yuv_separate_uv", "_yuv_separate_a"]
    )]
    fn suffixes(#[case] variant: Variant, #[case] expected: &[&str]) {
        assert_eq!(variant.suffixes().collect::<Vec<_>>(), expected);
        assert_eq!(variant.output_count(), expected.len());
    }

    #[test]
    fn parse_round_trips_names() {
        for variant in Variant::variants() {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }

        assert_eq!("YUVA".parse::<Variant>().unwrap(), Variant::CombinedAlpha);
    }

    #[test]
    fn unknown_selectors_are_rejected() {
        let err = "yuv444".parse::<Variant>().unwrap_err();
        assert_eq!(err.0, "yuv444");

        assert!(Variant::try_from(4).is_err());
        assert_eq!(Variant::try_from(3).unwrap(), Variant::SeparatePlanarAlpha);
    }

    #[test]
    fn odd_dimensions() {
        assert_eq!(Variant::Combined.output_dimensions(5, 3), [(3, 3)]);
        assert_eq!(
            Variant::SeparatePlanarAlpha.output_dimensions(5, 3),
            [(5, 3), (6, 2), (5, 3)]
        );
    }
}
