//! Pack RGBA images into chroma subsampled YUV bitmaps
//!
//! [`encode`] converts every pixel to YUV, subsamples chroma and lays the result out as one of the
//! [`Variant`]s. The outputs are plain 8 bit bitmaps meant to be stored losslessly (e.g. as PNG)
//! and unpacked again by a matching shader or decoder.
//!
//! ```
//! use yuvpack::{Bitmap, Pixel, Variant, encode};
//!
//! let src = Bitmap::from_pixels(2, 1, [Pixel::new(255, 0, 0, 255), Pixel::new(0, 255, 0, 128)])?;
//! let outputs = encode(&src, Variant::Combined)?;
//!
//! assert_eq!(outputs[0].suffix, "_yuv");
//! assert_eq!(outputs[0].bitmap.buffer(), [76, 149, 64, 138]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use formats::{Combined, SeparateAlpha, SeparateChroma, SeparateLuma, VisitRows, visit_rows};
use plane_decs::PlaneKind;
use std::time::Instant;
use util::StrictApi;

pub use alpha::{NIBBLE_MAX_ERROR, pack_nibbles, unpack_nibbles};
pub use chroma::{average_block, average_pair};
pub use color::{Pixel, YuvSample, clamp8, rgb_to_yuv};
pub use encoded::{Encoded, is_generated_output};
pub use image::{Bitmap, ImageError};
#[cfg(feature = "multi-thread")]
pub use multi_thread::encode_multi_thread;
pub use pixel_format::PixelFormat;
pub use variant::{UnsupportedVariantError, Variant};

mod alpha;
mod chroma;
mod color;
mod encoded;
mod formats;
mod image;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pixel_format;
mod plane_decs;
mod util;
mod variant;

/// Everything that can go wrong when encoding
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("source width and height must not be zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error(transparent)]
    UnsupportedVariant(#[from] UnsupportedVariantError),

    #[error("source must be RGBA, got {0:?}")]
    UnsupportedSourceFormat(PixelFormat),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Verify that the source is valid and safe to move on to
fn verify_input<S: AsRef<[u8]>>(src: &Bitmap<S>) -> Result<(), EncodeError> {
    if src.width() == 0 || src.height() == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: src.width(),
            height: src.height(),
        });
    }

    if src.format() != PixelFormat::RGBA {
        return Err(EncodeError::UnsupportedSourceFormat(src.format()));
    }

    Ok(())
}

/// Encode an RGBA bitmap into the bitmaps of the given [`Variant`]
///
/// Outputs are returned in a fixed order, see [`Variant::suffixes`]. The same input always
/// produces the same bytes.
pub fn encode<S: AsRef<[u8]>>(
    src: &Bitmap<S>,
    variant: Variant,
) -> Result<Vec<Encoded>, EncodeError> {
    encode_with(src, variant, visit_rows)
}

/// Encode a tightly packed, row-major RGBA buffer
pub fn encode_rgba(
    rgba: &[u8],
    width: usize,
    height: usize,
    variant: Variant,
) -> Result<Vec<Encoded>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let src = Bitmap::from_buffer(PixelFormat::RGBA, rgba, width, height)?;

    encode(&src, variant)
}

pub(crate) fn encode_with<S: AsRef<[u8]>>(
    src: &Bitmap<S>,
    variant: Variant,
    visit: VisitRows,
) -> Result<Vec<Encoded>, EncodeError> {
    verify_input(src)?;

    let start = Instant::now();
    let src = src.as_view();

    let outputs: Vec<Encoded> = variant
        .plane_desc()
        .iter()
        .map(|desc| {
            let (width, height) = desc.dimensions(src.width(), src.height());
            let mut bitmap = Bitmap::blank(desc.format, width, height);
            let stride = bitmap.stride();

            let buffer = bitmap.buffer_mut();

            match desc.kind {
                PlaneKind::Combined => visit(&Combined::<false>::new(&src), buffer, stride),
                PlaneKind::CombinedAlpha => visit(&Combined::<true>::new(&src), buffer, stride),
                PlaneKind::Luma => visit(&SeparateLuma::new(&src), buffer, stride),
                PlaneKind::Chroma => visit(&SeparateChroma::new(&src), buffer, stride),
                PlaneKind::Alpha => visit(&SeparateAlpha::new(&src), buffer, stride),
            }

            log::trace!("built {} plane {width}x{height}", desc.suffix);

            Encoded {
                suffix: desc.suffix,
                bitmap,
            }
        })
        .collect();

    log::debug!(
        "encoded {}x{} image as {variant} into {} bitmap(s), {} bytes in {:?}",
        src.width(),
        src.height(),
        outputs.len(),
        outputs
            .iter()
            .map(|out| out.bitmap.buffer().len())
            .sum::<usize>(),
        start.elapsed(),
    );

    Ok(outputs)
}
