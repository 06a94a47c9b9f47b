use crate::{Bitmap, Variant};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A single named output of [`encode`](crate::encode)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Stable name suffix consumers key off of, e.g. `_yuv` or `_yuv_separate_uv`
    pub suffix: &'static str,
    pub bitmap: Bitmap,
}

impl Encoded {
    /// Path this output is expected to be persisted at: `<original without extension><suffix>.png`
    pub fn output_path(&self, original: impl AsRef<Path>) -> PathBuf {
        output_path(original.as_ref(), self.suffix)
    }
}

pub(crate) fn output_path(original: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(original.with_extension(""));
    path.push(suffix);
    path.push(".png");

    PathBuf::from(path)
}

/// Check if the path names a bitmap written from an [`Encoded`] output
///
/// Lets an asset pipeline skip its own outputs instead of encoding them again.
pub fn is_generated_output(path: impl AsRef<Path>) -> bool {
    let Some(name) = path.as_ref().file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    let Some(stem) = name.strip_suffix(".png") else {
        return false;
    };

    Variant::variants()
        .into_iter()
        .flat_map(Variant::suffixes)
        .any(|suffix| stem.ends_with(suffix))
}
