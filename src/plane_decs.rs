use crate::{PixelFormat, StrictApi as _};

/// Description of an output plane: its name suffix, format and size in relation to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlaneDesc {
    pub(crate) kind: PlaneKind,
    pub(crate) suffix: &'static str,
    pub(crate) format: PixelFormat,
    pub(crate) width_op: Op,
    pub(crate) height_op: Op,
}

impl PlaneDesc {
    pub(crate) fn dimensions(&self, src_width: usize, src_height: usize) -> (usize, usize) {
        (self.width_op.op(src_width), self.height_op.op(src_height))
    }
}

/// Which row encoder fills the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaneKind {
    Combined,
    CombinedAlpha,
    Luma,
    Chroma,
    Alpha,
}

/// Plane's number of samples in relation to the source width / height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    /// `ceil(lhs / rhs)`
    DivCeil(usize),
    /// `ceil(lhs / div) * mul`, two chroma planes side by side
    DivCeilMul { div: usize, mul: usize },
    Identity,
}

impl Op {
    pub(crate) fn op(self, lhs: usize) -> usize {
        match self {
            Op::DivCeil(rhs) => lhs.div_ceil(rhs),
            Op::DivCeilMul { div, mul } => lhs.div_ceil(div).strict_mul_(mul),
            Op::Identity => lhs,
        }
    }
}

pub(crate) const COMBINED_PLANES: [PlaneDesc; 1] = [PlaneDesc {
    kind: PlaneKind::Combined,
    suffix: "_yuv",
    format: PixelFormat::RGBA,
    width_op: Op::DivCeil(2),
    height_op: Op::Identity,
}];

pub(crate) const COMBINED_ALPHA_PLANES: [PlaneDesc; 1] = [PlaneDesc {
    kind: PlaneKind::CombinedAlpha,
    suffix: "_yuva",
    format: PixelFormat::RGBA,
    width_op: Op::DivCeil(2),
    height_op: Op::Identity,
}];

pub(crate) const SEPARATE_Y_PLANE: PlaneDesc = PlaneDesc {
    kind: PlaneKind::Luma,
    suffix: "_yuv_separate_y",
    format: PixelFormat::A8,
    width_op: Op::Identity,
    height_op: Op::Identity,
};

pub(crate) const SEPARATE_UV_PLANE: PlaneDesc = PlaneDesc {
    kind: PlaneKind::Chroma,
    suffix: "_yuv_separate_uv",
    format: PixelFormat::A8,
    width_op: Op::DivCeilMul { div: 2, mul: 2 },
    height_op: Op::DivCeil(2),
};

pub(crate) const SEPARATE_A_PLANE: PlaneDesc = PlaneDesc {
    kind: PlaneKind::Alpha,
    suffix: "_yuv_separate_a",
    format: PixelFormat::A8,
    width_op: Op::Identity,
    height_op: Op::Identity,
};

pub(crate) const SEPARATE_PLANES: [PlaneDesc; 2] = [SEPARATE_Y_PLANE, SEPARATE_UV_PLANE];

pub(crate) const SEPARATE_ALPHA_PLANES: [PlaneDesc; 3] =
    [SEPARATE_Y_PLANE, SEPARATE_UV_PLANE, SEPARATE_A_PLANE];
