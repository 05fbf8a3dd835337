//! Filter backends
//!
//! Every backend implements the same contract: a fresh frame of identical
//! dimensions for any input. Only the portable scalar backend exists today;
//! accelerated paths slot in as further variants.

use crate::convolution::convolve;
use crate::edge_detect::edge_detect;
use crate::grayscale::grayscale;
use crate::types::{FilterKind, Kernel};
use pixpipe_convert::PackedFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterBackend {
    /// Portable per-pixel implementation
    #[default]
    Scalar,
}

impl FilterBackend {
    pub fn name(self) -> &'static str {
        match self {
            FilterBackend::Scalar => "Scalar",
        }
    }

    /// Apply `filter` to `frame` on this backend
    pub fn apply(self, frame: &PackedFrame, filter: FilterKind) -> PackedFrame {
        match self {
            FilterBackend::Scalar => apply_filter_scalar(frame, filter),
        }
    }
}

/// Apply `filter` on the scalar backend
pub fn apply_filter(frame: &PackedFrame, filter: FilterKind) -> PackedFrame {
    FilterBackend::Scalar.apply(frame, filter)
}

fn apply_filter_scalar(frame: &PackedFrame, filter: FilterKind) -> PackedFrame {
    match filter {
        FilterKind::None => frame.clone(),
        FilterKind::Grayscale => grayscale(frame),
        FilterKind::EdgeDetect => edge_detect(frame),
        FilterKind::Blur => convolve(frame, &Kernel::BLUR),
        FilterKind::Sharpen => convolve(frame, &Kernel::SHARPEN),
        FilterKind::Emboss => convolve(frame, &Kernel::EMBOSS),
    }
}
