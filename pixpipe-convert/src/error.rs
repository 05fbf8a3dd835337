//! Construction-time validation errors

use crate::types::PlaneKind;
use thiserror::Error;

/// Reasons a buffer cannot be wrapped as a validated frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame dimensions must be non-zero (got {width}x{height})")]
    ZeroDimensions { width: u32, height: u32 },

    #[error("packed buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("{plane:?} plane holds {actual} bytes, {required} required")]
    PlaneTooSmall {
        plane: PlaneKind,
        required: usize,
        actual: usize,
    },

    #[error("{plane:?} plane strides cannot address a full row")]
    InvalidStride { plane: PlaneKind },
}
