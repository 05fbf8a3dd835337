//! Pipeline configuration

use crate::modes::ExecutionMode;
use pixpipe_filters::FilterKind;
use pixpipe_perf::DEFAULT_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Keep every n-th source sample in each axis (0 is treated as 1)
    pub downscale_factor: u32,
    /// Frames kept in the rolling statistics window
    pub tracker_capacity: usize,
    pub filter: FilterKind,
    pub mode: ExecutionMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            downscale_factor: 1,
            tracker_capacity: DEFAULT_CAPACITY,
            filter: FilterKind::None,
            mode: ExecutionMode::Scalar,
        }
    }
}
