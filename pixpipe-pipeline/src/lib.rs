//! Pixpipe frame pipeline
//!
//! Wires the converter, filter bank and performance tracker together.
//!
//! - Execution mode is resolved to a filter backend at this boundary only
//! - Each stage is timed and fed to a rolling statistics window
//! - Compositing and display stay with the caller, via a closure

pub mod config;
pub mod modes;
pub mod pipeline;

pub use config::*;
pub use modes::*;
pub use pipeline::*;

pub use pixpipe_convert::{FrameError, PackedFrame, Plane, PlanarFrame};
pub use pixpipe_filters::{FilterBackend, FilterKind};
pub use pixpipe_perf::{PerfStats, PerfTracker, TimingField, TimingSample};
