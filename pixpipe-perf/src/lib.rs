//! Pixpipe performance tracking
//!
//! Fixed-capacity rolling window of per-frame stage timings with on-demand
//! averages and frame rate. Memory use is bounded by the window capacity
//! regardless of how many frames are recorded.

pub mod tracker;
pub mod types;

pub use tracker::*;
pub use types::*;
