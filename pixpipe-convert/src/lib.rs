//! Pixpipe color conversion
//!
//! Planar luma/chroma frames in, packed opaque `0xAARRGGBB` frames out.
//!
//! - Validated frame types: strides and plane sizes are checked once at
//!   construction so the conversion loop cannot index out of bounds
//! - Point-sampled integer downscale folded into the conversion pass
//! - A fresh output buffer per call; inputs are never mutated

pub mod error;
pub mod types;
pub mod yuv_to_rgb;

pub use error::*;
pub use types::*;
pub use yuv_to_rgb::*;
