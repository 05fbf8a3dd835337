//! Pixpipe filter bank
//!
//! Point and neighborhood filters over packed `0xAARRGGBB` frames.
//!
//! - Grayscale: integer-weighted luma, `(77R + 150G + 29B) >> 8`
//! - Edge detect: Sobel magnitude with a fixed black border
//! - Blur, sharpen, emboss: generic kernel convolution with copy-through borders
//!
//! Every filter returns a new frame and leaves its input untouched.

pub mod backend;
pub mod convolution;
pub mod edge_detect;
pub mod grayscale;
pub mod types;

pub use backend::*;
pub use convolution::*;
pub use edge_detect::*;
pub use grayscale::*;
pub use types::*;
