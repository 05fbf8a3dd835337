//! Per-channel weighted neighborhood convolution
//!
//! Only pixels whose full kernel footprint lies inside the frame are
//! convolved. The `radius`-wide border is copied verbatim from the source.

use crate::types::Kernel;
use pixpipe_convert::{blue, green, pack_rgb, red, PackedFrame};

#[inline(always)]
fn finish_channel(sum: i32, kernel: &Kernel) -> u8 {
    (sum / kernel.divisor() + kernel.bias()).clamp(0, 255) as u8
}

/// Convolve R, G and B independently; alpha is forced opaque on convolved pixels
pub fn convolve(frame: &PackedFrame, kernel: &Kernel) -> PackedFrame {
    let (w, h) = (frame.width() as usize, frame.height() as usize);
    let r = kernel.radius();
    let size = kernel.size();

    // Border fallback: start from a verbatim copy of the source
    let mut out = frame.clone();
    if w <= 2 * r || h <= 2 * r {
        return out;
    }

    let src = frame.pixels();
    let dst = out.pixels_mut();

    for y in r..h - r {
        for x in r..w - r {
            let (mut sr, mut sg, mut sb) = (0i32, 0i32, 0i32);

            for ky in 0..size {
                let row = (y + ky - r) * w;
                for kx in 0..size {
                    let weight = kernel.weight(kx, ky);
                    let p = src[row + x + kx - r];
                    sr += weight * red(p) as i32;
                    sg += weight * green(p) as i32;
                    sb += weight * blue(p) as i32;
                }
            }

            dst[y * w + x] = pack_rgb(
                finish_channel(sr, kernel),
                finish_channel(sg, kernel),
                finish_channel(sb, kernel),
            );
        }
    }

    out
}
