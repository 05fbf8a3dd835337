//! Luma/chroma to packed RGB conversion with point-sampled downscale
//!
//! Coefficients are applied in floating point and truncated toward zero
//! before the clamp, so results are bit-exact with the reference scalar path.

use crate::types::{pack_rgb, PackedFrame, PlanarFrame};

const CR_TO_R: f32 = 1.370705;
const CB_TO_G: f32 = 0.337633;
const CR_TO_G: f32 = 0.698001;
const CB_TO_B: f32 = 1.732446;

/// Convert one luma sample and its chroma pair to an opaque packed pixel
///
/// `u` and `v` are raw samples; they are centered by -128 here.
#[inline(always)]
pub fn yuv_to_rgb_pixel(y: u8, u: u8, v: u8) -> u32 {
    let y = y as i32;
    let u = u as f32 - 128.0;
    let v = v as f32 - 128.0;

    let r = y + (CR_TO_R * v) as i32;
    let g = y - (CB_TO_G * u + CR_TO_G * v) as i32;
    let b = y + (CB_TO_B * u) as i32;

    pack_rgb(
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
    )
}

/// Output dimensions for a given downscale factor (floor division)
pub fn downscaled_dimensions(width: u32, height: u32, factor: u32) -> (u32, u32) {
    let factor = factor.max(1);
    (width / factor, height / factor)
}

/// Convert a planar frame to a packed frame, keeping every `factor`-th
/// sample in each axis
///
/// Skipped rows and columns are not averaged in. A factor of 0 is treated
/// as 1.
pub fn yuv_to_argb(frame: &PlanarFrame<'_>, factor: u32) -> PackedFrame {
    if factor == 0 {
        log::warn!("Downscale factor 0 requested, converting at full size");
    }
    let factor = factor.max(1) as usize;
    let (out_w, out_h) = downscaled_dimensions(frame.width(), frame.height(), factor as u32);

    let luma = frame.luma();
    let cb = frame.chroma_u();
    let cr = frame.chroma_v();

    PackedFrame::from_fn(out_w, out_h, |dx, dy| {
        let sx = dx * factor;
        let sy = dy * factor;
        let (cx, cy) = (sx / 2, sy / 2);

        yuv_to_rgb_pixel(luma.sample(sx, sy), cb.sample(cx, cy), cr.sample(cx, cy))
    })
}
