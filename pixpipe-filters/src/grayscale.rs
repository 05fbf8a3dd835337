//! Integer luma point operation

use pixpipe_convert::{blue, green, pack_rgb, red, PackedFrame};

/// Perceptual luma with integer weights summing to 256
#[inline(always)]
pub fn luma(pixel: u32) -> u8 {
    let r = red(pixel) as u32;
    let g = green(pixel) as u32;
    let b = blue(pixel) as u32;
    ((77 * r + 150 * g + 29 * b) >> 8) as u8
}

/// Per-pixel luma intensities, row-major
pub fn grayscale_map(frame: &PackedFrame) -> Vec<u8> {
    frame.pixels().iter().map(|&p| luma(p)).collect()
}

/// Replace every pixel with its opaque gray equivalent
pub fn grayscale(frame: &PackedFrame) -> PackedFrame {
    frame.map_pixels(|p| {
        let l = luma(p);
        pack_rgb(l, l, l)
    })
}
