//! Gradient-magnitude edge detection over the luma map
//!
//! The outermost pixel ring is always opaque black; gradients are only
//! computed where the full 3x3 neighborhood exists.

use crate::grayscale::grayscale_map;
use pixpipe_convert::{pack_rgb, PackedFrame, OPAQUE_BLACK};

/// `|Gx| + |Gy|` with the 3x3 Sobel pair, clamped to 255
#[inline(always)]
fn gradient_at(gray: &[u8], width: usize, x: usize, y: usize) -> u8 {
    let at = |dx: usize, dy: usize| gray[(y + dy - 1) * width + (x + dx - 1)] as i32;

    let gx = -at(0, 0) + at(2, 0) - 2 * at(0, 1) + 2 * at(2, 1) - at(0, 2) + at(2, 2);
    let gy = -at(0, 0) - 2 * at(1, 0) - at(2, 0) + at(0, 2) + 2 * at(1, 2) + at(2, 2);

    (gx.abs() + gy.abs()).min(255) as u8
}

pub fn edge_detect(frame: &PackedFrame) -> PackedFrame {
    let (w, h) = (frame.width() as usize, frame.height() as usize);
    let mut out = PackedFrame::filled(frame.width(), frame.height(), OPAQUE_BLACK);
    if w < 3 || h < 3 {
        return out;
    }

    let gray = grayscale_map(frame);
    let pixels = out.pixels_mut();

    for y in 1..h - 1 {
        let row = y * w;
        for x in 1..w - 1 {
            let m = gradient_at(&gray, w, x, y);
            pixels[row + x] = pack_rgb(m, m, m);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixpipe_convert::{alpha, red};

    fn assert_black_border(out: &PackedFrame) {
        let (w, h) = (out.width() as usize, out.height() as usize);
        for y in 0..h {
            for x in 0..w {
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    assert_eq!(out.pixel(x, y), OPAQUE_BLACK, "Border pixel ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_flat_field_has_no_edges() {
        let frame = PackedFrame::filled(6, 5, pack_rgb(200, 200, 200));
        let out = edge_detect(&frame);
        assert!(out.pixels().iter().all(|&p| p == OPAQUE_BLACK));
    }

    #[test]
    fn test_border_is_black_even_on_bright_input() {
        for (w, h) in [(3u32, 3u32), (4, 7), (16, 9)] {
            let frame = PackedFrame::from_fn(w, h, |x, _| {
                if x % 2 == 0 {
                    pack_rgb(255, 255, 255)
                } else {
                    pack_rgb(0, 0, 0)
                }
            });
            assert_black_border(&edge_detect(&frame));
        }
    }

    #[test]
    fn test_vertical_step_edge() {
        // Left half black, right half white (luma 255)
        let frame = PackedFrame::from_fn(6, 4, |x, _| {
            if x < 3 {
                pack_rgb(0, 0, 0)
            } else {
                pack_rgb(255, 255, 255)
            }
        });
        let out = edge_detect(&frame);

        // Columns 2 and 3 straddle the step: |Gx| = 4 * 255, clamped
        for y in 1..3 {
            assert_eq!(red(out.pixel(1, y)), 0);
            assert_eq!(red(out.pixel(2, y)), 255);
            assert_eq!(red(out.pixel(3, y)), 255);
            assert_eq!(red(out.pixel(4, y)), 0);
        }
    }

    #[test]
    fn test_gradient_magnitude_unclamped() {
        // Horizontal ramp of 10 per column: Gx = 4 * (30 - 10)
        let frame = PackedFrame::from_fn(5, 3, |x, _| {
            let v = (x * 10) as u8;
            pack_rgb(v, v, v)
        });
        let out = edge_detect(&frame);
        assert_eq!(red(out.pixel(2, 1)), 80);
        assert_eq!(alpha(out.pixel(2, 1)), 0xFF);
    }

    #[test]
    fn test_tiny_frames_are_all_black() {
        for (w, h) in [(0u32, 0u32), (1, 1), (2, 5), (5, 2)] {
            let frame = PackedFrame::filled(w, h, pack_rgb(90, 10, 30));
            let out = edge_detect(&frame);
            assert_eq!(out.dimensions(), (w, h));
            assert!(out.pixels().iter().all(|&p| p == OPAQUE_BLACK));
        }
    }
}
