//! Frame types shared by every pipeline stage
//!
//! Both frame types check their invariants once, at construction, so the
//! per-pixel loops downstream can index without re-validating.

use crate::error::FrameError;

/// Alpha channel fully opaque, in packed position
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// Opaque black packed pixel
pub const OPAQUE_BLACK: u32 = OPAQUE_ALPHA;

/// Pack 8-bit channels into an opaque `0xAARRGGBB` pixel
#[inline(always)]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    OPAQUE_ALPHA | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

#[inline(always)]
pub fn alpha(pixel: u32) -> u8 {
    (pixel >> 24) as u8
}

#[inline(always)]
pub fn red(pixel: u32) -> u8 {
    (pixel >> 16) as u8
}

#[inline(always)]
pub fn green(pixel: u32) -> u8 {
    (pixel >> 8) as u8
}

#[inline(always)]
pub fn blue(pixel: u32) -> u8 {
    pixel as u8
}

/// Which plane of a planar frame, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneKind {
    Luma,
    ChromaU,
    ChromaV,
}

/// One sample plane with its addressing strides
#[derive(Debug, Clone, Copy)]
pub struct Plane<'a> {
    pub data: &'a [u8],
    /// Bytes between the starts of consecutive rows
    pub row_stride: usize,
    /// Bytes between consecutive samples in a row (2 for interleaved chroma)
    pub pixel_stride: usize,
}

impl<'a> Plane<'a> {
    pub fn new(data: &'a [u8], row_stride: usize, pixel_stride: usize) -> Self {
        Self {
            data,
            row_stride,
            pixel_stride,
        }
    }

    /// Sample at plane coordinates `(x, y)`
    #[inline(always)]
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.row_stride + x * self.pixel_stride]
    }

    /// Check that a `width`×`height` grid of samples is addressable
    fn validate(&self, kind: PlaneKind, width: usize, height: usize) -> Result<(), FrameError> {
        let invalid = FrameError::InvalidStride { plane: kind };
        if self.pixel_stride == 0 {
            return Err(invalid);
        }

        let row_span = (width - 1)
            .checked_mul(self.pixel_stride)
            .and_then(|span| span.checked_add(1))
            .ok_or(invalid.clone())?;
        if height > 1 && self.row_stride < row_span {
            return Err(invalid);
        }

        let required = (height - 1)
            .checked_mul(self.row_stride)
            .and_then(|offset| offset.checked_add(row_span))
            .ok_or(invalid)?;
        if self.data.len() < required {
            return Err(FrameError::PlaneTooSmall {
                plane: kind,
                required,
                actual: self.data.len(),
            });
        }

        Ok(())
    }
}

/// Validated planar luma/chroma frame with 2:1 subsampled chroma
///
/// Chroma planes are addressed at halved coordinates in both axes.
#[derive(Debug, Clone, Copy)]
pub struct PlanarFrame<'a> {
    width: u32,
    height: u32,
    y: Plane<'a>,
    u: Plane<'a>,
    v: Plane<'a>,
}

impl<'a> PlanarFrame<'a> {
    /// Validate three planes against the source dimensions
    pub fn new(
        width: u32,
        height: u32,
        y: Plane<'a>,
        u: Plane<'a>,
        v: Plane<'a>,
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::ZeroDimensions { width, height });
        }

        let (w, h) = (width as usize, height as usize);
        let (cw, ch) = (w.div_ceil(2), h.div_ceil(2));

        y.validate(PlaneKind::Luma, w, h)?;
        u.validate(PlaneKind::ChromaU, cw, ch)?;
        v.validate(PlaneKind::ChromaV, cw, ch)?;

        Ok(Self {
            width,
            height,
            y,
            u,
            v,
        })
    }

    /// Semi-planar layout: luma plane followed by one interleaved U,V plane
    pub fn from_nv12(
        width: u32,
        height: u32,
        luma: &'a [u8],
        luma_stride: usize,
        chroma: &'a [u8],
        chroma_stride: usize,
    ) -> Result<Self, FrameError> {
        let v_data = chroma.get(1..).unwrap_or(&[]);
        Self::new(
            width,
            height,
            Plane::new(luma, luma_stride, 1),
            Plane::new(chroma, chroma_stride, 2),
            Plane::new(v_data, chroma_stride, 2),
        )
    }

    /// Fully planar layout: three tightly packed planes
    pub fn from_i420(
        width: u32,
        height: u32,
        luma: &'a [u8],
        u: &'a [u8],
        v: &'a [u8],
    ) -> Result<Self, FrameError> {
        let chroma_stride = (width as usize).div_ceil(2);
        Self::new(
            width,
            height,
            Plane::new(luma, width as usize, 1),
            Plane::new(u, chroma_stride, 1),
            Plane::new(v, chroma_stride, 1),
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn luma(&self) -> &Plane<'a> {
        &self.y
    }

    pub fn chroma_u(&self) -> &Plane<'a> {
        &self.u
    }

    pub fn chroma_v(&self) -> &Plane<'a> {
        &self.v
    }
}

/// Packed `0xAARRGGBB` frame, row-major, one `u32` per pixel
///
/// The pixel count always equals `width * height`. Zero-sized frames are
/// valid (a downscale factor larger than the source collapses an axis).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedFrame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PackedFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(FrameError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Frame with every pixel set to `color`
    pub fn filled(width: u32, height: u32, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build a frame from a per-pixel generator, called in row-major order
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(usize, usize) -> u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        let mut pixels = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                pixels.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable pixel access; the slice length is fixed so the size invariant holds
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    #[inline(always)]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width as usize + x]
    }

    /// Raw native-endian bytes for a downstream compositor
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// New frame of the same size with `f` applied to every pixel
    pub fn map_pixels(&self, f: impl Fn(u32) -> u32) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }
}
