//! Filter selection and convolution kernels

/// Filter applied to each packed frame
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    #[default]
    None = 0,
    Grayscale = 1,
    EdgeDetect = 2,
    Blur = 3,
    Sharpen = 4,
    Emboss = 5,
}

impl FilterKind {
    /// All filters in cycling order
    pub const ALL: [FilterKind; 6] = [
        FilterKind::None,
        FilterKind::Grayscale,
        FilterKind::EdgeDetect,
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::Emboss,
    ];

    /// Next filter in cycling order, wrapping to `None` after `Emboss`
    pub fn next(self) -> Self {
        let idx = self as usize;
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::None => "None",
            FilterKind::Grayscale => "Grayscale",
            FilterKind::EdgeDetect => "Edge Detect",
            FilterKind::Blur => "Blur",
            FilterKind::Sharpen => "Sharpen",
            FilterKind::Emboss => "Emboss",
        }
    }

    /// Kernel bound to this filter, if it is a convolution filter
    pub fn kernel(self) -> Option<&'static Kernel> {
        match self {
            FilterKind::Blur => Some(&Kernel::BLUR),
            FilterKind::Sharpen => Some(&Kernel::SHARPEN),
            FilterKind::Emboss => Some(&Kernel::EMBOSS),
            FilterKind::None | FilterKind::Grayscale | FilterKind::EdgeDetect => None,
        }
    }
}

/// Square, odd-sized weight matrix with divisor and bias
///
/// Output per channel is `clamp(sum(w * c) / divisor + bias, 0, 255)`, with
/// truncating integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    weights: &'static [i32],
    size: usize,
    divisor: i32,
    bias: i32,
}

impl Kernel {
    /// 5x5 binomial approximation of a Gaussian; weights sum to 256
    #[rustfmt::skip]
    pub const BLUR: Kernel = Kernel {
        weights: &[
            1,  4,  6,  4, 1,
            4, 16, 24, 16, 4,
            6, 24, 36, 24, 6,
            4, 16, 24, 16, 4,
            1,  4,  6,  4, 1,
        ],
        size: 5,
        divisor: 256,
        bias: 0,
    };

    #[rustfmt::skip]
    pub const SHARPEN: Kernel = Kernel {
        weights: &[
             0, -1,  0,
            -1,  5, -1,
             0, -1,  0,
        ],
        size: 3,
        divisor: 1,
        bias: 0,
    };

    /// Top-left to bottom-right relief; weights sum to 0 so flat areas land on the bias
    #[rustfmt::skip]
    pub const EMBOSS: Kernel = Kernel {
        weights: &[
            -2, -1, 0,
            -1,  0, 1,
             0,  1, 2,
        ],
        size: 3,
        divisor: 1,
        bias: 128,
    };

    /// Kernel from row-major weights
    ///
    /// Returns `None` unless `weights` is an odd-sized square and `divisor`
    /// is non-zero.
    pub fn new(weights: &'static [i32], divisor: i32, bias: i32) -> Option<Self> {
        let size = (weights.len() as f64).sqrt() as usize;
        if size * size != weights.len() || size % 2 == 0 || divisor == 0 {
            return None;
        }

        Some(Self {
            weights,
            size,
            divisor,
            bias,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn radius(&self) -> usize {
        self.size / 2
    }

    pub fn divisor(&self) -> i32 {
        self.divisor
    }

    pub fn bias(&self) -> i32 {
        self.bias
    }

    pub fn weights(&self) -> &'static [i32] {
        self.weights
    }

    #[inline(always)]
    pub fn weight(&self, kx: usize, ky: usize) -> i32 {
        self.weights[ky * self.size + kx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = FilterKind::None;
        let mut seen = Vec::new();
        for _ in 0..FilterKind::ALL.len() {
            seen.push(filter);
            filter = filter.next();
        }

        assert_eq!(seen, FilterKind::ALL.to_vec());
        assert_eq!(filter, FilterKind::None, "Cycle should wrap after Emboss");
    }

    #[test]
    fn test_kernel_bindings() {
        assert_eq!(FilterKind::Blur.kernel(), Some(&Kernel::BLUR));
        assert_eq!(FilterKind::Sharpen.kernel(), Some(&Kernel::SHARPEN));
        assert_eq!(FilterKind::Emboss.kernel(), Some(&Kernel::EMBOSS));
        assert!(FilterKind::None.kernel().is_none());
        assert!(FilterKind::Grayscale.kernel().is_none());
        assert!(FilterKind::EdgeDetect.kernel().is_none());
    }

    #[test]
    fn test_fixed_kernel_shapes() {
        assert_eq!(Kernel::BLUR.radius(), 2);
        assert_eq!(Kernel::BLUR.weights().iter().sum::<i32>(), 256);
        assert_eq!(Kernel::SHARPEN.radius(), 1);
        assert_eq!(Kernel::SHARPEN.weight(1, 1), 5);
        assert_eq!(Kernel::SHARPEN.weights().iter().sum::<i32>(), 1);
        assert_eq!(Kernel::EMBOSS.bias(), 128);
        assert_eq!(Kernel::EMBOSS.weights().iter().sum::<i32>(), 0);
    }

    #[test]
    fn test_custom_kernel_validation() {
        static BOX: [i32; 9] = [1; 9];
        static EVEN: [i32; 4] = [1; 4];
        static RAGGED: [i32; 6] = [1; 6];

        let k = Kernel::new(&BOX, 9, 0).unwrap();
        assert_eq!(k.size(), 3);

        assert!(Kernel::new(&BOX, 0, 0).is_none(), "Zero divisor");
        assert!(Kernel::new(&EVEN, 4, 0).is_none(), "Even size");
        assert!(Kernel::new(&RAGGED, 6, 0).is_none(), "Not square");
    }
}
