//! Execution modes and the mode-to-backend capability table
//!
//! Mode selection is resolved here, once per frame, and never reaches into
//! the filter implementations.

use pixpipe_filters::FilterBackend;

/// Requested execution path
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    #[default]
    Scalar = 0,
    Vector = 1,
    Parallel = 2,
    Gpu = 3,
}

/// Backend resolved for each mode, indexed by discriminant
///
/// Only the scalar backend is implemented; every mode resolves to it.
const CAPABILITIES: [(ExecutionMode, FilterBackend); 4] = [
    (ExecutionMode::Scalar, FilterBackend::Scalar),
    (ExecutionMode::Vector, FilterBackend::Scalar),
    (ExecutionMode::Parallel, FilterBackend::Scalar),
    (ExecutionMode::Gpu, FilterBackend::Scalar),
];

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 4] = [
        ExecutionMode::Scalar,
        ExecutionMode::Vector,
        ExecutionMode::Parallel,
        ExecutionMode::Gpu,
    ];

    /// Next mode in cycling order, wrapping to `Scalar`
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ExecutionMode::Scalar => "Scalar",
            ExecutionMode::Vector => "Vector",
            ExecutionMode::Parallel => "Parallel",
            ExecutionMode::Gpu => "GPU",
        }
    }

    /// Backend that actually runs frames requested in this mode
    pub fn backend(self) -> FilterBackend {
        CAPABILITIES[self as usize].1
    }

    /// Whether this mode runs on its own backend rather than the scalar fallback
    pub fn has_native_backend(self) -> bool {
        self == ExecutionMode::Scalar || self.backend() != FilterBackend::Scalar
    }
}
