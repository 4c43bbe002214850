//! Fatal contract-breach errors.
//!
//! The executor itself never returns a `Result` — per spec section 4.3,
//! invariant violations inside `recurse`/base-case are bugs, not runtime
//! errors, and are caught with `assert!`. `StencilError` covers the
//! checks that happen at the boundary: constructing a `BufferSet`,
//! starting a `run`, and indexing through the public accessors.

/// Errors a caller can trigger before or while driving the executor.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StencilError {
    /// The kernel's declared dimensionality doesn't match the buffer's.
    #[error("kernel expects {kernel_dims} dimensions, buffer has {buffer_dims}")]
    DimensionMismatch {
        kernel_dims: usize,
        buffer_dims: usize,
    },

    /// The buffer was moved-out via [`crate::buffer::BufferSet::take`]
    /// and is no longer backed by storage.
    #[error("accessed an invalidated buffer (moved out via take())")]
    InvalidatedBuffer,

    /// A coordinate or copy index fell outside the buffer's bounds.
    #[error("coordinate {coord:?} out of range for dims {dims:?}")]
    OutOfRange { coord: Vec<i64>, dims: Vec<usize> },

    /// `CUT` (spec section 6) was configured below its required minimum.
    #[error("CUT must be >= 3, got {0}")]
    ConfigOutOfBounds(i64),
}
