//! Build-time tuning constants and the pluggable runtime selector.
//!
//! Mirrors the source's `#define CUT`, `#define FUN_CUTOFF` and the
//! `SEQUENTIAL` / `_OPENMP` / `CILK` / `CXX_ASYNC` preprocessor selection
//! in `dispatch.h` — here as `const`s plus a runtime enum, since nothing
//! about runtime choice needs to be baked in at compile time.

use crate::error::StencilError;

/// Time extent at which the recursive executor stops cutting and runs the
/// base case directly. Required `>= 3`.
pub const CUT: i64 = 10;

/// Maximum recursion depth before the executor forces a base case
/// regardless of zoid size. Bounds stack usage; a performance guard only.
pub const FUN_CUTOFF: u32 = 8;

/// Maximum supported spatial dimensionality.
pub const DIM_MAX: usize = 4;

/// Checks the build-time tuning constants are within their required
/// bounds. Called once by [`crate::run`] before any recursion starts.
pub fn validate_cut(cut: i64) -> Result<(), StencilError> {
    if cut < 3 {
        return Err(StencilError::ConfigOutOfBounds(cut));
    }
    Ok(())
}

/// Selects which [`crate::runtime::ParallelRuntime`] backs a call to
/// [`crate::run`]. Replaces the source's compile-time
/// `SEQUENTIAL`/`_OPENMP`/`CILK` macro selection — all three backends can
/// coexist in one binary, so the choice is made at the call site instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    /// Runs every spawned task inline on the caller. The degenerate,
    /// always-correct fallback required by spec section 4.5.
    Sequential,
    /// Fork-join over `std::thread::scope`.
    Threaded,
    /// Work-stealing via `rayon::scope`.
    #[default]
    WorkStealing,
}
