//! Cache-oblivious recursive stencil executor.
//!
//! Evaluates a user-supplied [`Kernel`] over a `d`-dimensional grid
//! across a number of time steps, using Frigo-Strumpen trapezoidal
//! space-time decomposition to stay cache-oblivious instead of tuned to
//! a particular cache size. See [`run`] for the entry point.

pub mod basecase;
pub mod buffer;
pub mod config;
pub mod error;
pub mod executor;
pub mod kernel;
pub mod kernels;
pub mod reference;
pub mod runtime;
pub mod stopwatch;
pub mod zoid;

pub use buffer::BufferSet;
pub use error::StencilError;
pub use kernel::Kernel;
pub use zoid::Zoid;

use config::RuntimeMode;
use runtime::{ParallelRuntime, RayonRuntime, Sequential, Threaded};
use stopwatch::Stopwatch;

/// Evaluates `kernel` over `data` for `t` time steps in place, using
/// `mode` to schedule the recursive decomposition's parallel siblings.
///
/// Constructs the initial zoid from `data.global_region()` (perfectly
/// vertical sides spanning the whole grid) and recurses from there
/// (spec section 4.4). On success the grid's state at time `t` is in
/// copy `t mod data.copies()`.
///
/// # Errors
/// Returns [`StencilError::ConfigOutOfBounds`] if [`config::CUT`] is out
/// of range, or [`StencilError::DimensionMismatch`] if `kernel`'s
/// dimensionality doesn't match `data`'s. Both are checked once up
/// front; nothing inside the recursion itself returns a `Result` (spec
/// section 4.3, "Failure semantics" — contract breaches past this point
/// are fatal assertions, not recoverable errors).
pub fn run<E: Send>(
    data: &mut BufferSet<E>,
    kernel: &dyn Kernel<E>,
    t: i64,
    mode: RuntimeMode,
) -> Result<(), StencilError> {
    config::validate_cut(config::CUT)?;
    if kernel.dimensions() != data.dimensions() {
        return Err(StencilError::DimensionMismatch {
            kernel_dims: kernel.dimensions(),
            buffer_dims: data.dimensions(),
        });
    }

    let z = data.global_region();
    let mut stopwatch = Stopwatch::new();
    stopwatch.start("run");

    match mode {
        RuntimeMode::Sequential => {
            executor::recurse(data, kernel, &z, 0, t, 0, 0, &Sequential);
        }
        RuntimeMode::Threaded => {
            executor::recurse(data, kernel, &z, 0, t, 0, 0, &Threaded);
        }
        RuntimeMode::WorkStealing => {
            executor::recurse(data, kernel, &z, 0, t, 0, 0, &RayonRuntime);
        }
    }

    stopwatch.stop("run");
    Ok(())
}

/// As [`run`], but with an explicit [`ParallelRuntime`] backend instead
/// of selecting one of the three built-ins by [`RuntimeMode`]. For
/// callers that bring their own runtime implementation.
pub fn run_with<E: Send, R: ParallelRuntime>(
    data: &mut BufferSet<E>,
    kernel: &dyn Kernel<E>,
    t: i64,
    runtime: &R,
) -> Result<(), StencilError> {
    config::validate_cut(config::CUT)?;
    if kernel.dimensions() != data.dimensions() {
        return Err(StencilError::DimensionMismatch {
            kernel_dims: kernel.dimensions(),
            buffer_dims: data.dimensions(),
        });
    }

    let z = data.global_region();
    executor::recurse(data, kernel, &z, 0, t, 0, 0, runtime);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::copy::CopyKernel;

    #[test]
    fn rejects_a_dimension_mismatch() {
        let mut b = BufferSet::new(vec![4], &[1u8, 2, 3, 4]);
        let kernel = CopyKernel::new(2);
        let err = run(&mut b, &kernel, 3, RuntimeMode::Sequential).unwrap_err();
        assert!(matches!(err, StencilError::DimensionMismatch { .. }));
    }

    #[test]
    fn matches_the_iterative_reference_on_a_copy_kernel() {
        let data = vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let kernel = CopyKernel::new(1);

        let mut recursive = BufferSet::new(vec![10], &data);
        run(&mut recursive, &kernel, 25, RuntimeMode::Sequential).unwrap();

        let mut iterative = BufferSet::new(vec![10], &data);
        reference::run_iterative(&mut iterative, &kernel, 25);

        assert_eq!(recursive.as_slice(25 % 2), iterative.as_slice(25 % 2));
    }
}
