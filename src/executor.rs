//! The recursive decide → cut → recurse executor (spec section 4.3).
//!
//! `recurse` walks the **Decide → {Cut_M, Cut_W, Cut_T, Base}** state
//! machine: pick a space cut if either the zoid's base or top is wide
//! enough relative to the kernel's slope on the dimension under
//! consideration, otherwise fall back to a time cut. There are no
//! recoverable errors here — an out-of-range access or a slope violation
//! is a contract breach the base case's own assertions catch, not
//! something this function handles (spec section 4.3, "Failure
//! semantics").

use crate::basecase::base_case;
use crate::buffer::BufferSet;
use crate::config::{CUT, FUN_CUTOFF};
use crate::kernel::Kernel;
use crate::runtime::ParallelRuntime;
use crate::zoid::Zoid;

/// A raw, non-owning handle to a buffer that can cross a [`ParallelRuntime::join`]'s
/// thread boundary.
///
/// # Safety
///
/// Every use below is paired with a zoid split (`split_m`/`split_w`)
/// whose pieces are spatially disjoint by construction: the two
/// siblings handed a `RawBuffer` never read or write the same cell at
/// the same time step, so sharing this pointer across the join is sound
/// even though the type system can't see the disjointness itself (spec
/// section 5's concurrency argument — no lock stands in for it).
struct RawBuffer<E>(*mut BufferSet<E>);

impl<E> Clone for RawBuffer<E> {
    fn clone(&self) -> Self {
        RawBuffer(self.0)
    }
}
impl<E> Copy for RawBuffer<E> {}

unsafe impl<E: Send> Send for RawBuffer<E> {}

impl<E> RawBuffer<E> {
    fn new(data: &mut BufferSet<E>) -> Self {
        RawBuffer(data as *mut BufferSet<E>)
    }

    /// # Safety
    /// See the type's safety note: the caller must only dereference this
    /// from a sibling whose footprint is disjoint from every other live
    /// borrow derived from the same pointer.
    unsafe fn get(self) -> &'static mut BufferSet<E> {
        &mut *self.0
    }
}

/// Runs `kernel` over zoid `z` across the half-open time interval `[t0,
/// t1)`, recursively decomposing until a base case applies.
///
/// `dim` is the dimension considered for the next space cut (rotated by
/// one modulo the zoid's dimensionality on every call, per spec section
/// 4.3's "Dimension rotation"); `depth` counts recursive calls since
/// [`crate::run`] and trips the [`FUN_CUTOFF`] fuse.
pub fn recurse<E, R>(
    data: &mut BufferSet<E>,
    kernel: &dyn Kernel<E>,
    z: &Zoid,
    t0: i64,
    t1: i64,
    dim: usize,
    depth: u32,
    runtime: &R,
) where
    E: Send,
    R: ParallelRuntime,
{
    let delta_t = t1 - t0;
    if delta_t <= CUT || depth >= FUN_CUTOFF {
        base_case(data, kernel, z, t0, t1);
        return;
    }

    let d = z.dims();
    let next_dim = (dim + 1) % d;
    let (left_slope, right_slope) = kernel.slope(dim);
    let width_base = z.base_width(dim);
    let width_top = z.top_width(dim, delta_t);
    // The source (`rec_stencil.h`'s `recursive_stencil_aux`) floors this at
    // `CUT`, not just the slope term: `deltaBase >= CUT + 2*(|L|+|R|)*deltaT`.
    // Dropping the `CUT` floor (as spec section 4.3's pseudocode literally
    // reads) lets a zero-slope dimension (e.g. a kernel with no spatial
    // dependency at all) pick an M-cut on a zero-width zoid — `split_m`'s
    // `a < s < b` precondition then fails on the very next recursion. The
    // `CUT` floor is what keeps the decision well-founded for every slope,
    // matching the source exactly.
    let threshold = CUT + 2 * (left_slope.abs() + right_slope.abs()) * delta_t;

    if width_base >= threshold {
        let s = z.a(dim) + width_base / 2;
        let (left, right, center) = z.split_m(dim, s, left_slope, right_slope);
        let raw = RawBuffer::new(data);
        runtime.join(
            || {
                recurse(
                    unsafe { raw.get() },
                    kernel,
                    &left,
                    t0,
                    t1,
                    next_dim,
                    depth + 1,
                    runtime,
                );
            },
            || {
                recurse(
                    unsafe { raw.get() },
                    kernel,
                    &right,
                    t0,
                    t1,
                    next_dim,
                    depth + 1,
                    runtime,
                );
            },
        );
        recurse(data, kernel, &center, t0, t1, next_dim, depth + 1, runtime);
    } else if width_top >= threshold {
        let (center, left, right) = z.split_w(dim, left_slope, right_slope, delta_t);
        recurse(data, kernel, &center, t0, t1, next_dim, depth + 1, runtime);
        let raw = RawBuffer::new(data);
        runtime.join(
            || {
                recurse(
                    unsafe { raw.get() },
                    kernel,
                    &left,
                    t0,
                    t1,
                    next_dim,
                    depth + 1,
                    runtime,
                );
            },
            || {
                recurse(
                    unsafe { raw.get() },
                    kernel,
                    &right,
                    t0,
                    t1,
                    next_dim,
                    depth + 1,
                    runtime,
                );
            },
        );
    } else {
        let (lo, lo_t0, lo_t1, hi, hi_t0, hi_t1) = z.split_t(t0, t1);
        recurse(data, kernel, &lo, lo_t0, lo_t1, dim, depth + 1, runtime);
        recurse(data, kernel, &hi, hi_t0, hi_t1, dim, depth + 1, runtime);
    }
}
