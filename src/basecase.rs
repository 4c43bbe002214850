//! Direct iteration over a zoid's space-time cells (spec section 4.2).
//!
//! The leaf of the recursion: every call bottoms out here once `delta_t
//! <= CUT` or the recursion fuse (`FUN_CUTOFF`) trips.

use crate::buffer::BufferSet;
use crate::kernel::Kernel;
use crate::zoid::Zoid;

/// Runs `kernel` over every point of `z` for every time step in `[t0,
/// t1)`, sliding `z`'s spatial bounds by its slopes after each step.
///
/// Whether `apply_interior` or `apply_boundary` is used is decided once
/// per time step (not per point): if the zoid's current bounds stay
/// `neighbours()` away from every grid edge, every point that step is
/// interior by construction and `apply_interior` is used for the whole
/// slice; otherwise `apply_boundary` is used for the whole slice (it
/// remains correct for interior points too, just does the clamp work
/// needlessly).
pub fn base_case<E>(data: &mut BufferSet<E>, kernel: &dyn Kernel<E>, z: &Zoid, t0: i64, t1: i64) {
    let d = z.dims();
    let r = kernel.neighbours() as i64;
    let dims: Vec<i64> = data.dims().iter().map(|&s| s as i64).collect();

    let mut lo: Vec<i64> = (0..d).map(|k| z.a(k)).collect();
    let mut hi: Vec<i64> = (0..d).map(|k| z.b(k)).collect();

    for t in t0..t1 {
        if lo.iter().zip(&hi).any(|(&l, &h)| l >= h) {
            // Empty spatial extent this step: a legal no-op (spec 4.2).
        } else {
            let interior = (0..d).all(|k| lo[k] >= r && hi[k] <= dims[k] - r);
            let mut coords = lo.clone();
            'odometer: loop {
                if interior {
                    kernel.apply_interior(data, &coords, t);
                } else {
                    kernel.apply_boundary(data, &coords, t);
                }

                // Advance the odometer: dimension 0 fastest, matching
                // the buffer's row-major linearization.
                let mut k = 0;
                loop {
                    coords[k] += 1;
                    if coords[k] < hi[k] {
                        break;
                    }
                    coords[k] = lo[k];
                    k += 1;
                    if k == d {
                        break 'odometer;
                    }
                }
            }
        }

        for k in 0..d {
            lo[k] += z.da(k);
            hi[k] += z.db(k);
        }
    }
}
