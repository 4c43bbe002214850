//! Naive iterative executor — the oracle the recursive one must match.
//!
//! Sweeps the whole grid once per time step with no decomposition at
//! all. Grounds spec section 8's "equivalence to reference" property:
//! every testable scenario compares [`crate::run`]'s output against
//! [`run_iterative`] on the same input.

use crate::buffer::BufferSet;
use crate::kernel::Kernel;

/// Runs `kernel` over the whole grid, one time step at a time, for `t`
/// steps. Always uses `apply_boundary` everywhere — correctness, not
/// performance, is the point.
pub fn run_iterative<E>(data: &mut BufferSet<E>, kernel: &dyn Kernel<E>, t: i64) {
    let dims = data.dims().to_vec();
    let d = dims.len();
    if d == 0 || t <= 0 {
        return;
    }

    let mut coords = vec![0i64; d];
    for step in 0..t {
        'odometer: loop {
            kernel.apply_boundary(data, &coords, step);

            let mut k = 0;
            loop {
                coords[k] += 1;
                if (coords[k] as usize) < dims[k] {
                    break;
                }
                coords[k] = 0;
                k += 1;
                if k == d {
                    break 'odometer;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::copy::CopyKernel;

    #[test]
    fn zero_steps_is_a_no_op() {
        let data = vec![1u8, 2, 3, 4];
        let mut b = BufferSet::new(vec![4], &data);
        run_iterative(&mut b, &CopyKernel::new(1), 0);
        assert_eq!(b.as_slice(0), &data[..]);
    }

    #[test]
    fn copy_kernel_leaves_values_unchanged_after_several_steps() {
        let data = vec![1u8, 2, 3, 4, 5];
        let mut b = BufferSet::new(vec![5], &data);
        run_iterative(&mut b, &CopyKernel::new(1), 4);
        assert_eq!(b.as_slice(0), &data[..]);
    }
}
