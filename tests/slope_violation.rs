//! Radius-checking adapter (spec section 7, `SlopeViolation`, "test
//! only"): no core type enforces that a kernel only reads within its
//! declared `neighbours()`, so this harness checks it indirectly by
//! perturbing a cell just outside the declared radius and asserting the
//! kernel's output at the point under test doesn't change. A kernel that
//! reads further than it declares would make this test fail.

use stencil::kernel::Kernel;
use stencil::kernels::{Blur5, CopyKernel, Life};
use stencil::BufferSet;

fn assert_output_independent_of_far_cell<E>(
    kernel: &dyn Kernel<E>,
    dims: Vec<usize>,
    base: Vec<E>,
    center: Vec<i64>,
    far: Vec<i64>,
    poison_a: E,
    poison_b: E,
) where
    E: Clone + Default + PartialEq + std::fmt::Debug,
{
    let idx = linear_index(&dims, &far);

    let mut a = base.clone();
    a[idx] = poison_a;
    let mut ba = BufferSet::new(dims.clone(), &a);
    kernel.apply_boundary(&mut ba, &center, 0);

    let mut b = base;
    b[idx] = poison_b;
    let mut bb = BufferSet::new(dims, &b);
    kernel.apply_boundary(&mut bb, &center, 0);

    assert_eq!(
        ba.elem(&center, 1),
        bb.elem(&center, 1),
        "output at {center:?} depends on a cell {far:?} outside the declared radius"
    );
}

fn linear_index(dims: &[usize], coords: &[i64]) -> usize {
    let mut idx = 0;
    let mut stride = 1;
    for (k, &c) in coords.iter().enumerate() {
        idx += c as usize * stride;
        stride *= dims[k];
    }
    idx
}

#[test]
fn copy_kernel_ignores_every_other_cell() {
    // radius 0: every other cell in the grid is "far".
    let base = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_output_independent_of_far_cell(
        &CopyKernel::new(1),
        vec![8],
        base,
        vec![3],
        vec![7],
        10,
        200,
    );
}

#[test]
fn life_kernel_ignores_cells_outside_the_moore_neighbourhood() {
    let base = vec![0u8; 64];
    assert_output_independent_of_far_cell(
        &Life,
        vec![8, 8],
        base,
        vec![4, 4],
        vec![0, 0],
        0,
        255,
    );
}

#[test]
fn blur5_ignores_cells_three_or_more_away() {
    let base = vec![50.0f64; 64];
    assert_output_independent_of_far_cell(
        &Blur5,
        vec![8, 8],
        base,
        vec![4, 4],
        vec![0, 0],
        0.0,
        1000.0,
    );
}
