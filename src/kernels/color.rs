//! Time-indexed fill kernel (`main.cpp`'s `Color_k`).

use crate::buffer::BufferSet;
use crate::kernel::Kernel;

/// Ignores the previous value and writes `t mod 256` to every cell.
/// Declares the same radius/slope as [`crate::kernels::Blur3`] so it can
/// stand in for it in tests that exercise the M/W/T cut machinery without
/// caring what the update actually computes.
pub struct Color {
    dims: usize,
}

impl Color {
    pub fn new(dims: usize) -> Self {
        Color { dims }
    }
}

impl Kernel<u8> for Color {
    fn dimensions(&self) -> usize {
        self.dims
    }

    fn neighbours(&self) -> usize {
        1
    }

    fn slope(&self, _k: usize) -> (i64, i64) {
        (1, -1)
    }

    fn apply_interior(&self, data: &mut BufferSet<u8>, coords: &[i64], t: i64) {
        *data.elem_mut(coords, t + 1) = (t.rem_euclid(256)) as u8;
    }

    fn apply_boundary(&self, data: &mut BufferSet<u8>, coords: &[i64], t: i64) {
        self.apply_interior(data, coords, t);
    }
}
