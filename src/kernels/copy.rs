//! No-op passthrough kernel (spec section 8, scenario 1).

use crate::buffer::BufferSet;
use crate::kernel::Kernel;

/// Copies each cell forward unchanged: `elem(coords, t+1) = elem(coords,
/// t)`. Zero radius, zero slope on every dimension — its stencil cone
/// never widens, so `interior` and `boundary` are identical.
pub struct CopyKernel {
    dims: usize,
}

impl CopyKernel {
    pub fn new(dims: usize) -> Self {
        CopyKernel { dims }
    }
}

impl<E: Clone + Sync> Kernel<E> for CopyKernel {
    fn dimensions(&self) -> usize {
        self.dims
    }

    fn neighbours(&self) -> usize {
        0
    }

    fn slope(&self, _k: usize) -> (i64, i64) {
        (0, 0)
    }

    fn apply_interior(&self, data: &mut BufferSet<E>, coords: &[i64], t: i64) {
        let v = data.elem(coords, t).clone();
        *data.elem_mut(coords, t + 1) = v;
    }

    fn apply_boundary(&self, data: &mut BufferSet<E>, coords: &[i64], t: i64) {
        self.apply_interior(data, coords, t);
    }
}
