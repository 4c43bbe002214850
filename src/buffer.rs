//! Owning, move-only multi-copy grid storage.
//!
//! Mirrors the source's `BufferSet<Elem, Dimensions, Copies>` (see
//! `bufferSet.h`): one contiguous allocation holding `copies` full grids,
//! indexed by coordinates and a time step that maps to `t mod copies`.
//! Rust's ownership model already makes a plain use-after-move a compile
//! error, so the "invalidated buffer" scenario from spec section 3.2 is
//! reachable only through the explicit [`BufferSet::take`] affordance.

use crate::error::StencilError;
use crate::zoid::Zoid;

/// An owning, row-major, multi-copy grid of `E` elements.
///
/// `BufferSet` never implements `Clone` or `Copy` — the source disables
/// copy construction "to prevent silent aliasing" and the same rule
/// applies here: the only way to get a second `BufferSet` is to build
/// one from scratch.
#[derive(Debug)]
pub struct BufferSet<E> {
    dims: Vec<usize>,
    /// Product of `dims`; zero means this buffer has been [`take`]n and
    /// is invalidated.
    n: usize,
    copies: usize,
    storage: Vec<E>,
}

impl<E> Default for BufferSet<E> {
    fn default() -> Self {
        BufferSet {
            dims: Vec::new(),
            n: 0,
            copies: 0,
            storage: Vec::new(),
        }
    }
}

impl<E: Clone> BufferSet<E> {
    /// Builds a buffer from an element vector, initializing copy 0 and
    /// leaving the remaining `copies - 1` copies at `fill`.
    ///
    /// `copies` must be `>= 2` and `data.len()` must equal the product of
    /// `dims` — both are construction preconditions, not recoverable
    /// errors (spec section 3.2).
    pub fn with_fill(dims: Vec<usize>, data: &[E], copies: usize, fill: E) -> Self {
        assert!(copies >= 2, "BufferSet requires at least 2 copies, got {copies}");
        assert!(
            dims.len() <= crate::config::DIM_MAX,
            "dimensionality {} exceeds DIM_MAX {}",
            dims.len(),
            crate::config::DIM_MAX
        );
        let n: usize = dims.iter().product();
        assert_eq!(
            data.len(),
            n,
            "initial data length {} must equal product of dims {}",
            data.len(),
            n
        );

        let mut storage = vec![fill; n * copies];
        storage[..n].clone_from_slice(data);
        BufferSet {
            dims,
            n,
            copies,
            storage,
        }
    }
}

impl<E: Clone + Default> BufferSet<E> {
    /// Builds a 2-copy buffer from an element vector (`spec.md`
    /// `BufferSet::new`), filling the uninitialized copies with
    /// `E::default()`.
    pub fn new(dims: Vec<usize>, data: &[E]) -> Self {
        Self::with_fill(dims, data, 2, E::default())
    }

    /// As [`BufferSet::new`] but with an explicit copy count.
    pub fn with_copies(dims: Vec<usize>, data: &[E], copies: usize) -> Self {
        Self::with_fill(dims, data, copies, E::default())
    }
}

impl<E> BufferSet<E> {
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn dimensions(&self) -> usize {
        self.dims.len()
    }

    /// Number of elements per copy (`Π dims[k]`).
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn copies(&self) -> usize {
        self.copies
    }

    pub fn width(&self) -> usize {
        self.dims[0]
    }

    pub fn height(&self) -> usize {
        self.dims[1]
    }

    pub fn depth(&self) -> usize {
        self.dims[2]
    }

    /// True once this buffer has been [`take`]n and no longer owns
    /// storage.
    pub fn is_invalidated(&self) -> bool {
        self.n == 0
    }

    /// Moves the storage out of `self`, leaving `self` invalidated —
    /// the Rust analogue of the source's move constructor zeroing the
    /// source object. After this call every access through `self` fails.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// A zero-slope zoid covering the whole grid — the starting pyramid
    /// for [`crate::run`] (spec section 4.4).
    pub fn global_region(&self) -> Zoid {
        Zoid::vertical(&self.dims)
    }

    fn offset(&self, coords: &[i64]) -> usize {
        debug_assert_eq!(coords.len(), self.dims.len(), "coordinate arity mismatch");
        let mut off = 0usize;
        let mut stride = 1usize;
        for (k, &c) in coords.iter().enumerate() {
            assert!(
                c >= 0 && (c as usize) < self.dims[k],
                "coordinate {coords:?} out of range for dims {:?}",
                self.dims
            );
            off += (c as usize) * stride;
            stride *= self.dims[k];
        }
        off
    }

    /// Point access: `elem(coords, t)` reads/writes copy `t mod copies`.
    /// Panics (a fatal contract breach, spec section 7) on an
    /// invalidated buffer or an out-of-range coordinate; see
    /// [`BufferSet::try_elem`] for a checked variant that returns a
    /// `Result` instead.
    pub fn elem(&self, coords: &[i64], t: i64) -> &E {
        assert!(!self.is_invalidated(), "accessing invalidated buffer");
        let copy = t.rem_euclid(self.copies as i64) as usize;
        &self.storage[self.n * copy + self.offset(coords)]
    }

    pub fn elem_mut(&mut self, coords: &[i64], t: i64) -> &mut E {
        assert!(self.n != 0, "accessing invalidated buffer");
        let copy = t.rem_euclid(self.copies as i64) as usize;
        let off = self.offset(coords);
        &mut self.storage[self.n * copy + off]
    }

    /// Checked point access for the public library surface: returns
    /// `StencilError::InvalidatedBuffer`/`OutOfRange` instead of
    /// panicking. The base case and example kernels use the faster
    /// [`BufferSet::elem`]/[`BufferSet::elem_mut`] directly, trusting the
    /// decomposition's own invariants.
    pub fn try_elem(&self, coords: &[i64], t: i64) -> Result<&E, StencilError> {
        if self.is_invalidated() {
            return Err(StencilError::InvalidatedBuffer);
        }
        let in_range = coords
            .iter()
            .zip(&self.dims)
            .all(|(&c, &d)| c >= 0 && (c as usize) < d);
        if coords.len() != self.dims.len() || !in_range {
            return Err(StencilError::OutOfRange {
                coord: coords.to_vec(),
                dims: self.dims.clone(),
            });
        }
        let copy = t.rem_euclid(self.copies as i64) as usize;
        Ok(&self.storage[self.n * copy + self.offset(coords)])
    }

    /// Raw pointer to the start of `copy`, for interop (spec section 6).
    pub fn pointer(&self, copy: usize) -> *const E {
        &self.storage[self.n * copy]
    }

    pub fn pointer_mut(&mut self, copy: usize) -> *mut E {
        &mut self.storage[self.n * copy]
    }

    /// Safe slice view of `copy`.
    pub fn as_slice(&self, copy: usize) -> &[E] {
        &self.storage[self.n * copy..self.n * (copy + 1)]
    }

    pub fn as_slice_mut(&mut self, copy: usize) -> &mut [E] {
        &mut self.storage[self.n * copy..self.n * (copy + 1)]
    }
}

impl<E: PartialEq> PartialEq for BufferSet<E> {
    /// Element-wise equality over all `copies` copies (spec section 6).
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims && self.copies == other.copies && self.storage == other.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_pointer() {
        let data = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        let b = BufferSet::new(vec![8], &data);
        assert_eq!(b.as_slice(0), &data[..]);
    }

    #[test]
    fn copy_indexing_wraps_modulo_copies() {
        let data = vec![10i32, 20, 30];
        let mut b = BufferSet::with_copies(vec![3], &data, 2);
        *b.elem_mut(&[0], 1) = 99;
        assert_eq!(*b.elem(&[0], 1), 99);
        assert_eq!(*b.elem(&[0], 3), 99); // t and t+copies alias the same copy
    }

    #[test]
    fn take_invalidates_the_source() {
        let data = vec![1u8, 2, 3, 4];
        let mut b = BufferSet::new(vec![4], &data);
        let moved = b.take();
        assert!(b.is_invalidated());
        assert!(!moved.is_invalidated());
        assert!(matches!(
            b.try_elem(&[0], 0),
            Err(StencilError::InvalidatedBuffer)
        ));
    }

    #[test]
    fn try_elem_reports_out_of_range() {
        let data = vec![1u8, 2, 3, 4];
        let b = BufferSet::new(vec![4], &data);
        assert!(matches!(
            b.try_elem(&[4], 0),
            Err(StencilError::OutOfRange { .. })
        ));
    }

    #[test]
    fn global_region_is_vertical_and_covers_full_grid() {
        let data = vec![0u8; 12];
        let b = BufferSet::new(vec![3, 4], &data);
        let z = b.global_region();
        assert_eq!(z.dims(), 2);
        assert_eq!((z.a(0), z.b(0)), (0, 3));
        assert_eq!((z.a(1), z.b(1)), (0, 4));
    }
}
