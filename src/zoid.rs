//! Space-time trapezoids ("zoids") and their splits.
//!
//! A zoid is the tuple `(a, b, da, db)`: at local time offset `tau = t -
//! t0` it covers `[a[k] + da[k]*tau, b[k] + db[k]*tau)` in each dimension
//! `k`. Zoids are immutable value data; every split below returns new
//! zoids and never mutates `self`. Bounds are half-open (`[a, b)`)
//! everywhere, including at a cut position — the source is inconsistent
//! about this in places (spec section 9); this implementation is not.

/// A `d`-dimensional space-time trapezoid, paired externally with a time
/// interval `[t0, t1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zoid {
    a: Vec<i64>,
    b: Vec<i64>,
    da: Vec<i64>,
    db: Vec<i64>,
}

impl Zoid {
    /// Builds a zoid from its four per-dimension vectors. All four must
    /// have the same length; that length is the zoid's dimensionality.
    pub fn new(a: Vec<i64>, b: Vec<i64>, da: Vec<i64>, db: Vec<i64>) -> Self {
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), da.len());
        assert_eq!(a.len(), db.len());
        Zoid { a, b, da, db }
    }

    /// A zoid with zero slope on every dimension — the "perfect vertical
    /// sides" starting pyramid described in spec section 4.4.
    pub fn vertical(dims: &[usize]) -> Self {
        let d = dims.len();
        Zoid {
            a: vec![0; d],
            b: dims.iter().map(|&s| s as i64).collect(),
            da: vec![0; d],
            db: vec![0; d],
        }
    }

    pub fn dims(&self) -> usize {
        self.a.len()
    }

    pub fn a(&self, k: usize) -> i64 {
        self.a[k]
    }
    pub fn b(&self, k: usize) -> i64 {
        self.b[k]
    }
    pub fn da(&self, k: usize) -> i64 {
        self.da[k]
    }
    pub fn db(&self, k: usize) -> i64 {
        self.db[k]
    }

    /// Base width (`tau = 0`) along dimension `k`.
    pub fn base_width(&self, k: usize) -> i64 {
        self.b[k] - self.a[k]
    }

    /// Top width (`tau = delta_t`) along dimension `k`.
    pub fn top_width(&self, k: usize, delta_t: i64) -> i64 {
        (self.b[k] + self.db[k] * delta_t) - (self.a[k] + self.da[k] * delta_t)
    }

    /// This zoid's bounds along `k`, after advancing `steps` time steps.
    pub fn bounds_after(&self, k: usize, steps: i64) -> (i64, i64) {
        (
            self.a[k] + self.da[k] * steps,
            self.b[k] + self.db[k] * steps,
        )
    }

    /// `split_M` — the parallel space cut (spec section 4.1).
    ///
    /// Splits dimension `k` at position `s`, given the kernel's slope
    /// `(left, right)` on that dimension (`left >= 0`, `right <= 0`).
    /// Returns `(left_strip, right_strip, center_strip)` in the order the
    /// caller must respect: `left` and `right` are mutually independent
    /// and may run concurrently; `center` must run after both.
    pub fn split_m(&self, k: usize, s: i64, left: i64, right: i64) -> (Zoid, Zoid, Zoid) {
        assert!(self.a[k] < s && s < self.b[k], "split position out of range");

        let mut left_strip = self.clone();
        left_strip.b[k] = s;
        left_strip.db[k] = left;

        let mut right_strip = self.clone();
        right_strip.a[k] = s;
        right_strip.da[k] = -right;

        let mut center_strip = self.clone();
        center_strip.a[k] = s;
        center_strip.b[k] = s;
        center_strip.da[k] = left;
        center_strip.db[k] = -right;

        (left_strip, right_strip, center_strip)
    }

    /// `split_W` — the serial space cut (spec section 4.1).
    ///
    /// Used when the *top* (not the base) is the wide side. Derived by
    /// time-mirroring `split_M`: reflecting `self` through `tau =
    /// delta_t` turns its top into the mirrored zoid's base (`a'' = a +
    /// da*delta_t`, `da'' = -da`, same for `b`/`db`), `split_M` cuts that
    /// mirrored base at its midpoint, and mirroring the three resulting
    /// pieces back through `tau = delta_t` gives the pieces below. Unlike
    /// `split_M`'s cut position (the *base* midpoint), this one is the
    /// *top* midpoint — using the base midpoint with `split_M`'s slope
    /// assignment, as an earlier version of this function did, both
    /// leaves a gap and double-writes a cell whenever the top is
    /// genuinely wider than the base.
    ///
    /// Returns `(center_strip, left_strip, right_strip)` in execution
    /// order: the center strip must finish before the two outward
    /// strips start (spec section 5, "both outward strips happen-after
    /// the center"); `left_strip` and `right_strip` are then mutually
    /// independent and may run concurrently with each other.
    pub fn split_w(&self, k: usize, left: i64, right: i64, delta_t: i64) -> (Zoid, Zoid, Zoid) {
        let a = self.a[k];
        let b = self.b[k];
        let top_a = a + self.da[k] * delta_t;
        let top_b = b + self.db[k] * delta_t;
        let s = top_a + (top_b - top_a) / 2;
        assert!(
            top_a < s && s < top_b,
            "split_W requires a top width wide enough to admit a strict split"
        );

        let mut left_strip = self.clone();
        left_strip.b[k] = s + left * delta_t;
        left_strip.db[k] = -left;
        // a[k]/da[k] stay the original base's — the base-left corner is
        // untouched by a cut positioned at the top.

        let mut right_strip = self.clone();
        right_strip.a[k] = s - right * delta_t;
        right_strip.da[k] = right;
        // b[k]/db[k] stay the original base's, symmetrically.

        let mut center_strip = self.clone();
        center_strip.a[k] = s + left * delta_t;
        center_strip.b[k] = s - right * delta_t;
        center_strip.da[k] = -left;
        center_strip.db[k] = right;

        (center_strip, left_strip, right_strip)
    }

    /// `split_T` — the time cut (spec section 4.1).
    ///
    /// Given `[t0, t1)` with `delta_t = t1 - t0 >= 2`, returns the first
    /// half's `(zoid, t0, t0+h)` unchanged and the second half's
    /// `(advanced_zoid, t0+h, t1)`, where `advanced_zoid` is `self` with
    /// every bound walked forward by `h` steps of its own slopes.
    pub fn split_t(&self, t0: i64, t1: i64) -> (Zoid, i64, i64, Zoid, i64, i64) {
        let delta_t = t1 - t0;
        assert!(delta_t >= 2);
        let h = delta_t / 2;

        let mut top = self.clone();
        for k in 0..self.dims() {
            let (a, b) = self.bounds_after(k, h);
            top.a[k] = a;
            top.b[k] = b;
        }

        (self.clone(), t0, t0 + h, top, t0 + h, t1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_zoid_covers_full_grid() {
        let z = Zoid::vertical(&[4, 5]);
        assert_eq!(z.dims(), 2);
        assert_eq!((z.a(0), z.b(0)), (0, 4));
        assert_eq!((z.a(1), z.b(1)), (0, 5));
        assert_eq!((z.da(0), z.db(0)), (0, 0));
    }

    #[test]
    fn split_m_covers_original_footprint_at_base_and_top() {
        // left=1, right=-1: a symmetric 1-neighbour stencil.
        let z = Zoid::new(vec![0], vec![10], vec![0], vec![0]);
        let (l, r, c) = z.split_m(0, 5, 1, -1);

        // Base (tau=0): l covers [0,5), r covers [5,10), matching original.
        assert_eq!((l.a(0), l.b(0)), (0, 5));
        assert_eq!((r.a(0), r.b(0)), (5, 10));
        assert_eq!((c.a(0), c.b(0)), (5, 5));

        // Outward slopes recede from the cut line.
        assert_eq!(l.db(0), 1);
        assert_eq!(r.da(0), 1);
        // Center fills the gap they leave behind.
        assert_eq!(c.da(0), 1);
        assert_eq!(c.db(0), -1);
    }

    #[test]
    fn split_w_covers_original_footprint_at_base_and_top() {
        // The exact zoid `executor::recurse` reaches from
        // `tests/scenarios.rs`'s scenario 5 (1D, slope (1,-1), CUT=10):
        // the left outward strip of a split_M, with delta_t=12 and
        // width_top=62 wide enough to trigger split_W.
        let z = Zoid::new(vec![0], vec![50], vec![0], vec![1]);
        let delta_t = 12;
        let (c, l, r) = z.split_w(0, 1, -1, delta_t);

        // Base (tau=0): union must equal the original's base [0,50)
        // with no gap or overlap.
        assert_eq!((l.a(0), l.b(0)), (0, 43));
        assert_eq!((c.a(0), c.b(0)), (43, 43));
        assert_eq!((r.a(0), r.b(0)), (43, 50));

        // Top (tau=delta_t): union must equal the original's top
        // [0,62) (b + db*delta_t - (a + da*delta_t) = 50+12-0 = 62).
        assert_eq!(l.bounds_after(0, delta_t), (0, 31));
        assert_eq!(c.bounds_after(0, delta_t), (31, 31));
        assert_eq!(r.bounds_after(0, delta_t), (31, 62));

        // Adjacent pieces meet exactly at both ends — no gap, no
        // double-covered cell.
        assert_eq!(l.b(0), c.a(0));
        assert_eq!(c.b(0), r.a(0));
        assert_eq!(l.bounds_after(0, delta_t).1, c.bounds_after(0, delta_t).0);
        assert_eq!(c.bounds_after(0, delta_t).1, r.bounds_after(0, delta_t).0);
    }

    #[test]
    #[should_panic(expected = "split_W requires a top width wide enough")]
    fn split_w_rejects_a_top_too_narrow_to_split() {
        // top width is 1 (a single point under CUT's integer midpoint),
        // so there's no integer split position strictly inside it.
        let z = Zoid::new(vec![0], vec![1], vec![0], vec![0]);
        z.split_w(0, 0, 0, 1);
    }

    #[test]
    fn split_t_advances_bounds_by_slope() {
        let z = Zoid::new(vec![0], vec![10], vec![1], vec![-1]);
        let (lo, lo_t0, lo_t1, hi, hi_t0, hi_t1) = z.split_t(0, 8);
        assert_eq!((lo_t0, lo_t1), (0, 4));
        assert_eq!((hi_t0, hi_t1), (4, 8));
        assert_eq!((lo.a(0), lo.b(0)), (0, 10));
        assert_eq!((hi.a(0), hi.b(0)), (4, 6));
    }

    #[test]
    fn base_and_top_width_match_bounds_after() {
        let z = Zoid::new(vec![2], vec![8], vec![1], vec![-1]);
        assert_eq!(z.base_width(0), 6);
        assert_eq!(z.top_width(0, 3), 0); // (8-3) - (2+3) = 0
        let (a, b) = z.bounds_after(0, 3);
        assert_eq!(b - a, z.top_width(0, 3));
    }
}
