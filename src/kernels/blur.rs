//! Fixed-coefficient 2-D box blurs (`kernels_2D.h`'s `Blur3_k`/`Blur5_k`).
//!
//! Both kernels operate on `f64` grids so the "coefficients sum to one"
//! identity-normalization property (spec section 8, scenario 2) holds
//! exactly rather than drifting under repeated integer truncation.
//!
//! Unlike the source, the boundary path renormalizes by the sum of the
//! coefficients actually in range instead of dividing by the full
//! kernel's sum of 1.0: the source's clamped loop silently drops the
//! out-of-range terms and keeps whatever partial sum results, so a
//! uniform field loses mass at every edge cell (a 4x4 grid is *all*
//! edge cells under a radius-1 kernel) and scenario 2's "stays uniform"
//! property would not hold. Renormalizing is the fix.

use crate::buffer::BufferSet;
use crate::kernel::{clamp_range, Kernel};

/// 3x3 Gaussian-like blur, radius 1. Coefficients sum to exactly 1.0.
pub struct Blur3;

const BLUR3_COEFF: [[f64; 3]; 3] = [
    [0.01, 0.08, 0.01],
    [0.08, 0.64, 0.08],
    [0.01, 0.08, 0.01],
];

impl Blur3 {
    fn convolve(data: &BufferSet<f64>, i: i64, j: i64, t: i64) -> f64 {
        let (xa, xb) = clamp_range(i, 1, data.width() as i64);
        let (ya, yb) = clamp_range(j, 1, data.height() as i64);
        let mut sum = 0.0;
        let mut weight = 0.0;
        for x in xa..=xb {
            for y in ya..=yb {
                let ki = (x - i + 1) as usize;
                let kj = (y - j + 1) as usize;
                let c = BLUR3_COEFF[ki][kj];
                sum += data.elem(&[x, y], t) * c;
                weight += c;
            }
        }
        sum / weight
    }
}

impl Kernel<f64> for Blur3 {
    fn dimensions(&self) -> usize {
        2
    }

    fn neighbours(&self) -> usize {
        1
    }

    fn slope(&self, _k: usize) -> (i64, i64) {
        (1, -1)
    }

    fn apply_interior(&self, data: &mut BufferSet<f64>, coords: &[i64], t: i64) {
        let v = Self::convolve(data, coords[0], coords[1], t);
        *data.elem_mut(coords, t + 1) = v;
    }

    fn apply_boundary(&self, data: &mut BufferSet<f64>, coords: &[i64], t: i64) {
        self.apply_interior(data, coords, t);
    }
}

/// 5x5 Gaussian-like blur, radius 2. Coefficients sum to exactly 1.0.
pub struct Blur5;

const BLUR5_COEFF: [[f64; 5]; 5] = [
    [0.01, 0.02, 0.04, 0.02, 0.01],
    [0.02, 0.04, 0.08, 0.04, 0.02],
    [0.04, 0.08, 0.16, 0.08, 0.04],
    [0.02, 0.04, 0.08, 0.04, 0.02],
    [0.01, 0.02, 0.04, 0.02, 0.01],
];

impl Blur5 {
    fn convolve(data: &BufferSet<f64>, i: i64, j: i64, t: i64) -> f64 {
        let (xa, xb) = clamp_range(i, 2, data.width() as i64);
        let (ya, yb) = clamp_range(j, 2, data.height() as i64);
        let mut sum = 0.0;
        let mut weight = 0.0;
        for x in xa..=xb {
            for y in ya..=yb {
                let ki = (x - i + 2) as usize;
                let kj = (y - j + 2) as usize;
                let c = BLUR5_COEFF[ki][kj];
                sum += data.elem(&[x, y], t) * c;
                weight += c;
            }
        }
        sum / weight
    }
}

impl Kernel<f64> for Blur5 {
    fn dimensions(&self) -> usize {
        2
    }

    fn neighbours(&self) -> usize {
        2
    }

    fn slope(&self, _k: usize) -> (i64, i64) {
        (2, -2)
    }

    fn apply_interior(&self, data: &mut BufferSet<f64>, coords: &[i64], t: i64) {
        let v = Self::convolve(data, coords[0], coords[1], t);
        *data.elem_mut(coords, t + 1) = v;
    }

    fn apply_boundary(&self, data: &mut BufferSet<f64>, coords: &[i64], t: i64) {
        self.apply_interior(data, coords, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur3_preserves_uniform_field() {
        let data = vec![100.0f64; 16];
        let mut b = BufferSet::new(vec![4, 4], &data);
        let k = Blur3;
        for j in 0..4 {
            for i in 0..4 {
                k.apply_boundary(&mut b, &[i, j], 0);
            }
        }
        for j in 0..4 {
            for i in 0..4 {
                assert!((b.elem(&[i, j], 1) - 100.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn blur3_coefficients_sum_to_one() {
        let sum: f64 = BLUR3_COEFF.iter().flatten().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn blur5_coefficients_sum_to_one() {
        let sum: f64 = BLUR5_COEFF.iter().flatten().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
