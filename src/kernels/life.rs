//! Conway's Game of Life on a 0/255 byte grid (`main.cpp`'s `Life_k`).
//!
//! Implements the standard B3/S23 rule over the full 8-cell Moore
//! neighbourhood. The source's loop bounds (`x < MIN(W, i+1)`) only ever
//! visit two of the eight neighbours plus the cell itself — one of the
//! bugs spec section 9 warns about — so this counts the full clamped 3x3
//! neighbourhood, excluding the center, to match the blinker behaviour
//! spec section 8's scenario 3 requires.

use crate::buffer::BufferSet;
use crate::kernel::{clamp_range, Kernel};

const ALIVE: u8 = 255;
const DEAD: u8 = 0;

pub struct Life;

impl Life {
    fn next_state(data: &BufferSet<u8>, i: i64, j: i64, t: i64) -> u8 {
        let (xa, xb) = clamp_range(i, 1, data.width() as i64);
        let (ya, yb) = clamp_range(j, 1, data.height() as i64);

        let mut live_neighbours = 0u32;
        for x in xa..=xb {
            for y in ya..=yb {
                if x == i && y == j {
                    continue;
                }
                if *data.elem(&[x, y], t) > 127 {
                    live_neighbours += 1;
                }
            }
        }

        let alive = *data.elem(&[i, j], t) > 127;
        match (alive, live_neighbours) {
            (true, 2) | (true, 3) => ALIVE,
            (false, 3) => ALIVE,
            _ => DEAD,
        }
    }
}

impl Kernel<u8> for Life {
    fn dimensions(&self) -> usize {
        2
    }

    fn neighbours(&self) -> usize {
        1
    }

    fn slope(&self, _k: usize) -> (i64, i64) {
        (1, -1)
    }

    fn apply_interior(&self, data: &mut BufferSet<u8>, coords: &[i64], t: i64) {
        let v = Self::next_state(data, coords[0], coords[1], t);
        *data.elem_mut(coords, t + 1) = v;
    }

    fn apply_boundary(&self, data: &mut BufferSet<u8>, coords: &[i64], t: i64) {
        self.apply_interior(data, coords, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> BufferSet<u8> {
        let mut data = vec![0u8; 25];
        for (x, y) in [(1, 2), (2, 2), (3, 2)] {
            data[y * 5 + x] = ALIVE;
        }
        BufferSet::new(vec![5, 5], &data)
    }

    fn alive_cells(b: &BufferSet<u8>, t: i64) -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        for y in 0..5 {
            for x in 0..5 {
                if *b.elem(&[x, y], t) > 127 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn blinker_flips_orientation_each_step() {
        let mut b = blinker();
        let k = Life;
        for y in 0..5i64 {
            for x in 0..5i64 {
                k.apply_boundary(&mut b, &[x, y], 0);
            }
        }
        let mut after_one: Vec<_> = alive_cells(&b, 1);
        after_one.sort();
        assert_eq!(after_one, vec![(2, 1), (2, 2), (2, 3)]);
    }
}
