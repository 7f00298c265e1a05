//! 3-input simplex-style gradient noise in fixed-point arithmetic.
//!
//! The evaluator must mirror the authoritative on-chain computation
//! operation for operation: the skew/unskew constants, the corner
//! traversal comparisons, the chained permutation hashing and the
//! remainder-based gradient derivation are all contract, not style.
//! Do not "simplify" any arithmetic step here: a mathematically
//! equivalent form with a different rounding point changes every sample.

use crate::fixed::Fixed;
use crate::noise::{PermutationTable, TABLE_SIZE};

/// Skew constant `1/3` (3D simplex).
const F3: Fixed = Fixed::from_ratio(1, 3);
/// Unskew constant `1/6` (3D simplex).
///
/// Note `G3 + G3 != F3` in this representation (one raw unit apart); the
/// corner offsets below spell out which constant each step uses.
const G3: Fixed = Fixed::from_ratio(1, 6);
/// Final scale applied to the four-corner sum.
const NORMALIZER: Fixed = Fixed::from_int(105);

/// Simplex-style 3D noise over a seeded permutation table.
///
/// Output is continuous-looking, lies in roughly `[-1, 1]`, and is a pure
/// deterministic function of `(seed, x, y, z)`.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    table: PermutationTable,
}

impl GradientNoise {
    /// Build the noise generator (and its permutation table) for a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            table: PermutationTable::build(seed),
        }
    }

    /// Sample the noise at a 3-component fixed-point coordinate.
    #[must_use]
    #[allow(clippy::many_single_char_names, reason = "matches the reference algorithm")]
    pub fn sample(&self, x: Fixed, y: Fixed, z: Fixed) -> Fixed {
        // Skew into simplex space and find the originating cell corner.
        let s = (x + y + z) * F3;
        let i = (x + s).floor_int();
        let j = (y + s).floor_int();
        let k = (z + s).floor_int();
        let t = Fixed::from_int(i + j + k) * G3;
        let x0 = x - (Fixed::from_int(i) - t);
        let y0 = y - (Fixed::from_int(j) - t);
        let z0 = z - (Fixed::from_int(k) - t);

        // Tetrahedron traversal order by explicit comparisons (no sorting).
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - Fixed::from_int(i1) + G3;
        let y1 = y0 - Fixed::from_int(j1) + G3;
        let z1 = z0 - Fixed::from_int(k1) + G3;
        let x2 = x0 - Fixed::from_int(i2) + F3;
        let y2 = y0 - Fixed::from_int(j2) + F3;
        let z2 = z0 - Fixed::from_int(k2) + F3;
        let x3 = x0 - Fixed::ONE + Fixed::HALF;
        let y3 = y0 - Fixed::ONE + Fixed::HALF;
        let z3 = z0 - Fixed::ONE + Fixed::HALF;

        // Hash each corner through three chained table lookups.
        let p = &self.table;
        let ii = i.rem_euclid(TABLE_SIZE as i64);
        let jj = j.rem_euclid(TABLE_SIZE as i64);
        let kk = k.rem_euclid(TABLE_SIZE as i64);
        let gi0 = p.lookup(ii + p.lookup(jj + p.lookup(kk)));
        let gi1 = p.lookup(ii + i1 + p.lookup(jj + j1 + p.lookup(kk + k1)));
        let gi2 = p.lookup(ii + i2 + p.lookup(jj + j2 + p.lookup(kk + k2)));
        let gi3 = p.lookup(ii + 1 + p.lookup(jj + 1 + p.lookup(kk + 1)));

        let n = Self::corner_noise(gi0, x0, y0, z0)
            + Self::corner_noise(gi1, x1, y1, z1)
            + Self::corner_noise(gi2, x2, y2, z2)
            + Self::corner_noise(gi3, x3, y3, z3);

        NORMALIZER * n
    }

    /// Contribution of one simplex corner: `max(0, 1/2 - |d|^2)^4 * (g . d)`.
    #[inline]
    fn corner_noise(index: i64, dx: Fixed, dy: Fixed, dz: Fixed) -> Fixed {
        let t = Fixed::HALF - dx * dx - dy * dy - dz * dz;
        if t.is_negative() {
            Fixed::ZERO
        } else {
            let (gx, gy, gz) = Self::gradient(index);
            let t2 = t * t;
            t2 * t2 * (gx * dx + gy * dy + gz * dz)
        }
    }

    /// Derive a gradient vector from a permutation index.
    ///
    /// Table-free: the index is split on a 7x7 grid (`% 49`, `/ 7`, `% 7`),
    /// each axis mapped through `(4v - 13) / 14`, and the third component
    /// is the octahedron remainder `1 - |gx| - |gy|`. When that remainder
    /// is non-positive the x/y components are folded back by one unit so
    /// the vector stays on the surface. Every division and its rounding
    /// point here is contract; this derivation is the single most
    /// porting-sensitive step of the whole algorithm.
    #[inline]
    fn gradient(index: i64) -> (Fixed, Fixed, Fixed) {
        let cell = index % 49;
        let cx = cell / 7;
        let cy = cell % 7;
        let mut gx = Fixed::from_ratio(4 * cx - 13, 14);
        let mut gy = Fixed::from_ratio(4 * cy - 13, 14);
        let gz = Fixed::ONE - gx.abs() - gy.abs();
        if gz.raw() <= 0 {
            let sx = if gx.is_negative() { -1 } else { 1 };
            let sy = if gy.is_negative() { -1 } else { 1 };
            gx = gx - Fixed::from_int(sx);
            gy = gy - Fixed::from_int(sy);
        }
        (gx, gy, gz)
    }
}
