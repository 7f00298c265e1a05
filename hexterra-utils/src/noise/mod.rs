//! Deterministic gradient-noise primitives.
//!
//! This module provides the seeded building blocks for the terrain fields:
//!
//! - [`PermutationTable`] - seeded lattice-hash table for gradient selection
//! - [`GradientNoise`] - 3-input simplex-style noise in pure fixed-point
//!
//! Everything here is a pure function of the seed and the inputs. The
//! rendering side of the wider project has its own floating-point noise for
//! visual effects; it must never be substituted for this module, since the two
//! have different contracts (smoothness there, bit-exact reproducibility
//! here).

mod gradient_noise;

pub use gradient_noise::GradientNoise;

use crate::random::{Lcg, Random};

/// Number of entries in the permutation table.
///
/// Contract constant: the noise evaluator reduces lattice coordinates
/// modulo this size, so it gates every gradient lookup.
pub const TABLE_SIZE: usize = 289;

/// A seeded permutation of `0..TABLE_SIZE`.
///
/// Built once per seed with a descending Fisher–Yates shuffle driven by
/// [`Lcg`]; the swap order and the modulo-biased index draw are both part
/// of the contract. Read-only after construction and safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    entries: [u16; TABLE_SIZE],
}

impl PermutationTable {
    /// Build the table for a seed.
    ///
    /// Pure: two calls with the same seed produce the same table forever.
    #[must_use]
    pub fn build(seed: u64) -> Self {
        let mut rng = Lcg::from_seed(seed);
        let mut entries: [u16; TABLE_SIZE] = std::array::from_fn(|i| i as u16);
        for i in (1..TABLE_SIZE).rev() {
            let j = rng.next_bounded(i as u32 + 1) as usize;
            entries.swap(i, j);
        }
        tracing::debug!(seed, "built permutation table");
        Self { entries }
    }

    /// Look up an entry, reducing the index into range first.
    ///
    /// Uses euclidean remainder so negative lattice coordinates index the
    /// same way on every runtime.
    #[inline]
    #[must_use]
    pub fn lookup(&self, index: i64) -> i64 {
        i64::from(self.entries[index.rem_euclid(TABLE_SIZE as i64) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_a_permutation_for_any_seed() {
        for seed in [0, 1, 42, u64::MAX, 0xDEAD_BEEF] {
            let table = PermutationTable::build(seed);
            let mut seen = [false; TABLE_SIZE];
            for i in 0..TABLE_SIZE as i64 {
                let v = table.lookup(i) as usize;
                assert!(!seen[v], "seed {seed}: duplicate entry {v}");
                seen[v] = true;
            }
        }
    }

    #[test]
    fn pinned_table_prefixes() {
        let t0 = PermutationTable::build(0);
        let prefix0: Vec<i64> = (0..8).map(|i| t0.lookup(i)).collect();
        assert_eq!(prefix0, [45, 36, 25, 139, 120, 33, 215, 102]);

        let t1 = PermutationTable::build(1);
        let prefix1: Vec<i64> = (0..8).map(|i| t1.lookup(i)).collect();
        assert_eq!(prefix1, [64, 12, 282, 54, 110, 8, 142, 17]);
    }

    #[test]
    fn same_seed_same_table() {
        let a = PermutationTable::build(77);
        let b = PermutationTable::build(77);
        assert_eq!(a.entries, b.entries);
    }

    #[test]
    fn different_seeds_differ() {
        let a = PermutationTable::build(0);
        let b = PermutationTable::build(1);
        assert_ne!(a.entries, b.entries);
    }

    #[test]
    fn lookup_wraps_negative_indices() {
        let t = PermutationTable::build(0);
        assert_eq!(t.lookup(-1), t.lookup(TABLE_SIZE as i64 - 1));
        assert_eq!(t.lookup(-(TABLE_SIZE as i64)), t.lookup(0));
    }
}
