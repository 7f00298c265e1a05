//! 32-bit linear congruential generator.

use super::Random;

/// LCG multiplier (contract constant).
pub const LCG_MULTIPLIER: u32 = 1_664_525;
/// LCG increment (contract constant).
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// The classic 32-bit LCG: `state = state * 1664525 + 1013904223 mod 2^32`.
///
/// Statistically weak, and that is fine: it only drives the one-time
/// permutation shuffle, where the contract is reproducibility, not quality.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Seed the generator from a 64-bit world seed.
    ///
    /// The two halves are xor-folded into the 32-bit state so that high
    /// bits of the seed still influence the stream.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            state: (seed ^ (seed >> 32)) as u32,
        }
    }
}

impl Random for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_stream_from_seed_zero() {
        let mut rng = Lcg::from_seed(0);
        let outputs: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(
            outputs,
            [1_013_904_223, 1_196_435_762, 3_519_870_697, 2_868_466_484]
        );
    }

    #[test]
    fn seed_folding_uses_high_bits() {
        let mut low = Lcg::from_seed(1);
        let mut high = Lcg::from_seed(1 << 32);
        // xor-fold maps both to the same state; callers that need distinct
        // streams for these seeds must vary the low word too
        assert_eq!(low.next_u32(), high.next_u32());

        let mut a = Lcg::from_seed(2);
        let mut b = Lcg::from_seed(3);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn bounded_is_modulo_reduction() {
        let mut rng = Lcg::from_seed(0);
        assert_eq!(rng.next_bounded(289), 1_013_904_223 % 289);
    }
}
