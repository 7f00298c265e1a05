//! Deterministic pseudo-random sources for world generation.
//!
//! The permutation shuffle is driven by a plain 32-bit linear congruential
//! generator. Its parameters are part of the cross-runtime contract (an
//! authoritative implementation with a different multiplier would disagree
//! on every gradient in the world), so they live here as named constants
//! rather than implementation details.

pub mod lcg;

pub use lcg::Lcg;

/// A deterministic stream of pseudo-random integers.
///
/// Implementations must be pure functions of their seed: the same seed
/// yields the same stream forever, across processes and architectures.
pub trait Random {
    /// Next 32-bit output of the generator.
    fn next_u32(&mut self) -> u32;

    /// Next value in `0..bound`, by simple modulo reduction.
    ///
    /// Plain `%` (not rejection sampling) is deliberate: the slight modulo
    /// bias is baked into the reference shuffle and must be reproduced.
    fn next_bounded(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}
