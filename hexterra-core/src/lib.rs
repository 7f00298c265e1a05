//! Deterministic hex-grid terrain core.
//!
//! Maps `(seed, column, row)` to one of sixteen terrain categories with
//! bit-exact reproducibility against the authoritative on-chain
//! computation. Pure functions only: no I/O, no wall-clock, no floating
//! point anywhere on the classification path.

pub mod worldgen;
