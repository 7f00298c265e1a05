//! Shared deterministic primitives for the hexterra terrain core.
//!
//! Everything in this crate is pure and reproducible: fixed-point
//! arithmetic, a contract-pinned LCG, and the seeded gradient noise built
//! on both. No module here performs I/O or touches floating point.

pub mod fixed;
pub mod noise;
pub mod random;
