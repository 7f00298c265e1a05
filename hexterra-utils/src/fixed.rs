//! Deterministic signed fixed-point arithmetic.
//!
//! Every intermediate value in the terrain pipeline goes through [`Fixed`]:
//! an `i128`-backed rational with 32 fractional bits. All operations are
//! exact integer arithmetic followed by one truncating division, so results
//! are bit-identical across platforms and runtimes. Nothing in this module
//! may route through binary floating point, even transiently; that is the
//! entire reason the type exists.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Number of fractional bits in the representation.
pub const SCALE_BITS: u32 = 32;

/// The implicit scale factor: a [`Fixed`] holds `raw / SCALE`.
pub const SCALE: i128 = 1 << SCALE_BITS;

/// A signed fixed-point number with 32 fractional bits.
///
/// Comparison and hashing operate on the raw representation directly, so
/// `Eq`/`Ord` are exact. Values are immutable; arithmetic produces new
/// values. The `i128` backing leaves ample headroom: the product of two
/// raw values stays below `2^127` for all magnitudes the terrain pipeline
/// can produce (world coordinates up to `~2^32` divided by the map
/// amplitude).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed {
    raw: i128,
}

impl Fixed {
    /// Zero.
    pub const ZERO: Self = Self { raw: 0 };
    /// One.
    pub const ONE: Self = Self { raw: SCALE };
    /// One half.
    pub const HALF: Self = Self { raw: SCALE / 2 };

    /// Construct from a raw scaled representation.
    #[must_use]
    pub const fn from_raw(raw: i128) -> Self {
        Self { raw }
    }

    /// Construct the exact fixed-point representation of an integer.
    #[must_use]
    pub const fn from_int(n: i64) -> Self {
        Self {
            raw: (n as i128) << SCALE_BITS,
        }
    }

    /// Construct `numerator / denominator`, truncating toward zero.
    ///
    /// The truncation direction is part of the cross-runtime contract:
    /// `from_ratio(-1, 3)` is `-0.333...` truncated toward zero, not floored.
    ///
    /// # Panics
    /// A zero denominator is a programming error, not a recoverable case.
    #[must_use]
    pub const fn from_ratio(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "Fixed::from_ratio: division by zero");
        Self {
            raw: ((numerator as i128) << SCALE_BITS) / (denominator as i128),
        }
    }

    /// The raw scaled representation.
    #[must_use]
    pub const fn raw(self) -> i128 {
        self.raw
    }

    /// Exact sum.
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self {
            raw: self.raw + rhs.raw,
        }
    }

    /// Exact difference.
    #[must_use]
    pub const fn sub(self, rhs: Self) -> Self {
        Self {
            raw: self.raw - rhs.raw,
        }
    }

    /// Product, truncating the scaled intermediate toward zero.
    ///
    /// `(a.raw * b.raw) / SCALE` with Rust's truncating `/`, NOT an
    /// arithmetic shift, which would floor negative products instead.
    #[must_use]
    pub const fn mul(self, rhs: Self) -> Self {
        Self {
            raw: (self.raw * rhs.raw) / SCALE,
        }
    }

    /// Quotient, truncating toward zero.
    ///
    /// # Panics
    /// A zero divisor is a programming error, not a recoverable case.
    #[must_use]
    pub const fn div(self, rhs: Self) -> Self {
        assert!(rhs.raw != 0, "Fixed::div: division by zero");
        Self {
            raw: (self.raw * SCALE) / rhs.raw,
        }
    }

    /// Largest integer-valued `Fixed` less than or equal to `self`.
    ///
    /// Rounds toward negative infinity, so `floor(-1/3)` is `-1`. This is
    /// deliberately different from the truncation used by `mul`/`div`.
    #[must_use]
    pub const fn floor(self) -> Self {
        Self {
            raw: self.raw.div_euclid(SCALE) * SCALE,
        }
    }

    /// `floor` as a plain integer.
    #[must_use]
    pub const fn floor_int(self) -> i64 {
        self.raw.div_euclid(SCALE) as i64
    }

    /// Absolute value.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self {
            raw: self.raw.abs(),
        }
    }

    /// Whether the value is strictly negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }
}

impl Add for Fixed {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Fixed::add(self, rhs)
    }
}

impl Sub for Fixed {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Fixed::sub(self, rhs)
    }
}

impl Mul for Fixed {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Fixed::mul(self, rhs)
    }
}

impl Div for Fixed {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Fixed::div(self, rhs)
    }
}

impl Neg for Fixed {
    type Output = Self;
    fn neg(self) -> Self {
        Self { raw: -self.raw }
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({self})")
    }
}

impl fmt::Display for Fixed {
    /// Decimal rendering with nine fractional digits, computed in integer
    /// arithmetic (display only, never fed back into the pipeline).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.raw < 0 { "-" } else { "" };
        let abs = self.raw.unsigned_abs();
        let int = abs >> SCALE_BITS;
        let frac = (abs & (SCALE as u128 - 1)) * 1_000_000_000 >> SCALE_BITS;
        write!(f, "{sign}{int}.{frac:09}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_round_trip() {
        for n in [-1000, -7, -1, 0, 1, 5, 60, 12_345, i64::from(i32::MAX)] {
            assert_eq!(Fixed::from_int(n).floor_int(), n);
            assert_eq!(Fixed::from_int(n).floor(), Fixed::from_int(n));
        }
    }

    #[test]
    fn ratio_truncates_toward_zero() {
        // 2^32 / 3 = 1431655765.33 truncated
        assert_eq!(Fixed::from_ratio(1, 3).raw(), 1_431_655_765);
        assert_eq!(Fixed::from_ratio(-1, 3).raw(), -1_431_655_765);
        assert_eq!(Fixed::from_ratio(1, 6).raw(), 715_827_882);
        // exact powers of two divide cleanly
        assert_eq!(Fixed::from_ratio(1, 4).raw(), SCALE / 4);
    }

    #[test]
    fn ratio_times_denominator_recovers_numerator() {
        for (a, b) in [(1, 3), (-1, 3), (7, 10), (53, 100), (-13, 14)] {
            let recovered = Fixed::from_ratio(a, b).mul(Fixed::from_int(b));
            let exact = Fixed::from_int(a);
            let err = recovered.sub(exact).abs();
            assert!(err.raw() <= i128::from(b.unsigned_abs()), "{a}/{b}: err {err}");
        }
    }

    #[test]
    fn floor_goes_toward_negative_infinity() {
        assert_eq!(Fixed::from_ratio(-1, 3).floor_int(), -1);
        assert_eq!(Fixed::from_ratio(1, 3).floor_int(), 0);
        assert_eq!(Fixed::from_ratio(-7, 2).floor_int(), -4);
        assert_eq!(Fixed::from_ratio(7, 2).floor_int(), 3);
    }

    #[test]
    fn mul_truncates_negative_products_toward_zero() {
        // (-1/3) * (1/2): raw product / SCALE must truncate, not floor
        let v = Fixed::from_ratio(-1, 3).mul(Fixed::HALF);
        assert_eq!(v.raw(), -(1_431_655_765 / 2));
    }

    #[test]
    fn comparison_is_on_raw() {
        assert!(Fixed::from_ratio(1, 4) < Fixed::from_ratio(1, 3));
        assert!(Fixed::from_int(-2) < Fixed::from_int(-1));
        assert_eq!(Fixed::from_ratio(2, 4), Fixed::HALF);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_by_zero_is_loud() {
        let _ = Fixed::ONE.div(Fixed::ZERO);
    }

    #[test]
    fn display_is_integer_only_math() {
        assert_eq!(Fixed::HALF.to_string(), "0.500000000");
        assert_eq!(Fixed::from_int(-3).to_string(), "-3.000000000");
    }
}
