//! Elevation and moisture fields over the hex grid.
//!
//! Both fields map a hex coordinate to a fixed-point scalar in `[0, 1]`.
//! Elevation sums three quantized noise octaves; moisture is a
//! single-octave variant at double frequency. The per-octave `floor` onto
//! a `0..100` integer band happens BEFORE the weighted sum; quantizing
//! first changes the result versus summing raw octaves, and the
//! authoritative computation quantizes first.

use hexterra_utils::fixed::Fixed;
use hexterra_utils::noise::GradientNoise;

/// Spatial frequency divisor for both fields (contract constant).
pub const MAP_AMPLITUDE: Fixed = Fixed::from_int(60);

/// Elevation octave weights, in summation order (contract constants).
pub const ELEVATION_OCTAVES: [Fixed; 3] = [
    Fixed::from_int(1),
    Fixed::from_ratio(1, 4),
    Fixed::from_ratio(1, 10),
];

/// Frequency multiplier for the moisture field (contract constant).
pub const MOISTURE_OCTAVE: Fixed = Fixed::from_int(2);

const ELEVATION_OCTAVES_SUM: Fixed = ELEVATION_OCTAVES[0]
    .add(ELEVATION_OCTAVES[1])
    .add(ELEVATION_OCTAVES[2]);

const TWO: Fixed = Fixed::from_int(2);
const HUNDRED: Fixed = Fixed::from_int(100);

/// Per-seed elevation and moisture sampler.
#[derive(Debug, Clone)]
pub struct TerrainFields {
    noise: GradientNoise,
}

impl TerrainFields {
    /// Create the fields for a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            noise: GradientNoise::new(seed),
        }
    }

    /// Elevation at a hex, in `[0, 1]`.
    ///
    /// Each octave contributes
    /// `weight * floor((noise(col/weight/amp, 0, row/weight/amp) + 1) * 100 / 2)`,
    /// and the weighted total is divided by `(sum of weights) * 100`.
    #[must_use]
    pub fn elevation(&self, col: i64, row: i64) -> Fixed {
        let mut elevation = Fixed::ZERO;
        for octave in ELEVATION_OCTAVES {
            let x = Fixed::from_int(col).div(octave).div(MAP_AMPLITUDE);
            let z = Fixed::from_int(row).div(octave).div(MAP_AMPLITUDE);
            let band = quantized_band(self.noise.sample(x, Fixed::ZERO, z));
            elevation = elevation + octave * band;
        }
        elevation.div(ELEVATION_OCTAVES_SUM.mul(HUNDRED))
    }

    /// Moisture at a hex, in `[0, 1]`.
    ///
    /// Single octave at double frequency, floored onto the same `0..100`
    /// integer band and renormalized.
    #[must_use]
    pub fn moisture(&self, col: i64, row: i64) -> Fixed {
        let x = MOISTURE_OCTAVE.mul(Fixed::from_int(col)).div(MAP_AMPLITUDE);
        let z = MOISTURE_OCTAVE.mul(Fixed::from_int(row)).div(MAP_AMPLITUDE);
        let band = HUNDRED.mul((self.noise.sample(x, Fixed::ZERO, z) + Fixed::ONE).div(TWO));
        band.floor().div(HUNDRED)
    }
}

/// Elevation octave band: `floor((sample + 1) * 100 / 2)`.
///
/// Scaling by 100 happens BEFORE the halving. With truncating division the
/// two orders differ by 50 raw units whenever `sample + 1` has an odd raw
/// value, and that gap flips the floor on samples landing just above an
/// integer boundary. The authoritative computation scales first.
fn quantized_band(sample: Fixed) -> Fixed {
    (sample + Fixed::ONE).mul(HUNDRED).div(TWO).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: i64 = 2_147_483_647;

    #[test]
    fn origin_fields_are_exactly_one_half() {
        // noise vanishes at the origin corner, so every octave lands on 50
        let fields = TerrainFields::new(0);
        assert_eq!(fields.elevation(0, 0), Fixed::HALF);
        assert_eq!(fields.moisture(0, 0), Fixed::HALF);
    }

    #[test]
    fn pinned_fields_at_world_center_for_seed_zero() {
        let fields = TerrainFields::new(0);
        assert_eq!(fields.elevation(CENTER, CENTER).raw(), 1_891_376_338);
        assert_eq!(fields.moisture(CENTER, CENTER).raw(), 2_491_081_031);
    }

    #[test]
    fn fields_stay_normalized_around_world_center() {
        let fields = TerrainFields::new(0);
        for dc in (-120..120_i64).step_by(11) {
            for dr in (-120..120_i64).step_by(11) {
                let e = fields.elevation(CENTER + dc, CENTER + dr);
                let m = fields.moisture(CENTER + dc, CENTER + dr);
                for (label, v) in [("elevation", e), ("moisture", m)] {
                    assert!(
                        v >= Fixed::ZERO && v <= Fixed::ONE,
                        "{label} escaped [0,1] at ({dc},{dr}): {v}"
                    );
                }
            }
        }
    }

    #[test]
    fn band_scales_before_halving() {
        // `sample + 1` has an odd raw value and lands 2 raw units above the
        // integer 13 once scaled; halving first would drop the low bit and
        // floor the band to 12 instead
        let sample = Fixed::from_raw(1_116_691_497 - Fixed::ONE.raw());
        assert_eq!(quantized_band(sample), Fixed::from_int(13));
    }

    #[test]
    fn octave_sum_matches_weights() {
        // 1 + 1/4 + 1/10, all in raw units
        assert_eq!(
            ELEVATION_OCTAVES_SUM.raw(),
            Fixed::from_int(1).raw() + Fixed::from_ratio(1, 4).raw() + Fixed::from_ratio(1, 10).raw()
        );
    }
}
