//! Terrain category enumeration and threshold classification.

use hexterra_utils::fixed::Fixed;
use serde::{Deserialize, Serialize};

/// Threshold literal: `n` percent of the unit range.
const fn pct(n: i64) -> Fixed {
    Fixed::from_ratio(n, 100)
}

/// Classification boundaries (contract constants).
///
/// Elevation bands, ascending: deep ocean, ocean, beach, then the lowland,
/// forest, high and mountain bands cut by the `*_MIN` constants. Each land
/// band has its own moisture cuts.
pub mod thresholds {
    use super::{Fixed, pct};

    /// Elevation below this is deep ocean.
    pub const DEEP_OCEAN_MAX: Fixed = pct(25);
    /// Elevation below this (and at least [`DEEP_OCEAN_MAX`]) is ocean.
    pub const OCEAN_MAX: Fixed = pct(50);
    /// Elevation below this (and at least [`OCEAN_MAX`]) is beach.
    pub const BEACH_MAX: Fixed = pct(53);
    /// Elevation strictly above this enters the forest band.
    pub const FOREST_MIN: Fixed = pct(60);
    /// Elevation strictly above this enters the high band.
    pub const HIGHLAND_MIN: Fixed = pct(72);
    /// Elevation strictly above this enters the mountain band.
    pub const MOUNTAIN_MIN: Fixed = pct(80);

    /// Mountain band: moisture below this is scorched.
    pub const MOUNTAIN_SCORCHED_MAX: Fixed = pct(10);
    /// Mountain band: moisture below this is bare.
    pub const MOUNTAIN_BARE_MAX: Fixed = pct(40);
    /// Mountain band: moisture below this is tundra, above is snow.
    pub const MOUNTAIN_TUNDRA_MAX: Fixed = pct(50);

    /// High band: moisture below this is temperate desert.
    pub const HIGHLAND_DESERT_MAX: Fixed = pct(33);
    /// High band: moisture below this is shrubland, above is taiga.
    pub const HIGHLAND_SHRUBLAND_MAX: Fixed = pct(66);

    /// Forest band: moisture below this is temperate desert.
    pub const FOREST_DESERT_MAX: Fixed = pct(16);
    /// Forest band: moisture below this is grassland.
    pub const FOREST_GRASSLAND_MAX: Fixed = pct(50);
    /// Forest band: moisture below this is deciduous forest, above is
    /// temperate rain forest.
    pub const FOREST_DECIDUOUS_MAX: Fixed = pct(83);

    /// Lowland: moisture below this is subtropical desert.
    pub const LOWLAND_DESERT_MAX: Fixed = pct(16);
    /// Lowland: moisture below this is grassland.
    pub const LOWLAND_GRASSLAND_MAX: Fixed = pct(33);
    /// Lowland: moisture below this is seasonal forest, above is tropical
    /// rain forest.
    pub const LOWLAND_SEASONAL_MAX: Fixed = pct(66);
}

/// The closed set of sixteen terrain categories.
///
/// Output-only plain value; the string names used by application-layer
/// lookups (resource weights, model paths) are a serialization concern and
/// live in [`Biome::name`], not in the representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Biome {
    /// Elevation below `0.25`.
    DeepOcean,
    /// Elevation below `0.50`.
    Ocean,
    /// Elevation below `0.53`.
    Beach,
    /// Mountain band, moisture below `0.10`.
    Scorched,
    /// Mountain band, moisture below `0.40`.
    Bare,
    /// Mountain band, moisture below `0.50`.
    Tundra,
    /// Mountain band, wetter than tundra.
    Snow,
    /// High band below `0.33` moisture, or forest band below `0.16`.
    TemperateDesert,
    /// High band, moisture below `0.66`.
    Shrubland,
    /// High band, wetter than shrubland.
    Taiga,
    /// Forest band moisture below `0.50`, or lowland below `0.33`.
    Grassland,
    /// Forest band, moisture below `0.83`.
    TemperateDeciduousForest,
    /// Forest band, wetter than deciduous forest.
    TemperateRainForest,
    /// Lowland, moisture below `0.16`.
    SubtropicalDesert,
    /// Lowland, moisture below `0.66`.
    TropicalSeasonalForest,
    /// Lowland, wetter than seasonal forest.
    TropicalRainForest,
}

impl Biome {
    /// Every category, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::DeepOcean,
        Self::Ocean,
        Self::Beach,
        Self::Scorched,
        Self::Bare,
        Self::Tundra,
        Self::Snow,
        Self::TemperateDesert,
        Self::Shrubland,
        Self::Taiga,
        Self::Grassland,
        Self::TemperateDeciduousForest,
        Self::TemperateRainForest,
        Self::SubtropicalDesert,
        Self::TropicalSeasonalForest,
        Self::TropicalRainForest,
    ];

    /// Stable display name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeepOcean => "DeepOcean",
            Self::Ocean => "Ocean",
            Self::Beach => "Beach",
            Self::Scorched => "Scorched",
            Self::Bare => "Bare",
            Self::Tundra => "Tundra",
            Self::Snow => "Snow",
            Self::TemperateDesert => "TemperateDesert",
            Self::Shrubland => "Shrubland",
            Self::Taiga => "Taiga",
            Self::Grassland => "Grassland",
            Self::TemperateDeciduousForest => "TemperateDeciduousForest",
            Self::TemperateRainForest => "TemperateRainForest",
            Self::SubtropicalDesert => "SubtropicalDesert",
            Self::TropicalSeasonalForest => "TropicalSeasonalForest",
            Self::TropicalRainForest => "TropicalRainForest",
        }
    }
}

/// Classify `(elevation, moisture)` into a terrain category.
///
/// Ordered threshold cascade: the FIRST matching band wins, so the
/// `if`/`else if` ordering is contract and must not be reshuffled into a
/// "cleaner" equivalent. Every boundary is exclusive below and inclusive
/// above (`<`, never `<=`).
///
/// Total over `[0,1] x [0,1]`. Values outside that range indicate a bug
/// in the field composer upstream; they are rejected in debug builds
/// rather than handled.
#[must_use]
pub fn classify(elevation: Fixed, moisture: Fixed) -> Biome {
    debug_assert!(
        elevation >= Fixed::ZERO && elevation <= Fixed::ONE,
        "elevation out of range: {elevation}"
    );
    debug_assert!(
        moisture >= Fixed::ZERO && moisture <= Fixed::ONE,
        "moisture out of range: {moisture}"
    );

    if elevation < thresholds::DEEP_OCEAN_MAX {
        Biome::DeepOcean
    } else if elevation < thresholds::OCEAN_MAX {
        Biome::Ocean
    } else if elevation < thresholds::BEACH_MAX {
        Biome::Beach
    } else if elevation > thresholds::MOUNTAIN_MIN {
        if moisture < thresholds::MOUNTAIN_SCORCHED_MAX {
            Biome::Scorched
        } else if moisture < thresholds::MOUNTAIN_BARE_MAX {
            Biome::Bare
        } else if moisture < thresholds::MOUNTAIN_TUNDRA_MAX {
            Biome::Tundra
        } else {
            Biome::Snow
        }
    } else if elevation > thresholds::HIGHLAND_MIN {
        if moisture < thresholds::HIGHLAND_DESERT_MAX {
            Biome::TemperateDesert
        } else if moisture < thresholds::HIGHLAND_SHRUBLAND_MAX {
            Biome::Shrubland
        } else {
            Biome::Taiga
        }
    } else if elevation > thresholds::FOREST_MIN {
        if moisture < thresholds::FOREST_DESERT_MAX {
            Biome::TemperateDesert
        } else if moisture < thresholds::FOREST_GRASSLAND_MAX {
            Biome::Grassland
        } else if moisture < thresholds::FOREST_DECIDUOUS_MAX {
            Biome::TemperateDeciduousForest
        } else {
            Biome::TemperateRainForest
        }
    } else if moisture < thresholds::LOWLAND_DESERT_MAX {
        Biome::SubtropicalDesert
    } else if moisture < thresholds::LOWLAND_GRASSLAND_MAX {
        Biome::Grassland
    } else if moisture < thresholds::LOWLAND_SEASONAL_MAX {
        Biome::TropicalSeasonalForest
    } else {
        Biome::TropicalRainForest
    }
}
