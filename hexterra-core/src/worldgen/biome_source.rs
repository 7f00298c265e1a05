//! Seeded biome source and the per-seed source cache.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use hexterra_utils::fixed::Fixed;

use super::biome::{Biome, classify};
use super::terrain_fields::TerrainFields;

/// Offset added to logical coordinates at the interface boundary.
///
/// The on-chain side stores hex coordinates as unsigned field elements, so
/// the world is centered on this constant and logical coordinates near the
/// origin map to values near it, so negative storage coordinates never occur.
/// The offset is purely an interface convention: nothing inside the noise
/// math knows about it.
pub const WORLD_CENTER: i64 = 2_147_483_647;

/// Shift a logical (possibly negative) coordinate into world storage space.
#[must_use]
pub const fn world_coord(logical: i64) -> i64 {
    logical + WORLD_CENTER
}

/// Terrain classifier for one seed.
///
/// Owns the seed's noise state (permutation table included); everything
/// else is computed per call. Immutable after construction and safe to
/// share across threads.
#[derive(Debug, Clone)]
pub struct HexBiomeSource {
    seed: u64,
    fields: TerrainFields,
}

impl HexBiomeSource {
    /// Build the source for a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        tracing::debug!(seed, "building biome source");
        Self {
            seed,
            fields: TerrainFields::new(seed),
        }
    }

    /// The seed this source was built for.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Terrain category at a world coordinate.
    #[must_use]
    pub fn biome(&self, col: i64, row: i64) -> Biome {
        classify(self.fields.elevation(col, row), self.fields.moisture(col, row))
    }

    /// Elevation field at a world coordinate, in `[0, 1]`.
    #[must_use]
    pub fn elevation(&self, col: i64, row: i64) -> Fixed {
        self.fields.elevation(col, row)
    }

    /// Moisture field at a world coordinate, in `[0, 1]`.
    #[must_use]
    pub fn moisture(&self, col: i64, row: i64) -> Fixed {
        self.fields.moisture(col, row)
    }
}

/// Seed-keyed cache of [`HexBiomeSource`] values.
///
/// Construction is a pure function of the seed, so a racy double-build on
/// a cache miss is harmless: the map keeps whichever copy lands first and
/// both are identical. Owned explicitly by whoever drives classification;
/// there is no ambient global instance.
#[derive(Debug, Default)]
pub struct BiomeSourceCache {
    sources: RwLock<FxHashMap<u64, Arc<HexBiomeSource>>>,
}

impl BiomeSourceCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The source for a seed, building it on first use.
    #[must_use]
    pub fn source(&self, seed: u64) -> Arc<HexBiomeSource> {
        if let Some(source) = self.sources.read().get(&seed) {
            return Arc::clone(source);
        }
        // Built outside the write lock; a concurrent builder may win the
        // entry, in which case this copy is dropped.
        let built = Arc::new(HexBiomeSource::new(seed));
        let mut sources = self.sources.write();
        Arc::clone(sources.entry(seed).or_insert(built))
    }
}

/// One-shot classification of a world coordinate.
///
/// Builds the seed's permutation table on every call; callers classifying
/// more than a handful of hexes should hold a [`HexBiomeSource`] or go
/// through a [`BiomeSourceCache`] instead.
#[must_use]
pub fn biome(seed: u64, col: i64, row: i64) -> Biome {
    HexBiomeSource::new(seed).biome(col, row)
}
