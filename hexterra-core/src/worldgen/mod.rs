//! Terrain generation for the hex world map.
//!
//! The pipeline, leaves first: fixed-point gradient noise
//! (`hexterra-utils`) feeds [`TerrainFields`] (elevation + moisture per
//! hex), whose output drives the ordered threshold cascade in
//! [`classify`]. [`HexBiomeSource`] ties the three together for one seed;
//! [`BiomeSourceCache`] shares sources across callers.

mod biome;
mod biome_source;
mod chunk_counts;
mod terrain_fields;

pub use biome::{Biome, classify, thresholds};
pub use biome_source::{BiomeSourceCache, HexBiomeSource, WORLD_CENTER, biome, world_coord};
pub use chunk_counts::BiomeCounts;
pub use terrain_fields::{
    ELEVATION_OCTAVES, MAP_AMPLITUDE, MOISTURE_OCTAVE, TerrainFields,
};
