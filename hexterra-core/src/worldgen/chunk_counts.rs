//! Per-chunk biome distribution tally.
//!
//! The rendering layer draws each category as one instanced mesh, so it
//! needs per-chunk instance counts BEFORE allocating GPU buffers. This
//! helper walks a rectangular chunk once and tallies how many hexes
//! resolve to each category; it is a pure consumer of the classifier.

use super::biome::Biome;
use super::biome_source::HexBiomeSource;

/// Number of hexes per category within one chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiomeCounts {
    counts: [u32; Biome::ALL.len()],
}

impl BiomeCounts {
    /// Tally a `cols x rows` chunk starting at a world coordinate.
    #[must_use]
    pub fn tally(source: &HexBiomeSource, start_col: i64, start_row: i64, cols: i64, rows: i64) -> Self {
        let mut counts = [0_u32; Biome::ALL.len()];
        for row in start_row..start_row + rows {
            for col in start_col..start_col + cols {
                counts[source.biome(col, row) as usize] += 1;
            }
        }
        Self { counts }
    }

    /// Instance count for one category.
    #[must_use]
    pub const fn count(&self, biome: Biome) -> u32 {
        self.counts[biome as usize]
    }

    /// Total hexes tallied.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Non-zero categories with their counts, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Biome, u32)> + '_ {
        Biome::ALL
            .into_iter()
            .map(|b| (b, self.count(b)))
            .filter(|&(_, n)| n > 0)
    }
}
