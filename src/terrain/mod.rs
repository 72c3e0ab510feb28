//! Terrain sampling
//!
//! Provides the seam through which a grid receives its initial elevation and
//! color per cell.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::coords::OffsetCoord;
use crate::mesh::colors::{DEFAULT_PALETTE, WHITE};
use crate::mesh::CellColor;

/// Initial state of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTerrain {
    pub elevation: i32,
    pub color: CellColor,
}

/// Trait for sampling the initial terrain of each cell
pub trait TerrainSampler {
    /// Sample terrain for the cell at `coord`
    fn sample(&self, coord: OffsetCoord) -> CellTerrain;
}

/// Uniform terrain: every cell gets the same elevation and color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatTerrainSampler {
    pub elevation: i32,
    pub color: CellColor,
}

impl Default for FlatTerrainSampler {
    fn default() -> Self {
        Self {
            elevation: 0,
            color: WHITE,
        }
    }
}

impl TerrainSampler for FlatTerrainSampler {
    fn sample(&self, _coord: OffsetCoord) -> CellTerrain {
        CellTerrain {
            elevation: self.elevation,
            color: self.color,
        }
    }
}

/// Seeded random terrain
///
/// Each coordinate gets its own ChaCha stream derived from the seed, so the
/// result depends only on `(seed, coord)` and not on sampling order.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomTerrainSampler {
    /// Seed for deterministic generation
    pub seed: u64,
    /// Lowest elevation produced (inclusive)
    pub min_elevation: i32,
    /// Highest elevation produced (inclusive)
    pub max_elevation: i32,
    /// Colors to pick from; white is used when empty
    pub palette: Vec<CellColor>,
}

impl Default for RandomTerrainSampler {
    fn default() -> Self {
        Self {
            seed: 0,
            min_elevation: 0,
            max_elevation: 3,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl RandomTerrainSampler {
    /// Create a new sampler with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Restrict generated elevations to `min..=max` (swapped if reversed)
    pub fn with_elevation_range(mut self, min: i32, max: i32) -> Self {
        self.min_elevation = min.min(max);
        self.max_elevation = min.max(max);
        self
    }

    pub fn with_palette(mut self, palette: Vec<CellColor>) -> Self {
        self.palette = palette;
        self
    }

    fn rng_for(&self, coord: OffsetCoord) -> ChaCha8Rng {
        let packed = ((coord.x as u32 as u64) << 32) | coord.z as u32 as u64;
        ChaCha8Rng::seed_from_u64(self.seed ^ packed.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

impl TerrainSampler for RandomTerrainSampler {
    fn sample(&self, coord: OffsetCoord) -> CellTerrain {
        let mut rng = self.rng_for(coord);
        let low = self.min_elevation.min(self.max_elevation);
        let high = self.min_elevation.max(self.max_elevation);
        let elevation = rng.gen_range(low..=high);
        let color = if self.palette.is_empty() {
            WHITE
        } else {
            self.palette[rng.gen_range(0..self.palette.len())]
        };
        CellTerrain { elevation, color }
    }
}
