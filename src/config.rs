//! Hex Grid Configuration and Builder
//!
//! This module provides the configuration used to construct a `HexGrid`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{HexGridError, Result};
use crate::mesh::colors::WHITE;
use crate::mesh::CellColor;
use crate::metrics::HexMetrics;

/// Largest number of cells a single grid may hold
///
/// Each cell emits a few hundred vertices at most, so this keeps the
/// mesh buffers well inside `u32` index range.
pub const MAX_CELLS: usize = 1 << 20;

/// Configuration for a rectangular hex grid
///
/// Width and height are fixed for the lifetime of the grid. Every cell
/// starts at `default_elevation` with `default_color` unless a terrain
/// sampler says otherwise.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of cells per row
    pub width: usize,

    /// Number of rows
    pub height: usize,

    /// Color assigned to new cells
    pub default_color: CellColor,

    /// Elevation assigned to new cells
    pub default_elevation: i32,

    /// Hexagon geometry
    pub metrics: HexMetrics,
}

impl GridConfig {
    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check the grid dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero or the grid
    /// would exceed `MAX_CELLS`. Within that bound every coordinate fits
    /// in an `i32`. Returns `InvalidMetrics` if the metrics are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HexGridError::InvalidConfig(format!(
                "grid size must be non-zero (got {}x{})",
                self.width, self.height
            )));
        }

        let too_big = self
            .width
            .checked_mul(self.height)
            .map_or(true, |count| count > MAX_CELLS);
        if too_big {
            return Err(HexGridError::InvalidConfig(format!(
                "grid {}x{} exceeds {} cells",
                self.width, self.height, MAX_CELLS
            )));
        }

        self.metrics.validate()
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 6,
            default_color: WHITE,
            default_elevation: 0,
            metrics: HexMetrics::default(),
        }
    }
}

/// Builder for creating GridConfig with validation
///
/// # Example
///
/// ```rust
/// use hex_terrain_mesh::*;
///
/// let config = GridConfigBuilder::new()
///     .size(8, 4)
///     .default_color([0.2, 0.6, 0.2, 1.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cell_count(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct GridConfigBuilder {
    width: usize,
    height: usize,
    default_color: CellColor,
    default_elevation: i32,
    metrics: HexMetrics,
}

impl GridConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - size: 6 x 6
    /// - default_color: white
    /// - default_elevation: 0
    /// - metrics: `HexMetrics::default()`
    pub fn new() -> Self {
        let defaults = GridConfig::default();
        Self {
            width: defaults.width,
            height: defaults.height,
            default_color: defaults.default_color,
            default_elevation: defaults.default_elevation,
            metrics: defaults.metrics,
        }
    }

    /// Set the grid size in cells
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn default_color(mut self, color: CellColor) -> Self {
        self.default_color = color;
        self
    }

    pub fn default_elevation(mut self, elevation: i32) -> Self {
        self.default_elevation = elevation;
        self
    }

    /// Set the hexagon geometry
    ///
    /// `HexMetrics` values are validated when they are created.
    pub fn metrics(mut self, metrics: HexMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// See [`GridConfig::validate`].
    pub fn build(self) -> Result<GridConfig> {
        let config = GridConfig {
            width: self.width,
            height: self.height,
            default_color: self.default_color,
            default_elevation: self.default_elevation,
            metrics: self.metrics,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for GridConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
