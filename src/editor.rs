//! Interactive edit session
//!
//! Glue between input handling and the grid: holds the active brush, maps
//! world positions to cells and pushes the rebuilt mesh to a sink after every
//! applied edit.

use std::ops::RangeInclusive;

use glam::Vec3;
use tracing::trace;

use crate::grid::HexGrid;
use crate::mesh::colors::DEFAULT_PALETTE;
use crate::mesh::{CellColor, MeshSink};

/// Elevations a brush may paint
pub const BRUSH_ELEVATION_RANGE: RangeInclusive<i32> = 0..=6;

/// What a paint stroke applies to a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    color: CellColor,
    elevation: i32,
}

impl Brush {
    /// Create a brush, clamping `elevation` to `BRUSH_ELEVATION_RANGE`
    pub fn new(color: CellColor, elevation: i32) -> Self {
        Self {
            color,
            elevation: clamp_elevation(elevation),
        }
    }

    #[inline]
    pub fn color(&self) -> CellColor {
        self.color
    }

    #[inline]
    pub fn elevation(&self) -> i32 {
        self.elevation
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE[0], 0)
    }
}

fn clamp_elevation(elevation: i32) -> i32 {
    elevation.clamp(*BRUSH_ELEVATION_RANGE.start(), *BRUSH_ELEVATION_RANGE.end())
}

/// A grid together with the renderer that displays it
///
/// The sink receives the full mesh once on creation and again after every
/// edit that hits the grid. Edits that miss leave the sink untouched.
pub struct HexMapEditor<S: MeshSink> {
    grid: HexGrid,
    sink: S,
    brush: Brush,
}

impl<S: MeshSink> HexMapEditor<S> {
    /// Start an edit session and show the initial mesh
    pub fn new(grid: HexGrid, mut sink: S) -> Self {
        grid.submit(&mut sink);
        Self {
            grid,
            sink,
            brush: Brush::default(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_active_color(&mut self, color: CellColor) {
        self.brush.color = color;
    }

    /// Set the brush elevation, clamped to `BRUSH_ELEVATION_RANGE`
    pub fn set_active_elevation(&mut self, elevation: i32) {
        self.brush.elevation = clamp_elevation(elevation);
    }

    /// Apply the brush to the cell at `(x, z)`
    ///
    /// Returns `false` if the coordinate is outside the grid.
    pub fn paint_cell(&mut self, x: i32, z: i32) -> bool {
        let applied = self
            .grid
            .edit_cell(x, z, self.brush.elevation, self.brush.color);
        if applied {
            self.grid.submit(&mut self.sink);
        }
        applied
    }

    /// Apply only the brush color to the cell at `(x, z)`
    pub fn recolor_cell(&mut self, x: i32, z: i32) -> bool {
        let applied = self.grid.color_cell(x, z, self.brush.color);
        if applied {
            self.grid.submit(&mut self.sink);
        }
        applied
    }

    /// Apply the brush to the cell under a world position
    pub fn paint_at(&mut self, position: Vec3) -> bool {
        let coord = self.grid.world_to_cell(position);
        trace!(%coord, "paint at world position");
        self.paint_cell(coord.x, coord.z)
    }

    /// Apply the brush to the cell hit by a pointer ray
    #[cfg(feature = "picking")]
    pub fn paint_ray(&mut self, origin: Vec3, direction: Vec3) -> bool {
        match self.grid.raycast(origin, direction) {
            Some(hit) => self.paint_cell(hit.coord.x, hit.coord.z),
            None => false,
        }
    }

    /// End the session and return its parts
    pub fn into_parts(self) -> (HexGrid, S) {
        (self.grid, self.sink)
    }
}
