//! HexGrid main structure

use glam::Vec3;
use tracing::{info, trace};

use crate::cell::HexCell;
use crate::config::GridConfig;
use crate::coords::{cell_to_world, world_to_cell, OffsetCoord};
use crate::direction::HexDirection;
use crate::error::Result;
use crate::mesh::{triangulate, CellColor, MeshData, MeshSink};
use crate::metrics::{EdgeType, HexMetrics};
use crate::terrain::{FlatTerrainSampler, TerrainSampler};

/// A rectangular grid of hexagonal cells and its triangulated mesh
///
/// The grid owns every cell. Cells are created once at construction in
/// row-major order and stored at index `x + z * width`; only their
/// elevation and color change afterwards. The mesh is rebuilt from scratch
/// after every edit, so it always matches the current cell state.
///
/// # Examples
///
/// ```
/// use hex_terrain_mesh::*;
///
/// let config = GridConfigBuilder::new().size(4, 4).build().unwrap();
/// let mut grid = HexGrid::new(config).unwrap();
///
/// assert!(grid.edit_cell(1, 2, 1, [1.0, 0.0, 0.0, 1.0]));
/// assert!(!grid.edit_cell(-1, 0, 1, [1.0, 0.0, 0.0, 1.0]));
/// println!("{} triangles", grid.mesh().triangle_count());
/// ```
#[derive(Debug, Clone)]
pub struct HexGrid {
    config: GridConfig,
    cells: Vec<HexCell>,
    mesh: MeshData,
}

impl HexGrid {
    /// Create a grid where every cell uses the configured defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn new(config: GridConfig) -> Result<Self> {
        let sampler = FlatTerrainSampler {
            elevation: config.default_elevation,
            color: config.default_color,
        };
        Self::generate_with_sampler(config, &sampler)
    }

    /// Create a grid whose initial cell states come from `sampler`
    ///
    /// # Example
    ///
    /// ```
    /// use hex_terrain_mesh::*;
    ///
    /// let sampler = RandomTerrainSampler::new(42);
    /// let grid = HexGrid::generate_with_sampler(GridConfig::default(), &sampler).unwrap();
    /// assert_eq!(grid.cell_count(), 36);
    /// ```
    pub fn generate_with_sampler<S>(config: GridConfig, sampler: &S) -> Result<Self>
    where
        S: TerrainSampler + ?Sized,
    {
        config.validate()?;

        let mut grid = Self {
            config,
            cells: Vec::with_capacity(config.cell_count()),
            mesh: MeshData::default(),
        };

        for z in 0..config.height {
            for x in 0..config.width {
                grid.create_cell(x, z, sampler);
            }
        }
        grid.triangulate();

        info!(
            width = config.width,
            height = config.height,
            cells = grid.cells.len(),
            "created hex grid"
        );
        Ok(grid)
    }

    /// Create the cell at `(x, z)` and link it to already created neighbors
    fn create_cell<S>(&mut self, x: usize, z: usize, sampler: &S)
    where
        S: TerrainSampler + ?Sized,
    {
        let width = self.config.width;
        let index = self.cells.len();
        let coord = OffsetCoord::new(x as i32, z as i32);
        let terrain = sampler.sample(coord);

        self.cells.push(HexCell::new(
            coord,
            terrain.elevation,
            terrain.color,
            &self.config.metrics,
        ));

        if x > 0 {
            self.set_neighbor(index, HexDirection::W, index - 1);
        }
        if z > 0 {
            if z % 2 == 0 {
                self.set_neighbor(index, HexDirection::SE, index - width);
                if x > 0 {
                    self.set_neighbor(index, HexDirection::SW, index - width - 1);
                }
            } else {
                self.set_neighbor(index, HexDirection::SW, index - width);
                if x < width - 1 {
                    self.set_neighbor(index, HexDirection::SE, index - width + 1);
                }
            }
        }
    }

    /// Link two cells on both sides at once
    fn set_neighbor(&mut self, index: usize, direction: HexDirection, other: usize) {
        self.cells[index].set_neighbor_slot(direction, other);
        self.cells[other].set_neighbor_slot(direction.opposite(), index);
    }

    /// Rebuild the whole mesh from the current cell states
    fn triangulate(&mut self) {
        self.mesh = triangulate(&self.cells, &self.config.metrics);
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn metrics(&self) -> &HexMetrics {
        &self.config.metrics
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.config.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in index order
    #[inline]
    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    /// Index of the cell at `(x, z)`, or `None` when out of bounds
    pub fn cell_index(&self, x: i32, z: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let z = usize::try_from(z).ok()?;
        if x >= self.config.width || z >= self.config.height {
            return None;
        }
        Some(x + z * self.config.width)
    }

    /// Cell at `(x, z)`, or `None` when out of bounds
    pub fn cell(&self, x: i32, z: i32) -> Option<&HexCell> {
        self.cell_index(x, z).map(|index| &self.cells[index])
    }

    /// Cell by grid index
    #[inline]
    pub fn cell_by_index(&self, index: usize) -> Option<&HexCell> {
        self.cells.get(index)
    }

    /// Neighbor of the cell at `index` in `direction`
    pub fn neighbor(&self, index: usize, direction: HexDirection) -> Option<&HexCell> {
        self.cells
            .get(index)?
            .neighbor(direction)
            .and_then(|n| self.cells.get(n))
    }

    /// Edge type between the cell at `index` and its neighbor in `direction`
    ///
    /// A missing neighbor counts as a flat edge.
    pub fn edge_type(&self, index: usize, direction: HexDirection) -> EdgeType {
        match (self.cells.get(index), self.neighbor(index, direction)) {
            (Some(cell), Some(neighbor)) => cell.edge_type_with(neighbor),
            _ => EdgeType::Flat,
        }
    }

    /// World position of the cell center at `(x, z)` at elevation 0
    ///
    /// Works for any coordinate, inside the grid or not.
    pub fn cell_to_world(&self, x: i32, z: i32) -> Vec3 {
        cell_to_world(OffsetCoord::new(x, z), &self.config.metrics)
    }

    /// Offset coordinate under a world position, which may be out of bounds
    pub fn world_to_cell(&self, position: Vec3) -> OffsetCoord {
        world_to_cell(position, &self.config.metrics)
    }

    /// Cell under a world position, if it lies inside the grid
    pub fn cell_at(&self, position: Vec3) -> Option<&HexCell> {
        let coord = self.world_to_cell(position);
        self.cell(coord.x, coord.z)
    }

    /// Set a cell's color and rebuild the mesh
    ///
    /// Returns `false` and changes nothing if `(x, z)` is out of bounds.
    pub fn color_cell(&mut self, x: i32, z: i32, color: CellColor) -> bool {
        let Some(index) = self.cell_index(x, z) else {
            trace!(x, z, "ignoring color edit outside the grid");
            return false;
        };

        self.cells[index].set_color(color);
        self.triangulate();
        trace!(x, z, "colored cell");
        true
    }

    /// Set a cell's elevation and color and rebuild the mesh
    ///
    /// Returns `false` and changes nothing if `(x, z)` is out of bounds.
    pub fn edit_cell(&mut self, x: i32, z: i32, elevation: i32, color: CellColor) -> bool {
        let Some(index) = self.cell_index(x, z) else {
            trace!(x, z, "ignoring edit outside the grid");
            return false;
        };

        let metrics = self.config.metrics;
        let cell = &mut self.cells[index];
        cell.set_elevation(elevation, &metrics);
        cell.set_color(color);
        self.triangulate();
        trace!(x, z, elevation, "edited cell");
        true
    }

    /// The mesh for the current cell states
    #[inline]
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Hand the current mesh to a renderer
    pub fn submit<S: MeshSink + ?Sized>(&self, sink: &mut S) {
        sink.submit_mesh(&self.mesh);
    }
}
