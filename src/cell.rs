//! Hex Cell Structure
//!
//! A single terrain tile: fixed offset coordinate and horizontal position,
//! mutable elevation and color, and a neighbor table indexed by direction.

use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coords::{cell_to_world, OffsetCoord};
use crate::direction::HexDirection;
use crate::metrics::{EdgeType, HexMetrics};
use crate::mesh::CellColor;

/// A single hexagonal cell of a grid
///
/// Neighbors are stored as indices into the owning grid's cell array, never
/// as references, so cells carry no lifetimes and adjacency cannot form
/// ownership cycles. Only the grid wires neighbors, and always on both
/// sides at once.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    coord: OffsetCoord,
    position: Vec3,
    elevation: i32,
    color: CellColor,
    neighbors: [Option<usize>; 6],
}

impl HexCell {
    /// Create an unlinked cell at `coord`
    ///
    /// This is called during grid construction, not by user code.
    pub(crate) fn new(
        coord: OffsetCoord,
        elevation: i32,
        color: CellColor,
        metrics: &HexMetrics,
    ) -> Self {
        let mut position = cell_to_world(coord, metrics);
        position.y = metrics.height(elevation);
        Self {
            coord,
            position,
            elevation,
            color,
            neighbors: [None; 6],
        }
    }

    #[inline]
    pub fn coord(&self) -> OffsetCoord {
        self.coord
    }

    /// World position of the cell center, Y derived from elevation
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    /// Set elevation and move the center to the matching height
    pub fn set_elevation(&mut self, elevation: i32, metrics: &HexMetrics) {
        self.elevation = elevation;
        self.position.y = metrics.height(elevation);
    }

    #[inline]
    pub fn color(&self) -> CellColor {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: CellColor) {
        self.color = color;
    }

    /// Grid index of the neighbor in `direction`, if any
    #[inline]
    pub fn neighbor(&self, direction: HexDirection) -> Option<usize> {
        self.neighbors[direction.index()]
    }

    /// Iterate over present neighbors with their directions
    pub fn neighbors(&self) -> impl Iterator<Item = (HexDirection, usize)> + '_ {
        HexDirection::ALL
            .into_iter()
            .filter_map(|d| self.neighbor(d).map(|n| (d, n)))
    }

    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }

    /// Edge type against an arbitrary other cell
    #[inline]
    pub fn edge_type_with(&self, other: &HexCell) -> EdgeType {
        EdgeType::between(self.elevation, other.elevation)
    }

    pub(crate) fn set_neighbor_slot(&mut self, direction: HexDirection, index: usize) {
        self.neighbors[direction.index()] = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::colors::{RED, WHITE};

    #[test]
    fn test_cell_creation() {
        let m = HexMetrics::default();
        let cell = HexCell::new(OffsetCoord::new(1, 1), 2, WHITE, &m);

        assert_eq!(cell.coord(), OffsetCoord::new(1, 1));
        assert_eq!(cell.elevation(), 2);
        assert_eq!(cell.position().y, 10.0);
        assert_eq!(cell.neighbor_count(), 0);
        for d in HexDirection::ALL {
            assert_eq!(cell.neighbor(d), None);
        }
    }

    #[test]
    fn test_elevation_moves_position() {
        let m = HexMetrics::default();
        let mut cell = HexCell::new(OffsetCoord::new(3, 0), 0, WHITE, &m);
        let before = cell.position();

        cell.set_elevation(-2, &m);
        assert_eq!(cell.elevation(), -2);
        assert_eq!(cell.position().y, -10.0);
        assert_eq!(cell.position().x, before.x);
        assert_eq!(cell.position().z, before.z);
    }

    #[test]
    fn test_color() {
        let m = HexMetrics::default();
        let mut cell = HexCell::new(OffsetCoord::new(0, 0), 0, WHITE, &m);
        cell.set_color(RED);
        assert_eq!(cell.color(), RED);
    }

    #[test]
    fn test_edge_type_with() {
        let m = HexMetrics::default();
        let a = HexCell::new(OffsetCoord::new(0, 0), 0, WHITE, &m);
        let b = HexCell::new(OffsetCoord::new(1, 0), 1, WHITE, &m);
        let c = HexCell::new(OffsetCoord::new(2, 0), 3, WHITE, &m);

        assert_eq!(a.edge_type_with(&a), EdgeType::Flat);
        assert_eq!(a.edge_type_with(&b), EdgeType::Slope);
        assert_eq!(b.edge_type_with(&a), EdgeType::Slope);
        assert_eq!(a.edge_type_with(&c), EdgeType::Cliff);
    }

    #[test]
    fn test_neighbor_iteration() {
        let m = HexMetrics::default();
        let mut cell = HexCell::new(OffsetCoord::new(0, 0), 0, WHITE, &m);
        cell.set_neighbor_slot(HexDirection::E, 1);
        cell.set_neighbor_slot(HexDirection::NE, 4);

        let found: Vec<_> = cell.neighbors().collect();
        assert_eq!(found, vec![(HexDirection::NE, 4), (HexDirection::E, 1)]);
        assert_eq!(cell.neighbor_count(), 2);
    }
}
