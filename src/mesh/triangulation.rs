//! Grid triangulation
//!
//! Every cell contributes a solid hexagon fan. Cells then own the connection
//! strips towards NE, E and SE and the corner triangles at the NE and E
//! junctions, so every shared edge and every three-cell junction is emitted
//! exactly once.

use glam::Vec3;
use tracing::debug;

use super::{CellColor, MeshData};
use crate::cell::HexCell;
use crate::direction::HexDirection;
use crate::metrics::{lerp_color, EdgeType, HexMetrics};

/// How a three-cell junction is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerShape {
    /// No slopes among the three cells: one plain triangle
    Flat,
    /// Bottom slopes up to both left and right
    DoubleTerrace,
    /// Double terrace starting from a different cell than the lowest one
    DoubleTerraceRotated,
    /// Terraces towards the left, cliff towards the right
    TerraceCliff,
    /// Cliff towards the left, terraces towards the right
    CliffTerrace,
}

/// A junction vertex and the cell it belongs to
#[derive(Debug, Clone, Copy)]
struct CornerVertex<'a> {
    position: Vec3,
    cell: &'a HexCell,
}

impl CornerVertex<'_> {
    fn elevation(&self) -> i32 {
        self.cell.elevation()
    }

    fn color(&self) -> CellColor {
        self.cell.color()
    }
}

/// Pick the fill for a junction given its three cells
///
/// `bottom` must be the lowest of the three. Returns the shape and the
/// order in which the cells enter the emitting routine (`[begin, left,
/// right]`); a rotation moves the flat side of a double terrace to the end.
pub fn classify_corner(bottom: &HexCell, left: &HexCell, right: &HexCell) -> (CornerShape, [usize; 3]) {
    const BOTTOM: usize = 0;
    const LEFT: usize = 1;
    const RIGHT: usize = 2;

    let left_edge = bottom.edge_type_with(left);
    let right_edge = bottom.edge_type_with(right);

    match (left_edge, right_edge) {
        (EdgeType::Slope, EdgeType::Slope) => (CornerShape::DoubleTerrace, [BOTTOM, LEFT, RIGHT]),
        (EdgeType::Slope, EdgeType::Flat) => {
            (CornerShape::DoubleTerraceRotated, [LEFT, RIGHT, BOTTOM])
        }
        (EdgeType::Slope, EdgeType::Cliff) => (CornerShape::TerraceCliff, [BOTTOM, LEFT, RIGHT]),
        (EdgeType::Flat, EdgeType::Slope) => {
            (CornerShape::DoubleTerraceRotated, [RIGHT, BOTTOM, LEFT])
        }
        (_, EdgeType::Slope) => (CornerShape::CliffTerrace, [BOTTOM, LEFT, RIGHT]),
        _ if left.edge_type_with(right) == EdgeType::Slope => {
            if left.elevation() < right.elevation() {
                (CornerShape::CliffTerrace, [RIGHT, BOTTOM, LEFT])
            } else {
                (CornerShape::TerraceCliff, [LEFT, RIGHT, BOTTOM])
            }
        }
        _ => (CornerShape::Flat, [BOTTOM, LEFT, RIGHT]),
    }
}

/// Triangulate all cells into one mesh
///
/// Pure function of the cell states: the same cells always produce the same
/// buffers.
pub fn triangulate(cells: &[HexCell], metrics: &HexMetrics) -> MeshData {
    let mut triangulator = Triangulator {
        cells,
        metrics,
        mesh: MeshData::default(),
    };

    for cell in cells {
        triangulator.triangulate_cell(cell);
    }

    let mesh = triangulator.mesh;
    debug!(
        cells = cells.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        connections = mesh.stats.connection_count(),
        terraced = mesh.stats.terraced_connections,
        corners = mesh.stats.corner_count(),
        "triangulated hex grid"
    );
    mesh
}

struct Triangulator<'a> {
    cells: &'a [HexCell],
    metrics: &'a HexMetrics,
    mesh: MeshData,
}

impl<'a> Triangulator<'a> {
    fn neighbor(&self, cell: &HexCell, direction: HexDirection) -> Option<&'a HexCell> {
        cell.neighbor(direction).and_then(|index| self.cells.get(index))
    }

    fn triangulate_cell(&mut self, cell: &'a HexCell) {
        for direction in HexDirection::ALL {
            let center = cell.position();
            let v1 = center + self.metrics.first_solid_corner(direction);
            let v2 = center + self.metrics.second_solid_corner(direction);

            self.mesh.add_triangle([center, v1, v2], [cell.color(); 3]);
            self.mesh.stats.solid_triangles += 1;

            if direction <= HexDirection::SE {
                self.triangulate_connection(direction, cell, v1, v2);
            }
        }
    }

    fn triangulate_connection(&mut self, direction: HexDirection, cell: &'a HexCell, v1: Vec3, v2: Vec3) {
        let Some(neighbor) = self.neighbor(cell, direction) else {
            return;
        };

        let bridge = self.metrics.bridge(direction);
        let mut v3 = v1 + bridge;
        let mut v4 = v2 + bridge;
        v3.y = neighbor.position().y;
        v4.y = neighbor.position().y;

        if cell.edge_type_with(neighbor) == EdgeType::Slope {
            self.triangulate_edge_terraces(v1, v2, cell, v3, v4, neighbor);
        } else {
            self.mesh.add_quad(
                [v1, v2, v3, v4],
                [cell.color(), cell.color(), neighbor.color(), neighbor.color()],
            );
            self.mesh.stats.flat_connections += 1;
        }

        if direction > HexDirection::E {
            return;
        }
        let Some(next_neighbor) = self.neighbor(cell, direction.next()) else {
            return;
        };

        let mut v5 = v2 + self.metrics.bridge(direction.next());
        v5.y = next_neighbor.position().y;

        let own = CornerVertex { position: v2, cell };
        let across = CornerVertex { position: v4, cell: neighbor };
        let next = CornerVertex { position: v5, cell: next_neighbor };

        // Rotate so the lowest cell comes first, keeping clockwise order
        if cell.elevation() <= neighbor.elevation() {
            if cell.elevation() <= next_neighbor.elevation() {
                self.triangulate_corner(own, across, next);
            } else {
                self.triangulate_corner(next, own, across);
            }
        } else if neighbor.elevation() <= next_neighbor.elevation() {
            self.triangulate_corner(across, next, own);
        } else {
            self.triangulate_corner(next, own, across);
        }
    }

    fn triangulate_edge_terraces(
        &mut self,
        begin_left: Vec3,
        begin_right: Vec3,
        begin_cell: &HexCell,
        end_left: Vec3,
        end_right: Vec3,
        end_cell: &HexCell,
    ) {
        let (mut v1, mut v2, mut c1) = (begin_left, begin_right, begin_cell.color());

        for step in 1..self.metrics.terrace_steps() {
            let v3 = self.metrics.terrace_lerp(begin_left, end_left, step);
            let v4 = self.metrics.terrace_lerp(begin_right, end_right, step);
            let c2 = self.metrics.color_lerp(begin_cell.color(), end_cell.color(), step);

            self.mesh.add_quad([v1, v2, v3, v4], [c1, c1, c2, c2]);
            self.mesh.stats.terrace_quads += 1;

            (v1, v2, c1) = (v3, v4, c2);
        }

        self.mesh.stats.terraced_connections += 1;
    }

    fn triangulate_corner(&mut self, bottom: CornerVertex<'a>, left: CornerVertex<'a>, right: CornerVertex<'a>) {
        let (shape, order) = classify_corner(bottom.cell, left.cell, right.cell);
        let roles = [bottom, left, right];
        let (begin, left, right) = (roles[order[0]], roles[order[1]], roles[order[2]]);

        match shape {
            CornerShape::Flat => {
                self.mesh.add_triangle(
                    [begin.position, left.position, right.position],
                    [begin.color(), left.color(), right.color()],
                );
                self.mesh.stats.flat_corners += 1;
            }
            CornerShape::DoubleTerrace | CornerShape::DoubleTerraceRotated => {
                self.triangulate_corner_terraces(begin, left, right);
                self.mesh.stats.terrace_corners += 1;
            }
            CornerShape::TerraceCliff => {
                self.triangulate_corner_terraces_cliff(begin, left, right);
                self.mesh.stats.cliff_corners += 1;
            }
            CornerShape::CliffTerrace => {
                self.triangulate_corner_cliff_terraces(begin, left, right);
                self.mesh.stats.cliff_corners += 1;
            }
        }
    }

    fn triangulate_corner_terraces(&mut self, begin: CornerVertex, left: CornerVertex, right: CornerVertex) {
        let m = self.metrics;
        let mut v3 = m.terrace_lerp(begin.position, left.position, 1);
        let mut v4 = m.terrace_lerp(begin.position, right.position, 1);
        let mut c3 = m.color_lerp(begin.color(), left.color(), 1);
        let mut c4 = m.color_lerp(begin.color(), right.color(), 1);

        self.mesh.add_triangle([begin.position, v3, v4], [begin.color(), c3, c4]);

        for step in 2..m.terrace_steps() {
            let (v1, v2, c1, c2) = (v3, v4, c3, c4);
            v3 = m.terrace_lerp(begin.position, left.position, step);
            v4 = m.terrace_lerp(begin.position, right.position, step);
            c3 = m.color_lerp(begin.color(), left.color(), step);
            c4 = m.color_lerp(begin.color(), right.color(), step);
            self.mesh.add_quad([v1, v2, v3, v4], [c1, c2, c3, c4]);
        }
    }

    fn triangulate_corner_terraces_cliff(&mut self, begin: CornerVertex, left: CornerVertex, right: CornerVertex) {
        let b = cliff_fraction(begin.elevation(), right.elevation());
        let boundary = begin.position.lerp(right.position, b);
        let boundary_color = lerp_color(begin.color(), right.color(), b);

        self.triangulate_boundary_triangle(begin, left, boundary, boundary_color);
        self.close_cliff_corner(left, right, boundary, boundary_color);
    }

    fn triangulate_corner_cliff_terraces(&mut self, begin: CornerVertex, left: CornerVertex, right: CornerVertex) {
        let b = cliff_fraction(begin.elevation(), left.elevation());
        let boundary = begin.position.lerp(left.position, b);
        let boundary_color = lerp_color(begin.color(), left.color(), b);

        self.triangulate_boundary_triangle(right, begin, boundary, boundary_color);
        self.close_cliff_corner(left, right, boundary, boundary_color);
    }

    /// Fill the part of a cliff junction between the two upper cells
    fn close_cliff_corner(&mut self, left: CornerVertex, right: CornerVertex, boundary: Vec3, boundary_color: CellColor) {
        if left.cell.edge_type_with(right.cell) == EdgeType::Slope {
            self.triangulate_boundary_triangle(left, right, boundary, boundary_color);
        } else {
            self.mesh.add_triangle(
                [left.position, right.position, boundary],
                [left.color(), right.color(), boundary_color],
            );
        }
    }

    /// Fan of triangles from a terraced side into a single boundary point
    fn triangulate_boundary_triangle(
        &mut self,
        begin: CornerVertex,
        left: CornerVertex,
        boundary: Vec3,
        boundary_color: CellColor,
    ) {
        let m = self.metrics;
        let (mut v1, mut c1) = (begin.position, begin.color());

        for step in 1..m.terrace_steps() {
            let v2 = m.terrace_lerp(begin.position, left.position, step);
            let c2 = m.color_lerp(begin.color(), left.color(), step);
            self.mesh.add_triangle([v1, v2, boundary], [c1, c2, boundary_color]);
            (v1, c1) = (v2, c2);
        }
    }
}

/// Where the terrace boundary meets a cliff edge, as a fraction of the cliff
fn cliff_fraction(from: i32, to: i32) -> f32 {
    1.0 / from.abs_diff(to).max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::OffsetCoord;
    use crate::mesh::colors::WHITE;

    fn cell_at(elevation: i32) -> HexCell {
        HexCell::new(OffsetCoord::new(0, 0), elevation, WHITE, &HexMetrics::default())
    }

    #[test]
    fn test_classify_flat_and_cliffs() {
        let (shape, order) = classify_corner(&cell_at(0), &cell_at(0), &cell_at(0));
        assert_eq!(shape, CornerShape::Flat);
        assert_eq!(order, [0, 1, 2]);

        let (shape, _) = classify_corner(&cell_at(0), &cell_at(3), &cell_at(6));
        assert_eq!(shape, CornerShape::Flat);

        let (shape, _) = classify_corner(&cell_at(0), &cell_at(0), &cell_at(4));
        assert_eq!(shape, CornerShape::Flat);
    }

    #[test]
    fn test_classify_double_terraces() {
        let (shape, order) = classify_corner(&cell_at(0), &cell_at(1), &cell_at(1));
        assert_eq!(shape, CornerShape::DoubleTerrace);
        assert_eq!(order, [0, 1, 2]);

        // Right side flat: the sloped-up left cell becomes the pivot
        let (shape, order) = classify_corner(&cell_at(0), &cell_at(1), &cell_at(0));
        assert_eq!(shape, CornerShape::DoubleTerraceRotated);
        assert_eq!(order, [1, 2, 0]);

        let (shape, order) = classify_corner(&cell_at(0), &cell_at(0), &cell_at(1));
        assert_eq!(shape, CornerShape::DoubleTerraceRotated);
        assert_eq!(order, [2, 0, 1]);
    }

    #[test]
    fn test_classify_terrace_cliff_mixes() {
        let (shape, order) = classify_corner(&cell_at(0), &cell_at(1), &cell_at(3));
        assert_eq!(shape, CornerShape::TerraceCliff);
        assert_eq!(order, [0, 1, 2]);

        let (shape, order) = classify_corner(&cell_at(0), &cell_at(3), &cell_at(1));
        assert_eq!(shape, CornerShape::CliffTerrace);
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn test_classify_slope_between_upper_cells() {
        // Both bottom edges are cliffs, the upper pair is a slope
        let (shape, order) = classify_corner(&cell_at(0), &cell_at(2), &cell_at(3));
        assert_eq!(shape, CornerShape::CliffTerrace);
        assert_eq!(order, [2, 0, 1]);

        let (shape, order) = classify_corner(&cell_at(0), &cell_at(3), &cell_at(2));
        assert_eq!(shape, CornerShape::TerraceCliff);
        assert_eq!(order, [1, 2, 0]);
    }

    #[test]
    fn test_cliff_fraction() {
        assert_eq!(cliff_fraction(0, 2), 0.5);
        assert_eq!(cliff_fraction(4, 0), 0.25);
        assert_eq!(cliff_fraction(1, 1), 1.0);
    }

    #[test]
    fn test_empty_cells() {
        let mesh = triangulate(&[], &HexMetrics::default());
        assert!(mesh.is_empty());
        assert_eq!(mesh.stats, Default::default());
    }

    #[test]
    fn test_single_cell_is_hexagon_fan() {
        let cells = [cell_at(2)];
        let mesh = triangulate(&cells, &HexMetrics::default());

        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.stats.solid_triangles, 6);
        assert_eq!(mesh.stats.connection_count(), 0);
        assert_eq!(mesh.stats.corner_count(), 0);
        for position in &mesh.positions {
            assert_eq!(position[1], 10.0);
        }
    }
}
