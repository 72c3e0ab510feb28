//! Mesh generation for HexGrid
//!
//! Generates engine-agnostic mesh data from grid cells.

pub mod colors;
mod sink;
mod triangulation;

pub use colors::CellColor;
pub use sink::MeshSink;
pub use triangulation::{classify_corner, triangulate, CornerShape};

use glam::Vec3;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
///
/// Triangles never share vertices with other triangles outside their quad,
/// so the normals are flat per face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Face normals, oriented upwards
    pub normals: Vec<[f32; 3]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
    /// What the triangulation emitted
    pub stats: MeshStats,
}

/// Counts of the geometry pieces emitted by a triangulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshStats {
    /// Triangles of the solid cell interiors (six per cell)
    pub solid_triangles: usize,
    /// Single-quad connections across flat or cliff edges
    pub flat_connections: usize,
    /// Connections rendered as terraced strips
    pub terraced_connections: usize,
    /// Sub-quads across all terraced strips
    pub terrace_quads: usize,
    /// Three-cell junctions filled with one plain triangle
    pub flat_corners: usize,
    /// Junctions filled with terraces towards both other cells
    pub terrace_corners: usize,
    /// Junctions mixing terraces and a cliff (either orientation)
    pub cliff_corners: usize,
}

impl MeshStats {
    /// Number of connection strips between neighboring cells
    pub fn connection_count(&self) -> usize {
        self.flat_connections + self.terraced_connections
    }

    /// Number of filled three-cell junctions
    pub fn corner_count(&self) -> usize {
        self.flat_corners + self.terrace_corners + self.cliff_corners
    }
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over triangles as vertex position triples
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            let corner = |i: u32| Vec3::from_array(self.positions[i as usize]);
            [corner(tri[0]), corner(tri[1]), corner(tri[2])]
        })
    }

    pub(crate) fn add_triangle(&mut self, vertices: [Vec3; 3], colors: [CellColor; 3]) {
        let base = self.positions.len() as u32;
        let normal = face_normal(vertices[0], vertices[1], vertices[2]);
        for (vertex, color) in vertices.iter().zip(colors) {
            self.positions.push(vertex.to_array());
            self.normals.push(normal);
            self.colors.push(color);
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Add a quad as triangles (v1, v3, v2) and (v2, v3, v4)
    pub(crate) fn add_quad(&mut self, vertices: [Vec3; 4], colors: [CellColor; 4]) {
        let base = self.positions.len() as u32;
        let normal = face_normal(vertices[0], vertices[2], vertices[1]);
        for (vertex, color) in vertices.iter().zip(colors) {
            self.positions.push(vertex.to_array());
            self.normals.push(normal);
            self.colors.push(color);
        }
        self.indices
            .extend_from_slice(&[base, base + 2, base + 1, base + 1, base + 2, base + 3]);
    }
}

fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> [f32; 3] {
    let normal = (b - a).cross(c - a).normalize_or_zero();
    if normal.y < 0.0 {
        (-normal).to_array()
    } else {
        normal.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_triangle() {
        let mut mesh = MeshData::default();
        mesh.add_triangle(
            [Vec3::ZERO, Vec3::Z, Vec3::X],
            [[1.0; 4], [0.5; 4], [0.0; 4]],
        );

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.colors[1], [0.5; 4]);
        assert_eq!(mesh.normals[0], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_add_quad() {
        let mut mesh = MeshData::default();
        mesh.add_triangle([Vec3::ZERO, Vec3::Z, Vec3::X], [[1.0; 4]; 3]);
        mesh.add_quad(
            [Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, 1.0)],
            [[1.0; 4]; 4],
        );

        assert_eq!(mesh.vertex_count(), 7);
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(&mesh.indices[3..], &[3, 5, 4, 4, 5, 6]);
        for normal in &mesh.normals {
            assert_eq!(*normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_downward_winding_gets_upward_normal() {
        let mut mesh = MeshData::default();
        mesh.add_triangle([Vec3::ZERO, Vec3::X, Vec3::Z], [[1.0; 4]; 3]);
        assert_eq!(mesh.normals[0], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_triangles_iterator() {
        let mut mesh = MeshData::default();
        mesh.add_triangle([Vec3::ZERO, Vec3::Z, Vec3::X], [[1.0; 4]; 3]);
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris, vec![[Vec3::ZERO, Vec3::Z, Vec3::X]]);
    }

    #[test]
    fn test_stats_totals() {
        let stats = MeshStats {
            flat_connections: 2,
            terraced_connections: 3,
            flat_corners: 1,
            terrace_corners: 1,
            cliff_corners: 4,
            ..Default::default()
        };
        assert_eq!(stats.connection_count(), 5);
        assert_eq!(stats.corner_count(), 6);
    }
}
