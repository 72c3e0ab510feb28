//! Ray picking against the terrain mesh
//!
//! This module is only available with the `picking` feature.

use glam::Vec3;
use parry3d::math::{Point, Vector};
use parry3d::query::{Ray, RayCast};
use parry3d::shape::Triangle;

use crate::coords::OffsetCoord;
use crate::grid::HexGrid;

/// Result of casting a ray against the grid mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Cell under the hit point
    pub coord: OffsetCoord,
    /// Grid index of that cell
    pub index: usize,
    /// World position of the hit
    pub point: Vec3,
    /// Distance along the ray in units of `direction`
    pub time_of_impact: f32,
}

impl HexGrid {
    /// Cast a ray against the current mesh and return the closest hit cell
    ///
    /// Triangles are tested from both sides. Hits whose point maps outside
    /// the grid are discarded, as are rays with a zero direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use hex_terrain_mesh::*;
    /// # use glam::Vec3;
    /// let grid = HexGrid::new(GridConfig::default()).unwrap();
    /// let above = grid.cell_to_world(2, 3) + Vec3::new(0.5, 50.0, 0.3);
    /// let hit = grid.raycast(above, Vec3::NEG_Y).unwrap();
    /// assert_eq!(hit.coord, OffsetCoord::new(2, 3));
    /// ```
    pub fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<RayHit> {
        if direction.length_squared() == 0.0 || !direction.is_finite() || !origin.is_finite() {
            return None;
        }

        let ray = Ray::new(
            Point::new(origin.x, origin.y, origin.z),
            Vector::new(direction.x, direction.y, direction.z),
        );

        let closest = self
            .mesh()
            .triangles()
            .filter_map(|[a, b, c]| {
                Triangle::new(to_point(a), to_point(b), to_point(c)).cast_local_ray(&ray, f32::MAX, true)
            })
            .min_by(|a, b| a.total_cmp(b))?;

        let point = origin + direction * closest;
        let coord = self.world_to_cell(point);
        let index = self.cell_index(coord.x, coord.z)?;

        Some(RayHit {
            coord,
            index,
            point,
            time_of_impact: closest,
        })
    }
}

fn to_point(v: Vec3) -> Point<f32> {
    Point::new(v.x, v.y, v.z)
}
