//! Offset coordinates and world-space mapping
//!
//! Rows run along +Z. Odd rows are shifted half a cell towards +X, so a
//! cell's world position is
//!
//! ```text
//! x = (x + z * 0.5 - floor(z / 2)) * inner_radius * 2
//! z = z * outer_radius * 1.5
//! ```

use std::fmt;

use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::metrics::HexMetrics;

/// Integer offset coordinate of a cell (column `x`, row `z`)
///
/// Coordinates may lie outside any particular grid; grids treat such
/// coordinates as absent.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetCoord {
    pub x: i32,
    pub z: i32,
}

impl OffsetCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for OffsetCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for OffsetCoord {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

/// World position of a cell center at elevation 0
pub fn cell_to_world(coord: OffsetCoord, metrics: &HexMetrics) -> Vec3 {
    let x = coord.x as f32 + coord.z as f32 * 0.5 - coord.z.div_euclid(2) as f32;
    Vec3::new(
        x * metrics.inner_radius() * 2.0,
        0.0,
        coord.z as f32 * metrics.outer_radius() * 1.5,
    )
}

/// Offset coordinate of the cell whose hexagon contains `position`
///
/// The Y component is ignored. The result is exact: hexagons are the
/// Voronoi regions of their centers, so after an initial guess from the
/// inverse layout formula the nearest center in the surrounding block wins.
pub fn world_to_cell(position: Vec3, metrics: &HexMetrics) -> OffsetCoord {
    let z_guess = (position.z / (metrics.outer_radius() * 1.5)).round() as i32;
    let row_shift = z_guess as f32 * 0.5 - z_guess.div_euclid(2) as f32;
    let x_guess = (position.x / (metrics.inner_radius() * 2.0) - row_shift).round() as i32;

    let target = glam::Vec2::new(position.x, position.z);
    let mut best = OffsetCoord::new(x_guess, z_guess);
    let mut best_distance = f32::INFINITY;

    for dz in -1..=1 {
        for dx in -1..=1 {
            let candidate = OffsetCoord::new(x_guess + dx, z_guess + dz);
            let center = cell_to_world(candidate, metrics);
            let distance = glam::Vec2::new(center.x, center.z).distance_squared(target);
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_world_layout() {
        let m = HexMetrics::default();
        let spacing = m.inner_radius() * 2.0;

        assert_eq!(cell_to_world(OffsetCoord::new(0, 0), &m), Vec3::ZERO);

        let p = cell_to_world(OffsetCoord::new(1, 0), &m);
        assert!((p.x - spacing).abs() < 1e-4);

        // Odd rows shift half a cell
        let p = cell_to_world(OffsetCoord::new(0, 1), &m);
        assert!((p.x - spacing * 0.5).abs() < 1e-4);
        assert!((p.z - 15.0).abs() < 1e-4);

        // Even rows line up again
        let p = cell_to_world(OffsetCoord::new(0, 2), &m);
        assert!(p.x.abs() < 1e-4);
        assert!((p.z - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_world_to_cell_centers() {
        let m = HexMetrics::default();
        for z in -3..6 {
            for x in -3..6 {
                let coord = OffsetCoord::new(x, z);
                let center = cell_to_world(coord, &m);
                assert_eq!(world_to_cell(center, &m), coord);
            }
        }
    }

    #[test]
    fn test_world_to_cell_inside_hexagon() {
        let m = HexMetrics::default();
        let coord = OffsetCoord::new(2, 3);
        let center = cell_to_world(coord, &m);

        // Points just inside each corner still belong to the cell
        for corner in m.corners() {
            let p = center + corner * 0.95 + Vec3::new(0.0, 42.0, 0.0);
            assert_eq!(world_to_cell(p, &m), coord);
        }
    }

    #[test]
    fn test_world_to_cell_across_edges() {
        let m = HexMetrics::default();
        let center = cell_to_world(OffsetCoord::new(2, 2), &m);

        // Slightly past the east edge midpoint lies in the east neighbor
        let p = center + Vec3::new(m.inner_radius() * 1.1, 0.0, 0.0);
        assert_eq!(world_to_cell(p, &m), OffsetCoord::new(3, 2));

        // Slightly past the north-east edge (even row) lies in (2, 3)
        let ne = (m.corner(0) + m.corner(1)) * 0.55;
        assert_eq!(world_to_cell(center + ne, &m), OffsetCoord::new(2, 3));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(OffsetCoord::from((4, -1)), OffsetCoord::new(4, -1));
        assert_eq!(OffsetCoord::new(4, -1).to_string(), "(4, -1)");
    }
}
