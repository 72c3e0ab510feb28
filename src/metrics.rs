//! Hexagon geometry constants and derived formulas
//!
//! `HexMetrics` is an immutable value: it stores the three tunable inputs
//! (outer radius, elevation step, terraces per slope) and derives everything
//! else on demand. Cells are pointy-top hexagons lying in the XZ plane with
//! corner 0 pointing towards +Z.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

use crate::direction::HexDirection;
use crate::error::{HexGridError, Result};
use crate::mesh::CellColor;

/// Fraction of the corner offsets covered by a cell's solid interior hexagon
pub const SOLID_FACTOR: f32 = 0.75;

/// Fraction of the corner offsets covered by the blend strip on each side
pub const BLEND_FACTOR: f32 = 1.0 - SOLID_FACTOR;

/// sqrt(3) / 2
const OUTER_TO_INNER: f32 = 0.866_025_4;

/// Upper bound for `terraces_per_slope`, keeps terrace geometry bounded
pub const MAX_TERRACES_PER_SLOPE: u32 = 16;

/// Classification of the elevation relationship between two cells
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeType {
    /// Same elevation
    Flat,
    /// Elevation differs by exactly one step (rendered as terraces)
    Slope,
    /// Elevation differs by two or more steps (rendered as a wall)
    Cliff,
}

impl EdgeType {
    /// Classify the edge between two elevations
    pub fn between(elevation1: i32, elevation2: i32) -> Self {
        match elevation1.abs_diff(elevation2) {
            0 => EdgeType::Flat,
            1 => EdgeType::Slope,
            _ => EdgeType::Cliff,
        }
    }
}

/// Geometric configuration of the hex grid
///
/// # Preconditions
///
/// `terraces_per_slope >= 1`, which makes `terrace_steps()` odd and at
/// least 3. `HexMetrics::new` rejects anything else, and so does
/// deserialization.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMetrics"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexMetrics {
    outer_radius: f32,
    elevation_step: f32,
    terraces_per_slope: u32,
}

/// Unchecked wire form of `HexMetrics`
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMetrics {
    outer_radius: f32,
    elevation_step: f32,
    terraces_per_slope: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMetrics> for HexMetrics {
    type Error = HexGridError;

    fn try_from(raw: RawMetrics) -> Result<Self> {
        Self::new(raw.outer_radius, raw.elevation_step, raw.terraces_per_slope)
    }
}

impl HexMetrics {
    /// Create validated metrics
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetrics` if the radius or elevation step is not a
    /// positive finite number, or if `terraces_per_slope` is outside
    /// `1..=MAX_TERRACES_PER_SLOPE`.
    pub fn new(outer_radius: f32, elevation_step: f32, terraces_per_slope: u32) -> Result<Self> {
        let metrics = Self {
            outer_radius,
            elevation_step,
            terraces_per_slope,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Check the invariants `new` enforces
    ///
    /// # Errors
    ///
    /// See [`HexMetrics::new`].
    pub fn validate(&self) -> Result<()> {
        if !self.outer_radius.is_finite() || self.outer_radius <= 0.0 {
            return Err(HexGridError::InvalidMetrics(format!(
                "outer radius must be positive (got {})",
                self.outer_radius
            )));
        }
        if !self.elevation_step.is_finite() || self.elevation_step <= 0.0 {
            return Err(HexGridError::InvalidMetrics(format!(
                "elevation step must be positive (got {})",
                self.elevation_step
            )));
        }
        if self.terraces_per_slope == 0 || self.terraces_per_slope > MAX_TERRACES_PER_SLOPE {
            return Err(HexGridError::InvalidMetrics(format!(
                "terraces per slope must be in 1..={} (got {})",
                MAX_TERRACES_PER_SLOPE, self.terraces_per_slope
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    /// Distance from the center to the middle of an edge
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.outer_radius * OUTER_TO_INNER
    }

    /// World height of one elevation unit
    #[inline]
    pub fn elevation_step(&self) -> f32 {
        self.elevation_step
    }

    #[inline]
    pub fn terraces_per_slope(&self) -> u32 {
        self.terraces_per_slope
    }

    /// Number of interpolation points along a terraced slope, always odd
    #[inline]
    pub fn terrace_steps(&self) -> u32 {
        self.terraces_per_slope * 2 + 1
    }

    /// Horizontal fraction covered by one terrace sub-quad
    ///
    /// The denominator is `terrace_steps() - 1`, the number of sub-quads in
    /// a strip, so the last step lands exactly on the far edge.
    #[inline]
    pub fn horizontal_terrace_step_size(&self) -> f32 {
        1.0 / (self.terrace_steps() - 1) as f32
    }

    /// Vertical fraction gained by one riser
    ///
    /// Equals `1 / terraces_per_slope`: height rises on every odd step only.
    #[inline]
    pub fn vertical_terrace_step_size(&self) -> f32 {
        1.0 / self.terraces_per_slope as f32
    }

    /// World Y coordinate of a cell at `elevation`
    #[inline]
    pub fn height(&self, elevation: i32) -> f32 {
        elevation as f32 * self.elevation_step
    }

    /// Corner offset of the unit hexagon
    ///
    /// Index 6 repeats corner 0 so `corner(d)` and `corner(d + 1)` form an
    /// edge for every direction, including the wrap from NW to NE.
    pub fn corner(&self, index: usize) -> Vec3 {
        let outer = self.outer_radius;
        let inner = self.inner_radius();
        match index % 6 {
            0 => Vec3::new(0.0, 0.0, outer),
            1 => Vec3::new(inner, 0.0, 0.5 * outer),
            2 => Vec3::new(inner, 0.0, -0.5 * outer),
            3 => Vec3::new(0.0, 0.0, -outer),
            4 => Vec3::new(-inner, 0.0, -0.5 * outer),
            _ => Vec3::new(-inner, 0.0, 0.5 * outer),
        }
    }

    /// All seven corner offsets (the last one equal to the first)
    pub fn corners(&self) -> [Vec3; 7] {
        std::array::from_fn(|i| self.corner(i))
    }

    #[inline]
    pub fn first_solid_corner(&self, direction: HexDirection) -> Vec3 {
        self.corner(direction.index()) * SOLID_FACTOR
    }

    #[inline]
    pub fn second_solid_corner(&self, direction: HexDirection) -> Vec3 {
        self.corner(direction.index() + 1) * SOLID_FACTOR
    }

    /// Offset from a solid corner to the matching corner of the neighbor's solid region
    #[inline]
    pub fn bridge(&self, direction: HexDirection) -> Vec3 {
        (self.corner(direction.index()) + self.corner(direction.index() + 1)) * BLEND_FACTOR
    }

    /// Interpolate along a terraced slope
    ///
    /// `step` runs from 0 (`a`) to `terrace_steps() - 1` (`b`). X and Z move
    /// linearly, Y rises only on odd steps which produces flat ledges.
    pub fn terrace_lerp(&self, a: Vec3, b: Vec3, step: u32) -> Vec3 {
        let h = self.horizontal_fraction(step);
        let v = (step.div_ceil(2).min(self.terraces_per_slope)) as f32
            / self.terraces_per_slope as f32;
        Vec3::new(mix(a.x, b.x, h), mix(a.y, b.y, v), mix(a.z, b.z, h))
    }

    /// Interpolate colors with the same horizontal fraction as `terrace_lerp`
    pub fn color_lerp(&self, a: CellColor, b: CellColor, step: u32) -> CellColor {
        lerp_color(a, b, self.horizontal_fraction(step))
    }

    fn horizontal_fraction(&self, step: u32) -> f32 {
        let last = self.terrace_steps() - 1;
        step.min(last) as f32 / last as f32
    }
}

impl Default for HexMetrics {
    fn default() -> Self {
        Self {
            outer_radius: 10.0,
            elevation_step: 5.0,
            terraces_per_slope: 2,
        }
    }
}

/// Linear color interpolation, exact at `t == 0` and `t == 1`
pub fn lerp_color(a: CellColor, b: CellColor, t: f32) -> CellColor {
    std::array::from_fn(|i| mix(a[i], b[i], t))
}

// a * (1 - t) + b * t hits both endpoints exactly, unlike a + (b - a) * t
#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics() {
        let m = HexMetrics::default();
        assert_eq!(m.outer_radius(), 10.0);
        assert!((m.inner_radius() - 8.660254).abs() < 1e-4);
        assert_eq!(m.elevation_step(), 5.0);
        assert_eq!(m.terrace_steps(), 5);
        assert_eq!(m.horizontal_terrace_step_size(), 0.25);
        assert_eq!(m.vertical_terrace_step_size(), 0.5);
        assert_eq!(m.height(3), 15.0);
    }

    #[test]
    fn test_invalid_metrics() {
        assert!(HexMetrics::new(0.0, 5.0, 2).is_err());
        assert!(HexMetrics::new(-1.0, 5.0, 2).is_err());
        assert!(HexMetrics::new(f32::NAN, 5.0, 2).is_err());
        assert!(HexMetrics::new(10.0, 0.0, 2).is_err());
        assert!(HexMetrics::new(10.0, 5.0, 0).is_err());
        assert!(HexMetrics::new(10.0, 5.0, MAX_TERRACES_PER_SLOPE + 1).is_err());
        assert!(HexMetrics::new(10.0, 5.0, 1).is_ok());
    }

    #[test]
    fn test_terrace_steps_always_odd() {
        for t in 1..=MAX_TERRACES_PER_SLOPE {
            let m = HexMetrics::new(1.0, 1.0, t).unwrap();
            assert_eq!(m.terrace_steps() % 2, 1);
        }
    }

    #[test]
    fn test_corner_wraps_to_first() {
        let m = HexMetrics::default();
        let corners = m.corners();
        assert_eq!(corners[6], corners[0]);
        for c in &corners {
            assert!((c.length() - m.outer_radius()).abs() < 1e-4);
            assert_eq!(c.y, 0.0);
        }
    }

    #[test]
    fn test_solid_corners_for_last_direction() {
        let m = HexMetrics::default();
        let first = m.first_solid_corner(HexDirection::NW);
        let second = m.second_solid_corner(HexDirection::NW);
        assert_eq!(first, m.corner(5) * SOLID_FACTOR);
        assert_eq!(second, m.corner(0) * SOLID_FACTOR);
    }

    #[test]
    fn test_bridges_meet_neighbor_solid_corners() {
        // Center-to-center offset equals corner(d) + corner(d + 1), so the bridged
        // solid corner must land on the neighbor's opposite solid corner.
        let m = HexMetrics::default();
        for d in HexDirection::ALL {
            let neighbor_center = m.corner(d.index()) + m.corner(d.index() + 1);
            let bridged = m.first_solid_corner(d) + m.bridge(d);
            let opposite = neighbor_center + m.second_solid_corner(d.opposite());
            assert!((bridged - opposite).length() < 1e-4, "direction {}", d);
        }
    }

    #[test]
    fn test_edge_type_classification() {
        assert_eq!(EdgeType::between(0, 0), EdgeType::Flat);
        assert_eq!(EdgeType::between(3, 3), EdgeType::Flat);
        assert_eq!(EdgeType::between(0, 1), EdgeType::Slope);
        assert_eq!(EdgeType::between(2, 1), EdgeType::Slope);
        assert_eq!(EdgeType::between(0, 2), EdgeType::Cliff);
        assert_eq!(EdgeType::between(-3, 4), EdgeType::Cliff);
        assert_eq!(EdgeType::between(i32::MIN, i32::MAX), EdgeType::Cliff);
    }

    #[test]
    fn test_terrace_lerp_endpoints() {
        let m = HexMetrics::default();
        let a = Vec3::new(1.3, 0.0, -7.1);
        let b = Vec3::new(4.9, 5.0, 2.2);
        assert_eq!(m.terrace_lerp(a, b, 0), a);
        assert_eq!(m.terrace_lerp(a, b, m.terrace_steps() - 1), b);
    }

    #[test]
    fn test_terrace_lerp_is_stepped() {
        let m = HexMetrics::default();
        let a = Vec3::ZERO;
        let b = Vec3::new(4.0, 10.0, 0.0);
        let heights: Vec<f32> = (0..m.terrace_steps())
            .map(|s| m.terrace_lerp(a, b, s).y)
            .collect();
        assert_eq!(heights, vec![0.0, 5.0, 5.0, 10.0, 10.0]);

        let xs: Vec<f32> = (0..m.terrace_steps())
            .map(|s| m.terrace_lerp(a, b, s).x)
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_color_lerp() {
        let m = HexMetrics::default();
        let a = [1.0, 0.0, 0.0, 1.0];
        let b = [0.0, 0.0, 1.0, 1.0];
        assert_eq!(m.color_lerp(a, b, 0), a);
        assert_eq!(m.color_lerp(a, b, 4), b);
        assert_eq!(m.color_lerp(a, b, 2), [0.5, 0.0, 0.5, 1.0]);
    }
}
