//! Hexagonal terrain grid meshing
//!
//! A standalone library for building editable hex grids and triangulating
//! them into terraced terrain meshes, suitable for use with any game engine
//! (Bevy, Godot, etc.)
//!
//! # Quick Start
//!
//! ```rust
//! use hex_terrain_mesh::*;
//!
//! // Build a grid
//! let config = GridConfigBuilder::new()
//!     .size(6, 6)
//!     .build().unwrap();
//!
//! let mut grid = HexGrid::new(config).unwrap();
//!
//! // Raise a cell and recolor it
//! grid.edit_cell(2, 3, 1, [0.2, 0.6, 0.2, 1.0]);
//!
//! // Hand the rebuilt mesh to a renderer
//! let mut mesh = MeshData::default();
//! grid.submit(&mut mesh);
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `picking` (default): Enables ray casts against the terrain mesh
//! - `serde`: Enables serialization support for configuration and cells

// Modules
pub mod error;
pub mod direction;
pub mod metrics;
pub mod coords;
pub mod cell;
pub mod config;
pub mod terrain;
pub mod grid;
pub mod mesh;
pub mod editor;

#[cfg(feature = "picking")]
pub mod picking;

// Re-export core types for convenience
pub use error::{HexGridError, Result};
pub use direction::HexDirection;
pub use metrics::{lerp_color, EdgeType, HexMetrics, BLEND_FACTOR, SOLID_FACTOR};
pub use coords::{cell_to_world, world_to_cell, OffsetCoord};
pub use cell::HexCell;
pub use config::{GridConfig, GridConfigBuilder, MAX_CELLS};
pub use terrain::{CellTerrain, FlatTerrainSampler, RandomTerrainSampler, TerrainSampler};
pub use grid::HexGrid;
pub use mesh::{classify_corner, triangulate, CellColor, CornerShape, MeshData, MeshSink, MeshStats};
pub use editor::{Brush, HexMapEditor};

#[cfg(feature = "picking")]
pub use picking::RayHit;

// Re-export glam::Vec3 for convenience
pub use glam::Vec3;
