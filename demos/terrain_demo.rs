//! Demonstration of grid editing and terrain meshing
//!
//! Run with `RUST_LOG=hex_terrain_mesh=debug` to see triangulation stats.

use hex_terrain_mesh::*;
use tracing_subscriber::EnvFilter;

fn print_mesh(label: &str, mesh: &MeshData) {
    let stats = mesh.stats;
    println!("{label}:");
    println!("  Vertices: {}", mesh.vertex_count());
    println!("  Triangles: {}", mesh.triangle_count());
    println!(
        "  Connections: {} flat, {} terraced ({} terrace quads)",
        stats.flat_connections, stats.terraced_connections, stats.terrace_quads
    );
    println!(
        "  Corners: {} flat, {} terraced, {} cliff",
        stats.flat_corners, stats.terrace_corners, stats.cliff_corners
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Building grid...");

    let config = GridConfigBuilder::new().size(6, 6).build()?;
    let mut editor = HexMapEditor::new(HexGrid::new(config)?, MeshData::default());
    print_mesh("Flat grid", editor.sink());

    // Terraced hill in the middle
    editor.set_active_color(mesh::colors::GREEN);
    editor.set_active_elevation(1);
    for (x, z) in [(2, 2), (3, 2), (2, 3)] {
        editor.paint_cell(x, z);
    }
    editor.set_active_elevation(2);
    editor.paint_cell(3, 3);
    print_mesh("\nAfter painting a hill", editor.sink());

    // Cliff next to it
    editor.set_active_color(mesh::colors::rgb8(214, 180, 92));
    editor.set_active_elevation(6);
    let position = editor.grid().cell_to_world(4, 3);
    editor.paint_at(position);
    print_mesh("\nAfter painting a cliff", editor.sink());

    #[cfg(feature = "picking")]
    {
        let origin = editor.grid().cell_to_world(1, 4) + Vec3::new(0.5, 100.0, 0.3);
        if let Some(hit) = editor.grid().raycast(origin, Vec3::NEG_Y) {
            println!("\nRay hit cell {} at {:?}", hit.coord, hit.point);
        }
    }

    let mut edit_count = 0;
    for z in -1..=1 {
        if editor.paint_cell(0, z) {
            edit_count += 1;
        }
    }
    println!("\n{edit_count} of 3 edits landed inside the grid");

    // Random terrain at a few sizes
    println!("\n=== Random terrain ===");
    let sampler = RandomTerrainSampler::new(42).with_elevation_range(0, 4);
    for (width, height) in [(4, 4), (16, 16), (64, 64)] {
        let config = GridConfigBuilder::new().size(width, height).build()?;
        let grid = HexGrid::generate_with_sampler(config, &sampler)?;
        let mesh = grid.mesh();

        let mem = mesh.positions.len() * 12
            + mesh.normals.len() * 12
            + mesh.colors.len() * 16
            + mesh.indices.len() * 4;

        println!(
            "{}x{}: {} cells, {} vertices, {} triangles, {:.2} MB",
            width,
            height,
            grid.cell_count(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            mem as f32 / 1024.0 / 1024.0
        );
    }

    Ok(())
}
