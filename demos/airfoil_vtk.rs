//! # Airfoil Triangulation Example
//!
//! Triangulates a 56-point airfoil profile and writes the mesh as a legacy
//! ASCII VTK file that can be opened in `ParaView` or `VisIt`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example airfoil_vtk [output.vtk]
//! ```
//!
//! The output path defaults to `triangulation.vtk`. Set `RUST_LOG=debug` to see
//! per-insertion logging.
//!
//! ## Output
//!
//! - Construction time
//! - Triangle count and insertion statistics
//! - Destination of the exported mesh
//!
//! The process exits with a non-zero status if the triangulation or the export
//! fails.

mod airfoil_data;

use airfoil_data::AIRFOIL_POINTS;
use delaunay2d::prelude::*;
use std::process::ExitCode;
use std::sync::Once;
use std::time::Instant;

const DEFAULT_OUTPUT: &str = "triangulation.vtk";

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

fn main() -> ExitCode {
    init_tracing();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let points: Vec<Point> = AIRFOIL_POINTS.iter().copied().map(Point::from).collect();

    let start = Instant::now();
    let dt = match DelaunayTriangulation::new(&points) {
        Ok(dt) => dt,
        Err(e) => {
            eprintln!("✗ Failed to triangulate: {e}");
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    println!("Triangulation completed in {} ms", elapsed.as_millis());
    println!("Generated {} triangles.", dt.number_of_triangles());

    let stats = dt.statistics();
    println!(
        "  points inserted: {}, degenerate insertions: {}, zero-area pruned: {}",
        stats.points_inserted,
        stats.degenerate_count(),
        stats.zero_area_pruned
    );

    match VtkMesh::from(&dt).export_vtk(&output) {
        Ok(()) => {
            println!("Exported to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Export failed: {e}");
            ExitCode::FAILURE
        }
    }
}
