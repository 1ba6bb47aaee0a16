//! Integration tests for legacy VTK export.

use delaunay2d::io::vtk::export_vtk;
use delaunay2d::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Fresh per-test scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("delaunay2d-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn render(mesh: &VtkMesh) -> String {
    let mut out = Vec::new();
    mesh.write_vtk(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_single_triangle_text() {
    let points = [point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0)];
    let dt = DelaunayTriangulation::new(&points).unwrap();

    let expected = "\
# vtk DataFile Version 3.0
Delaunay Triangulation
ASCII
DATASET UNSTRUCTURED_GRID
POINTS 3 float
0 0 0.0
1 0 0.0
0 1 0.0
CELLS 1 4
3 0 1 2
CELL_TYPES 1
5
";
    assert_eq!(render(&VtkMesh::from(&dt)), expected);
}

#[test]
fn test_unit_square_text_shares_points() {
    let points = [
        point!(0.0, 0.0),
        point!(1.0, 0.0),
        point!(1.0, 1.0),
        point!(0.0, 1.0),
    ];
    let dt = DelaunayTriangulation::new(&points).unwrap();

    let expected = "\
# vtk DataFile Version 3.0
Delaunay Triangulation
ASCII
DATASET UNSTRUCTURED_GRID
POINTS 4 float
0 0 0.0
1 0 0.0
1 1 0.0
0 1 0.0
CELLS 2 8
3 0 1 2
3 0 2 3
CELL_TYPES 2
5
5
";
    assert_eq!(render(&VtkMesh::from(&dt)), expected);
}

#[test]
fn test_fractional_coordinates_and_title() {
    let t = Triangle::new(point!(0.7, -1.4), point!(2.5, 0.0), point!(-3.25, 6.0));
    let mesh = VtkMesh::from_triangles(&[t]).with_title("airfoil");
    let text = render(&mesh);

    assert!(text.contains("\nairfoil\n"));
    assert!(text.contains("POINTS 3 float\n0.7 -1.4 0.0\n2.5 0 0.0\n-3.25 6 0.0\n"));
}

#[test]
fn test_export_writes_file() {
    let dir = scratch_dir("export");
    let path = dir.join("square.vtk");

    let points = [
        point!(0.0, 0.0),
        point!(1.0, 0.0),
        point!(1.0, 1.0),
        point!(0.0, 1.0),
    ];
    let dt = DelaunayTriangulation::new(&points).unwrap();
    let mesh = VtkMesh::from(&dt);
    mesh.export_vtk(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&mesh));

    // Overwrites an existing file.
    export_vtk(&dt.triangles()[..1], &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("CELLS 1 4\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_export_into_missing_directory_fails() {
    let dir = scratch_dir("missing");
    let path = dir.join("does-not-exist").join("mesh.vtk");

    let mesh = VtkMesh::from_triangles(&[]);
    let err = mesh.export_vtk(&path).unwrap_err();
    match &err {
        ExportError::Io { path: Some(p), .. } => assert_eq!(p, &path),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("mesh.vtk"));
    assert!(!path.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_export_does_not_touch_triangulation() {
    let points = [point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0)];
    let dt = DelaunayTriangulation::new(&points).unwrap();
    let before = dt.clone();

    let _ = render(&VtkMesh::from(&dt));
    assert_eq!(dt, before);
}
