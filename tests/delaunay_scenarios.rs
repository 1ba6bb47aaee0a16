//! Scenario and regression tests for `DelaunayTriangulation`.
//!
//! These tests cover:
//! - The canonical small configurations (single triangle, square, collinear, empty)
//! - Degenerate input (duplicates) under both degenerate-insertion policies
//! - Input validation and the point cap
//! - The 56-point airfoil profile shipped with the `airfoil_vtk` demo

#[path = "../demos/airfoil_data.rs"]
mod airfoil_data;

use airfoil_data::AIRFOIL_POINTS;
use approx::assert_relative_eq;
use delaunay2d::prelude::*;
use std::sync::Once;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

fn airfoil_points() -> Vec<Point> {
    AIRFOIL_POINTS.iter().copied().map(Point::from).collect()
}

fn unit_square() -> Vec<Point> {
    vec![
        point!(0.0, 0.0),
        point!(1.0, 0.0),
        point!(1.0, 1.0),
        point!(0.0, 1.0),
    ]
}

// =========================================================================
// Canonical scenarios
// =========================================================================

#[test]
fn test_three_points_form_one_triangle() {
    init_tracing();
    let points = vec![point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0)];
    let dt = DelaunayTriangulation::new(&points).unwrap();

    assert_eq!(
        dt.triangles(),
        &[Triangle::new(points[0], points[1], points[2])]
    );
    assert_eq!(dt.triangles()[0].orientation(), Orientation::POSITIVE);
    assert!(dt.is_valid().is_ok());
}

#[test]
fn test_unit_square_splits_along_a_diagonal() {
    init_tracing();
    let points = unit_square();
    let dt = DelaunayTriangulation::new(&points).unwrap();

    assert_eq!(dt.number_of_triangles(), 2);
    assert_relative_eq!(dt.total_area(), 1.0);
    assert_relative_eq!(dt.triangles()[0].area(), 0.5);
    assert_relative_eq!(dt.triangles()[1].area(), 0.5);

    // The two triangles share exactly one edge, the diagonal.
    let [t0, t1] = [dt.triangles()[0], dt.triangles()[1]];
    let shared: Vec<Edge> = t0
        .edges()
        .into_iter()
        .filter(|e| t1.edges().contains(e))
        .collect();
    assert_eq!(shared, vec![Edge::new(points[0], points[2])]);

    // The fourth corner is cocircular with the first three and still inserted.
    assert!(!dt.statistics().has_degenerate_insertions());
    assert!(dt.is_valid().is_ok());
}

#[test]
fn test_collinear_points_produce_no_triangles() {
    init_tracing();
    let points = vec![point!(0.0, 0.0), point!(1.0, 0.0), point!(2.0, 0.0)];
    let dt = DelaunayTriangulation::new(&points).unwrap();

    assert_eq!(dt.number_of_triangles(), 0);
    assert!(dt.edges().is_empty());
    assert_relative_eq!(dt.total_area(), 0.0);
    assert_eq!(dt.statistics().points_inserted, 3);
    assert_eq!(dt.statistics().super_triangles_pruned, 7);
    assert!(dt.is_valid().is_ok());
}

#[test]
fn test_empty_input_is_rejected() {
    let err = DelaunayTriangulation::new(&[]).unwrap_err();
    assert!(matches!(err, TriangulationError::InvalidInput { .. }));
}

#[test]
fn test_interior_point_fans_to_hull() {
    let points = vec![
        point!(0.0, 0.0),
        point!(2.0, 0.0),
        point!(1.0, 2.0),
        point!(1.0, 0.5),
    ];
    let dt = DelaunayTriangulation::new(&points).unwrap();

    assert_eq!(
        dt.triangles(),
        &[
            Triangle::new(points[0], points[1], points[3]),
            Triangle::new(points[1], points[2], points[3]),
            Triangle::new(points[2], points[0], points[3]),
        ]
    );
    assert_relative_eq!(dt.total_area(), 2.0);
}

#[test]
fn test_build_is_idempotent() {
    let points = airfoil_points();
    let first = DelaunayTriangulation::new(&points).unwrap();
    let second = DelaunayTriangulation::new(&points).unwrap();
    assert_eq!(first, second);
}

// =========================================================================
// Degenerate input
// =========================================================================

#[test]
fn test_duplicate_point_is_reported() {
    init_tracing();
    let points = vec![
        point!(0.0, 0.0),
        point!(1.0, 0.0),
        point!(0.0, 1.0),
        point!(0.0, 0.0),
    ];
    let dt = DelaunayTriangulation::new(&points).unwrap();

    assert_eq!(dt.number_of_triangles(), 1);
    assert_eq!(
        dt.statistics().degenerate_insertions,
        vec![DegenerateInsertion {
            index: 3,
            point: point!(0.0, 0.0),
        }]
    );
    assert_eq!(dt.statistics().points_inserted, 4);
}

#[test]
fn test_duplicate_point_fails_under_fail_policy() {
    let points = vec![
        point!(0.0, 0.0),
        point!(1.0, 0.0),
        point!(0.0, 1.0),
        point!(0.0, 0.0),
    ];
    let options = TriangulationOptionsBuilder::default()
        .degenerate_policy(DegeneratePolicy::Fail)
        .build()
        .unwrap();

    let err = DelaunayTriangulation::with_options(&points, options).unwrap_err();
    assert_eq!(
        err,
        TriangulationError::DegenerateInsertion {
            index: 3,
            point: point!(0.0, 0.0),
        }
    );
    assert!(err.to_string().contains("point 3"));
}

#[test]
fn test_fail_policy_accepts_clean_input() {
    let options = TriangulationOptionsBuilder::default()
        .degenerate_policy(DegeneratePolicy::Fail)
        .build()
        .unwrap();
    let dt = DelaunayTriangulation::with_options(&unit_square(), options).unwrap();
    assert_eq!(dt.number_of_triangles(), 2);
}

#[test]
fn test_single_point() {
    let dt = DelaunayTriangulation::new(&[point!(3.0, -4.0)]).unwrap();
    assert_eq!(dt.number_of_points(), 1);
    assert_eq!(dt.number_of_triangles(), 0);
    assert!(!dt.super_triangle().is_degenerate());
}

// =========================================================================
// Input validation
// =========================================================================

#[test]
fn test_non_finite_coordinates_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let points = vec![point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, bad)];
        let err = DelaunayTriangulation::new(&points).unwrap_err();
        assert!(
            matches!(err, TriangulationError::InvalidInput { .. }),
            "unexpected error for {bad}: {err}"
        );
    }
}

#[test]
fn test_point_cap() {
    let capped = TriangulationOptionsBuilder::default()
        .max_points(3)
        .build()
        .unwrap();

    let err = DelaunayTriangulation::with_options(&unit_square(), capped).unwrap_err();
    assert_eq!(
        err,
        TriangulationError::ResourceExhausted {
            limit: 3,
            requested: 4,
        }
    );

    let points = vec![point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0)];
    assert!(DelaunayTriangulation::with_options(&points, capped).is_ok());
}

// =========================================================================
// Predicate modes
// =========================================================================

#[test]
fn test_predicate_modes_agree() {
    let normalized = TriangulationOptionsBuilder::default()
        .predicate(PredicateMode::WindingNormalized)
        .build()
        .unwrap();

    for points in [unit_square(), airfoil_points()] {
        let faithful = DelaunayTriangulation::new(&points).unwrap();
        let other = DelaunayTriangulation::with_options(&points, normalized).unwrap();
        assert_eq!(faithful.triangles(), other.triangles());
    }
}

// =========================================================================
// Airfoil profile
// =========================================================================

#[test]
fn test_airfoil_triangulation() {
    init_tracing();
    let points = airfoil_points();
    assert_eq!(points.len(), 56);

    let dt = DelaunayTriangulation::new(&points).unwrap();

    assert_eq!(dt.number_of_triangles(), 77);
    assert!(!dt.statistics().has_degenerate_insertions());
    assert_eq!(dt.statistics().zero_area_pruned, 0);
    assert!(dt.triangles().iter().all(|t| t.area() > 0.0));

    dt.validate_vertices().unwrap();
    dt.validate_edge_sharing().unwrap();
    dt.validate_delaunay().unwrap();

    // Every input point is used; the chord line splits the profile.
    let used: FastHashSet<Point> = dt.triangles().iter().flat_map(Triangle::vertices).collect();
    assert_eq!(used.len(), points.len());
}
