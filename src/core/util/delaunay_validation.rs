//! Delaunay empty-circumcircle and structural validation utilities.
//!
//! These checks are independent of how a triangle list was produced. They use
//! the winding-normalized circumcircle test so a clockwise triangle is judged
//! by its actual circumcircle.

#![forbid(unsafe_code)]

use thiserror::Error;

use crate::core::collections::{FastHashMap, FastHashSet, fast_hash_map_with_capacity};
use crate::core::edge::Edge;
use crate::core::triangle::Triangle;
use crate::geometry::point::Point;
use crate::geometry::predicates::in_circumcircle_normalized;

/// Errors that can occur during Delaunay property validation.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::util::DelaunayValidationError;
/// use delaunay2d::point;
///
/// let err = DelaunayValidationError::DelaunayViolation {
///     triangle_index: 2,
///     point: point!(0.5, 0.5),
/// };
/// assert!(err.to_string().contains("Triangle 2"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DelaunayValidationError {
    /// A point that is not a vertex of the triangle lies strictly inside its circumcircle.
    #[error("Triangle {triangle_index} violates Delaunay property: {point} is inside its circumcircle")]
    DelaunayViolation {
        /// Index of the offending triangle.
        triangle_index: usize,
        /// The point found inside the circumcircle.
        point: Point,
    },
    /// An edge is used by more than two triangles.
    #[error("Edge {edge} is shared by {count} triangles (expected 1 or 2)")]
    EdgeSharing {
        /// The over-shared edge.
        edge: Edge,
        /// Number of triangles using it.
        count: usize,
    },
    /// A triangle references a point that is not part of the input.
    #[error("Triangle {triangle_index} references {point}, which is not an input point")]
    ForeignVertex {
        /// Index of the offending triangle.
        triangle_index: usize,
        /// The unknown vertex.
        point: Point,
    },
}

// =============================================================================
// DELAUNAY PROPERTY VALIDATION
// =============================================================================

/// Returns the first point of `points` strictly inside the circumcircle of
/// `triangle`, skipping the triangle's own vertices.
fn first_point_in_circumcircle(
    triangle: &Triangle,
    points: &[Point],
    epsilon: f64,
) -> Option<Point> {
    points.iter().copied().find(|p| {
        !triangle.contains_vertex(p)
            && in_circumcircle_normalized(&triangle.a, &triangle.b, &triangle.c, p, epsilon)
    })
}

/// Find triangles that violate the Delaunay property.
///
/// Returns the indices of every triangle whose circumcircle strictly contains
/// a point of `points` other than its own vertices. The scan is
/// `O(triangles × points)`.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangle::Triangle;
/// use delaunay2d::core::util::find_delaunay_violations;
/// use delaunay2d::point;
///
/// let points = [point!(0.0, 0.0), point!(1.0, 0.0), point!(1.0, 1.0), point!(0.2, 0.8)];
/// // (0.2, 0.8) is inside the circumcircle of the first three points.
/// let triangles = [Triangle::new(points[0], points[1], points[2])];
///
/// assert_eq!(find_delaunay_violations(&points, &triangles, 1e-9), vec![0]);
/// ```
#[must_use]
pub fn find_delaunay_violations(points: &[Point], triangles: &[Triangle], epsilon: f64) -> Vec<usize> {
    tracing::debug!(
        "[Delaunay debug] find_delaunay_violations: checking {} triangles against {} points",
        triangles.len(),
        points.len()
    );

    let violations: Vec<usize> = triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| first_point_in_circumcircle(t, points, epsilon).is_some())
        .map(|(i, _)| i)
        .collect();

    if !violations.is_empty() {
        tracing::debug!(
            "[Delaunay debug] find_delaunay_violations: {} violating triangles",
            violations.len()
        );
    }
    violations
}

/// Checks the empty-circumcircle property, stopping at the first violation.
///
/// # Errors
///
/// Returns [`DelaunayValidationError::DelaunayViolation`] naming the first
/// violating triangle and the point found inside its circumcircle.
pub fn is_delaunay(
    points: &[Point],
    triangles: &[Triangle],
    epsilon: f64,
) -> Result<(), DelaunayValidationError> {
    for (triangle_index, triangle) in triangles.iter().enumerate() {
        if let Some(point) = first_point_in_circumcircle(triangle, points, epsilon) {
            return Err(DelaunayValidationError::DelaunayViolation {
                triangle_index,
                point,
            });
        }
    }
    Ok(())
}

// =============================================================================
// STRUCTURAL VALIDATION
// =============================================================================

/// Counts how many triangles use each undirected edge.
#[must_use]
pub fn edge_usage(triangles: &[Triangle]) -> FastHashMap<Edge, usize> {
    let mut usage = fast_hash_map_with_capacity(triangles.len() * 3);
    for edge in triangles.iter().flat_map(Triangle::edges) {
        *usage.entry(edge).or_insert(0) += 1;
    }
    usage
}

/// Checks that every edge is used by one or two triangles.
///
/// # Errors
///
/// Returns [`DelaunayValidationError::EdgeSharing`] for an edge used by more
/// than two triangles.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangle::Triangle;
/// use delaunay2d::core::util::validate_edge_sharing;
/// use delaunay2d::point;
///
/// let (a, b) = (point!(0.0, 0.0), point!(1.0, 0.0));
/// let fan = [
///     Triangle::new(a, b, point!(0.0, 1.0)),
///     Triangle::new(b, a, point!(0.0, -1.0)),
/// ];
/// assert!(validate_edge_sharing(&fan).is_ok());
///
/// let over_shared = [fan[0], fan[1], Triangle::new(a, b, point!(3.0, 2.0))];
/// assert!(validate_edge_sharing(&over_shared).is_err());
/// ```
pub fn validate_edge_sharing(triangles: &[Triangle]) -> Result<(), DelaunayValidationError> {
    let usage = edge_usage(triangles);
    // Report in triangle order so the result is deterministic.
    for edge in triangles.iter().flat_map(Triangle::edges) {
        let count = usage.get(&edge).copied().unwrap_or_default();
        if count > 2 {
            return Err(DelaunayValidationError::EdgeSharing { edge, count });
        }
    }
    Ok(())
}

/// Checks that every triangle vertex is one of `points`.
///
/// # Errors
///
/// Returns [`DelaunayValidationError::ForeignVertex`] for the first vertex not
/// found among `points`.
pub fn validate_vertices(points: &[Point], triangles: &[Triangle]) -> Result<(), DelaunayValidationError> {
    let known: FastHashSet<Point> = points.iter().copied().collect();
    for (triangle_index, triangle) in triangles.iter().enumerate() {
        if let Some(point) = triangle.vertices().into_iter().find(|p| !known.contains(p)) {
            return Err(DelaunayValidationError::ForeignVertex {
                triangle_index,
                point,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::predicates::DEFAULT_EPSILON;

    fn square() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn square_split_is_delaunay() {
        let [a, b, c, d] = square();
        let triangles = [Triangle::new(a, b, c), Triangle::new(a, c, d)];
        let points = square();

        // The fourth corner is cocircular, which is not a violation.
        assert!(is_delaunay(&points, &triangles, DEFAULT_EPSILON).is_ok());
        assert!(find_delaunay_violations(&points, &triangles, DEFAULT_EPSILON).is_empty());
        assert!(validate_edge_sharing(&triangles).is_ok());
        assert!(validate_vertices(&points, &triangles).is_ok());
    }

    #[test]
    fn skinny_split_violates_delaunay() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(2.0, 0.5);
        let d = Point::new(2.0, -0.5);
        let points = [a, b, c, d];
        // Splitting along the long diagonal a-b is the non-Delaunay choice.
        let triangles = [Triangle::new(a, b, c), Triangle::new(b, a, d)];

        let violations = find_delaunay_violations(&points, &triangles, DEFAULT_EPSILON);
        assert_eq!(violations, vec![0, 1]);
        assert_eq!(
            is_delaunay(&points, &triangles, DEFAULT_EPSILON),
            Err(DelaunayValidationError::DelaunayViolation {
                triangle_index: 0,
                point: d,
            })
        );
    }

    #[test]
    fn clockwise_triangles_are_judged_by_their_circumcircle() {
        let [a, b, c, _] = square();
        let cw = Triangle::new(a, c, b);
        let inside = Point::new(0.9, 0.1);
        assert!(is_delaunay(&[a, b, c, inside], &[cw], DEFAULT_EPSILON).is_err());
    }

    #[test]
    fn edge_sharing_counts_both_directions() {
        let [a, b, c, d] = square();
        let triangles = [Triangle::new(a, b, c), Triangle::new(c, a, d)];
        let usage = edge_usage(&triangles);
        assert_eq!(usage.len(), 5);
        assert_eq!(usage[&Edge::new(a, c)], 2);
        assert_eq!(usage[&Edge::new(a, b)], 1);
    }

    #[test]
    fn edge_sharing_detects_overuse() {
        let [a, b, c, d] = square();
        let e = Point::new(0.5, -1.0);
        let triangles = [
            Triangle::new(a, b, c),
            Triangle::new(a, b, d),
            Triangle::new(b, a, e),
        ];
        assert_eq!(
            validate_edge_sharing(&triangles),
            Err(DelaunayValidationError::EdgeSharing {
                edge: Edge::new(a, b),
                count: 3,
            })
        );
    }

    #[test]
    fn foreign_vertex_is_reported() {
        let [a, b, c, _] = square();
        let stray = Point::new(-40.0, -1.0);
        let triangles = [Triangle::new(a, b, c), Triangle::new(a, c, stray)];
        assert_eq!(
            validate_vertices(&[a, b, c], &triangles),
            Err(DelaunayValidationError::ForeignVertex {
                triangle_index: 1,
                point: stray,
            })
        );
    }
}
