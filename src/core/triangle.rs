//! Triangles stored as three points in slot order.
//!
//! # Equality
//!
//! `Triangle` equality is **positional**: `(a, b, c) == (a', b', c')` only when
//! `a == a'`, `b == b'` and `c == c'`. Rotations and reflections of the same
//! vertex set are different values. The Bowyer-Watson engine relies on this
//! when it removes the triangles it flagged as bad: a triangle is removed only
//! if it matches a flagged triangle slot for slot.
//!
//! Use [`Triangle::same_vertices`] for a permutation-invariant comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::edge::Edge;
use crate::geometry::point::Point;
use crate::geometry::predicates::{Orientation, PredicateMode, orient2d, orientation};

/// A triangle with vertices `a`, `b`, `c`.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangle::Triangle;
/// use delaunay2d::point;
///
/// let t = Triangle::new(point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0));
/// let rotated = Triangle::new(point!(1.0, 0.0), point!(0.0, 1.0), point!(0.0, 0.0));
///
/// assert_ne!(t, rotated);
/// assert!(t.same_vertices(&rotated));
/// assert_eq!(t.area(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub a: Point,
    /// Second vertex.
    pub b: Point,
    /// Third vertex.
    pub c: Point,
}

impl Triangle {
    /// Creates a triangle from its vertices in slot order.
    #[inline]
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// The vertices as `[a, b, c]`.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The edges `(a, b)`, `(b, c)`, `(c, a)`.
    #[inline]
    #[must_use]
    pub const fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Returns `true` if `point` is one of the vertices.
    #[inline]
    #[must_use]
    pub fn contains_vertex(&self, point: &Point) -> bool {
        self.a == *point || self.b == *point || self.c == *point
    }

    /// Returns `true` if the two triangles have at least one vertex in common.
    #[must_use]
    pub fn shares_vertex_with(&self, other: &Self) -> bool {
        other.vertices().iter().any(|p| self.contains_vertex(p))
    }

    /// Permutation-invariant vertex-set comparison.
    #[must_use]
    pub fn same_vertices(&self, other: &Self) -> bool {
        let mut lhs = self.vertices();
        let mut rhs = other.vertices();
        lhs.sort_unstable();
        rhs.sort_unstable();
        lhs == rhs
    }

    /// Signed area; positive for counter-clockwise winding.
    #[inline]
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        0.5 * orient2d(&self.a, &self.b, &self.c)
    }

    /// Unsigned area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding of the triangle.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        orientation(&self.a, &self.b, &self.c)
    }

    /// Returns `true` if the three vertices are collinear.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.orientation() == Orientation::DEGENERATE
    }

    /// Returns `true` if `point` is strictly inside the circumcircle.
    #[inline]
    #[must_use]
    pub fn circumcircle_contains(&self, point: &Point, mode: PredicateMode, epsilon: f64) -> bool {
        mode.in_circumcircle(&self.a, &self.b, &self.c, point, epsilon)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}
