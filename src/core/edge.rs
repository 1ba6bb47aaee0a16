//! Undirected edges between two points.
//!
//! An [`Edge`] keeps the endpoints in the order they were given, which is the
//! order used when the cavity is re-triangulated. Equality, hashing and
//! ordering are all direction-independent: `(p, q)` and `(q, p)` are the same
//! edge and can be used interchangeably as map keys.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geometry::point::Point;

/// An undirected edge.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::edge::Edge;
/// use delaunay2d::point;
///
/// let e1 = Edge::new(point!(0.0, 0.0), point!(1.0, 0.0));
/// let e2 = Edge::new(point!(1.0, 0.0), point!(0.0, 0.0));
/// assert_eq!(e1, e2);
/// assert_eq!(e1.endpoints(), (point!(0.0, 0.0), point!(1.0, 0.0)));
/// assert_eq!(e2.endpoints(), (point!(1.0, 0.0), point!(0.0, 0.0)));
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Edge {
    p1: Point,
    p2: Point,
}

impl Edge {
    /// Creates an edge from `p1` to `p2`.
    #[inline]
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// The first endpoint, as given at construction.
    #[inline]
    #[must_use]
    pub const fn p1(&self) -> Point {
        self.p1
    }

    /// The second endpoint, as given at construction.
    #[inline]
    #[must_use]
    pub const fn p2(&self) -> Point {
        self.p2
    }

    /// Both endpoints in construction order.
    #[inline]
    #[must_use]
    pub const fn endpoints(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    /// Endpoints sorted so that the first is the smaller point.
    #[inline]
    #[must_use]
    pub fn canonical(&self) -> (Point, Point) {
        if self.p1 <= self.p2 {
            (self.p1, self.p2)
        } else {
            (self.p2, self.p1)
        }
    }

    /// Returns `true` if `point` is one of the endpoints.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.p1 == *point || self.p2 == *point
    }

    /// Euclidean length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p2.x() - self.p1.x()).hypot(self.p2.y() - self.p1.y())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.p1, self.p2)
    }
}
