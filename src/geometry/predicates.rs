//! Geometric predicates for planar triangles.
//!
//! This module contains the orientation test and the circumcircle (in-circle)
//! test used by the Bowyer-Watson engine.
//!
//! # Orientation and the in-circle sign
//!
//! The in-circle determinant is positive for a point strictly inside the
//! circumcircle of a **counter-clockwise** triangle. For a clockwise triangle
//! the sign flips. The engine does not canonicalize triangle winding, so two
//! variants are provided and selected through [`PredicateMode`]:
//!
//! - [`PredicateMode::Faithful`] applies the raw `det > ε` test.
//! - [`PredicateMode::WindingNormalized`] multiplies the determinant by the
//!   triangle's orientation sign first, so clockwise triangles are classified
//!   correctly as well.
//!
//! Triangles produced by Bowyer-Watson from a counter-clockwise super-triangle
//! stay counter-clockwise, so both variants agree on well-behaved input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::point::Point;

/// Absolute tolerance used by the in-circle test.
///
/// A point is reported inside only when the determinant exceeds this value.
/// The tolerance is not scaled with the input magnitude.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Represents the position of a point relative to a circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCircle {
    /// The point is outside the circumcircle
    OUTSIDE,
    /// The point is on the circumcircle (within the tolerance)
    BOUNDARY,
    /// The point is strictly inside the circumcircle
    INSIDE,
}

impl fmt::Display for InCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Represents the orientation of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise winding (determinant < 0)
    NEGATIVE,
    /// Collinear vertices (determinant == 0)
    DEGENERATE,
    /// Counter-clockwise winding (determinant > 0)
    POSITIVE,
}

impl Orientation {
    /// The sign of the orientation as a float (`-1`, `0` or `1`).
    #[must_use]
    pub const fn signum(self) -> f64 {
        match self {
            Self::NEGATIVE => -1.0,
            Self::DEGENERATE => 0.0,
            Self::POSITIVE => 1.0,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Selects how the circumcircle test treats triangle winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PredicateMode {
    /// Raw determinant test; assumes counter-clockwise triangles.
    #[default]
    Faithful,
    /// Determinant sign corrected by the triangle's orientation.
    WindingNormalized,
}

impl PredicateMode {
    /// Returns `true` if `p` lies strictly inside the circumcircle of
    /// `(a, b, c)` under this mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay2d::geometry::point::Point;
    /// use delaunay2d::geometry::predicates::{PredicateMode, DEFAULT_EPSILON};
    ///
    /// let (a, b, c) = (Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0));
    /// let p = Point::new(0.4, 0.4);
    ///
    /// // Counter-clockwise: both modes agree.
    /// assert!(PredicateMode::Faithful.in_circumcircle(&a, &b, &c, &p, DEFAULT_EPSILON));
    /// assert!(PredicateMode::WindingNormalized.in_circumcircle(&a, &b, &c, &p, DEFAULT_EPSILON));
    ///
    /// // Clockwise: only the normalized mode still reports "inside".
    /// assert!(!PredicateMode::Faithful.in_circumcircle(&a, &c, &b, &p, DEFAULT_EPSILON));
    /// assert!(PredicateMode::WindingNormalized.in_circumcircle(&a, &c, &b, &p, DEFAULT_EPSILON));
    /// ```
    #[inline]
    #[must_use]
    pub fn in_circumcircle(
        self,
        a: &Point,
        b: &Point,
        c: &Point,
        p: &Point,
        epsilon: f64,
    ) -> bool {
        match self {
            Self::Faithful => in_circumcircle(a, b, c, p, epsilon),
            Self::WindingNormalized => in_circumcircle_normalized(a, b, c, p, epsilon),
        }
    }
}

/// Twice the signed area of `(a, b, c)`: `(b - a) × (c - a)`.
///
/// Positive for counter-clockwise, negative for clockwise, zero for collinear.
#[inline]
#[must_use]
pub fn orient2d(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x() - a.x()).mul_add(c.y() - a.y(), -((c.x() - a.x()) * (b.y() - a.y())))
}

/// Orientation of the triangle `(a, b, c)`.
///
/// Only an exactly-zero determinant is [`Orientation::DEGENERATE`].
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::predicates::{orientation, Orientation};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(0.0, 1.0);
/// assert_eq!(orientation(&a, &b, &c), Orientation::POSITIVE);
/// assert_eq!(orientation(&a, &c, &b), Orientation::NEGATIVE);
/// assert_eq!(orientation(&a, &b, &Point::new(2.0, 0.0)), Orientation::DEGENERATE);
/// ```
#[inline]
#[must_use]
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Orientation {
    let det = orient2d(a, b, c);
    if det > 0.0 {
        Orientation::POSITIVE
    } else if det < 0.0 {
        Orientation::NEGATIVE
    } else {
        Orientation::DEGENERATE
    }
}

/// The in-circle determinant of `p` against the triangle `(a, b, c)`.
///
/// With `A`, `B`, `C` the vertices translated by `-p`:
///
/// ```text
/// det = |A|²(B×C) − |B|²(A×C) + |C|²(A×B)
/// ```
///
/// The result is positive when `p` is inside the circumcircle of a
/// counter-clockwise triangle, negative when outside, and zero when the four
/// points are cocircular.
#[must_use]
pub fn incircle_determinant(a: &Point, b: &Point, c: &Point, p: &Point) -> f64 {
    let a = a.relative_to(p);
    let b = b.relative_to(p);
    let c = c.relative_to(p);

    let b_cross_c = b.x() * c.y() - c.x() * b.y();
    let a_cross_c = a.x() * c.y() - c.x() * a.y();
    let a_cross_b = a.x() * b.y() - b.x() * a.y();

    a.squared_norm() * b_cross_c - b.squared_norm() * a_cross_c + c.squared_norm() * a_cross_b
}

/// Raw circumcircle test: `incircle_determinant(a, b, c, p) > epsilon`.
///
/// The winding of `(a, b, c)` is not inspected; for a clockwise triangle the
/// answer is inverted.
#[inline]
#[must_use]
pub fn in_circumcircle(a: &Point, b: &Point, c: &Point, p: &Point, epsilon: f64) -> bool {
    incircle_determinant(a, b, c, p) > epsilon
}

/// Circumcircle test with the determinant sign corrected by the winding of
/// `(a, b, c)`. Degenerate triangles fall back to the raw determinant.
#[inline]
#[must_use]
pub fn in_circumcircle_normalized(
    a: &Point,
    b: &Point,
    c: &Point,
    p: &Point,
    epsilon: f64,
) -> bool {
    winding_sign(a, b, c) * incircle_determinant(a, b, c, p) > epsilon
}

/// Orientation sign of `(a, b, c)`, with collinear triangles counted as
/// positive so the raw determinant is kept.
#[inline]
fn winding_sign(a: &Point, b: &Point, c: &Point) -> f64 {
    match orientation(a, b, c) {
        Orientation::DEGENERATE => 1.0,
        winding => winding.signum(),
    }
}

/// Three-way classification of `p` against the circumcircle of `(a, b, c)`,
/// independent of winding.
///
/// Returns [`InCircle::BOUNDARY`] when the orientation-corrected determinant
/// lies within `[-epsilon, epsilon]`, and for the vertices themselves.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::predicates::{incircle, InCircle, DEFAULT_EPSILON};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(1.0, 1.0);
/// assert_eq!(incircle(&a, &b, &c, &Point::new(0.0, 1.0), DEFAULT_EPSILON), InCircle::BOUNDARY);
/// assert_eq!(incircle(&a, &b, &c, &Point::new(0.5, 0.5), DEFAULT_EPSILON), InCircle::INSIDE);
/// assert_eq!(incircle(&a, &b, &c, &Point::new(3.0, 3.0), DEFAULT_EPSILON), InCircle::OUTSIDE);
/// ```
#[must_use]
pub fn incircle(a: &Point, b: &Point, c: &Point, p: &Point, epsilon: f64) -> InCircle {
    let det = winding_sign(a, b, c) * incircle_determinant(a, b, c, p);
    if det > epsilon {
        InCircle::INSIDE
    } else if det < -epsilon {
        InCircle::OUTSIDE
    } else {
        InCircle::BOUNDARY
    }
}

// =============================================================================
// TESTS
// =============================================================================
