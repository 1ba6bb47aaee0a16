//! Planar points with exact-value identity.
//!
//! # Floating-Point Equality Semantics
//!
//! Two points are equal when their coordinates are *exactly* equal. No epsilon
//! is applied: the triangulation never perturbs an input point, so the same
//! point flowing through the algorithm always compares equal to itself, while
//! near-duplicate distinct inputs are intentionally kept apart.
//!
//! Comparison and hashing go through [`OrderedFloat`], which satisfies the
//! `Eq`, `Ord` and `Hash` contracts by being slightly stricter than IEEE 754:
//! - `0.0` and `-0.0` are equal and hash identically
//! - `NaN` is equal to itself and sorts after every number
//!
//! The triangulation engine rejects non-finite coordinates at entry, so the
//! `NaN` rules only matter for points built directly by callers.

#![forbid(unsafe_code)]

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised when validating point coordinates.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PointValidationError {
    /// A coordinate is `NaN` or infinite.
    #[error("Invalid coordinate at index {coordinate_index}: {coordinate_value} (must be finite)")]
    InvalidCoordinate {
        /// Index of the offending coordinate (0 = x, 1 = y).
        coordinate_index: usize,
        /// Debug rendering of the offending value.
        coordinate_value: String,
    },
}

// =============================================================================
// POINT STRUCT DEFINITION
// =============================================================================

/// A point in the plane.
///
/// Points are immutable once created; the coordinates are private and only
/// exposed through accessors.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::point::Point;
///
/// let p = Point::new(1.0, 2.0);
/// assert_eq!(p.coords(), [1.0, 2.0]);
/// assert_eq!(p, Point::new(1.0, 2.0));
/// assert!(Point::new(0.0, 5.0) < Point::new(1.0, -5.0));
/// ```
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    x: f64,
    y: f64,
}

/// Creates a [`Point`] from two coordinate expressions.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::point;
///
/// let p = point!(0.5, -1.0);
/// assert_eq!(p.x(), 0.5);
/// assert_eq!(p.y(), -1.0);
/// ```
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::geometry::point::Point::new($x, $y)
    };
}

// =============================================================================
// PUBLIC API
// =============================================================================

impl Point {
    /// Creates a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The coordinates as an `[x, y]` array.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Returns `self - origin` as a new point, i.e. the coordinates of `self`
    /// in a frame centred on `origin`.
    #[inline]
    #[must_use]
    pub fn relative_to(&self, origin: &Self) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }

    /// Squared Euclidean norm `x² + y²`.
    #[inline]
    #[must_use]
    pub fn squared_norm(&self) -> f64 {
        self.x.mul_add(self.x, self.y * self.y)
    }

    /// Checks that both coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns [`PointValidationError::InvalidCoordinate`] for the first
    /// coordinate that is `NaN` or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay2d::geometry::point::Point;
    ///
    /// assert!(Point::new(1.0, 2.0).validate().is_ok());
    /// assert!(Point::new(f64::NAN, 2.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PointValidationError> {
        for (index, coord) in self.coords().into_iter().enumerate() {
            if !coord.is_finite() {
                return Err(PointValidationError::InvalidCoordinate {
                    coordinate_index: index,
                    coordinate_value: format!("{coord:?}"),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// STANDARD TRAIT IMPLEMENTATIONS
// =============================================================================

impl Point {
    /// Coordinates wrapped for total ordering and hashing.
    #[inline]
    const fn ordered(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.x), OrderedFloat(self.y))
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for Point {}

impl Hash for Point {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

// Lexicographic: x first, then y.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordered().cmp(&other.ordered())
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(point: Point) -> Self {
        point.coords()
    }
}

// =============================================================================
// TESTS
// =============================================================================
