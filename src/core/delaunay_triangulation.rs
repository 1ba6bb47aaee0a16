//! Delaunay triangulation layer over the Bowyer-Watson engine.
//!
//! [`DelaunayTriangulation`] owns the input points, the options used to build
//! it, and the resulting triangles and statistics. It is built once and then
//! queried; there is no incremental insertion after construction.

use serde::{Deserialize, Serialize};

use crate::core::algorithms::bowyer_watson::{
    BowyerWatson, BowyerWatsonOutput, TriangulationError, TriangulationOptions,
};
use crate::core::collections::FastHashSet;
use crate::core::edge::Edge;
use crate::core::operations::InsertionStatistics;
use crate::core::triangle::Triangle;
use crate::core::util::{
    DelaunayValidationError, find_delaunay_violations, is_delaunay, validate_edge_sharing,
    validate_vertices,
};
use crate::geometry::point::Point;

/// A planar Delaunay triangulation of a point set.
///
/// Triangles are stored in the order the engine produced them. Every triangle
/// has input points as vertices and strictly positive area.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::prelude::*;
///
/// let points = vec![
///     point!(0.0, 0.0),
///     point!(1.0, 0.0),
///     point!(1.0, 1.0),
///     point!(0.0, 1.0),
/// ];
///
/// let dt = DelaunayTriangulation::new(&points).unwrap();
/// assert_eq!(dt.number_of_points(), 4);
/// assert_eq!(dt.number_of_triangles(), 2);
/// assert!((dt.total_area() - 1.0).abs() < 1e-12);
/// assert!(dt.is_valid().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DelaunayTriangulation {
    points: Vec<Point>,
    options: TriangulationOptions,
    super_triangle: Triangle,
    triangles: Vec<Triangle>,
    statistics: InsertionStatistics,
}

impl DelaunayTriangulation {
    /// Triangulates `points` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InvalidInput`] for an empty input or a
    /// non-finite coordinate.
    pub fn new(points: &[Point]) -> Result<Self, TriangulationError> {
        Self::with_options(points, TriangulationOptions::default())
    }

    /// Triangulates `points` with the given options.
    ///
    /// # Errors
    ///
    /// Returns any [`TriangulationError`] raised by the engine: invalid input,
    /// an exceeded point cap, or a degenerate insertion under
    /// [`DegeneratePolicy::Fail`](crate::core::algorithms::bowyer_watson::DegeneratePolicy::Fail).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay2d::prelude::*;
    ///
    /// let options = TriangulationOptionsBuilder::default()
    ///     .predicate(PredicateMode::WindingNormalized)
    ///     .build()
    ///     .unwrap();
    ///
    /// let points = [point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0)];
    /// let dt = DelaunayTriangulation::with_options(&points, options).unwrap();
    /// assert_eq!(dt.options().predicate, PredicateMode::WindingNormalized);
    /// assert_eq!(dt.number_of_triangles(), 1);
    /// ```
    pub fn with_options(
        points: &[Point],
        options: TriangulationOptions,
    ) -> Result<Self, TriangulationError> {
        let BowyerWatsonOutput {
            triangles,
            super_triangle,
            statistics,
        } = BowyerWatson::new(points, options)?.run()?;

        if statistics.has_degenerate_insertions() {
            tracing::debug!(
                "Triangulation built with {} degenerate insertions",
                statistics.degenerate_count()
            );
        }

        Ok(Self {
            points: points.to_vec(),
            options,
            super_triangle,
            triangles,
            statistics,
        })
    }

    /// The input points, in input order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The final triangles.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of input points, duplicates included.
    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Number of final triangles.
    #[must_use]
    pub fn number_of_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// The options the triangulation was built with.
    #[must_use]
    pub const fn options(&self) -> &TriangulationOptions {
        &self.options
    }

    /// The super-triangle used during construction.
    #[must_use]
    pub const fn super_triangle(&self) -> Triangle {
        self.super_triangle
    }

    /// Statistics collected while building.
    #[must_use]
    pub const fn statistics(&self) -> &InsertionStatistics {
        &self.statistics
    }

    /// Unique undirected edges, in first-appearance order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay2d::prelude::*;
    ///
    /// let square = [point!(0.0, 0.0), point!(1.0, 0.0), point!(1.0, 1.0), point!(0.0, 1.0)];
    /// let dt = DelaunayTriangulation::new(&square).unwrap();
    /// // Four sides plus one diagonal.
    /// assert_eq!(dt.edges().len(), 5);
    /// ```
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen = FastHashSet::default();
        self.triangles
            .iter()
            .flat_map(Triangle::edges)
            .filter(|edge| seen.insert(*edge))
            .collect()
    }

    /// Sum of the triangle areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Consumes the triangulation and returns its triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Checks that every triangle vertex is an input point.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayValidationError::ForeignVertex`] otherwise.
    pub fn validate_vertices(&self) -> Result<(), DelaunayValidationError> {
        validate_vertices(&self.points, &self.triangles)
    }

    /// Checks the empty-circumcircle property against all input points, using
    /// the tolerance the triangulation was built with.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayValidationError::DelaunayViolation`] for the first
    /// violating triangle.
    pub fn validate_delaunay(&self) -> Result<(), DelaunayValidationError> {
        is_delaunay(&self.points, &self.triangles, self.options.epsilon)
    }

    /// Indices of all triangles violating the empty-circumcircle property.
    #[must_use]
    pub fn delaunay_violations(&self) -> Vec<usize> {
        find_delaunay_violations(&self.points, &self.triangles, self.options.epsilon)
    }

    /// Checks that every edge is used by one or two triangles.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayValidationError::EdgeSharing`] for an over-shared edge.
    pub fn validate_edge_sharing(&self) -> Result<(), DelaunayValidationError> {
        validate_edge_sharing(&self.triangles)
    }

    /// Runs the vertex, edge-sharing and Delaunay checks, returning the first
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`DelaunayValidationError`] encountered.
    pub fn is_valid(&self) -> Result<(), DelaunayValidationError> {
        self.validate_vertices()?;
        self.validate_edge_sharing()?;
        self.validate_delaunay()
    }
}

// =============================================================================
// TESTS
// =============================================================================
