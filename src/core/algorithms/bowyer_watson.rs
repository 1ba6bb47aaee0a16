//! Incremental Bowyer-Watson algorithm for planar Delaunay triangulation.
//!
//! # Algorithm Overview
//!
//! 1. **Bootstrap**: build a super-triangle far outside the bounding box of
//!    the input and seed the triangulation with it.
//! 2. **Incremental insertion**: for each input point, in input order:
//!    - collect every triangle whose circumcircle contains the point ("bad"
//!      triangles) and push their edges to a working list
//!    - remove the bad triangles, matching them slot for slot
//!    - keep the edges that occur exactly once in the working list: they bound
//!      the cavity
//!    - connect every cavity-boundary edge `(u, v)` to the point as `(u, v, p)`
//! 3. **Cleanup**: drop every triangle touching a super-triangle corner, then
//!    every triangle whose vertices are collinear.
//!
//! # Complexity
//!
//! Conflict detection scans all triangles for every point and the cavity
//! boundary is found by comparing every pair of edges in the working list, so
//! a build is quadratic in the number of points. This is intended for small to
//! medium inputs; hashing edges would make the boundary step linear without
//! changing the result.
//!
//! # Degenerate insertions
//!
//! A point whose coordinates are not strictly inside any circumcircle (for
//! example an exact duplicate of an earlier point) carves no cavity and
//! contributes no triangles. Such points are logged at `warn` level and listed
//! in [`InsertionStatistics::degenerate_insertions`]; with
//! [`DegeneratePolicy::Fail`] they abort the build instead.
//!
//! # References
//!
//! - **Bowyer, A.** "Computing Dirichlet tessellations." *The Computer Journal* 24.2 (1981): 162-166.
//!   DOI: [10.1093/comjnl/24.2.162](https://doi.org/10.1093/comjnl/24.2.162)
//! - **Watson, D.F.** "Computing the n-dimensional Delaunay tessellation with application to
//!   Voronoi polytopes." *The Computer Journal* 24.2 (1981): 167-172.
//!   DOI: [10.1093/comjnl/24.2.167](https://doi.org/10.1093/comjnl/24.2.167)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::edge::Edge;
use crate::core::operations::{InsertionInfo, InsertionResult, InsertionStatistics};
use crate::core::triangle::Triangle;
use crate::geometry::point::Point;
use crate::geometry::predicates::{DEFAULT_EPSILON, PredicateMode, incircle_determinant};
use crate::geometry::util::BoundingBox;

/// Offset of the super-triangle corners, in multiples of the larger
/// bounding-box extent.
pub const SUPER_TRIANGLE_SCALE: f64 = 20.0;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the triangulation engine.
///
/// All of them are detected before or during the build; a failed build never
/// returns a partial triangulation.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum TriangulationError {
    /// The input cannot be triangulated (empty, or a non-finite coordinate).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the problem.
        message: String,
    },
    /// A point matched no circumcircle and [`DegeneratePolicy::Fail`] is set.
    #[error("Degenerate insertion of point {index} {point}: no circumcircle contains it")]
    DegenerateInsertion {
        /// Position of the point in the input sequence.
        index: usize,
        /// The offending point.
        point: Point,
    },
    /// The input exceeds the configured point cap.
    #[error("Resource limit exceeded: {requested} points requested, limit is {limit}")]
    ResourceExhausted {
        /// Configured maximum number of points.
        limit: usize,
        /// Number of points supplied.
        requested: usize,
    },
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// What to do when an inserted point produces no triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Record the point in the statistics and keep going.
    #[default]
    Report,
    /// Abort with [`TriangulationError::DegenerateInsertion`].
    Fail,
}

/// Options controlling a triangulation build.
///
/// The defaults reproduce the classic algorithm: raw circumcircle test,
/// absolute tolerance `1e-9`, degenerate insertions reported but tolerated, no
/// point cap.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::bowyer_watson::{
///     DegeneratePolicy, TriangulationOptions, TriangulationOptionsBuilder,
/// };
/// use delaunay2d::geometry::predicates::PredicateMode;
///
/// let options = TriangulationOptionsBuilder::default()
///     .predicate(PredicateMode::WindingNormalized)
///     .degenerate_policy(DegeneratePolicy::Fail)
///     .max_points(10_000)
///     .build()
///     .unwrap();
///
/// assert_eq!(options.epsilon, TriangulationOptions::default().epsilon);
/// assert_eq!(options.max_points, Some(10_000));
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[builder(default)]
pub struct TriangulationOptions {
    /// Winding handling of the circumcircle test.
    pub predicate: PredicateMode,
    /// Absolute tolerance of the circumcircle test.
    pub epsilon: f64,
    /// Handling of points that produce no triangles.
    pub degenerate_policy: DegeneratePolicy,
    /// Maximum accepted number of input points.
    #[builder(setter(strip_option))]
    pub max_points: Option<usize>,
}

impl Default for TriangulationOptions {
    fn default() -> Self {
        Self {
            predicate: PredicateMode::Faithful,
            epsilon: DEFAULT_EPSILON,
            degenerate_policy: DegeneratePolicy::Report,
            max_points: None,
        }
    }
}

// =============================================================================
// SUPER-TRIANGLE AND CAVITY HELPERS
// =============================================================================

/// Builds a counter-clockwise triangle enclosing every point of `points`.
///
/// With `(mx, my)` the bounding-box centre and `d` the larger extent, the
/// corners are `(mx - 20d, my - d)`, `(mx + 20d, my - d)` and `(mx, my + 20d)`.
/// A zero extent (one point, or all points coincident) uses `d = 1`.
///
/// # Errors
///
/// Returns [`TriangulationError::InvalidInput`] if `points` is empty, or if
/// the coordinate range is so large that the corners or the circumcircle
/// determinant against them overflow `f64`.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::bowyer_watson::super_triangle;
/// use delaunay2d::point;
///
/// let st = super_triangle(&[point!(0.0, 0.0), point!(2.0, 1.0)]).unwrap();
/// assert_eq!(st.a, point!(-39.0, -1.5));
/// assert_eq!(st.b, point!(41.0, -1.5));
/// assert_eq!(st.c, point!(1.0, 40.5));
/// ```
pub fn super_triangle(points: &[Point]) -> Result<Triangle, TriangulationError> {
    let bbox = BoundingBox::from_points(points).ok_or_else(|| TriangulationError::InvalidInput {
        message: "cannot triangulate an empty point set".to_string(),
    })?;

    let delta_max = match bbox.delta_max() {
        d if d > 0.0 => d,
        _ => 1.0,
    };
    let mid = bbox.center();
    let reach = SUPER_TRIANGLE_SCALE * delta_max;

    let st = Triangle::new(
        Point::new(mid.x() - reach, mid.y() - delta_max),
        Point::new(mid.x() + reach, mid.y() - delta_max),
        Point::new(mid.x(), mid.y() + reach),
    );

    let corners_finite = st.vertices().iter().all(|corner| corner.validate().is_ok());
    if !corners_finite || !incircle_determinant(&st.a, &st.b, &st.c, &mid).is_finite() {
        return Err(TriangulationError::InvalidInput {
            message: format!("coordinate range {delta_max:e} too large for super-triangle"),
        });
    }

    Ok(st)
}

/// Returns the edges that occur exactly once in `polygon`, in list order.
///
/// Edges are compared with direction-independent equality. Every edge is
/// compared against every other, so the cost is quadratic in the list length.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::bowyer_watson::cavity_boundary;
/// use delaunay2d::core::triangle::Triangle;
/// use delaunay2d::point;
///
/// let (a, b, c, d) = (point!(0.0, 0.0), point!(1.0, 0.0), point!(1.0, 1.0), point!(0.0, 1.0));
/// let left = Triangle::new(a, b, c);
/// let right = Triangle::new(a, c, d);
///
/// let polygon: Vec<_> = left.edges().into_iter().chain(right.edges()).collect();
/// let boundary = cavity_boundary(&polygon);
///
/// // The shared diagonal a-c is interior to the cavity.
/// assert_eq!(boundary.len(), 4);
/// assert!(boundary.iter().all(|e| !(e.contains(&a) && e.contains(&c))));
/// ```
#[must_use]
pub fn cavity_boundary(polygon: &[Edge]) -> Vec<Edge> {
    polygon
        .iter()
        .enumerate()
        .filter(|&(i, edge)| {
            !polygon
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && edge == other)
        })
        .map(|(_, edge)| *edge)
        .collect()
}

// =============================================================================
// ENGINE
// =============================================================================

/// Result of a completed build.
#[derive(Debug, Clone, PartialEq)]
pub struct BowyerWatsonOutput {
    /// Final triangles, super-triangle and zero-area faces removed.
    pub triangles: Vec<Triangle>,
    /// The super-triangle used during the build.
    pub super_triangle: Triangle,
    /// Counters and diagnostics collected during the build.
    pub statistics: InsertionStatistics,
}

/// Incremental Bowyer-Watson engine over a borrowed point set.
///
/// The engine owns the triangle list for the duration of the build and hands
/// it back through [`BowyerWatson::run`].
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::bowyer_watson::{BowyerWatson, TriangulationOptions};
/// use delaunay2d::point;
///
/// let points = [point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0)];
/// let engine = BowyerWatson::new(&points, TriangulationOptions::default()).unwrap();
/// assert_eq!(engine.triangles().len(), 1); // just the super-triangle
///
/// let output = engine.run().unwrap();
/// assert_eq!(output.triangles.len(), 1);
/// assert_eq!(output.statistics.points_inserted, 3);
/// ```
#[derive(Debug)]
pub struct BowyerWatson<'a> {
    points: &'a [Point],
    options: TriangulationOptions,
    super_triangle: Triangle,
    triangles: Vec<Triangle>,
    statistics: InsertionStatistics,
    /// Reused between insertions.
    bad_triangles: Vec<Triangle>,
    /// Reused between insertions.
    polygon: Vec<Edge>,
}

impl<'a> BowyerWatson<'a> {
    /// Validates `points` and seeds the triangulation with the super-triangle.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidInput`] for an empty slice or a
    ///   non-finite coordinate.
    /// - [`TriangulationError::ResourceExhausted`] if `points` exceeds
    ///   `options.max_points`.
    pub fn new(points: &'a [Point], options: TriangulationOptions) -> Result<Self, TriangulationError> {
        if let Some(limit) = options.max_points.filter(|&limit| points.len() > limit) {
            return Err(TriangulationError::ResourceExhausted {
                limit,
                requested: points.len(),
            });
        }

        for (index, point) in points.iter().enumerate() {
            point
                .validate()
                .map_err(|source| TriangulationError::InvalidInput {
                    message: format!("point {index}: {source}"),
                })?;
        }

        let super_triangle = super_triangle(points)?;
        tracing::debug!(
            "Bowyer-Watson bootstrap: {} points, super-triangle {}",
            points.len(),
            super_triangle
        );

        Ok(Self {
            points,
            options,
            super_triangle,
            triangles: vec![super_triangle],
            statistics: InsertionStatistics::new(),
            bad_triangles: Vec::new(),
            polygon: Vec::new(),
        })
    }

    /// The current triangle list, super-triangle faces included.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The super-triangle seeding this build.
    #[must_use]
    pub const fn super_triangle(&self) -> Triangle {
        self.super_triangle
    }

    /// The options of this build.
    #[must_use]
    pub const fn options(&self) -> &TriangulationOptions {
        &self.options
    }

    /// Inserts every point in input order, prunes, and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::DegenerateInsertion`] for the first point
    /// producing no triangles when the policy is [`DegeneratePolicy::Fail`].
    pub fn run(mut self) -> Result<BowyerWatsonOutput, TriangulationError> {
        let points = self.points;
        for (index, &point) in points.iter().enumerate() {
            let info = self.insert_point(index, point)?;
            self.statistics.record(&info, point);
        }

        self.prune();

        Ok(BowyerWatsonOutput {
            triangles: self.triangles,
            super_triangle: self.super_triangle,
            statistics: self.statistics,
        })
    }

    /// One Bowyer-Watson step: find conflicts, carve the cavity, re-triangulate.
    pub(crate) fn insert_point(
        &mut self,
        index: usize,
        point: Point,
    ) -> Result<InsertionInfo, TriangulationError> {
        self.bad_triangles.clear();
        self.polygon.clear();

        let mode = self.options.predicate;
        let epsilon = self.options.epsilon;
        for triangle in &self.triangles {
            if triangle.circumcircle_contains(&point, mode, epsilon) {
                self.bad_triangles.push(*triangle);
                self.polygon.extend(triangle.edges());
            }
        }

        if self.bad_triangles.is_empty() {
            tracing::warn!(
                "Point {index} {point} is inside no circumcircle; it contributes no triangles"
            );
            if self.options.degenerate_policy == DegeneratePolicy::Fail {
                return Err(TriangulationError::DegenerateInsertion { index, point });
            }
            return Ok(InsertionInfo {
                index,
                triangles_removed: 0,
                triangles_created: 0,
                result: InsertionResult::SkippedDegeneracy,
            });
        }

        // Slot-for-slot match against the flagged triangles.
        let before = self.triangles.len();
        let bad_triangles = &self.bad_triangles;
        self.triangles.retain(|t| !bad_triangles.contains(t));
        let triangles_removed = before - self.triangles.len();

        let boundary = cavity_boundary(&self.polygon);
        self.triangles.extend(
            boundary
                .iter()
                .map(|edge| Triangle::new(edge.p1(), edge.p2(), point)),
        );

        tracing::debug!(
            "Inserted point {index} {point}: {} bad triangles, {} boundary edges, {} triangles total",
            self.bad_triangles.len(),
            boundary.len(),
            self.triangles.len()
        );

        Ok(InsertionInfo {
            index,
            triangles_removed,
            triangles_created: boundary.len(),
            result: InsertionResult::Inserted,
        })
    }

    /// Removes super-triangle faces, then zero-area faces.
    fn prune(&mut self) {
        let super_triangle = self.super_triangle;

        let before = self.triangles.len();
        self.triangles
            .retain(|t| !t.shares_vertex_with(&super_triangle));
        self.statistics.super_triangles_pruned = before - self.triangles.len();

        let before = self.triangles.len();
        self.triangles.retain(|t| !t.is_degenerate());
        self.statistics.zero_area_pruned = before - self.triangles.len();

        if self.statistics.zero_area_pruned > 0 {
            tracing::warn!(
                "Pruned {} zero-area triangles with collinear vertices",
                self.statistics.zero_area_pruned
            );
        }
        tracing::debug!(
            "Bowyer-Watson finished: {} triangles kept, {} super-triangle faces pruned, {} degenerate insertions",
            self.triangles.len(),
            self.statistics.super_triangles_pruned,
            self.statistics.degenerate_count()
        );
    }
}

/// Triangulates `points` in one call.
///
/// # Errors
///
/// See [`BowyerWatson::new`] and [`BowyerWatson::run`].
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::bowyer_watson::{triangulate, TriangulationOptions};
/// use delaunay2d::point;
///
/// let square = [point!(0.0, 0.0), point!(1.0, 0.0), point!(1.0, 1.0), point!(0.0, 1.0)];
/// let output = triangulate(&square, TriangulationOptions::default()).unwrap();
/// assert_eq!(output.triangles.len(), 2);
/// ```
pub fn triangulate(
    points: &[Point],
    options: TriangulationOptions,
) -> Result<BowyerWatsonOutput, TriangulationError> {
    BowyerWatson::new(points, options)?.run()
}

// =============================================================================
// TESTS
// =============================================================================
