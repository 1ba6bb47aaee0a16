//! Outcome classification and telemetry for point insertion.
//!
//! Nothing here drives the algorithm. These types describe what happened
//! during a Bowyer-Watson build so callers can observe silent degenerate
//! cases instead of losing them.

use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;

/// Result of inserting a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InsertionResult {
    /// The point carved a cavity and was connected to its boundary.
    #[default]
    Inserted,
    /// No circumcircle contained the point, so it produced no triangles.
    SkippedDegeneracy,
}

/// Per-insertion record returned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionInfo {
    /// Position of the point in the input sequence.
    pub index: usize,
    /// Number of triangles whose circumcircle contained the point.
    pub triangles_removed: usize,
    /// Number of cavity-boundary edges, which equals the number of new triangles.
    pub triangles_created: usize,
    /// Outcome of the insertion.
    pub result: InsertionResult,
}

impl InsertionInfo {
    /// Returns `true` if the insertion produced at least one triangle.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.result, InsertionResult::Inserted)
    }
}

/// A point that matched no triangle's circumcircle during insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegenerateInsertion {
    /// Position of the point in the input sequence.
    pub index: usize,
    /// The point itself.
    pub point: Point,
}

/// Aggregate statistics for one triangulation build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionStatistics {
    /// Number of input points processed.
    pub points_inserted: usize,
    /// Triangles created during cavity re-triangulation.
    pub triangles_created: usize,
    /// Triangles removed because their circumcircle contained a new point.
    pub triangles_removed: usize,
    /// Points that produced no triangles, in input order.
    pub degenerate_insertions: Vec<DegenerateInsertion>,
    /// Triangles discarded at the end because they touch a super-triangle corner.
    pub super_triangles_pruned: usize,
    /// Triangles discarded at the end because their vertices are collinear.
    pub zero_area_pruned: usize,
}

impl InsertionStatistics {
    /// Creates empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one insertion into the totals.
    pub fn record(&mut self, info: &InsertionInfo, point: Point) {
        self.points_inserted += 1;
        self.triangles_created += info.triangles_created;
        self.triangles_removed += info.triangles_removed;
        if info.result == InsertionResult::SkippedDegeneracy {
            self.degenerate_insertions.push(DegenerateInsertion {
                index: info.index,
                point,
            });
        }
    }

    /// Number of degenerate insertions.
    #[must_use]
    pub fn degenerate_count(&self) -> usize {
        self.degenerate_insertions.len()
    }

    /// Returns `true` if any point produced no triangles.
    #[must_use]
    pub fn has_degenerate_insertions(&self) -> bool {
        !self.degenerate_insertions.is_empty()
    }
}
