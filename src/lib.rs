//! # delaunay2d
//!
//! This is a library for computing the Delaunay triangulation of a set of points in the plane
//! with the incremental [Bowyer-Watson](https://en.wikipedia.org/wiki/Bowyer%E2%80%93Watson_algorithm)
//! algorithm, and for exporting the result as a legacy ASCII [VTK](https://vtk.org) mesh.
//!
//! # Features
//!
//! - Planar Delaunay triangulation of `f64` points
//! - Insertion statistics that surface degenerate input instead of hiding it
//! - Structural and empty-circumcircle validation
//! - VTK `UNSTRUCTURED_GRID` export
//! - Serialization/Deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use delaunay2d::prelude::*;
//!
//! let points = vec![
//!     point!(0.0, 0.0),
//!     point!(1.0, 0.0),
//!     point!(1.0, 1.0),
//!     point!(0.0, 1.0),
//!     point!(0.4, 0.6),
//! ];
//!
//! let dt = DelaunayTriangulation::new(&points).unwrap();
//!
//! assert_eq!(dt.number_of_points(), 5);
//! assert_eq!(dt.number_of_triangles(), 4);
//! assert!(dt.is_valid().is_ok());
//!
//! // Every triangle references input points only.
//! for triangle in dt.triangles() {
//!     assert!(triangle.vertices().iter().all(|v| points.contains(v)));
//! }
//! ```
//!
//! # Algorithm
//!
//! Construction follows [`core::algorithms::bowyer_watson`]:
//!
//! 1. A super-triangle enclosing all input is created.
//! 2. Points are inserted in input order. Each insertion removes the triangles
//!    whose circumcircle contains the point and connects the point to the
//!    boundary of the resulting cavity.
//! 3. Triangles touching the super-triangle, and triangles with collinear
//!    vertices, are discarded.
//!
//! The circumcircle test uses an absolute tolerance (`1e-9` by default, see
//! [`geometry::predicates::DEFAULT_EPSILON`]): points on or within the
//! tolerance of a circumcircle are treated as outside.
//!
//! # Triangulation Invariants
//!
//! | Invariant | Helper method |
//! |---|---|
//! | Vertices are input points | [`DelaunayTriangulation::validate_vertices`](core::delaunay_triangulation::DelaunayTriangulation::validate_vertices) |
//! | Each edge used by 1 or 2 triangles | [`DelaunayTriangulation::validate_edge_sharing`](core::delaunay_triangulation::DelaunayTriangulation::validate_edge_sharing) |
//! | Empty circumcircle | [`DelaunayTriangulation::validate_delaunay`](core::delaunay_triangulation::DelaunayTriangulation::validate_delaunay) |
//!
//! [`DelaunayTriangulation::is_valid`](core::delaunay_triangulation::DelaunayTriangulation::is_valid)
//! runs all three and returns the first failure.
//!
//! # Degenerate Input
//!
//! Exact duplicate points, and points that fall on (or within the tolerance
//! of) every circumcircle they touch, produce no triangles. They are logged
//! through [`tracing`] and recorded in
//! [`InsertionStatistics::degenerate_insertions`](core::operations::InsertionStatistics::degenerate_insertions).
//! Set [`DegeneratePolicy::Fail`](core::algorithms::bowyer_watson::DegeneratePolicy::Fail)
//! to turn them into errors:
//!
//! ```rust
//! use delaunay2d::prelude::*;
//!
//! let points = [point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0), point!(0.0, 0.0)];
//!
//! let dt = DelaunayTriangulation::new(&points).unwrap();
//! assert_eq!(dt.statistics().degenerate_count(), 1);
//!
//! let options = TriangulationOptionsBuilder::default()
//!     .degenerate_policy(DegeneratePolicy::Fail)
//!     .build()
//!     .unwrap();
//! let err = DelaunayTriangulation::with_options(&points, options).unwrap_err();
//! assert!(matches!(err, TriangulationError::DegenerateInsertion { index: 3, .. }));
//! ```
//!
//! # VTK Export
//!
//! ```rust
//! use delaunay2d::prelude::*;
//!
//! let points = [point!(0.0, 0.0), point!(1.0, 0.0), point!(0.0, 1.0)];
//! let dt = DelaunayTriangulation::new(&points).unwrap();
//!
//! let mut out = Vec::new();
//! VtkMesh::from(&dt).write_vtk(&mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("POINTS 3 float"));
//! assert!(text.ends_with("CELL_TYPES 1\n5\n"));
//! ```

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the triangulation engine, its data types, and validation.
///
/// It includes the [`DelaunayTriangulation`](core::delaunay_triangulation::DelaunayTriangulation)
/// façade as well as the `Triangle` and `Edge` building blocks.
pub mod core {
    /// Triangulation algorithms
    pub mod algorithms {
        /// Incremental Bowyer-Watson construction
        pub mod bowyer_watson;
    }
    /// Hash collection aliases
    pub mod collections;
    /// Delaunay triangulation layer over the Bowyer-Watson engine
    pub mod delaunay_triangulation;
    pub mod edge;
    pub mod operations;
    pub mod triangle;
    pub mod util;
    // Re-export the `core` modules.
    pub use delaunay_triangulation::*;
    pub use edge::*;
    pub use operations::*;
    pub use triangle::*;
    pub use util::*;
}

/// Contains geometric types including the `Point` struct and geometry predicates.
pub mod geometry {
    pub mod point;
    pub mod predicates;
    /// Geometric utility functions
    pub mod util;
    pub use point::*;
    pub use predicates::*;
    pub use util::*;
}

/// Mesh output formats.
pub mod io {
    /// Legacy ASCII VTK writer
    pub mod vtk;
    pub use vtk::*;
}

/// A prelude module that re-exports commonly used types and macros.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        algorithms::bowyer_watson::*, delaunay_triangulation::*, edge::*, operations::*,
        triangle::*, util::*,
    };

    pub use crate::core::collections::{
        FastHashMap, FastHashSet, fast_hash_map_with_capacity, fast_hash_set_with_capacity,
    };

    // Re-export from geometry
    pub use crate::geometry::{point::*, predicates::*, util::*};

    // Re-export from io
    pub use crate::io::vtk::{ExportError, VtkMesh};

    // Convenience macros
    pub use crate::point;
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{
        core::{
            algorithms::bowyer_watson::TriangulationOptions,
            delaunay_triangulation::DelaunayTriangulation, edge::Edge,
            operations::InsertionStatistics, triangle::Triangle,
        },
        geometry::point::Point,
        io::vtk::{ExportError, VtkMesh},
        is_normal,
    };

    // =============================================================================
    // TYPE SAFETY TESTS
    // =============================================================================

    #[test]
    fn normal_types() {
        assert!(is_normal::<Point>());
        assert!(is_normal::<Edge>());
        assert!(is_normal::<Triangle>());
        assert!(is_normal::<TriangulationOptions>());
        assert!(is_normal::<InsertionStatistics>());
        assert!(is_normal::<DelaunayTriangulation>());
        assert!(is_normal::<VtkMesh>());
        assert!(is_normal::<ExportError>());
    }

    #[test]
    fn test_prelude_collections_exports() {
        use crate::prelude::*;

        let mut map: FastHashMap<Point, usize> = FastHashMap::default();
        map.insert(point!(1.0, 2.0), 0);
        assert_eq!(map.get(&point!(1.0, 2.0)), Some(&0));

        let mut set: FastHashSet<Edge> = FastHashSet::default();
        set.insert(Edge::new(point!(0.0, 0.0), point!(1.0, 0.0)));
        assert!(set.contains(&Edge::new(point!(1.0, 0.0), point!(0.0, 0.0))));

        let map_with_cap = fast_hash_map_with_capacity::<u64, usize>(100);
        assert!(map_with_cap.capacity() >= 100);

        let set_with_cap = fast_hash_set_with_capacity::<u64>(50);
        assert!(set_with_cap.capacity() >= 50);
    }

    #[test]
    fn test_prelude_triangulation_exports() {
        use crate::prelude::*;

        let points = vec![point!(0.0, 0.0), point!(2.0, 0.0), point!(1.0, 2.0)];
        let output = triangulate(&points, TriangulationOptions::default()).unwrap();
        assert_eq!(output.triangles.len(), 1);
        assert_eq!(output.triangles[0].orientation(), Orientation::POSITIVE);

        let bbox = BoundingBox::from_points(&points).unwrap();
        assert!(points.iter().all(|p| bbox.contains(p)));
        assert!(validate_edge_sharing(&output.triangles).is_ok());
    }
}
