//! Legacy ASCII VTK export for triangle meshes.
//!
//! Format:
//!
//! ```text
//! # vtk DataFile Version 3.0
//! <title>
//! ASCII
//! DATASET UNSTRUCTURED_GRID
//! POINTS <n> float
//! x y 0.0
//! ...
//! CELLS <t> <4t>
//! 3 i j k        (zero-based indices into POINTS)
//! ...
//! CELL_TYPES <t>
//! 5
//! ...
//! ```
//!
//! Coordinates are written with Rust's shortest round-trip `f64` formatting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::collections::{Entry, FastHashMap, fast_hash_map_with_capacity};
use crate::core::delaunay_triangulation::DelaunayTriangulation;
use crate::core::triangle::Triangle;
use crate::geometry::point::Point;

/// VTK cell type id of a linear triangle.
pub const VTK_TRIANGLE: u8 = 5;

/// Title written when none is set.
pub const DEFAULT_TITLE: &str = "Delaunay Triangulation";

/// Errors raised while exporting a mesh.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The destination could not be created or written.
    #[error("Failed to write VTK mesh{}: {source}", display_path(.path))]
    Io {
        /// Destination file, when exporting to a path.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" to {}", p.display()))
        .unwrap_or_default()
}

impl From<io::Error> for ExportError {
    fn from(source: io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

/// A triangle mesh with a deduplicated, stable-indexed point table.
///
/// Points are numbered in first-appearance order: triangles in list order,
/// vertices in slot order `a`, `b`, `c`. Identical points share one index.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangle::Triangle;
/// use delaunay2d::io::vtk::VtkMesh;
/// use delaunay2d::point;
///
/// let (a, b, c, d) = (point!(0.0, 0.0), point!(1.0, 0.0), point!(1.0, 1.0), point!(0.0, 1.0));
/// let mesh = VtkMesh::from_triangles(&[Triangle::new(a, b, c), Triangle::new(a, c, d)]);
///
/// assert_eq!(mesh.points(), &[a, b, c, d]);
/// assert_eq!(mesh.cells(), &[[0, 1, 2], [0, 2, 3]]);
///
/// let mut out = Vec::new();
/// mesh.write_vtk(&mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("# vtk DataFile Version 3.0\n"));
/// assert!(text.contains("CELLS 2 8\n3 0 1 2\n3 0 2 3\n"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VtkMesh {
    title: String,
    points: Vec<Point>,
    cells: Vec<[usize; 3]>,
}

impl VtkMesh {
    /// Builds the point table and cell list of `triangles`.
    #[must_use]
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let mut index: FastHashMap<Point, usize> = fast_hash_map_with_capacity(triangles.len() + 2);
        let mut points = Vec::new();

        let cells = triangles
            .iter()
            .map(|triangle| {
                triangle.vertices().map(|p| match index.entry(p) {
                    Entry::Occupied(slot) => *slot.get(),
                    Entry::Vacant(slot) => {
                        points.push(p);
                        *slot.insert(points.len() - 1)
                    }
                })
            })
            .collect();

        Self {
            title: DEFAULT_TITLE.to_string(),
            points,
            cells,
        }
    }

    /// Replaces the title line. Line breaks are replaced by spaces to keep
    /// the header on one line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Sets the title line in place.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into().replace(['\r', '\n'], " ");
    }

    /// The title line.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The deduplicated point table.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Cells as index triples into [`VtkMesh::points`].
    #[must_use]
    pub fn cells(&self) -> &[[usize; 3]] {
        &self.cells
    }

    /// Writes the mesh to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if writing fails.
    pub fn write_vtk<W: Write>(&self, out: &mut W) -> Result<(), ExportError> {
        writeln!(out, "# vtk DataFile Version 3.0")?;
        writeln!(out, "{}", self.title)?;
        writeln!(out, "ASCII")?;
        writeln!(out, "DATASET UNSTRUCTURED_GRID")?;

        writeln!(out, "POINTS {} float", self.points.len())?;
        for p in &self.points {
            writeln!(out, "{} {} 0.0", p.x(), p.y())?;
        }

        writeln!(out, "CELLS {} {}", self.cells.len(), self.cells.len() * 4)?;
        for [i, j, k] in &self.cells {
            writeln!(out, "3 {i} {j} {k}")?;
        }

        writeln!(out, "CELL_TYPES {}", self.cells.len())?;
        for _ in &self.cells {
            writeln!(out, "{VTK_TRIANGLE}")?;
        }

        out.flush()?;
        Ok(())
    }

    /// Creates (or truncates) `path` and writes the mesh to it.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] carrying `path` if the file cannot be
    /// created or written.
    pub fn export_vtk<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        let with_path = |source| ExportError::Io {
            path: Some(path.to_path_buf()),
            source,
        };

        let file = File::create(path).map_err(with_path)?;
        let mut out = BufWriter::new(file);
        self.write_vtk(&mut out).map_err(|err| match err {
            ExportError::Io { source, .. } => with_path(source),
        })?;

        tracing::debug!(
            "Wrote {} points and {} triangles to {}",
            self.points.len(),
            self.cells.len(),
            path.display()
        );
        Ok(())
    }
}

impl From<&DelaunayTriangulation> for VtkMesh {
    fn from(dt: &DelaunayTriangulation) -> Self {
        Self::from_triangles(dt.triangles())
    }
}

/// Writes `triangles` to `path` with the default title.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created or written.
pub fn export_vtk<P: AsRef<Path>>(triangles: &[Triangle], path: P) -> Result<(), ExportError> {
    VtkMesh::from_triangles(triangles).export_vtk(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_table_is_first_appearance_order() {
        let (a, b, c, d) = (
            Point::new(5.0, 5.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, -1.0),
        );
        let mesh = VtkMesh::from_triangles(&[Triangle::new(c, a, b), Triangle::new(d, b, a)]);
        assert_eq!(mesh.points(), &[c, a, b, d]);
        assert_eq!(mesh.cells(), &[[0, 1, 2], [3, 2, 1]]);
    }

    #[test]
    fn empty_mesh_writes_empty_sections() {
        let mesh = VtkMesh::from_triangles(&[]);
        let mut out = Vec::new();
        mesh.write_vtk(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# vtk DataFile Version 3.0\nDelaunay Triangulation\nASCII\nDATASET UNSTRUCTURED_GRID\n\
             POINTS 0 float\nCELLS 0 0\nCELL_TYPES 0\n"
        );
    }

    #[test]
    fn title_stays_on_one_line() {
        let mesh = VtkMesh::from_triangles(&[]).with_title("airfoil\nmesh");
        assert_eq!(mesh.title(), "airfoil mesh");
    }

    #[test]
    fn export_error_display_includes_path() {
        let err = ExportError::Io {
            path: Some(PathBuf::from("/nowhere/mesh.vtk")),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Failed to write VTK mesh to /nowhere/mesh.vtk: missing");

        let err = ExportError::from(io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "Failed to write VTK mesh: broken pipe");
    }
}
