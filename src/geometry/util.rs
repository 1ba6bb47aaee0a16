//! Geometric helpers shared by the engine and the validators.

use crate::geometry::point::Point;

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest x coordinate.
    pub min_x: f64,
    /// Smallest y coordinate.
    pub min_y: f64,
    /// Largest x coordinate.
    pub max_x: f64,
    /// Largest y coordinate.
    pub max_y: f64,
}

impl BoundingBox {
    /// Computes the bounding box of `points`, or `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay2d::geometry::util::BoundingBox;
    /// use delaunay2d::point;
    ///
    /// let bbox = BoundingBox::from_points(&[point!(0.0, 1.0), point!(4.0, -1.0)]).unwrap();
    /// assert_eq!(bbox.width(), 4.0);
    /// assert_eq!(bbox.height(), 2.0);
    /// assert_eq!(bbox.center(), point!(2.0, 0.0));
    /// assert!(BoundingBox::from_points(&[]).is_none());
    /// ```
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = Self {
            min_x: first.x(),
            min_y: first.y(),
            max_x: first.x(),
            max_y: first.y(),
        };
        Some(rest.iter().fold(init, |bbox, p| Self {
            min_x: bbox.min_x.min(p.x()),
            min_y: bbox.min_y.min(p.y()),
            max_x: bbox.max_x.max(p.x()),
            max_y: bbox.max_y.max(p.y()),
        }))
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The larger of width and height.
    #[must_use]
    pub fn delta_max(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Centre of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x()) && (self.min_y..=self.max_y).contains(&point.y())
    }
}
