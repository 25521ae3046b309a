//! Grid points and bounding boxes.

use crate::error::{RasterError, Result};

/// An integer pixel coordinate `(x, y)`; y grows downward on screen.
pub type Point = (i32, i32);

/// Axis-aligned bounding box of a point set, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Compute the bounds of `points`, or `None` when there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixgeom::geometry::Bounds;
    ///
    /// let bounds = Bounds::of([(3, -1), (0, 4), (2, 2)]).unwrap();
    /// assert_eq!((bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y), (0, -1, 3, 4));
    /// assert!(Bounds::of(Vec::new()).is_none());
    /// ```
    pub fn of<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let (x, y) = iter.next()?;
        let mut bounds = Bounds { min_x: x, min_y: y, max_x: x, max_y: y };
        for point in iter {
            bounds.include(point);
        }
        Some(bounds)
    }

    /// Grow the box to cover `point`.
    pub fn include(&mut self, (x, y): Point) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// True when `point` lies strictly inside the box, not on its edge.
    pub fn strictly_contains(&self, (x, y): Point) -> bool {
        x > self.min_x && x < self.max_x && y > self.min_y && y < self.max_y
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        (self.max_x as i64 - self.min_x as i64 + 1) as u32
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        (self.max_y as i64 - self.min_y as i64 + 1) as u32
    }
}

/// Reject a shape whose inclusive extent from `min` to `max` leaves the
/// `i32` grid. Generators call this once, before producing any point.
pub(crate) fn require_on_grid(min: (i64, i64), max: (i64, i64)) -> Result<()> {
    let grid = i32::MIN as i64..=i32::MAX as i64;
    if [min.0, min.1, max.0, max.1].iter().all(|value| grid.contains(value)) {
        Ok(())
    } else {
        Err(RasterError::validation("extent", "shape extends past the pixel grid"))
    }
}

/// Narrow a coordinate that lies inside an extent accepted by
/// [`require_on_grid`].
pub(crate) fn grid_point(x: i64, y: i64) -> Point {
    debug_assert!(i32::try_from(x).is_ok() && i32::try_from(y).is_ok(), "({x}, {y}) is off the grid");
    (x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_single_point() {
        let bounds = Bounds::of([(5, 7)]).unwrap();
        assert_eq!(bounds.width(), 1);
        assert_eq!(bounds.height(), 1);
        assert!(!bounds.strictly_contains((5, 7)));
    }

    #[test]
    fn test_strictly_contains_excludes_edges() {
        let bounds = Bounds::of([(0, 0), (4, 4)]).unwrap();
        assert!(bounds.strictly_contains((1, 1)));
        assert!(bounds.strictly_contains((3, 3)));
        assert!(!bounds.strictly_contains((0, 2)));
        assert!(!bounds.strictly_contains((2, 4)));
        assert!(!bounds.strictly_contains((5, 2)));
    }

    #[test]
    fn test_require_on_grid() {
        let (min, max) = (i32::MIN as i64, i32::MAX as i64);
        assert!(require_on_grid((min, min), (max, max)).is_ok());
        let err = require_on_grid((0, 0), (max + 1, 0)).unwrap_err();
        assert!(matches!(err, RasterError::Validation { ref field, .. } if field == "extent"));
        assert!(require_on_grid((0, min - 1), (0, 0)).is_err());
    }

    #[test]
    fn test_dimensions() {
        let bounds = Bounds::of([(-2, -3), (2, 3)]).unwrap();
        assert_eq!(bounds.width(), 5);
        assert_eq!(bounds.height(), 7);
    }
}
