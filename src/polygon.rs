//! Regular polygons.
//!
//! Vertices are placed at equal angles around the center. Odd-sided polygons
//! point straight up; even-sided polygons rest on a flat bottom edge. The
//! outline is the closed path through the vertices and the filled shape is
//! that outline flood-filled from the center.

use std::collections::HashSet;

use crate::error::{RasterError, Result};
use crate::fill::flood_fill;
use crate::geometry::Point;
use crate::number::{finite, truncate, Number};
use crate::polyline::Polyline;

/// A regular polygon description.
///
/// # Examples
///
/// ```
/// use pixgeom::Polygon;
///
/// let vertices = Polygon::new(10, 10, 8, 5).rotation(20.0).vertices().unwrap();
/// assert_eq!(vertices, vec![(8, 3), (3, 10), (8, 17), (16, 14), (16, 6)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon {
    center_x: f64,
    center_y: f64,
    radius: f64,
    sides: u32,
    rotation: f64,
    stretch_horizontal: f64,
    stretch_vertical: f64,
}

impl Polygon {
    /// A polygon with `sides` sides around `(x, y)`, unrotated and unstretched.
    pub fn new<N: Number>(x: N, y: N, radius: N, sides: u32) -> Self {
        Polygon {
            center_x: x.to_f64(),
            center_y: y.to_f64(),
            radius: radius.to_f64(),
            sides,
            rotation: 0.0,
            stretch_horizontal: 1.0,
            stretch_vertical: 1.0,
        }
    }

    /// Rotate counter-clockwise by `degrees`.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Scale the polygon's width and height independently.
    pub fn stretch(mut self, horizontal: f64, vertical: f64) -> Self {
        self.stretch_horizontal = horizontal;
        self.stretch_vertical = vertical;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.sides < 3 {
            return Err(RasterError::validation(
                "sides",
                format!("must be at least 3, got {}", self.sides),
            ));
        }
        finite(self.center_x, "x")?;
        finite(self.center_y, "y")?;
        if finite(self.radius, "radius")? <= 0.0 {
            return Err(RasterError::validation(
                "radius",
                format!("must be greater than 0, got {}", self.radius),
            ));
        }
        finite(self.rotation, "rotation")?;
        finite(self.stretch_horizontal, "stretch_horizontal")?;
        finite(self.stretch_vertical, "stretch_vertical")?;
        Ok(())
    }

    /// The corner points, counter-clockwise from the top.
    ///
    /// Each horizontal offset is truncated after stretching. Each vertical
    /// offset is truncated first and then stretched, so a non-integer
    /// vertical stretch scales the already-truncated offset.
    pub fn vertices(&self) -> Result<Vec<Point>> {
        self.validate()?;

        let sides = self.sides as f64;
        let start = if self.sides % 2 == 1 {
            90.0 + self.rotation
        } else {
            90.0 + self.rotation - (180.0 / sides)
        };

        (0..self.sides)
            .map(|side| {
                let angle = (start + (360.0 / sides * side as f64)).to_radians();
                let dx = (angle.cos() * self.radius * self.stretch_horizontal).trunc();
                let dy = -((angle.sin() * self.radius).trunc() * self.stretch_vertical);
                Ok((truncate(dx + self.center_x, "x")?, truncate(dy + self.center_y, "y")?))
            })
            .collect()
    }

    /// The outline: a closed path through the vertices ending at the top vertex.
    pub fn outline(&self) -> Result<Polyline> {
        Ok(Polyline::through(self.vertices()?, true))
    }

    /// The outline plus every interior point reachable from the center.
    pub fn filled(&self) -> Result<HashSet<Point>> {
        let border: Vec<Point> = self.outline()?.collect();
        flood_fill(border, self.center_x, self.center_y)
    }
}

/// Rasterize the outline of a regular polygon.
///
/// # Examples
///
/// ```
/// use pixgeom::polygon;
///
/// let outline: Vec<_> = polygon(0, 0, 4, 4).unwrap().collect();
/// assert_eq!(outline.len(), 16);
/// assert_eq!(outline.last(), Some(&(2, -2)));
/// ```
pub fn polygon<N: Number>(x: N, y: N, radius: N, sides: u32) -> Result<Polyline> {
    Polygon::new(x, y, radius, sides).outline()
}

/// The vertices of a regular polygon.
pub fn polygon_vertices<N: Number>(x: N, y: N, radius: N, sides: u32) -> Result<Vec<Point>> {
    Polygon::new(x, y, radius, sides).vertices()
}

/// Rasterize a filled regular polygon.
pub fn filled_polygon<N: Number>(x: N, y: N, radius: N, sides: u32) -> Result<HashSet<Point>> {
    Polygon::new(x, y, radius, sides).filled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pentagon_vertices() {
        let vertices = polygon_vertices(10, 10, 8, 5).unwrap();
        assert_eq!(vertices, vec![(10, 2), (3, 8), (6, 16), (14, 16), (17, 8)]);
    }

    #[test]
    fn test_even_sides_rest_on_flat_edge() {
        let vertices = polygon_vertices(0, 0, 4, 4).unwrap();
        assert_eq!(vertices, vec![(2, -2), (-2, -2), (-2, 2), (2, 2)]);
    }

    #[test]
    fn test_odd_sides_point_up() {
        let vertices = polygon_vertices(0, 0, 6, 3).unwrap();
        assert_eq!(vertices, vec![(0, -6), (-5, 3), (5, 3)]);
    }

    #[test]
    fn test_horizontal_stretch() {
        let vertices = Polygon::new(10, 10, 8, 5).stretch(2.0, 1.0).vertices().unwrap();
        assert_eq!(vertices, vec![(10, 2), (-5, 8), (1, 16), (19, 16), (25, 8)]);
    }

    #[test]
    fn test_vertical_stretch_applies_after_truncation() {
        // Truncating after stretching would put the side vertices at y = -3
        // and the bottom ones at y = 8.
        let vertices = Polygon::new(0, 0, 4, 5).stretch(1.0, 2.5).vertices().unwrap();
        assert_eq!(vertices, vec![(0, -10), (-3, -2), (-2, 7), (2, 7), (3, -2)]);
    }

    #[test]
    fn test_pentagon_outline() {
        let outline: Vec<_> = polygon(10, 10, 8, 5).unwrap().collect();
        assert_eq!(
            outline,
            vec![
                (9, 3), (8, 4), (7, 5), (6, 5), (5, 6), (4, 7), (3, 8), (3, 9), (4, 10),
                (4, 11), (4, 12), (5, 13), (5, 14), (6, 15), (6, 16), (7, 16), (8, 16),
                (9, 16), (10, 16), (11, 16), (12, 16), (13, 16), (14, 16), (14, 15),
                (15, 14), (15, 13), (16, 12), (16, 11), (16, 10), (17, 9), (17, 8),
                (16, 7), (15, 6), (14, 5), (13, 5), (12, 4), (11, 3), (10, 2),
            ]
        );
    }

    #[test]
    fn test_filled_square_polygon() {
        let region = filled_polygon(0, 0, 4, 4).unwrap();
        assert_eq!(region.len(), 25);
        for x in -2..=2 {
            for y in -2..=2 {
                assert!(region.contains(&(x, y)));
            }
        }
    }

    #[test]
    fn test_filled_contains_outline() {
        let shape = Polygon::new(20.0, 20.0, 12.0, 7).rotation(10.0);
        let region = shape.filled().unwrap();
        for point in shape.outline().unwrap() {
            assert!(region.contains(&point));
        }
        assert!(region.contains(&(20, 20)));
    }

    #[test]
    fn test_too_few_sides() {
        let err = polygon(0, 0, 5, 2).unwrap_err();
        assert!(matches!(err, RasterError::Validation { ref field, .. } if field == "sides"));
    }

    #[test]
    fn test_invalid_radius_and_rotation() {
        assert!(polygon(0, 0, 0, 5).is_err());
        assert!(polygon(0, 0, -3, 5).is_err());
        assert!(Polygon::new(0, 0, 5, 5).rotation(f64::NAN).vertices().is_err());
        assert!(Polygon::new(0, 0, 5, 5).stretch(f64::INFINITY, 1.0).outline().is_err());
    }
}
