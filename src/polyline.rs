//! Chaining line segments into open and closed paths.

use std::iter::FusedIterator;

use crate::error::{RasterError, Result};
use crate::geometry::Point;
use crate::line::Line;
use crate::number::{truncate, Number};

/// Iterator over the pixels of a path through a list of vertices.
///
/// Segments are rasterized one at a time as the iterator advances. Shared
/// vertices between consecutive segments are emitted once.
#[derive(Debug, Clone)]
pub struct Polyline {
    vertices: Vec<Point>,
    next_vertex: usize,
    head: Option<Point>,
    segment: Option<Line>,
}

impl Polyline {
    /// Build a path over already-validated grid vertices.
    ///
    /// An open path starts with `vertices[0]`. A closed path appends
    /// `vertices[0]` and starts with the pixel after it, so the first vertex
    /// is emitted exactly once, as the final point. A closed path whose
    /// vertices all coincide has no segment pixels and yields just that
    /// vertex.
    pub(crate) fn through(mut vertices: Vec<Point>, closed: bool) -> Self {
        let first = vertices[0];
        let single_point = vertices.iter().all(|&vertex| vertex == first);
        if closed {
            vertices.push(first);
        }
        let head = (!closed || single_point).then_some(first);
        Polyline { vertices, next_vertex: 1, head, segment: None }
    }

    /// The vertices this path visits, in order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl Iterator for Polyline {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if let Some(point) = self.head.take() {
            return Some(point);
        }

        loop {
            if let Some(point) = self.segment.as_mut().and_then(Iterator::next) {
                return Some(point);
            }
            if self.next_vertex >= self.vertices.len() {
                self.segment = None;
                return None;
            }
            let from = self.vertices[self.next_vertex - 1];
            let to = self.vertices[self.next_vertex];
            self.segment = Some(Line::between(from, to).skip_first());
            self.next_vertex += 1;
        }
    }
}

impl FusedIterator for Polyline {}

/// Rasterize the lines connecting `points`.
///
/// With `closed`, the last point also connects back to the first and at
/// least three points are required; otherwise at least two. Every
/// coordinate is truncated toward zero. A closed path always ends on its
/// first point, even when every point coincides.
///
/// # Examples
///
/// ```
/// use pixgeom::polyline;
///
/// let open: Vec<_> = polyline(&[(0, 0), (2, 0), (2, 2)], false).unwrap().collect();
/// assert_eq!(open, vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
///
/// let closed: Vec<_> = polyline(&[(0, 0), (4, 0), (4, 4)], true).unwrap().collect();
/// assert_eq!(closed.last(), Some(&(0, 0)));
/// ```
pub fn polyline<N: Number>(points: &[(N, N)], closed: bool) -> Result<Polyline> {
    let vertices = points
        .iter()
        .enumerate()
        .map(|(index, &(x, y))| {
            let field = format!("points[{}]", index);
            Ok((truncate(x.to_f64(), &field)?, truncate(y.to_f64(), &field)?))
        })
        .collect::<Result<Vec<Point>>>()?;

    let required = if closed { 3 } else { 2 };
    if vertices.len() < required {
        let shape = if closed { "a closed path" } else { "an open path" };
        return Err(RasterError::validation(
            "points",
            format!("{} needs at least {} points, got {}", shape, required, vertices.len()),
        ));
    }

    Ok(Polyline::through(vertices, closed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_open_path() {
        let pixels: Vec<_> = polyline(&[(0, 0), (2, 0), (2, 2)], false).unwrap().collect();
        assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_open_path_with_reversed_segment() {
        let pixels: Vec<_> = polyline(&[(0, 0), (10, 3), (5, 5)], false).unwrap().collect();
        assert_eq!(
            pixels,
            vec![
                (0, 0), (1, 0), (2, 1), (3, 1), (4, 1), (5, 1), (6, 2), (7, 2), (8, 2),
                (9, 3), (10, 3), (9, 3), (8, 4), (7, 4), (6, 5), (5, 5),
            ]
        );
    }

    #[test]
    fn test_closed_path_returns_to_start() {
        let pixels: Vec<_> = polyline(&[(0, 0), (4, 0), (4, 4)], true).unwrap().collect();
        assert_eq!(
            pixels,
            vec![
                (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4),
                (3, 3), (2, 2), (1, 1), (0, 0),
            ]
        );
    }

    #[test]
    fn test_closed_path_has_no_duplicates() {
        let vertices = [(0, 0), (9, 2), (6, 8), (-3, 5)];
        let pixels: Vec<_> = polyline(&vertices, true).unwrap().collect();
        assert_eq!(pixels.last(), Some(&(0, 0)));
        let unique: HashSet<_> = pixels.iter().copied().collect();
        assert_eq!(unique.len(), pixels.len());
        for vertex in vertices {
            assert!(unique.contains(&vertex));
        }
    }

    #[test]
    fn test_closed_path_on_one_point() {
        let pixels: Vec<_> = polyline(&[(2, 3), (2, 3), (2, 3)], true).unwrap().collect();
        assert_eq!(pixels, vec![(2, 3)]);
    }

    #[test]
    fn test_no_consecutive_duplicates_with_repeated_vertex() {
        let pixels: Vec<_> = polyline(&[(0, 0), (3, 0), (3, 0), (3, 3)], false).unwrap().collect();
        assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_too_few_points() {
        assert!(polyline::<i32>(&[], false).is_err());
        assert!(polyline(&[(0, 0)], false).is_err());
        assert!(polyline(&[(0, 0), (1, 1)], false).is_ok());
        assert!(polyline(&[(0, 0), (1, 1)], true).is_err());
    }

    #[test]
    fn test_bad_vertex_reports_index() {
        let err = polyline(&[(0.0, 0.0), (0.0, 0.0), (f64::NAN, 0.0)], false).unwrap_err();
        assert!(matches!(err, RasterError::Validation { ref field, .. } if field == "points[2]"));

        let err = polyline(&[(0.0, f64::INFINITY), (1.0, 1.0)], false).unwrap_err();
        assert!(err.to_string().contains("points[0]"));
    }

    #[test]
    fn test_lazy_prefix() {
        let mut path = polyline(&[(0, 0), (1000, 0), (1000, 1000)], false).unwrap();
        let prefix: Vec<_> = path.by_ref().take(3).collect();
        assert_eq!(prefix, vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(path.vertices(), &[(0, 0), (1000, 0), (1000, 1000)]);
    }
}
