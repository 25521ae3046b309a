//! Rotating and translating points.
//!
//! Transforms work in floating point and truncate each result back onto the
//! grid, so repeated rotations accumulate error. Offsets and angles are
//! checked up front; the points themselves are checked one at a time as the
//! returned iterator reaches them.

use crate::error::Result;
use crate::geometry::Point;
use crate::number::{finite, truncate, Number};

/// Rotate `(x, y)` counter-clockwise by `degrees` around the origin.
///
/// # Examples
///
/// ```
/// use pixgeom::rotate_point;
///
/// assert_eq!(rotate_point(10, 0, 90.0).unwrap(), (0, 10));
/// assert_eq!(rotate_point(10, 0, 180.0).unwrap(), (-10, 0));
/// assert_eq!(rotate_point(10, 0, 45.0).unwrap(), (7, 7));
/// ```
pub fn rotate_point<N: Number>(x: N, y: N, degrees: f64) -> Result<Point> {
    rotate_point_around(x, y, degrees, (0.0, 0.0))
}

/// Rotate `(x, y)` counter-clockwise by `degrees` around `pivot`.
pub fn rotate_point_around<N: Number>(x: N, y: N, degrees: f64, pivot: (f64, f64)) -> Result<Point> {
    let rotation = Rotation::new(degrees, pivot)?;
    rotation.apply(x.to_f64(), y.to_f64())
}

/// Rotate every point counter-clockwise by `degrees` around the origin.
///
/// # Examples
///
/// ```
/// use pixgeom::rotate_points;
///
/// let rotated: Vec<_> = rotate_points(vec![(10, 0), (7, 7)], 45.0)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(rotated, vec![(7, 7), (0, 9)]);
/// ```
pub fn rotate_points<I, N>(points: I, degrees: f64) -> Result<impl Iterator<Item = Result<Point>>>
where
    I: IntoIterator<Item = (N, N)>,
    N: Number,
{
    rotate_points_around(points, degrees, (0.0, 0.0))
}

/// Rotate every point counter-clockwise by `degrees` around `pivot`.
pub fn rotate_points_around<I, N>(
    points: I,
    degrees: f64,
    pivot: (f64, f64),
) -> Result<impl Iterator<Item = Result<Point>>>
where
    I: IntoIterator<Item = (N, N)>,
    N: Number,
{
    let rotation = Rotation::new(degrees, pivot)?;
    Ok(points.into_iter().map(move |(x, y)| rotation.apply(x.to_f64(), y.to_f64())))
}

/// Move every point by `(dx, dy)`.
///
/// # Examples
///
/// ```
/// use pixgeom::translate_points;
///
/// let moved: Vec<_> = translate_points(vec![(0, 0), (5, 10), (25, 25)], 1, -3)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(moved, vec![(1, -3), (6, 7), (26, 22)]);
/// ```
pub fn translate_points<I, N>(points: I, dx: N, dy: N) -> Result<impl Iterator<Item = Result<Point>>>
where
    I: IntoIterator<Item = (N, N)>,
    N: Number,
{
    let dx = finite(dx.to_f64(), "dx")?;
    let dy = finite(dy.to_f64(), "dy")?;
    Ok(points.into_iter().map(move |(x, y)| {
        Ok((truncate(x.to_f64() + dx, "x")?, truncate(y.to_f64() + dy, "y")?))
    }))
}

#[derive(Debug, Clone, Copy)]
struct Rotation {
    sin: f64,
    cos: f64,
    pivot: (f64, f64),
}

impl Rotation {
    fn new(degrees: f64, pivot: (f64, f64)) -> Result<Self> {
        let radians = finite(degrees, "degrees")?.rem_euclid(360.0).to_radians();
        let pivot = (finite(pivot.0, "pivot_x")?, finite(pivot.1, "pivot_y")?);
        Ok(Rotation { sin: radians.sin(), cos: radians.cos(), pivot })
    }

    fn apply(&self, x: f64, y: f64) -> Result<Point> {
        let (x, y) = (x - self.pivot.0, y - self.pivot.1);
        let rotated_x = x * self.cos - y * self.sin + self.pivot.0;
        let rotated_y = x * self.sin + y * self.cos + self.pivot.1;
        Ok((truncate(rotated_x, "x")?, truncate(rotated_y, "y")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;

    #[test]
    fn test_rotate_quarter_turns() {
        assert_eq!(rotate_point(10, 0, 90.0).unwrap(), (0, 10));
        assert_eq!(rotate_point(10, 0, 180.0).unwrap(), (-10, 0));
        assert_eq!(rotate_point(10, 0, -90.0).unwrap(), (0, -10));
        assert_eq!(rotate_point(10, 0, 450.0).unwrap(), (0, 10));
    }

    #[test]
    fn test_rotate_around_pivot() {
        assert_eq!(rotate_point_around(5, 5, 90.0, (5.0, 0.0)).unwrap(), (0, 0));
        assert_eq!(rotate_point_around(3, 4, 0.0, (100.0, -7.0)).unwrap(), (3, 4));
    }

    #[test]
    fn test_rotate_points_lazily() {
        let rotated: Vec<_> = rotate_points(vec![(10, 0), (7, 7)], 45.0)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rotated, vec![(7, 7), (0, 9)]);
    }

    #[test]
    fn test_rotate_rejects_bad_angle() {
        assert!(rotate_point(1, 1, f64::NAN).is_err());
        assert!(rotate_points(vec![(1, 1)], f64::INFINITY).is_err());
        assert!(rotate_point_around(1, 1, 10.0, (f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_translate_fails_at_bad_point() {
        let mut moved = translate_points(vec![(0.0, 0.0), (f64::NAN, 1.0), (2.0, 2.0)], 1.0, 1.0).unwrap();
        assert_eq!(moved.next(), Some(Ok((1, 1))));
        assert!(matches!(moved.next(), Some(Err(RasterError::Validation { .. }))));
        assert_eq!(moved.next(), Some(Ok((3, 3))));
    }

    #[test]
    fn test_translate_validates_offsets_eagerly() {
        assert!(translate_points(Vec::<(f64, f64)>::new(), f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_translate_truncates_after_offset() {
        let moved: Vec<_> = translate_points(vec![(0.6, -0.6)], 0.6, -0.6)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(moved, vec![(1, -1)]);
    }
}
