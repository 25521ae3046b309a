//! Rectangles and squares.
//!
//! Generated directly from the corner coordinates rather than from line
//! segments.

use std::iter::FusedIterator;

use crate::error::{require_at_least, Result};
use crate::geometry::{grid_point, require_on_grid, Point};
use crate::number::{truncate, Number};

/// Iterator over the pixels of a rectangle.
///
/// The outline runs clockwise from the top-left corner: top edge, right edge,
/// bottom edge, left edge. Each edge stops one short of the next corner so
/// every corner appears once. A filled rectangle is emitted row by row.
#[derive(Debug, Clone)]
pub struct Rectangle {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
    filled: bool,
    index: u64,
    len: u64,
}

impl Rectangle {
    fn new(left: i32, top: i32, width: u32, height: u32, filled: bool) -> Self {
        // A strip one pixel thick has no interior; its outline is the strip.
        let filled = filled || width == 1 || height == 1;
        let (w, h) = (width as u64, height as u64);
        let len = if filled { w * h } else { 2 * (w + h) - 4 };
        Rectangle { left, top, width, height, filled, index: 0, len }
    }

    fn point_at(&self, index: u64) -> Point {
        let (left, top) = (self.left as i64, self.top as i64);
        let (w, h) = (self.width as i64, self.height as i64);
        let i = index as i64;

        let (x, y) = if self.filled {
            (left + i % w, top + i / w)
        } else {
            let (right, bottom) = (left + w - 1, top + h - 1);
            let (across, down) = (w - 1, h - 1);
            if i < across {
                (left + i, top)
            } else if i < across + down {
                (right, top + (i - across))
            } else if i < 2 * across + down {
                (right - (i - across - down), bottom)
            } else {
                (left, bottom - (i - 2 * across - down))
            }
        };
        grid_point(x, y)
    }
}

impl Iterator for Rectangle {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.len {
            return None;
        }
        let point = self.point_at(self.index);
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rectangle {}

impl FusedIterator for Rectangle {}

/// Rasterize a rectangle with its top-left corner at `(left, top)`.
///
/// # Examples
///
/// ```
/// use pixgeom::rectangle;
///
/// let outline: Vec<_> = rectangle(0, 0, 3, 3, false).unwrap().collect();
/// assert_eq!(outline, vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]);
///
/// assert_eq!(rectangle(0, 0, 10, 4, true).unwrap().len(), 40);
/// assert!(rectangle(0, 0, 0, 2, false).is_err());
/// ```
pub fn rectangle<N: Number>(left: N, top: N, width: N, height: N, filled: bool) -> Result<Rectangle> {
    let left = truncate(left.to_f64(), "left")?;
    let top = truncate(top.to_f64(), "top")?;
    let width = truncate(width.to_f64(), "width")?;
    let height = truncate(height.to_f64(), "height")?;
    require_at_least("width", width, 1)?;
    require_at_least("height", height, 1)?;
    let (left64, top64) = (left as i64, top as i64);
    require_on_grid((left64, top64), (left64 + width as i64 - 1, top64 + height as i64 - 1))?;
    Ok(Rectangle::new(left, top, width as u32, height as u32, filled))
}

/// Rasterize a square; shorthand for a rectangle with equal sides.
///
/// # Examples
///
/// ```
/// use pixgeom::square;
///
/// let filled: Vec<_> = square(0, 0, 3, true).unwrap().collect();
/// assert_eq!(
///     filled,
///     vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
/// );
/// ```
pub fn square<N: Number>(left: N, top: N, length: N, filled: bool) -> Result<Rectangle> {
    let length = truncate(length.to_f64(), "length")?;
    require_at_least("length", length, 1)?;
    rectangle(left.to_f64(), top.to_f64(), length as f64, length as f64, filled)
}
