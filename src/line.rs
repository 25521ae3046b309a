//! Bresenham line rasterization.
//!
//! [`Line`] walks the dominant axis one pixel at a time with an integer error
//! term. Output always runs from the given start to the given end, so
//! `line(a, b)` is exactly the reverse of `line(b, a)`.

use std::iter::FusedIterator;
use std::mem::swap;

use crate::error::Result;
use crate::geometry::Point;
use crate::number::{truncate, Number};

/// Iterator over the pixels of a line segment.
#[derive(Debug, Clone)]
pub struct Line {
    steep: bool,
    reversed: bool,
    x: i64,
    end: i64,
    y: i64,
    y_step: i64,
    delta_x: i64,
    delta_y: i64,
    error: i64,
    done: bool,
}

impl Line {
    /// Rasterize the segment between two grid points.
    pub fn between(start: Point, end: Point) -> Self {
        let (mut x1, mut y1) = (start.0 as i64, start.1 as i64);
        let (mut x2, mut y2) = (end.0 as i64, end.1 as i64);

        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        if steep {
            swap(&mut x1, &mut y1);
            swap(&mut x2, &mut y2);
        }

        // Normalize to a low-to-high walk. A reversed segment is emitted from
        // the high end back down, replaying the low-to-high walk backwards;
        // after a full walk the error term is back at its initial value.
        let reversed = x1 > x2;
        if reversed {
            swap(&mut x1, &mut x2);
            swap(&mut y1, &mut y2);
        }

        let delta_x = x2 - x1;
        let delta_y = (y2 - y1).abs();
        let y_step = if y1 < y2 { 1 } else { -1 };

        let (x, end, y, y_step) =
            if reversed { (x2, x1, y2, -y_step) } else { (x1, x2, y1, y_step) };

        Line {
            steep,
            reversed,
            x,
            end,
            y,
            y_step,
            delta_x,
            delta_y,
            error: delta_x / 2,
            done: false,
        }
    }

    /// Drop the start point, for chaining segments that share a vertex.
    pub fn skip_first(mut self) -> Self {
        self.next();
        self
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let (px, py) = if self.steep { (self.y, self.x) } else { (self.x, self.y) };

        if self.x == self.end {
            self.done = true;
        } else if self.reversed {
            // Undo one forward step: the forward walk stepped y on entering
            // this column exactly when its error wrapped past zero.
            self.error += self.delta_y;
            if self.error >= self.delta_x {
                self.y += self.y_step;
                self.error -= self.delta_x;
            }
            self.x -= 1;
        } else {
            self.error -= self.delta_y;
            if self.error < 0 {
                self.y += self.y_step;
                self.error += self.delta_x;
            }
            self.x += 1;
        }

        Some((px as i32, py as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done { 0 } else { (self.end - self.x).unsigned_abs() as usize + 1 };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Line {}

impl FusedIterator for Line {}

/// Rasterize a line using Bresenham's line algorithm.
///
/// Endpoints are truncated toward zero. The result contains both endpoints,
/// first and last, with exactly one pixel per step along the longer axis.
///
/// # Examples
///
/// ```
/// use pixgeom::line;
///
/// let pixels: Vec<_> = line(0, 0, 10, 3).unwrap().collect();
/// assert_eq!(
///     pixels,
///     vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 1), (5, 1), (6, 2), (7, 2), (8, 2), (9, 3), (10, 3)]
/// );
/// ```
pub fn line<N: Number>(x1: N, y1: N, x2: N, y2: N) -> Result<Line> {
    let start = (truncate(x1.to_f64(), "x1")?, truncate(y1.to_f64(), "y1")?);
    let end = (truncate(x2.to_f64(), "x2")?, truncate(y2.to_f64(), "y2")?);
    Ok(Line::between(start, end))
}
