//! Diamonds, generated row by row.

use std::iter::FusedIterator;

use crate::error::{require_at_least, Result};
use crate::geometry::{grid_point, require_on_grid, Point};
use crate::number::{truncate, Number};

/// Iterator over the pixels of a diamond, top row first.
///
/// Row `r` of a diamond with radius `n` has its left edge `|r - n|` columns
/// in from the widest row and its right edge mirrored; the top and bottom
/// rows are a single apex pixel.
#[derive(Debug, Clone)]
pub struct Diamond {
    x: i64,
    y: i64,
    radius: i64,
    filled: bool,
    row: i64,
    column: Option<i64>,
}

impl Diamond {
    fn edges(&self, row: i64) -> (i64, i64) {
        let inset = (row - self.radius).abs();
        (self.x + 1 + inset, self.x + 1 + 2 * self.radius - inset)
    }
}

impl Iterator for Diamond {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.row <= 2 * self.radius {
            let (left, right) = self.edges(self.row);
            let column = match self.column {
                None => left,
                Some(previous) if previous >= right => {
                    self.row += 1;
                    self.column = None;
                    continue;
                }
                Some(previous) if self.filled => previous + 1,
                Some(_) => right,
            };
            self.column = Some(column);
            return Some(grid_point(column, self.y + self.row));
        }
        None
    }
}

impl FusedIterator for Diamond {}

/// Rasterize a diamond whose widest row is `2 * radius + 1` pixels.
///
/// The diamond spans columns `x + 1 ..= x + 2 * radius + 1` and rows
/// `y ..= y + 2 * radius`. Within each row the left edge comes first, then
/// any interior pixels (when `filled`), then the right edge.
///
/// # Examples
///
/// ```
/// use pixgeom::diamond;
///
/// let outline: Vec<_> = diamond(0, 0, 3, false).unwrap().collect();
/// assert_eq!(
///     outline,
///     vec![(4, 0), (3, 1), (5, 1), (2, 2), (6, 2), (1, 3), (7, 3), (2, 4), (6, 4), (3, 5), (5, 5), (4, 6)]
/// );
/// ```
pub fn diamond<N: Number>(x: N, y: N, radius: N, filled: bool) -> Result<Diamond> {
    let x = truncate(x.to_f64(), "x")?;
    let y = truncate(y.to_f64(), "y")?;
    let radius = truncate(radius.to_f64(), "radius")?;
    require_at_least("radius", radius, 1)?;
    let (x, y, radius) = (x as i64, y as i64, radius as i64);
    require_on_grid((x + 1, y), (x + 1 + 2 * radius, y + 2 * radius))?;

    Ok(Diamond {
        x,
        y,
        radius,
        filled,
        row: 0,
        column: None,
    })
}
