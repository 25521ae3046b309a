//! Midpoint circle rasterization.

use std::collections::HashSet;

use crate::error::{require_at_least, Result};
use crate::geometry::{grid_point, require_on_grid, Point};
use crate::number::{truncate, Number};

/// Rasterize the outline of a circle using the midpoint circle algorithm.
///
/// One octant is computed incrementally and mirrored eight ways. The
/// reflections coincide on the axes and the diagonals, so the points are
/// collected into a set; the result has no meaningful order.
///
/// # Examples
///
/// ```
/// use pixgeom::circle;
///
/// let pixels = circle(0, 0, 7).unwrap();
/// assert_eq!(pixels.len(), 40);
/// assert!(pixels.contains(&(-7, 0)));
/// assert!(pixels.contains(&(5, 5)));
/// ```
pub fn circle<N: Number>(x: N, y: N, radius: N) -> Result<HashSet<Point>> {
    let center_x = truncate(x.to_f64(), "x")? as i64;
    let center_y = truncate(y.to_f64(), "y")? as i64;
    let radius = truncate(radius.to_f64(), "radius")?;
    require_at_least("radius", radius, 1)?;
    let reach = radius as i64;
    require_on_grid((center_x - reach, center_y - reach), (center_x + reach, center_y + reach))?;

    let mut pixels = HashSet::new();
    let mut decision = 3 - 2 * radius as i64;
    let mut cx = 0i64;
    let mut cy = radius as i64;

    while cx <= cy {
        for (dx, dy) in [
            (cx, -cy),
            (cy, -cx),
            (cy, cx),
            (cx, cy),
            (-cx, cy),
            (-cy, cx),
            (-cy, -cx),
            (-cx, -cy),
        ] {
            pixels.insert(grid_point(center_x + dx, center_y + dy));
        }

        if decision < 0 {
            decision += 4 * cx + 6;
        } else {
            decision += 4 * (cx - cy) + 10;
            cy -= 1;
        }
        cx += 1;
    }

    Ok(pixels)
}
