//! Bounded 4-connected flood fill.

use std::collections::HashSet;

use crate::error::{RasterError, Result};
use crate::geometry::{Bounds, Point};
use crate::number::{truncate, Number};

/// Fill the region around a seed point, stopping at `border`.
///
/// Returns the border together with every point reachable from the seed
/// through up/down/left/right steps without crossing the border. The walk
/// never leaves the interior of the border's bounding box, so a seed placed
/// outside a closed border fills the exterior up to that box instead of
/// running away. The border is materialized up front to compute the box.
///
/// The traversal uses an explicit stack rather than recursion.
///
/// # Examples
///
/// ```
/// use pixgeom::{flood_fill, rectangle};
///
/// let border: Vec<_> = rectangle(0, 0, 4, 4, false).unwrap().collect();
/// let region = flood_fill(border, 1, 1).unwrap();
/// assert_eq!(region.len(), 16);
/// ```
pub fn flood_fill<I, N>(border: I, seed_x: N, seed_y: N) -> Result<HashSet<Point>>
where
    I: IntoIterator<Item = Point>,
    N: Number,
{
    let seed = (truncate(seed_x.to_f64(), "seed_x")?, truncate(seed_y.to_f64(), "seed_y")?);

    let mut region: HashSet<Point> = border.into_iter().collect();
    let bounds = Bounds::of(region.iter().copied())
        .ok_or_else(|| RasterError::validation("border", "must contain at least one point"))?;

    if bounds.strictly_contains(seed) {
        region.insert(seed);
    }

    let mut pending = vec![seed];
    while let Some((x, y)) = pending.pop() {
        let neighbors = [
            x.checked_add(1).map(|nx| (nx, y)),
            x.checked_sub(1).map(|nx| (nx, y)),
            y.checked_add(1).map(|ny| (x, ny)),
            y.checked_sub(1).map(|ny| (x, ny)),
        ];
        for neighbor in neighbors.into_iter().flatten() {
            if bounds.strictly_contains(neighbor) && region.insert(neighbor) {
                pending.push(neighbor);
            }
        }
    }

    Ok(region)
}
