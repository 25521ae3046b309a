//! Rectangular grids of separator lines.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::error::{require_at_least, Result};
use crate::geometry::{grid_point, require_on_grid, Point};
use crate::number::{truncate, Number};

#[derive(Debug, Clone, Copy)]
enum Phase {
    Rows { band: i64, x: i64 },
    Columns { band: i64, y: i64 },
    Done,
}

/// Iterator over the pixels of a grid's separator lines.
///
/// All horizontal separators are emitted first, one full-width row at a time.
/// The vertical separators follow column by column, skipping the rows the
/// horizontal separators already covered so intersections appear once.
#[derive(Debug, Clone)]
pub struct Grid {
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    row_bands: i64,
    column_bands: i64,
    cell_width: i64,
    cell_height: i64,
    thickness: i64,
    covered_rows: HashSet<i64>,
    phase: Phase,
}

impl Grid {
    /// Offset of the `band`-th one-pixel line across all separators of
    /// thickness `thickness` between cells of size `cell`.
    fn band_offset(&self, band: i64, cell: i64) -> i64 {
        let separator = band / self.thickness;
        separator * (cell + self.thickness) + band % self.thickness
    }

    /// Total width in pixels, separators included.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Total height in pixels, separators included.
    pub fn height(&self) -> i64 {
        self.height
    }
}

impl Iterator for Grid {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            match self.phase {
                Phase::Rows { band, x } => {
                    if band >= self.row_bands {
                        self.phase = Phase::Columns { band: 0, y: 0 };
                        continue;
                    }
                    let y = self.band_offset(band, self.cell_height);
                    if x == 0 {
                        self.covered_rows.insert(y);
                    }
                    self.phase = if x + 1 < self.width {
                        Phase::Rows { band, x: x + 1 }
                    } else {
                        Phase::Rows { band: band + 1, x: 0 }
                    };
                    return Some(grid_point(self.left + x, self.top + y));
                }
                Phase::Columns { band, y } => {
                    if band >= self.column_bands {
                        self.phase = Phase::Done;
                        continue;
                    }
                    self.phase = if y + 1 < self.height {
                        Phase::Columns { band, y: y + 1 }
                    } else {
                        Phase::Columns { band: band + 1, y: 0 }
                    };
                    if self.covered_rows.contains(&y) {
                        continue;
                    }
                    let x = self.band_offset(band, self.cell_width);
                    return Some(grid_point(self.left + x, self.top + y));
                }
                Phase::Done => return None,
            }
        }
    }
}

impl FusedIterator for Grid {}

/// Rasterize a grid of `cells_wide` by `cells_high` cells.
///
/// `cell_width` and `cell_height` are the interior size of each cell, not
/// counting the separator lines, which are `thickness` pixels thick. The
/// grid is `cells_wide * cell_width + thickness * (cells_wide + 1)` pixels
/// wide and correspondingly tall.
///
/// # Examples
///
/// ```
/// use pixgeom::grid;
///
/// let pixels: Vec<_> = grid(2, 3, 1, 1, 1, 1, 1).unwrap().collect();
/// assert_eq!(pixels, vec![(2, 3), (3, 3), (4, 3), (2, 5), (3, 5), (4, 5), (2, 4), (4, 4)]);
/// ```
pub fn grid<N: Number>(
    left: N,
    top: N,
    cells_wide: N,
    cells_high: N,
    cell_width: N,
    cell_height: N,
    thickness: N,
) -> Result<Grid> {
    let left = truncate(left.to_f64(), "left")?;
    let top = truncate(top.to_f64(), "top")?;
    let cells_wide = truncate(cells_wide.to_f64(), "cells_wide")?;
    let cells_high = truncate(cells_high.to_f64(), "cells_high")?;
    let cell_width = truncate(cell_width.to_f64(), "cell_width")?;
    let cell_height = truncate(cell_height.to_f64(), "cell_height")?;
    let thickness = truncate(thickness.to_f64(), "thickness")?;

    require_at_least("cells_wide", cells_wide, 1)?;
    require_at_least("cells_high", cells_high, 1)?;
    require_at_least("cell_width", cell_width, 1)?;
    require_at_least("cell_height", cell_height, 1)?;
    require_at_least("thickness", thickness, 1)?;

    let (cells_wide, cells_high) = (cells_wide as i64, cells_high as i64);
    let (cell_width, cell_height) = (cell_width as i64, cell_height as i64);
    let thickness = thickness as i64;
    let (left, top) = (left as i64, top as i64);
    let width = cells_wide * cell_width + thickness * (cells_wide + 1);
    let height = cells_high * cell_height + thickness * (cells_high + 1);
    require_on_grid((left, top), (left + width - 1, top + height - 1))?;

    Ok(Grid {
        left,
        top,
        width,
        height,
        row_bands: (cells_high + 1) * thickness,
        column_bands: (cells_wide + 1) * thickness,
        cell_width,
        cell_height,
        thickness,
        covered_rows: HashSet::new(),
        phase: Phase::Rows { band: 0, x: 0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;

    #[test]
    fn test_grid_reference() {
        let pixels: Vec<_> = grid(0, 0, 3, 2, 5, 4, 1).unwrap().collect();
        let mut expected: Vec<Point> = Vec::new();
        for y in [0, 5, 10] {
            expected.extend((0..19).map(|x| (x, y)));
        }
        for x in [0, 6, 12, 18] {
            expected.extend([1, 2, 3, 4, 6, 7, 8, 9].iter().map(|&y| (x, y)));
        }
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_thick_grid() {
        let pixels: Vec<_> = grid(0, 0, 2, 1, 2, 1, 2).unwrap().collect();
        let mut expected: Vec<Point> = Vec::new();
        for y in [0, 1, 3, 4] {
            expected.extend((0..10).map(|x| (x, y)));
        }
        expected.extend([(0, 2), (1, 2), (4, 2), (5, 2), (8, 2), (9, 2)]);
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_dimensions() {
        let pixels = grid(0, 0, 3, 2, 5, 4, 2).unwrap();
        assert_eq!(pixels.width(), 3 * 5 + 2 * 4);
        assert_eq!(pixels.height(), 2 * 4 + 2 * 3);
    }

    #[test]
    fn test_no_duplicates() {
        for cells_wide in 1..=4 {
            for cells_high in 1..=4 {
                for cell_width in 1..=4 {
                    for cell_height in 1..=4 {
                        for thickness in 1..=4 {
                            let pixels: Vec<_> =
                                grid(0, 0, cells_wide, cells_high, cell_width, cell_height, thickness)
                                    .unwrap()
                                    .collect();
                            let unique: HashSet<_> = pixels.iter().copied().collect();
                            assert_eq!(unique.len(), pixels.len());

                            let width = (cells_wide * cell_width + thickness * (cells_wide + 1)) as usize;
                            let height = (cells_high * cell_height + thickness * (cells_high + 1)) as usize;
                            let interior = (cells_wide * cells_high * cell_width * cell_height) as usize;
                            assert_eq!(pixels.len(), width * height - interior);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_grid_at_grid_edge() {
        let err = grid(i32::MAX - 1, 0, 1, 1, 1, 1, 1).unwrap_err();
        assert!(matches!(err, RasterError::Validation { ref field, .. } if field == "extent"));
        assert!(grid(0, 0, i32::MAX, 2, i32::MAX, 1, 1).is_err());

        let pixels: Vec<_> = grid(i32::MAX - 2, i32::MIN, 1, 1, 1, 1, 1).unwrap().collect();
        assert_eq!(pixels.len(), 8);
        assert!(pixels.contains(&(i32::MAX, i32::MIN + 2)));
    }

    #[test]
    fn test_invalid_arguments() {
        let cases = [
            ([0, 1, 1, 1, 1], "cells_wide"),
            ([1, 0, 1, 1, 1], "cells_high"),
            ([1, 1, 0, 1, 1], "cell_width"),
            ([1, 1, 1, 0, 1], "cell_height"),
            ([1, 1, 1, 1, 0], "thickness"),
        ];
        for ([wide, high, width, height, thickness], name) in cases {
            let err = grid(0, 0, wide, high, width, height, thickness).unwrap_err();
            assert!(matches!(err, RasterError::Validation { ref field, .. } if field == name));
        }
    }
}
