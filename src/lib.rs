//! Pixgeom - integer rasterization of geometric shapes
//!
//! This library converts shape descriptions into the grid points that
//! approximate them:
//! - Lines and polylines with Bresenham's algorithm
//! - Regular polygons, rectangles, squares, diamonds and grids
//! - Circle outlines with the midpoint circle algorithm
//! - Filled regions with an iterative 4-connected flood fill
//!
//! Coordinates may be any primitive integer or float type; every value is
//! truncated toward zero before use. Shapes that can be produced one point at
//! a time are returned as iterators.
//!
//! ```
//! use pixgeom::{line, square};
//!
//! let diagonal: Vec<_> = line(0, 0, 5, 5).unwrap().collect();
//! assert_eq!(diagonal, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
//!
//! assert_eq!(square(0, 0, 3, true).unwrap().count(), 9);
//! ```

pub mod circle;
pub mod cli;
pub mod color;
pub mod config;
pub mod diamond;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod number;
pub mod output;
pub mod parser;
pub mod polygon;
pub mod polyline;
pub mod rect;
pub mod shape;
pub mod terminal;
pub mod transform;

pub use circle::circle;
pub use diamond::{diamond, Diamond};
pub use error::{RasterError, Result};
pub use fill::flood_fill;
pub use geometry::{Bounds, Point};
pub use grid::{grid, Grid};
pub use line::{line, Line};
pub use number::{truncate, Number};
pub use polygon::{filled_polygon, polygon, polygon_vertices, Polygon};
pub use polyline::{polyline, Polyline};
pub use rect::{rectangle, square, Rectangle};
pub use shape::Shape;
pub use transform::{rotate_point, rotate_point_around, rotate_points, rotate_points_around, translate_points};
