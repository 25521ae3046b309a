//! Shape documents: one serde-described shape per object.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::geometry::Point;
use crate::number::truncate_point;
use crate::{circle, diamond, flood_fill, grid, line, polyline, rectangle, square, Polygon};

fn one() -> f64 {
    1.0
}

fn is_one(value: &f64) -> bool {
    *value == 1.0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A shape description, tagged by its `"shape"` field.
///
/// ```json5
/// {shape: "polygon", x: 10, y: 10, radius: 8, sides: 5, filled: true}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        thickness: f64,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        #[serde(default, skip_serializing_if = "is_false")]
        closed: bool,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        thickness: f64,
    },
    Polygon {
        x: f64,
        y: f64,
        radius: f64,
        sides: u32,
        #[serde(default)]
        rotation: f64,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        stretch_horizontal: f64,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        stretch_vertical: f64,
        #[serde(default, skip_serializing_if = "is_false")]
        filled: bool,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        thickness: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        #[serde(default, skip_serializing_if = "is_false")]
        filled: bool,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        thickness: f64,
    },
    Rectangle {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        #[serde(default, skip_serializing_if = "is_false")]
        filled: bool,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        thickness: f64,
    },
    Square {
        left: f64,
        top: f64,
        length: f64,
        #[serde(default, skip_serializing_if = "is_false")]
        filled: bool,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        thickness: f64,
    },
    Diamond {
        x: f64,
        y: f64,
        radius: f64,
        #[serde(default, skip_serializing_if = "is_false")]
        filled: bool,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        thickness: f64,
    },
    Grid {
        left: f64,
        top: f64,
        cells_wide: f64,
        cells_high: f64,
        cell_width: f64,
        cell_height: f64,
        #[serde(default = "one", skip_serializing_if = "is_one")]
        thickness: f64,
    },
    Fill {
        border: Vec<(f64, f64)>,
        x: f64,
        y: f64,
    },
}

impl Shape {
    /// The value of the `"shape"` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Polyline { .. } => "polyline",
            Shape::Polygon { .. } => "polygon",
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Square { .. } => "square",
            Shape::Diamond { .. } => "diamond",
            Shape::Grid { .. } => "grid",
            Shape::Fill { .. } => "fill",
        }
    }

    /// Rasterize the shape.
    ///
    /// Outlines keep the order their generator produces. Filled regions and
    /// circles come back sorted row by row, top to bottom, left to right.
    pub fn points(&self) -> Result<Vec<Point>> {
        self.check_modifiers()?;
        match self {
            Shape::Line { x1, y1, x2, y2, .. } => Ok(line(*x1, *y1, *x2, *y2)?.collect()),
            Shape::Polyline { points, closed, .. } => Ok(polyline(points, *closed)?.collect()),
            Shape::Polygon {
                x,
                y,
                radius,
                sides,
                rotation,
                stretch_horizontal,
                stretch_vertical,
                filled,
                ..
            } => {
                let polygon = Polygon::new(*x, *y, *radius, *sides)
                    .rotation(*rotation)
                    .stretch(*stretch_horizontal, *stretch_vertical);
                if *filled {
                    Ok(row_major(polygon.filled()?))
                } else {
                    Ok(polygon.outline()?.collect())
                }
            }
            Shape::Circle { x, y, radius, .. } => Ok(row_major(circle(*x, *y, *radius)?)),
            Shape::Rectangle { left, top, width, height, filled, .. } => {
                Ok(rectangle(*left, *top, *width, *height, *filled)?.collect())
            }
            Shape::Square { left, top, length, filled, .. } => Ok(square(*left, *top, *length, *filled)?.collect()),
            Shape::Diamond { x, y, radius, filled, .. } => Ok(diamond(*x, *y, *radius, *filled)?.collect()),
            Shape::Grid { left, top, cells_wide, cells_high, cell_width, cell_height, thickness } => {
                Ok(grid(*left, *top, *cells_wide, *cells_high, *cell_width, *cell_height, *thickness)?.collect())
            }
            Shape::Fill { border, x, y } => {
                let border = border
                    .iter()
                    .enumerate()
                    .map(|(i, &(bx, by))| truncate_point(bx, by, &format!("border[{i}]")))
                    .collect::<Result<Vec<_>>>()?;
                Ok(row_major(flood_fill(border, *x, *y)?))
            }
        }
    }

    fn check_modifiers(&self) -> Result<()> {
        let thickness = match self {
            Shape::Line { thickness, .. }
            | Shape::Polyline { thickness, .. }
            | Shape::Polygon { thickness, .. }
            | Shape::Circle { thickness, .. }
            | Shape::Rectangle { thickness, .. }
            | Shape::Square { thickness, .. }
            | Shape::Diamond { thickness, .. } => Some(*thickness),
            Shape::Grid { .. } | Shape::Fill { .. } => None,
        };
        if let Some(thickness) = thickness {
            if thickness != 1.0 {
                return Err(RasterError::unsupported(format!("{} thickness other than 1", self.kind())));
            }
        }
        if let Shape::Circle { filled: true, .. } = self {
            return Err(RasterError::unsupported("filled circle"));
        }
        Ok(())
    }
}

fn row_major(region: HashSet<Point>) -> Vec<Point> {
    let mut points: Vec<Point> = region.into_iter().collect();
    points.sort_unstable_by_key(|&(x, y)| (y, x));
    points
}
