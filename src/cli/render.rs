//! Rendering of shape documents for the `pxg render` command.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use rayon::prelude::*;

use crate::error::RasterError;
use crate::geometry::Point;
use crate::output::output_path;
use crate::parser::parse_stream;
use crate::shape::Shape;

use super::draw::emit;
use super::{Settings, EXIT_ERROR};

/// Execute the render command.
pub fn run_render(input: &Path, strict: bool, settings: &Settings) -> ExitCode {
    let file = match File::open(input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let parsed = parse_stream(file);
    for warning in &parsed.warnings {
        eprintln!("Warning: line {}: {}", warning.line, warning.message);
    }
    if strict && !parsed.warnings.is_empty() {
        eprintln!("Error: {} warning(s) in strict mode", parsed.warnings.len());
        return ExitCode::from(EXIT_ERROR);
    }
    if parsed.shapes.is_empty() {
        eprintln!("Error: No shapes found in '{}'", input.display());
        return ExitCode::from(EXIT_ERROR);
    }

    let points = match rasterize_all(&parsed.shapes) {
        Ok(points) => points,
        Err((index, kind, e)) => {
            eprintln!("Error: shape {} ({}): {}", index + 1, kind, e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let png = settings.output.as_deref().map(|out| output_path(input, out));
    emit(&points, settings, png.as_deref())
}

/// Rasterize shapes in parallel and union the results, row by row.
///
/// On failure returns the index and kind of the first shape that failed.
fn rasterize_all(shapes: &[Shape]) -> Result<Vec<Point>, (usize, &'static str, RasterError)> {
    let rasterized: Vec<Result<Vec<Point>, _>> = shapes
        .par_iter()
        .enumerate()
        .map(|(index, shape)| shape.points().map_err(|e| (index, shape.kind(), e)))
        .collect();

    let mut union = BTreeSet::new();
    for result in rasterized {
        union.extend(result?.into_iter().map(|(x, y)| (y, x)));
    }
    Ok(union.into_iter().map(|(y, x)| (x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_is_sorted_and_deduplicated() {
        let shapes = vec![
            Shape::Line { x1: 0.0, y1: 0.0, x2: 2.0, y2: 0.0, thickness: 1.0 },
            Shape::Line { x1: 2.0, y1: 1.0, x2: 0.0, y2: 1.0, thickness: 1.0 },
            Shape::Line { x1: 1.0, y1: 0.0, x2: 1.0, y2: 1.0, thickness: 1.0 },
        ];
        let points = rasterize_all(&shapes).unwrap();
        assert_eq!(points, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_first_failure_reported() {
        let shapes = vec![
            Shape::Circle { x: 0.0, y: 0.0, radius: 3.0, filled: false, thickness: 1.0 },
            Shape::Square { left: 0.0, top: 0.0, length: 0.0, filled: false, thickness: 1.0 },
            Shape::Circle { x: 0.0, y: 0.0, radius: 3.0, filled: true, thickness: 1.0 },
        ];
        let (index, kind, error) = rasterize_all(&shapes).unwrap_err();
        assert_eq!((index, kind), (1, "square"));
        assert!(matches!(error, RasterError::Validation { .. }));
    }
}
