//! CLI output for the drawing commands.
//!
//! Prints rasterized points in the configured format, or writes a PNG when
//! `-o` is given.

use std::path::Path;
use std::process::ExitCode;

use crate::config::OutputFormat;
use crate::error::RasterError;
use crate::geometry::Point;
use crate::output::{render_image, save_png, scale_image};
use crate::shape::Shape;
use crate::terminal::{render_ansi, render_text, TextStyle};
use crate::Polygon;

use super::{Settings, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute a drawing command.
pub fn run_draw(shape: &Shape, settings: &Settings) -> ExitCode {
    match shape.points() {
        Ok(points) => emit(&points, settings, settings.output.as_deref()),
        Err(e) => report(&e),
    }
}

/// Execute `polygon --vertices`.
pub fn run_vertices(
    x: f64,
    y: f64,
    radius: f64,
    sides: u32,
    rotation: f64,
    (stretch_h, stretch_v): (f64, f64),
    settings: &Settings,
) -> ExitCode {
    let polygon = Polygon::new(x, y, radius, sides).rotation(rotation).stretch(stretch_h, stretch_v);
    match polygon.vertices() {
        Ok(vertices) => emit(&vertices, settings, settings.output.as_deref()),
        Err(e) => report(&e),
    }
}

/// Bad arguments exit with the invalid-arguments code; anything the crate
/// declines to draw is a plain error.
fn report(e: &RasterError) -> ExitCode {
    eprintln!("Error: {}", e);
    match e {
        RasterError::Validation { .. } => ExitCode::from(EXIT_INVALID_ARGS),
        RasterError::Unsupported { .. } => ExitCode::from(EXIT_ERROR),
    }
}

/// Print `points` in the configured format, or save them to `png`.
pub(super) fn emit(points: &[Point], settings: &Settings, png: Option<&Path>) -> ExitCode {
    if let Some(path) = png {
        let image = match render_image(points, settings.ink, settings.paper) {
            Ok(image) => scale_image(image, settings.render.scale),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        };
        if let Err(e) = save_png(&image, path) {
            eprintln!("Error: Failed to save '{}': {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        eprintln!("Wrote: {}", path.display());
        return ExitCode::from(EXIT_SUCCESS);
    }

    match format_points(points, settings) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn format_points(points: &[Point], settings: &Settings) -> Result<String, serde_json::Error> {
    let render = &settings.render;
    Ok(match render.format {
        OutputFormat::Text => render_text(points, &TextStyle { ink: render.ink, paper: render.paper }),
        OutputFormat::Ansi => render_ansi(points, settings.ink, settings.paper),
        OutputFormat::Json => format!("{}\n", serde_json::to_string(points)?),
        OutputFormat::List => points.iter().map(|(x, y)| format!("{x},{y}\n")).collect(),
    })
}
