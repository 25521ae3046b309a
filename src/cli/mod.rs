//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod draw;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use image::Rgba;

use crate::config::{self, CliOverrides, OutputFormat, RenderConfig};
use crate::shape::Shape;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// pxg - Rasterize lines, polygons, circles and grids onto the pixel grid
#[derive(Parser)]
#[command(name = "pxg")]
#[command(about = "pxg - Rasterize lines, polygons, circles and grids onto the pixel grid")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: OutputOptions,
}

/// Options shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// How points are printed: text, ansi, json or list
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write a PNG instead of printing. For `render`, a directory
    /// (ending with /) receives {input}.png
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Scale PNG output by integer factor
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: Option<u32>,

    /// Character for set cells in text output
    #[arg(long, global = true)]
    pub ink: Option<char>,

    /// Character for unset cells in text output
    #[arg(long, global = true)]
    pub paper: Option<char>,

    /// Hex color for set pixels in ANSI and PNG output
    #[arg(long, global = true)]
    pub ink_color: Option<String>,

    /// Hex color for unset pixels in ANSI and PNG output
    #[arg(long, global = true)]
    pub paper_color: Option<String>,

    /// Path to pixgeom.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw a line segment between two points
    #[command(allow_negative_numbers = true)]
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },

    /// Draw a path through points given as x,y
    Polyline {
        /// Join the last point back to the first
        #[arg(long)]
        closed: bool,

        /// Points as x,y pairs (put options before the points)
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<(f64, f64)>,
    },

    /// Draw a regular polygon inscribed in a circle
    #[command(allow_negative_numbers = true)]
    Polygon {
        x: f64,
        y: f64,
        radius: f64,
        sides: u32,

        /// Rotation in degrees, counter-clockwise
        #[arg(long, default_value = "0")]
        rotation: f64,

        /// Horizontal stretch factor
        #[arg(long, default_value = "1")]
        stretch_h: f64,

        /// Vertical stretch factor
        #[arg(long, default_value = "1")]
        stretch_v: f64,

        /// Fill the interior
        #[arg(long, conflicts_with = "vertices")]
        filled: bool,

        /// Print only the vertices
        #[arg(long)]
        vertices: bool,
    },

    /// Draw a circle outline
    #[command(allow_negative_numbers = true)]
    Circle { x: f64, y: f64, radius: f64 },

    /// Draw a rectangle from its top-left corner
    #[command(allow_negative_numbers = true)]
    Rectangle {
        left: f64,
        top: f64,
        width: f64,
        height: f64,

        /// Fill the interior
        #[arg(long)]
        filled: bool,
    },

    /// Draw a square from its top-left corner
    #[command(allow_negative_numbers = true)]
    Square {
        left: f64,
        top: f64,
        length: f64,

        /// Fill the interior
        #[arg(long)]
        filled: bool,
    },

    /// Draw a diamond
    #[command(allow_negative_numbers = true)]
    Diamond {
        x: f64,
        y: f64,
        radius: f64,

        /// Fill the interior
        #[arg(long)]
        filled: bool,
    },

    /// Draw a grid of cells
    #[command(allow_negative_numbers = true)]
    Grid {
        left: f64,
        top: f64,
        cells_wide: f64,
        cells_high: f64,
        cell_width: f64,
        cell_height: f64,

        /// Separator thickness in pixels
        #[arg(long, default_value = "1")]
        thickness: f64,
    },

    /// Rasterize every shape in a shape document (.jsonl or .json5)
    Render {
        /// Input file with one JSON5 shape object after another
        input: PathBuf,

        /// Strict mode: treat parse warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

impl Commands {
    /// The shape a drawing command describes. `render` describes none.
    fn shape(&self) -> Option<Shape> {
        let shape = match *self {
            Commands::Line { x1, y1, x2, y2 } => Shape::Line { x1, y1, x2, y2, thickness: 1.0 },
            Commands::Polyline { closed, ref points } => {
                Shape::Polyline { points: points.clone(), closed, thickness: 1.0 }
            }
            Commands::Polygon { x, y, radius, sides, rotation, stretch_h, stretch_v, filled, .. } => Shape::Polygon {
                x,
                y,
                radius,
                sides,
                rotation,
                stretch_horizontal: stretch_h,
                stretch_vertical: stretch_v,
                filled,
                thickness: 1.0,
            },
            Commands::Circle { x, y, radius } => Shape::Circle { x, y, radius, filled: false, thickness: 1.0 },
            Commands::Rectangle { left, top, width, height, filled } => {
                Shape::Rectangle { left, top, width, height, filled, thickness: 1.0 }
            }
            Commands::Square { left, top, length, filled } => {
                Shape::Square { left, top, length, filled, thickness: 1.0 }
            }
            Commands::Diamond { x, y, radius, filled } => Shape::Diamond { x, y, radius, filled, thickness: 1.0 },
            Commands::Grid { left, top, cells_wide, cells_high, cell_width, cell_height, thickness } => {
                Shape::Grid { left, top, cells_wide, cells_high, cell_width, cell_height, thickness }
            }
            Commands::Render { .. } => return None,
        };
        Some(shape)
    }
}

/// Parse an `x,y` point argument.
fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("invalid x in '{s}': {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("invalid y in '{s}': {e}"))?;
    Ok((x, y))
}

/// Rendering settings after config discovery and CLI overrides.
pub(crate) struct Settings {
    pub render: RenderConfig,
    pub ink: Rgba<u8>,
    pub paper: Rgba<u8>,
    pub output: Option<PathBuf>,
}

impl Settings {
    fn resolve(options: &OutputOptions) -> Result<Self, config::ConfigError> {
        let mut loaded = config::load_config(options.config.as_deref())?;
        let overrides = CliOverrides {
            ink: options.ink,
            paper: options.paper,
            ink_color: options.ink_color.clone(),
            paper_color: options.paper_color.clone(),
            format: options.format,
            scale: options.scale,
        };
        config::merge_cli_overrides(&mut loaded, &overrides);
        config::check(&loaded)?;

        let render = loaded.render;
        let to_config_error = |e: crate::color::ColorError| config::ConfigError::Validation(vec![e.to_string()]);
        let ink = render.ink_rgba().map_err(to_config_error)?;
        let paper = render.paper_rgba().map_err(to_config_error)?;
        Ok(Settings { render, ink, paper, output: options.output.clone() })
    }
}

/// Parse arguments, run the command and report its exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::resolve(&cli.options) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match &cli.command {
        Commands::Render { input, strict } => render::run_render(input, *strict, &settings),
        Commands::Polygon { x, y, radius, sides, rotation, stretch_h, stretch_v, vertices: true, .. } => {
            draw::run_vertices(*x, *y, *radius, *sides, *rotation, (*stretch_h, *stretch_v), &settings)
        }
        command => match command.shape() {
            Some(shape) => draw::run_draw(&shape, &settings),
            None => ExitCode::from(EXIT_INVALID_ARGS),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4"), Ok((3.0, 4.0)));
        assert_eq!(parse_point("-2.5, 7"), Ok((-2.5, 7.0)));
        assert!(parse_point("3;4").is_err());
        assert!(parse_point("a,4").is_err());
    }

    #[test]
    fn test_negative_positionals() {
        let cli = Cli::try_parse_from(["pxg", "line", "-3", "-4", "5", "6"]).unwrap();
        assert!(matches!(cli.command, Commands::Line { x1, y1, .. } if x1 == -3.0 && y1 == -4.0));
    }

    #[test]
    fn test_polyline_points() {
        let cli = Cli::try_parse_from(["pxg", "polyline", "--closed", "0,0", "-4,0", "4,4"]).unwrap();
        let shape = cli.command.shape().unwrap();
        assert_eq!(
            shape,
            Shape::Polyline { points: vec![(0.0, 0.0), (-4.0, 0.0), (4.0, 4.0)], closed: true, thickness: 1.0 }
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["pxg", "circle", "0", "0", "3", "--format", "json", "--scale", "4"]).unwrap();
        assert_eq!(cli.options.format, Some(OutputFormat::Json));
        assert_eq!(cli.options.scale, Some(4));
    }

    #[test]
    fn test_polygon_shape() {
        let cli =
            Cli::try_parse_from(["pxg", "polygon", "10", "10", "8", "5", "--rotation", "20", "--filled"]).unwrap();
        assert!(matches!(
            cli.command.shape(),
            Some(Shape::Polygon { sides: 5, rotation, filled: true, .. }) if rotation == 20.0
        ));
        assert!(Cli::try_parse_from(["pxg", "polygon", "0", "0", "3", "4", "--filled", "--vertices"]).is_err());
    }

    #[test]
    fn test_render_has_no_shape() {
        let cli = Cli::try_parse_from(["pxg", "render", "shapes.jsonl"]).unwrap();
        assert!(cli.command.shape().is_none());
    }
}
