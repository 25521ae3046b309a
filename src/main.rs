//! pxg - command-line rasterizer for lines, polygons, circles and grids

use std::process::ExitCode;

use pixgeom::cli;

fn main() -> ExitCode {
    cli::run()
}
