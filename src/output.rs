//! PNG output for rasterized points

use std::io;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::geometry::{Bounds, Point};

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("nothing to draw")]
    Empty,
}

/// Paint points onto an image spanning their bounding box.
///
/// The top-left pixel of the image is the `(min_x, min_y)` corner of the
/// bounds; every other pixel is `paper`.
pub fn render_image(points: &[Point], ink: Rgba<u8>, paper: Rgba<u8>) -> Result<RgbaImage, OutputError> {
    let bounds = Bounds::of(points.iter().copied()).ok_or(OutputError::Empty)?;
    let mut image = RgbaImage::from_pixel(bounds.width(), bounds.height(), paper);
    for &(x, y) in points {
        let px = (x as i64 - bounds.min_x as i64) as u32;
        let py = (y as i64 - bounds.min_y as i64) as u32;
        image.put_pixel(px, py, ink);
    }
    Ok(image)
}

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// A factor of 0 or 1 returns the image unchanged.
pub fn scale_image(image: RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor, h * factor, FilterType::Nearest)
}

/// Resolve where a rendered shape document is written.
///
/// | `-o` argument | Output |
/// |---------------|--------|
/// | `out.png` | `out.png` |
/// | `dir/` or an existing directory | `dir/{input stem}.png` |
pub fn output_path(input: &Path, output_arg: &Path) -> PathBuf {
    if output_arg.is_dir() || output_arg.to_string_lossy().ends_with('/') {
        let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "shapes".to_string());
        output_arg.join(format!("{stem}.png"))
    } else {
        output_arg.to_path_buf()
    }
}
