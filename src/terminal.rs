//! Character-grid rendering of point sets
//!
//! Draws points as a text grid spanning their bounding box, either with
//! plain ink/paper characters or with 24-bit ANSI background colors for
//! terminals that support true color.

use std::collections::HashSet;

use image::Rgba;

use crate::geometry::{Bounds, Point};

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Characters used for set and unset cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub ink: char,
    pub paper: char,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle { ink: 'O', paper: ',' }
    }
}

/// Convert RGBA color to ANSI 24-bit background escape sequence.
///
/// Transparent colors (alpha = 0) are rendered as a dark gray background
/// to visually distinguish them from opaque colors.
///
/// # Examples
///
/// ```
/// use pixgeom::terminal::color_to_ansi_bg;
/// use image::Rgba;
///
/// assert_eq!(color_to_ansi_bg(Rgba([255, 0, 0, 255])), "\x1b[48;2;255;0;0m");
/// assert_eq!(color_to_ansi_bg(Rgba([0, 0, 0, 0])), "\x1b[48;5;236m");
/// ```
pub fn color_to_ansi_bg(rgba: Rgba<u8>) -> String {
    if rgba[3] == 0 {
        "\x1b[48;5;236m".to_string()
    } else {
        format!("\x1b[48;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
    }
}

/// Render points as a character grid, one line per row, top row first.
///
/// The grid spans the bounding box of the points. Every line ends with a
/// newline; no points renders as an empty string.
///
/// # Examples
///
/// ```
/// use pixgeom::{line, terminal::{render_text, TextStyle}};
///
/// let points: Vec<_> = line(0, 0, 3, 1).unwrap().collect();
/// assert_eq!(render_text(&points, &TextStyle::default()), "OO,,\n,,OO\n");
/// ```
pub fn render_text(points: &[Point], style: &TextStyle) -> String {
    render_rows(points, |set| if set { style.ink.to_string() } else { style.paper.to_string() })
}

/// Render points as a grid of two-column ANSI background cells.
pub fn render_ansi(points: &[Point], ink: Rgba<u8>, paper: Rgba<u8>) -> String {
    let ink = format!("{}  ", color_to_ansi_bg(ink));
    let paper = format!("{}  ", color_to_ansi_bg(paper));
    render_rows(points, |set| if set { ink.clone() } else { paper.clone() })
        .replace('\n', &format!("{ANSI_RESET}\n"))
}

fn render_rows<F: Fn(bool) -> String>(points: &[Point], cell: F) -> String {
    let Some(bounds) = Bounds::of(points.iter().copied()) else {
        return String::new();
    };
    let set: HashSet<Point> = points.iter().copied().collect();

    let mut output = String::new();
    for y in bounds.min_y..=bounds.max_y {
        for x in bounds.min_x..=bounds.max_x {
            output.push_str(&cell(set.contains(&(x, y))));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diamond, rectangle};

    #[test]
    fn test_render_rectangle() {
        let points: Vec<_> = rectangle(0, 0, 4, 3, false).unwrap().collect();
        assert_eq!(render_text(&points, &TextStyle::default()), "OOOO\nO,,O\nOOOO\n");
    }

    #[test]
    fn test_render_spans_bounds_only() {
        let points: Vec<_> = diamond(10, -20, 1, false).unwrap().collect();
        let style = TextStyle { ink: '#', paper: '.' };
        assert_eq!(render_text(&points, &style), ".#.\n#.#\n.#.\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_text(&[], &TextStyle::default()), "");
        assert_eq!(render_ansi(&[], Rgba([0, 0, 0, 255]), Rgba([0, 0, 0, 0])), "");
    }

    #[test]
    fn test_render_single_point() {
        assert_eq!(render_text(&[(7, 7)], &TextStyle::default()), "O\n");
    }

    #[test]
    fn test_render_ansi_cells() {
        let ink = Rgba([255, 0, 0, 255]);
        let paper = Rgba([0, 0, 0, 0]);
        let rendered = render_ansi(&[(0, 0), (1, 1)], ink, paper);
        let on = "\x1b[48;2;255;0;0m  ";
        let off = "\x1b[48;5;236m  ";
        assert_eq!(rendered, format!("{on}{off}{ANSI_RESET}\n{off}{on}{ANSI_RESET}\n"));
    }
}
