//! Configuration schema types for `pixgeom.toml`
//!
//! Defines the structure and validation rules for rendering defaults.

use clap::ValueEnum;
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::color::{parse_color, ColorError};

/// How rasterized points are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Character grid of ink and paper characters
    #[default]
    Text,
    /// Character grid with 24-bit ANSI background colors
    Ansi,
    /// JSON array of `[x, y]` pairs
    Json,
    /// One `x,y` pair per line
    List,
}

/// Rendering defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Character for set cells in text output
    #[serde(default = "default_ink")]
    pub ink: char,
    /// Character for unset cells in text output
    #[serde(default = "default_paper")]
    pub paper: char,
    /// Hex color for set pixels in ANSI and PNG output
    #[serde(default = "default_ink_color")]
    pub ink_color: String,
    /// Hex color for unset pixels in ANSI and PNG output
    #[serde(default = "default_paper_color")]
    pub paper_color: String,
    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
    /// PNG scale factor
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ink: default_ink(),
            paper: default_paper(),
            ink_color: default_ink_color(),
            paper_color: default_paper_color(),
            format: OutputFormat::default(),
            scale: default_scale(),
        }
    }
}

impl RenderConfig {
    pub fn ink_rgba(&self) -> Result<Rgba<u8>, ColorError> {
        parse_color(&self.ink_color)
    }

    pub fn paper_rgba(&self) -> Result<Rgba<u8>, ColorError> {
        parse_color(&self.paper_color)
    }
}

fn default_ink() -> char {
    'O'
}

fn default_paper() -> char {
    ','
}

fn default_ink_color() -> String {
    "#FFFFFF".to_string()
}

fn default_paper_color() -> String {
    "#00000000".to_string()
}

fn default_scale() -> u32 {
    1
}

/// Root of `pixgeom.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixgeomConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "render.scale")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pixgeom.toml: '{}' {}", self.field, self.message)
    }
}

impl PixgeomConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let render = &self.render;

        if render.scale == 0 {
            errors.push(ConfigValidationError {
                field: "render.scale".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if render.ink == render.paper {
            errors.push(ConfigValidationError {
                field: "render.paper".to_string(),
                message: "must differ from render.ink".to_string(),
            });
        }

        for (field, value) in [("render.ink_color", &render.ink_color), ("render.paper_color", &render.paper_color)] {
            if let Err(e) = parse_color(value) {
                errors.push(ConfigValidationError { field: field.to_string(), message: e.to_string() });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
