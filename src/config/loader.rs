//! Configuration loading and discovery for `pixgeom.toml`
//!
//! Provides functions to find, load, and merge configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::{OutputFormat, PixgeomConfig};

/// File name searched for during discovery
pub const CONFIG_FILE: &str = "pixgeom.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse pixgeom.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub ink: Option<char>,
    pub paper: Option<char>,
    pub ink_color: Option<String>,
    pub paper_color: Option<String>,
    pub format: Option<OutputFormat>,
    pub scale: Option<u32>,
}

/// Find pixgeom.toml by walking up from the current working directory,
/// falling back to `$XDG_CONFIG_HOME/pixgeom/pixgeom.toml`.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find pixgeom.toml in the XDG config directory.
///
/// Checks `$XDG_CONFIG_HOME/pixgeom/pixgeom.toml`, or
/// `~/.config/pixgeom/pixgeom.toml` when the variable is unset.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("pixgeom").join(CONFIG_FILE);
    config_path.exists().then_some(config_path)
}

/// Find pixgeom.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from `path`, or from the discovered config file.
///
/// An explicit path that cannot be read is an error. When no path is given
/// and discovery finds nothing, the defaults are returned.
pub fn load_config(path: Option<&Path>) -> Result<PixgeomConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<PixgeomConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PixgeomConfig = toml::from_str(&contents)?;
    check(&config)?;
    Ok(config)
}

/// Turn validation failures into a `ConfigError`.
pub fn check(config: &PixgeomConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()))
    }
}

/// The configuration used when no pixgeom.toml is found.
pub fn default_config() -> PixgeomConfig {
    PixgeomConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PixgeomConfig, overrides: &CliOverrides) {
    let render = &mut config.render;

    if let Some(ink) = overrides.ink {
        render.ink = ink;
    }
    if let Some(paper) = overrides.paper {
        render.paper = paper;
    }
    if let Some(ref ink_color) = overrides.ink_color {
        render.ink_color = ink_color.clone();
    }
    if let Some(ref paper_color) = overrides.paper_color {
        render.paper_color = paper_color.clone();
    }
    if let Some(format) = overrides.format {
        render.format = format;
    }
    if let Some(scale) = overrides.scale {
        render.scale = scale;
    }
}
