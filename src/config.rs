//! # Configuration
//!
//! Every pixel offset and font choice used to draw a label lives here, in one
//! table, instead of being scattered through the renderer.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. [`LabelConfig::default`] - the stock 150px label
//! 2. An optional TOML file ([`load_config`])
//! 3. Command-line overrides applied by the binary
//!
//! ```toml
//! output_dir = "out"
//! workers = 4
//!
//! [layout]
//! canvas_width = 150
//! child_row_height = 40
//!
//! [fonts.customer]
//! file = "DejaVuSerif.ttf"
//! size = 24.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Pixel geometry of a label.
///
/// The canvas is always `canvas_width` wide and
/// `base_height + child_row_height * children` tall. Text lines are laid out
/// top to bottom starting at `start_y`; each `*_advance` is how far the cursor
/// moves after the corresponding line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas_width: u32,
    pub base_height: u32,
    pub child_row_height: u32,
    pub start_y: i32,
    pub margin_x: i32,
    pub child_indent_x: i32,
    pub header_advance: i32,
    pub count_advance: i32,
    pub customer_advance: i32,
    pub item_advance: i32,
    pub child_advance: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 150,
            base_height: 150,
            child_row_height: 40,
            start_y: 30,
            margin_x: 20,
            child_indent_x: 30,
            header_advance: 20,
            count_advance: 40,
            customer_advance: 30,
            item_advance: 20,
            child_advance: 20,
        }
    }
}

impl LayoutConfig {
    /// Height of the canvas for an item with `child_count` modifiers.
    pub fn canvas_height(&self, child_count: usize) -> u32 {
        let rows = u32::try_from(child_count).unwrap_or(u32::MAX);
        self.base_height
            .saturating_add(self.child_row_height.saturating_mul(rows))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.base_height == 0 {
            return Err(ConfigError::Validation(
                "canvas_width and base_height must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// One font face: a file name (relative to the font directory) and a pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub file: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(file: impl Into<String>, size: f32) -> Self {
        Self {
            file: file.into(),
            size,
        }
    }
}

/// The three faces a label uses, by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Monospace face for the "Item: x of n" header lines.
    pub header: FontSpec,
    /// Serif face for the customer name.
    pub customer: FontSpec,
    /// Sans face for the item and child SKUs.
    pub item: FontSpec,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            header: FontSpec::new("FreeMono.ttf", 7.0),
            customer: FontSpec::new("DejaVuSerif.ttf", 24.0),
            item: FontSpec::new("FreeSans.ttf", 12.0),
        }
    }
}

impl FontConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for spec in [&self.header, &self.customer, &self.item] {
            if !(spec.size.is_finite() && spec.size > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "font size for {} must be a positive number, got {}",
                    spec.file, spec.size
                )));
            }
        }
        Ok(())
    }
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Where `label_{index}.png` files are written.
    pub output_dir: PathBuf,
    /// Where the font files named in [`FontConfig`] are looked up.
    pub font_dir: PathBuf,
    /// Number of render workers. `None` means one per available CPU.
    pub workers: Option<usize>,
    /// Capacity of the pending render request queue.
    pub queue_capacity: usize,
    pub layout: LayoutConfig,
    pub fonts: FontConfig,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            font_dir: PathBuf::from("."),
            workers: None,
            queue_capacity: 32,
            layout: LayoutConfig::default(),
            fonts: FontConfig::default(),
        }
    }
}

impl LabelConfig {
    /// Resolved worker count: the configured value, or the machine's parallelism.
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }

    /// Parses a TOML document on top of the defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == Some(0) {
            return Err(ConfigError::Validation(
                "workers must be at least 1".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "queue_capacity must be at least 1".to_string(),
            ));
        }
        self.layout.validate()?;
        self.fonts.validate()
    }
}

/// Loads configuration from `path`, or returns the defaults when no path is given.
///
/// # Errors
///
/// Returns error if:
/// - The file cannot be read
/// - The file is not valid TOML or does not match [`LabelConfig`]
/// - A value fails validation (zero workers, zero canvas size, bad font size)
pub fn load_config(path: Option<&Path>) -> Result<LabelConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(LabelConfig::default());
    };

    info!(path = %path.display(), "Loading configuration");
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    LabelConfig::from_toml(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_height_grows_per_child() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.canvas_height(0), 150);
        assert_eq!(layout.canvas_height(3), 270);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = LabelConfig::from_toml(
            r#"
            workers = 2

            [layout]
            child_row_height = 25

            [fonts.item]
            file = "Other.ttf"
            size = 14.0
            "#,
        )
        .unwrap();

        assert_eq!(config.workers, Some(2));
        assert_eq!(config.layout.child_row_height, 25);
        assert_eq!(config.layout.canvas_width, 150);
        assert_eq!(config.fonts.item.file, "Other.ttf");
        assert_eq!(config.fonts.customer, FontSpec::new("DejaVuSerif.ttf", 24.0));
    }

    #[test]
    fn rejects_zero_workers() {
        let err = LabelConfig::from_toml("workers = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = LabelConfig::from_toml("workers = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn worker_count_is_never_zero() {
        let config = LabelConfig::default();
        assert!(config.worker_count() >= 1);
    }
}
