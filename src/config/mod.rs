//! Configuration file support for strokeboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/strokeboard/config.toml`. Settings include the initial pen and
//! the canvas dimensions used for the projection.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{BrushSizeMode, ColorSpec};
pub use types::{CanvasConfig, DrawingConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_brush_size = 5.0
/// brush_size_mode = "captured"
///
/// [canvas]
/// width = 1280
/// height = 720
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial pen settings
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas surface settings
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 0.5 - 100.0 (non-finite values fall back to 5.0)
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    fn validate_and_clamp(&mut self) {
        if !self.drawing.default_brush_size.is_finite() {
            log::warn!(
                "Invalid default_brush_size {}, falling back to 5.0",
                self.drawing.default_brush_size
            );
            self.drawing.default_brush_size = 5.0;
        }

        // Brush size: 0.5 - 100.0
        if !(0.5..=100.0).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {:.1}, clamping to 0.5-100.0 range",
                self.drawing.default_brush_size
            );
            self.drawing.default_brush_size = self.drawing.default_brush_size.clamp(0.5, 100.0);
        }

        // Canvas dimensions: 1 - 16384
        if !(1..=16384).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-16384 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 16384);
        }
        if !(1..=16384).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-16384 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 16384);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/strokeboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("strokeboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to an explicit path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the crate.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");
