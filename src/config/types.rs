//! Configuration type definitions.

use super::enums::{BrushSizeMode, ColorSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen when a canvas is first created. Callers change these
/// values at runtime with `set_color` and `set_brush_size`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in pixels (valid range: 0.5 - 100.0).
    /// The ribbon extends this far on each side of the path at full pressure.
    #[serde(default = "default_brush_size")]
    pub default_brush_size: f32,

    /// Which brush size strokes are rendered with ("captured" or "live")
    #[serde(default)]
    pub brush_size_mode: BrushSizeMode,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
            brush_size_mode: BrushSizeMode::default(),
        }
    }
}

/// Canvas surface settings.
///
/// The dimensions drive the pixel-to-clip-space projection handed to the backend.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_brush_size() -> f32 {
    5.0
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}
