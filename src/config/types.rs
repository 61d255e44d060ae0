//! Configuration type definitions.

use crate::draw::{Color, color};
use log::warn;
use serde::Deserialize;

/// One configured brush.
///
/// The brush set is static for the widget lifetime; exactly one entry must
/// carry `default = true` (validated fail-fast at construction).
#[derive(Debug, Clone, Deserialize)]
pub struct BrushEntry {
    /// Identifier referenced by selection events and host UI controls
    pub id: String,

    /// Stroke diameter in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_brush_size")]
    pub size: f64,

    /// Whether this brush is selected when the widget is constructed
    #[serde(default)]
    pub default: bool,
}

/// Drawing surface settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceConfig {
    /// Border allowance subtracted from the container's smaller dimension
    #[serde(default = "default_border")]
    pub border: u32,

    /// Minimum surface side length, used when the container is degenerate
    #[serde(default = "default_min_side")]
    pub min_side: u32,

    /// Pen color - either a named color (black, white, red, green, blue,
    /// yellow, orange, pink) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_pen_color")]
    pub pen_color: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            border: default_border(),
            min_side: default_min_side(),
            pen_color: default_pen_color(),
        }
    }
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// pen_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// pen_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: black, white, red, green, blue, yellow, orange, pink
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to black with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                color::BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

fn default_brush_size() -> f64 {
    16.0
}

fn default_border() -> u32 {
    2
}

fn default_min_side() -> u32 {
    16
}

fn default_pen_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}
