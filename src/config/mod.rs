//! Configuration support for the sketch widget.
//!
//! The host supplies the widget configuration either programmatically or as
//! a TOML snippet (see [`Config::from_toml_str`]). Settings cover the brush
//! palette (sizes and the default selection) and surface parameters (border
//! allowance, minimum side, pen color).
//!
//! Out-of-range numeric values are clamped with a warning; structural
//! problems with the palette (no default brush, duplicate ids, ...) are
//! rejected outright so the single-selection invariant stays enforceable.

pub mod types;

// Re-export commonly used types at module level
pub use types::{BrushEntry, ColorSpec, SurfaceConfig};

use crate::brush::{Brush, BrushPalette};
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

/// Smallest accepted brush diameter in pixels.
pub const MIN_BRUSH_SIZE: f64 = 1.0;
/// Largest accepted brush diameter in pixels.
pub const MAX_BRUSH_SIZE: f64 = 64.0;

/// Errors rejected at configuration time.
///
/// These all represent configurations under which the widget's invariants
/// could not hold, so they fail construction instead of being papered over.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML in widget configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("brush palette is empty")]
    EmptyPalette,

    #[error("no brush is marked default")]
    NoDefaultBrush,

    #[error("more than one brush is marked default ('{first}' and '{second}')")]
    MultipleDefaultBrushes { first: String, second: String },

    #[error("duplicate brush id '{0}'")]
    DuplicateBrushId(String),

    #[error("brush id '{0}' collides with a reserved control name")]
    ReservedBrushId(String),
}

/// Main configuration structure for one widget instance.
///
/// # Example TOML
/// ```toml
/// [surface]
/// border = 2
/// min_side = 16
/// pen_color = "black"
///
/// [[brush]]
/// id = "fine"
/// size = 8.0
///
/// [[brush]]
/// id = "medium"
/// size = 16.0
/// default = true
///
/// [[brush]]
/// id = "broad"
/// size = 24.0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Drawing surface settings (border, minimum side, pen color)
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// The brush palette; exactly one entry must carry `default = true`
    #[serde(default = "default_brushes", rename = "brush")]
    pub brushes: Vec<BrushEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            brushes: default_brushes(),
        }
    }
}

impl Config {
    /// Parses a configuration from a TOML string.
    ///
    /// Loaded values are validated: numeric ranges are clamped with a
    /// warning, while structural palette errors are rejected.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or the palette violates the
    /// single-default invariant (see [`ConfigError`]).
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(input)?;
        config.validate_and_clamp();

        // Fail fast on structural palette errors instead of at first use.
        config.palette()?;

        info!("Loaded sketch widget config ({} brushes)", config.brushes.len());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Validates and clamps numeric configuration values.
    ///
    /// Validated ranges:
    /// - brush `size`: 1.0 - 64.0
    /// - `surface.min_side`: at least 1
    fn validate_and_clamp(&mut self) {
        for brush in &mut self.brushes {
            if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&brush.size) {
                log::warn!(
                    "Invalid size {:.1} for brush '{}', clamping to {:.0}-{:.0} range",
                    brush.size,
                    brush.id,
                    MIN_BRUSH_SIZE,
                    MAX_BRUSH_SIZE
                );
                brush.size = brush.size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
            }
        }

        if self.surface.min_side == 0 {
            log::warn!("Invalid min_side 0, clamping to 1");
            self.surface.min_side = 1;
        }
    }

    /// Builds the brush palette, enforcing the structural invariants.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyPalette`] when no brushes are configured
    /// - [`ConfigError::DuplicateBrushId`] when two entries share an id
    /// - [`ConfigError::NoDefaultBrush`] / [`ConfigError::MultipleDefaultBrushes`]
    ///   when the default marker count is not exactly one
    pub fn palette(&self) -> Result<BrushPalette, ConfigError> {
        if self.brushes.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let mut selected: Option<usize> = None;
        for (index, entry) in self.brushes.iter().enumerate() {
            if self.brushes[..index].iter().any(|prev| prev.id == entry.id) {
                return Err(ConfigError::DuplicateBrushId(entry.id.clone()));
            }
            if entry.default {
                if let Some(first) = selected {
                    return Err(ConfigError::MultipleDefaultBrushes {
                        first: self.brushes[first].id.clone(),
                        second: entry.id.clone(),
                    });
                }
                selected = Some(index);
            }
        }

        let selected = selected.ok_or(ConfigError::NoDefaultBrush)?;

        let brushes = self
            .brushes
            .iter()
            .map(|entry| Brush {
                id: entry.id.clone(),
                size: entry.size,
            })
            .collect();

        Ok(BrushPalette::new(brushes, selected))
    }
}

/// The compiled-in palette: three brushes with the medium one selected.
fn default_brushes() -> Vec<BrushEntry> {
    vec![
        BrushEntry {
            id: "fine".to_string(),
            size: 8.0,
            default: false,
        },
        BrushEntry {
            id: "medium".to_string(),
            size: 16.0,
            default: true,
        },
        BrushEntry {
            id: "broad".to_string(),
            size: 24.0,
            default: false,
        },
    ]
}
