//! Freehand sketch input widget for host form frameworks.
//!
//! One [`SketchInput`] instance owns a brush palette, a square raster
//! drawing surface, and a submission encoder. The host lays out a container,
//! assigns an instance id, initializes the widget once, and then drives it
//! with pointer events and control activations; on submit the host receives
//! the drawn pixels as a PNG data URI through the [`Host`] trait.

pub mod brush;
pub mod config;
pub mod draw;
pub mod encode;
pub mod input;
pub mod widget;

pub use config::{Config, ConfigError};
pub use encode::Host;
pub use input::PointerEvent;
pub use widget::{SketchInput, WidgetError};
