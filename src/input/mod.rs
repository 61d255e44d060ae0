//! Input handling and stroke state machine.
//!
//! This module translates host pointer events into raster strokes. It owns
//! the stroke lifecycle (press, motion, release) and the drawing parameters
//! strokes are rendered with (active brush width, pen color).

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{SketchState, StrokeState};
