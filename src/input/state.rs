//! Stroke state machine and drawing session state.

use super::events::PointerEvent;
use crate::draw::{Color, Surface};

/// Current stroke lifecycle state.
///
/// Tracks whether the user is idle or partway through a
/// press-to-release drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// Not drawing - waiting for a pointer press
    Idle,
    /// Stroke in progress (pointer held down)
    Drawing {
        /// Brush diameter captured when the stroke began; a brush change
        /// mid-stroke does not affect this stroke
        width: f64,
        /// Last rendered X coordinate
        last_x: i32,
        /// Last rendered Y coordinate
        last_y: i32,
    },
}

/// Drawing session state: the surface plus everything strokes need.
///
/// Processes pointer events into raster strokes. Strokes render into the
/// pixel buffer as they happen; there is no stored stroke list and no undo,
/// only the final raster content.
pub struct SketchState {
    /// Raster surface owning the pixel buffer
    pub surface: Surface,
    /// Brush diameter for subsequently started strokes
    active_width: f64,
    /// Pen color applied to all strokes
    pen_color: Color,
    /// Stroke lifecycle state machine
    stroke: StrokeState,
    /// Whether pixel content changed since the host last repainted
    dirty: bool,
}

impl SketchState {
    /// Creates a session around a freshly initialized surface.
    ///
    /// `active_width` mirrors the currently selected brush size and changes
    /// only on selection events.
    pub fn new(surface: Surface, active_width: f64, pen_color: Color) -> Self {
        Self {
            surface,
            active_width,
            pen_color,
            stroke: StrokeState::Idle,
            dirty: true,
        }
    }

    /// Updates the brush diameter used for strokes started afterwards.
    ///
    /// An in-progress stroke keeps the width it was started with.
    pub fn set_active_width(&mut self, width: f64) {
        self.active_width = width;
    }

    /// Brush diameter for the next stroke.
    pub fn active_width(&self) -> f64 {
        self.active_width
    }

    /// Current stroke lifecycle state.
    pub fn stroke(&self) -> StrokeState {
        self.stroke
    }

    /// Processes a pointer event through the stroke state machine.
    ///
    /// # Behavior
    /// - `Press` while idle begins a stroke: the active width is captured
    ///   for the whole stroke and the initial dot is stamped.
    /// - `Press` while drawing means the host missed a release; the open
    ///   stroke is ended and a new one begins at the press position.
    /// - `Motion` extends an in-progress stroke and is a no-op while idle.
    /// - `Release` extends to the release position, then ends the stroke.
    /// - `Leave` ends any in-progress stroke where it stands, so a pointer
    ///   abandoning the surface can never leave a stuck stroke behind.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => {
                if !matches!(self.stroke, StrokeState::Idle) {
                    log::debug!("Pointer press while drawing, ending open stroke");
                    self.end_stroke();
                }
                self.begin_stroke(x, y);
            }
            PointerEvent::Motion { x, y } => {
                self.extend_stroke(x, y);
            }
            PointerEvent::Release { x, y } => {
                self.extend_stroke(x, y);
                self.end_stroke();
            }
            PointerEvent::Leave => {
                self.end_stroke();
            }
        }
    }

    /// Resets the surface to blank and the stroke machine to idle.
    ///
    /// Idempotent; brush selection state is untouched.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.stroke = StrokeState::Idle;
        self.dirty = true;
    }

    /// Returns whether pixel content changed since the last call, and
    /// resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn begin_stroke(&mut self, x: i32, y: i32) {
        let width = self.active_width;
        self.surface.stamp_disc(x as f64, y as f64, width, self.pen_color);
        self.stroke = StrokeState::Drawing {
            width,
            last_x: x,
            last_y: y,
        };
        self.dirty = true;
    }

    fn extend_stroke(&mut self, x: i32, y: i32) {
        if let StrokeState::Drawing {
            width,
            last_x,
            last_y,
        } = self.stroke
        {
            self.surface
                .stamp_segment((last_x, last_y), (x, y), width, self.pen_color);
            self.stroke = StrokeState::Drawing {
                width,
                last_x: x,
                last_y: y,
            };
            self.dirty = true;
        }
    }

    fn end_stroke(&mut self) {
        self.stroke = StrokeState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    fn state(width: f64) -> SketchState {
        SketchState::new(Surface::new(100), width, BLACK)
    }

    fn alpha(state: &SketchState, x: u32, y: u32) -> u8 {
        state.surface.pixels().get_pixel(x, y).0[3]
    }

    #[test]
    fn press_motion_release_renders_a_stroke() {
        let mut state = state(8.0);
        state.on_pointer(PointerEvent::Press { x: 20, y: 50 });
        state.on_pointer(PointerEvent::Motion { x: 50, y: 50 });
        state.on_pointer(PointerEvent::Release { x: 80, y: 50 });

        assert_eq!(state.stroke(), StrokeState::Idle);
        // The release position is part of the stroke.
        assert_eq!(alpha(&state, 80, 50), 255);
        assert_eq!(alpha(&state, 50, 50), 255);
    }

    #[test]
    fn click_produces_a_dot() {
        let mut state = state(16.0);
        state.on_pointer(PointerEvent::Press { x: 50, y: 50 });
        state.on_pointer(PointerEvent::Release { x: 50, y: 50 });

        assert_eq!(alpha(&state, 50, 50), 255);
        assert_eq!(alpha(&state, 50, 43), 255);
        assert_eq!(alpha(&state, 50, 30), 0);
    }

    #[test]
    fn width_is_captured_at_stroke_start() {
        let mut state = state(8.0);
        state.on_pointer(PointerEvent::Press { x: 20, y: 50 });
        state.on_pointer(PointerEvent::Motion { x: 40, y: 50 });

        // Brush changes mid-stroke: the open stroke must stay at width 8.
        state.set_active_width(24.0);
        state.on_pointer(PointerEvent::Motion { x: 60, y: 50 });
        state.on_pointer(PointerEvent::Release { x: 80, y: 50 });

        // Width 8 reaches 4px from the path; row 42 (8px away) stays blank.
        assert_eq!(alpha(&state, 60, 46), 255);
        assert_eq!(alpha(&state, 60, 42), 0);

        // A stroke started after the change renders at width 24.
        state.on_pointer(PointerEvent::Press { x: 20, y: 80 });
        state.on_pointer(PointerEvent::Release { x: 60, y: 80 });
        assert_eq!(alpha(&state, 40, 72), 255);
    }

    #[test]
    fn motion_while_idle_is_a_no_op() {
        let mut state = state(8.0);
        state.on_pointer(PointerEvent::Motion { x: 50, y: 50 });
        assert!(state.surface.is_blank());
        assert_eq!(state.stroke(), StrokeState::Idle);
    }

    #[test]
    fn leave_ends_the_stroke_deterministically() {
        let mut state = state(8.0);
        state.on_pointer(PointerEvent::Press { x: 50, y: 50 });
        assert!(matches!(state.stroke(), StrokeState::Drawing { .. }));

        state.on_pointer(PointerEvent::Leave);
        assert_eq!(state.stroke(), StrokeState::Idle);

        // Motion after leave must not continue the abandoned stroke.
        state.on_pointer(PointerEvent::Motion { x: 90, y: 90 });
        assert_eq!(alpha(&state, 90, 90), 0);
    }

    #[test]
    fn press_while_drawing_starts_a_fresh_stroke() {
        let mut state = state(8.0);
        state.on_pointer(PointerEvent::Press { x: 10, y: 10 });
        state.on_pointer(PointerEvent::Press { x: 90, y: 90 });

        // No segment is painted between the two press positions.
        assert_eq!(alpha(&state, 50, 50), 0);
        assert!(matches!(state.stroke(), StrokeState::Drawing { .. }));
    }

    #[test]
    fn clear_resets_surface_and_stroke() {
        let mut state = state(8.0);
        state.on_pointer(PointerEvent::Press { x: 50, y: 50 });
        state.clear();

        assert!(state.surface.is_blank());
        assert_eq!(state.stroke(), StrokeState::Idle);
    }

    #[test]
    fn take_dirty_reports_pixel_changes_once() {
        let mut state = state(8.0);
        assert!(state.take_dirty());
        assert!(!state.take_dirty());

        state.on_pointer(PointerEvent::Press { x: 50, y: 50 });
        assert!(state.take_dirty());
        assert!(!state.take_dirty());
    }
}
