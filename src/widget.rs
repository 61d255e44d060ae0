//! The sketch input widget shell.
//!
//! Ties the brush palette, drawing surface, stroke state machine, and
//! submission encoder together behind one instance-owned API. UI controls
//! are routed through an explicit control-to-action dispatch table instead
//! of ad-hoc handlers mutating shared state.

use crate::brush::BrushPalette;
use crate::config::{Config, ConfigError};
use crate::draw::{Color, Surface};
use crate::encode::{self, Host};
use crate::input::{PointerEvent, SketchState};
use std::collections::HashMap;
use thiserror::Error;

/// Reserved control id that clears the surface.
pub const CLEAR_CONTROL: &str = "clear";
/// Reserved control id that submits the sketch.
pub const SUBMIT_CONTROL: &str = "submit";

/// Action a UI control maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select the brush with the given id
    SelectBrush(String),
    /// Reset the surface to blank
    Clear,
    /// Encode the surface and hand it to the host
    Submit,
}

/// Errors surfaced by widget operations after construction.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("widget used before init()")]
    NotInitialized,

    #[error("init() called on an already initialized widget")]
    AlreadyInitialized,

    #[error("unknown brush id '{0}'")]
    UnknownBrush(String),

    #[error("unknown control id '{0}'")]
    UnknownControl(String),

    #[error("failed to encode submission artifact: {0}")]
    Encode(#[from] image::ImageError),
}

/// A freehand sketch input widget.
///
/// One instance owns one brush palette and (after [`init`](Self::init)) one
/// drawing surface; multiple instances on a form are fully independent. The
/// host drives it with pointer events and control activations, and receives
/// the encoded raster image through [`Host::accept_input`] on submit.
///
/// Lifecycle: construct from validated configuration, then `init` exactly
/// once with the laid-out container dimensions, then feed events. Stroke,
/// clear, and submit calls before `init` are contract violations and fail
/// with [`WidgetError::NotInitialized`].
pub struct SketchInput {
    /// Host-assigned id distinguishing this widget on the form
    instance_id: String,
    /// Pen color applied to all strokes
    pen_color: Color,
    /// Border allowance for the surface fit
    border: u32,
    /// Minimum surface side for degenerate containers
    min_side: u32,
    /// Brush set with exactly one selected
    palette: BrushPalette,
    /// Control id to action dispatch table
    controls: HashMap<String, Action>,
    /// Drawing session state; `None` until `init` runs
    state: Option<SketchState>,
}

impl SketchInput {
    /// Constructs a widget from configuration and the host-assigned id.
    ///
    /// Builds the brush palette (failing fast on palette invariant
    /// violations) and the control dispatch table: one control per brush id
    /// plus the reserved [`CLEAR_CONTROL`] and [`SUBMIT_CONTROL`] entries.
    ///
    /// # Errors
    /// Any [`ConfigError`], including [`ConfigError::ReservedBrushId`] when
    /// a brush id collides with a reserved control name.
    pub fn new(config: &Config, instance_id: impl Into<String>) -> Result<Self, ConfigError> {
        let palette = config.palette()?;

        let mut controls = HashMap::new();
        for (brush, _) in palette.entries() {
            if brush.id == CLEAR_CONTROL || brush.id == SUBMIT_CONTROL {
                return Err(ConfigError::ReservedBrushId(brush.id.clone()));
            }
            controls.insert(brush.id.clone(), Action::SelectBrush(brush.id.clone()));
        }
        controls.insert(CLEAR_CONTROL.to_string(), Action::Clear);
        controls.insert(SUBMIT_CONTROL.to_string(), Action::Submit);

        Ok(Self {
            instance_id: instance_id.into(),
            pen_color: config.surface.pen_color.to_color(),
            border: config.surface.border,
            min_side: config.surface.min_side,
            palette,
            controls,
            state: None,
        })
    }

    /// Initializes the drawing surface from the container dimensions.
    ///
    /// The surface is a square of side `min(width, height) - border`,
    /// computed exactly once; the container must already be laid out when
    /// this runs. The selected brush size becomes the active stroke width.
    ///
    /// # Errors
    /// [`WidgetError::AlreadyInitialized`] on repeated calls; re-measuring
    /// is not a supported path.
    pub fn init(&mut self, container_width: u32, container_height: u32) -> Result<(), WidgetError> {
        if self.state.is_some() {
            return Err(WidgetError::AlreadyInitialized);
        }

        let side = Surface::fit_side(container_width, container_height, self.border, self.min_side);
        let surface = Surface::new(side);
        self.state = Some(SketchState::new(
            surface,
            self.palette.selected().size,
            self.pen_color,
        ));

        log::info!(
            "Sketch input '{}' initialized with {}x{} surface (container {}x{})",
            self.instance_id,
            side,
            side,
            container_width,
            container_height
        );
        Ok(())
    }

    /// The host-assigned instance id.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// The brush palette (for rendering selection markers).
    pub fn palette(&self) -> &BrushPalette {
        &self.palette
    }

    /// Surface side length, once initialized.
    pub fn surface_side(&self) -> Option<u32> {
        self.state.as_ref().map(|state| state.surface.side())
    }

    /// Selects a brush by id and applies its size to subsequent strokes.
    ///
    /// Permitted before `init` (selection is pure palette state); the
    /// selected size is applied to the surface when `init` runs. A stroke
    /// already in progress keeps the width it was started with.
    ///
    /// # Errors
    /// [`WidgetError::UnknownBrush`] for an id outside the configured set.
    pub fn select_brush(&mut self, id: &str) -> Result<(), WidgetError> {
        let size = self
            .palette
            .select(id)
            .ok_or_else(|| WidgetError::UnknownBrush(id.to_string()))?;

        if let Some(state) = self.state.as_mut() {
            state.set_active_width(size);
        }
        Ok(())
    }

    /// Feeds a pointer event into the stroke state machine.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Result<(), WidgetError> {
        self.state_mut()?.on_pointer(event);
        Ok(())
    }

    /// Clears the surface to blank. Idempotent; brush selection unaffected.
    pub fn clear(&mut self) -> Result<(), WidgetError> {
        log::debug!("Clearing sketch input '{}'", self.instance_id);
        self.state_mut()?.clear();
        Ok(())
    }

    /// Encodes the current pixel buffer and hands it to the host.
    ///
    /// Exactly one [`Host::accept_input`] call per invocation; the artifact
    /// is built fresh from the pixel state at call time and not retained.
    /// Submitting an untouched canvas is valid and produces a blank image.
    pub fn submit<H: Host>(&mut self, host: &mut H) -> Result<(), WidgetError> {
        let state = self.state.as_ref().ok_or(WidgetError::NotInitialized)?;
        let artifact = encode::encode_artifact(&state.surface)?;

        log::info!(
            "Sketch input '{}' submitting {} byte artifact",
            self.instance_id,
            artifact.len()
        );
        host.accept_input(&self.instance_id, &artifact);
        Ok(())
    }

    /// Dispatches a UI control activation through the control table.
    ///
    /// Control ids are the configured brush ids plus [`CLEAR_CONTROL`] and
    /// [`SUBMIT_CONTROL`].
    ///
    /// # Errors
    /// [`WidgetError::UnknownControl`] for ids outside the table, plus any
    /// error from the dispatched operation.
    pub fn handle_control<H: Host>(&mut self, control: &str, host: &mut H) -> Result<(), WidgetError> {
        let action = self
            .controls
            .get(control)
            .cloned()
            .ok_or_else(|| WidgetError::UnknownControl(control.to_string()))?;

        match action {
            Action::SelectBrush(id) => self.select_brush(&id),
            Action::Clear => self.clear(),
            Action::Submit => self.submit(host),
        }
    }

    /// Returns whether pixel content changed since the last call, and
    /// resets the flag. `false` before `init`.
    pub fn take_dirty(&mut self) -> bool {
        self.state
            .as_mut()
            .map(SketchState::take_dirty)
            .unwrap_or(false)
    }

    fn state_mut(&mut self) -> Result<&mut SketchState, WidgetError> {
        self.state.as_mut().ok_or(WidgetError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::BrushEntry;

    struct NullHost;

    impl Host for NullHost {
        fn accept_input(&mut self, _instance_id: &str, _artifact: &str) {}
    }

    fn widget() -> SketchInput {
        SketchInput::new(&Config::default(), "sketch_1").expect("default config is valid")
    }

    #[test]
    fn operations_before_init_fail_loudly() {
        let mut widget = widget();
        let mut host = NullHost;

        assert!(matches!(
            widget.on_pointer(PointerEvent::Press { x: 1, y: 1 }),
            Err(WidgetError::NotInitialized)
        ));
        assert!(matches!(widget.clear(), Err(WidgetError::NotInitialized)));
        assert!(matches!(
            widget.submit(&mut host),
            Err(WidgetError::NotInitialized)
        ));
    }

    #[test]
    fn brush_selection_is_allowed_before_init() {
        let mut widget = widget();
        widget.select_brush("broad").expect("selection works pre-init");

        widget.init(100, 100).unwrap();
        widget.on_pointer(PointerEvent::Press { x: 50, y: 50 }).unwrap();

        // Width 24 selected pre-init reaches 12px out from the dot.
        let state = widget.state.as_ref().expect("widget is initialized");
        assert_eq!(state.surface.pixels().get_pixel(50, 40).0[3], 255);
    }

    #[test]
    fn repeated_init_is_rejected() {
        let mut widget = widget();
        widget.init(402, 300).unwrap();
        assert_eq!(widget.surface_side(), Some(298));
        assert!(matches!(
            widget.init(402, 300),
            Err(WidgetError::AlreadyInitialized)
        ));
        assert_eq!(widget.surface_side(), Some(298));
    }

    #[test]
    fn unknown_brush_and_control_are_rejected() {
        let mut widget = widget();
        widget.init(100, 100).unwrap();
        let mut host = NullHost;

        assert!(matches!(
            widget.select_brush("bogus"),
            Err(WidgetError::UnknownBrush(_))
        ));
        assert!(matches!(
            widget.handle_control("bogus", &mut host),
            Err(WidgetError::UnknownControl(_))
        ));
    }

    #[test]
    fn brush_id_colliding_with_reserved_control_is_rejected() {
        let config = Config {
            brushes: vec![BrushEntry {
                id: SUBMIT_CONTROL.to_string(),
                size: 8.0,
                default: true,
            }],
            ..Config::default()
        };
        assert!(matches!(
            SketchInput::new(&config, "sketch_1"),
            Err(ConfigError::ReservedBrushId(_))
        ));
    }

    #[test]
    fn take_dirty_tracks_pixel_changes() {
        let mut widget = widget();
        assert!(!widget.take_dirty());

        widget.init(100, 100).unwrap();
        assert!(widget.take_dirty());
        assert!(!widget.take_dirty());

        widget.on_pointer(PointerEvent::Press { x: 10, y: 10 }).unwrap();
        assert!(widget.take_dirty());
    }
}
