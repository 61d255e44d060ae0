//! Generic pointer event types for host-independent input handling.

/// Pointer event delivered by the host to the drawing surface.
///
/// Host frameworks map their native pointer callbacks to these generic
/// events. Coordinates are in surface-local pixels; out-of-bounds positions
/// are legal and get clipped during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Drawing pointer pressed - begins a stroke at the given position
    Press { x: i32, y: i32 },
    /// Pointer moved while pressed - extends the in-progress stroke
    Motion { x: i32, y: i32 },
    /// Drawing pointer released - ends the stroke at the given position
    Release { x: i32, y: i32 },
    /// Pointer left the surface - ends any in-progress stroke where it stands
    Leave,
}
