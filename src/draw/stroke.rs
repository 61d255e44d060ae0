//! Geometry helpers for rasterizing stroke segments.

use std::ops::RangeInclusive;

/// Pixel ranges covered by a disc of the given radius, clipped to the surface.
///
/// Returns `None` when the disc lies entirely outside the `width` x `height`
/// bounds. Points outside the surface are clipped here rather than rejected,
/// so strokes that wander off the canvas simply stop painting.
pub(crate) fn disc_bounds(
    cx: f64,
    cy: f64,
    radius: f64,
    width: u32,
    height: u32,
) -> Option<(RangeInclusive<u32>, RangeInclusive<u32>)> {
    let min_x = ((cx - radius).floor() as i64).max(0);
    let max_x = ((cx + radius).ceil() as i64).min(width as i64 - 1);
    let min_y = ((cy - radius).floor() as i64).max(0);
    let max_y = ((cy + radius).ceil() as i64).min(height as i64 - 1);

    if min_x > max_x || min_y > max_y {
        return None;
    }

    Some((min_x as u32..=max_x as u32, min_y as u32..=max_y as u32))
}

/// Number of disc stamps needed to cover the segment without gaps.
///
/// One stamp per pixel of segment length keeps the stroke solid for any
/// brush size down to a single-pixel pen.
pub(crate) fn segment_steps(from: (i32, i32), to: (i32, i32)) -> usize {
    let dx = (to.0 - from.0) as f64;
    let dy = (to.1 - from.1) as f64;
    let length = (dx * dx + dy * dy).sqrt().ceil() as usize;
    length.max(1)
}
