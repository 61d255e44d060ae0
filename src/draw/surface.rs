//! Square raster surface owning the widget's pixel buffer.

use super::color::{Color, TRANSPARENT};
use super::stroke;
use image::RgbaImage;

/// Raster drawing surface with a fixed square resolution.
///
/// The surface owns the RGBA pixel buffer exclusively. It is created once at
/// widget initialization and never resized afterwards. Strokes are rendered
/// by stamping filled discs of the brush diameter along the pointer path;
/// anything outside the surface bounds is clipped, never rejected.
pub struct Surface {
    /// Side length in pixels (the surface is always square)
    side: u32,
    /// RGBA pixel buffer, fully transparent when blank
    pixels: RgbaImage,
}

impl Surface {
    /// Creates a blank surface with the given square side length.
    pub fn new(side: u32) -> Self {
        Self {
            side,
            pixels: RgbaImage::new(side, side),
        }
    }

    /// Computes the square side length from the host container dimensions.
    ///
    /// The side is `min(container_width, container_height) - border`. When
    /// the container is degenerate (smaller than the border allowance) or the
    /// result would drop below `min_side`, the configured minimum is used
    /// instead so the surface never ends up unusably small.
    pub fn fit_side(container_width: u32, container_height: u32, border: u32, min_side: u32) -> u32 {
        let available = container_width.min(container_height);
        let side = available.saturating_sub(border);

        if side < min_side {
            log::warn!(
                "Container {}x{} too small for border {}, falling back to minimum side {}",
                container_width,
                container_height,
                border,
                min_side
            );
            return min_side;
        }

        side
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Read access to the pixel buffer (used by the submission encoder).
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Resets every pixel to fully transparent. Idempotent.
    pub fn clear(&mut self) {
        let blank = TRANSPARENT.to_rgba8();
        for pixel in self.pixels.pixels_mut() {
            *pixel = blank;
        }
    }

    /// Returns `true` when no stroke has left any opaque pixel.
    pub fn is_blank(&self) -> bool {
        self.pixels.pixels().all(|pixel| pixel.0[3] == 0)
    }

    /// Stamps a filled disc of `diameter` pixels centered at (`cx`, `cy`).
    ///
    /// A single stamp is what a click produces: one dot at the brush size.
    pub fn stamp_disc(&mut self, cx: f64, cy: f64, diameter: f64, color: Color) {
        // A sub-pixel pen still paints its center pixel.
        let radius = (diameter / 2.0).max(0.5);
        let Some((xs, ys)) = stroke::disc_bounds(cx, cy, radius, self.side, self.side) else {
            return;
        };

        let rgba = color.to_rgba8();
        let radius_sq = radius * radius;
        for y in ys {
            for x in xs.clone() {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= radius_sq {
                    self.pixels.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Stamps discs along the segment from `from` to `to`, inclusive.
    ///
    /// Stamp spacing is one pixel of segment length, which keeps strokes
    /// solid for every brush size.
    pub fn stamp_segment(&mut self, from: (i32, i32), to: (i32, i32), diameter: f64, color: Color) {
        let steps = stroke::segment_steps(from, to);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let cx = from.0 as f64 + (to.0 - from.0) as f64 * t;
            let cy = from.1 as f64 + (to.1 - from.1) as f64 * t;
            self.stamp_disc(cx, cy, diameter, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn fit_side_subtracts_border_from_smaller_dimension() {
        assert_eq!(Surface::fit_side(402, 300, 2, 16), 298);
        assert_eq!(Surface::fit_side(300, 402, 2, 16), 298);
        assert_eq!(Surface::fit_side(100, 100, 4, 16), 96);
    }

    #[test]
    fn fit_side_falls_back_on_degenerate_container() {
        assert_eq!(Surface::fit_side(2, 300, 2, 16), 16);
        assert_eq!(Surface::fit_side(0, 0, 2, 16), 16);
        assert_eq!(Surface::fit_side(10, 10, 2, 16), 16);
    }

    #[test]
    fn new_surface_is_blank() {
        let surface = Surface::new(32);
        assert_eq!(surface.side(), 32);
        assert!(surface.is_blank());
    }

    #[test]
    fn stamp_disc_covers_brush_radius() {
        let mut surface = Surface::new(100);
        surface.stamp_disc(50.0, 50.0, 8.0, BLACK);

        assert!(!surface.is_blank());
        // Radius 4: rows 46..=54 are reachable, row 44 is not.
        assert_eq!(surface.pixels().get_pixel(50, 46).0[3], 255);
        assert_eq!(surface.pixels().get_pixel(50, 54).0[3], 255);
        assert_eq!(surface.pixels().get_pixel(50, 44).0[3], 0);
    }

    #[test]
    fn stamps_outside_bounds_are_clipped() {
        let mut surface = Surface::new(50);
        surface.stamp_disc(-30.0, 25.0, 8.0, BLACK);
        assert!(surface.is_blank());

        // Partially off-canvas: paints only the in-bounds part.
        surface.stamp_segment((-10, 25), (10, 25), 8.0, BLACK);
        assert!(!surface.is_blank());
        assert_eq!(surface.pixels().get_pixel(10, 25).0[3], 255);
    }

    #[test]
    fn segment_leaves_no_gaps() {
        let mut surface = Surface::new(100);
        surface.stamp_segment((10, 50), (90, 50), 4.0, BLACK);
        for x in 10..=90 {
            assert_eq!(surface.pixels().get_pixel(x, 50).0[3], 255, "gap at x={x}");
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let mut surface = Surface::new(64);
        surface.stamp_disc(32.0, 32.0, 16.0, BLACK);
        assert!(!surface.is_blank());

        surface.clear();
        assert!(surface.is_blank());

        surface.clear();
        assert!(surface.is_blank());
    }
}
