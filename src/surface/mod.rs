// src/surface/mod.rs

//! The 2D drawing surface the scenes paint onto.
//!
//! `Surface` is the seam between the procedural scenes and the host: the
//! bundled `Framebuffer` rasterizes into memory, while a web or GPU host can
//! forward the same calls to its own canvas.

mod framebuffer;
mod transform;

pub use framebuffer::Framebuffer;
pub use transform::Transform;

use crate::core::Rgba;

/// A point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing operations the scenes rely on. All coordinates are in pixels with
/// the origin at the top-left corner; anything outside the surface is clipped.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Composites `color` over the axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    /// Strokes a polyline. Each covered pixel is blended once per call, so
    /// translucent strokes do not darken where segments meet.
    fn stroke_polyline(&mut self, points: &[Point], closed: bool, color: Rgba, line_width: f64);

    /// Composites a filled disc.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Stamps one glyph with its baseline-left corner at `origin`.
    fn draw_glyph(&mut self, glyph: char, origin: Point, size: f64, color: Rgba);

    /// Copies the horizontal strip `[y, y + height)` back onto itself shifted by
    /// `dx` pixels. Pixels the shifted strip does not reach keep their content.
    fn shift_strip(&mut self, y: f64, height: f64, dx: f64);

    /// Composites `color` over the whole surface.
    fn fill(&mut self, color: Rgba) {
        let (w, h) = (f64::from(self.width()), f64::from(self.height()));
        self.fill_rect(0.0, 0.0, w, h, color);
    }
}

/// Uniform factor that maps geometry tuned for a `reference_width` ×
/// `reference_height` canvas onto a surface of another size.
pub fn reference_scale(width: u32, height: u32, reference_width: f64, reference_height: f64) -> f64 {
    (f64::from(width) / reference_width).min(f64::from(height) / reference_height)
}
