//! In-memory RGBA raster implementing `Surface`.

use super::{Point, Surface};
use crate::core::{GlitchError, Rgba};

/// Row-major pixel buffer with source-over compositing.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    /// Per-pixel stamp of the last stroke that covered it.
    coverage: Vec<u32>,
    stamp: u32,
}

impl Framebuffer {
    /// Creates a transparent framebuffer. Both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GlitchError> {
        if width == 0 || height == 0 {
            return Err(GlitchError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; len],
            coverage: vec![0; len],
            stamp: 0,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Overwrites every pixel with `color` (no blending).
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Number of pixels that are not fully transparent.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p.a() != 0).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        self.pixels[i] = color.over(self.pixels[i]);
    }

    fn next_stamp(&mut self) -> u32 {
        if self.stamp == u32::MAX {
            self.coverage.fill(0);
            self.stamp = 0;
        }
        self.stamp += 1;
        self.stamp
    }

    /// Clips a floating-point span to `[0, limit)` pixel indices.
    fn span(start: f64, end: f64, limit: u32) -> Option<(u32, u32)> {
        let lo = start.floor().max(0.0);
        let hi = end.ceil().min(f64::from(limit));
        if lo >= hi {
            return None;
        }
        Some((lo as u32, hi as u32))
    }

    fn cover_segment(&mut self, p0: Point, p1: Point, half_width: f64, color: Rgba, stamp: u32) {
        let Some((x0, x1)) = Self::span(p0.x.min(p1.x) - half_width, p0.x.max(p1.x) + half_width, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(p0.y.min(p1.y) - half_width, p0.y.max(p1.y) + half_width, self.height) else {
            return;
        };

        let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);
        let len_sq = dx * dx + dy * dy;
        for y in y0..y1 {
            for x in x0..x1 {
                let (cx, cy) = (f64::from(x) + 0.5, f64::from(y) + 0.5);
                let t = if len_sq > 0.0 {
                    (((cx - p0.x) * dx + (cy - p0.y) * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let (nx, ny) = (p0.x + t * dx - cx, p0.y + t * dy - cy);
                if nx * nx + ny * ny > half_width * half_width {
                    continue;
                }
                let i = self.index(x, y);
                if self.coverage[i] != stamp {
                    self.coverage[i] = stamp;
                    self.blend(x, y, color);
                }
            }
        }
    }
}

/// 3×3 block pattern for a glyph, top row in the high bits.
fn glyph_mask(glyph: char) -> u16 {
    match glyph {
        ' ' => 0,
        '█' | '■' | '▓' => 0b111_111_111,
        '▄' => 0b000_111_111,
        '▀' => 0b111_111_000,
        '□' | '○' => 0b111_101_111,
        '●' => 0b010_111_010,
        '◆' | '◇' => 0b010_101_010,
        '△' | '▲' => 0b010_010_111,
        '░' => 0b101_010_101,
        '▒' => 0b010_101_010 | 0b101_000_101,
        other => (((other as u32).wrapping_mul(2_654_435_761) >> 23) as u16 & 0b111_111_111) | 0b000_010_000,
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        let Some((x0, x1)) = Self::span(x, x + width, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(y, y + height, self.height) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], closed: bool, color: Rgba, line_width: f64) {
        if points.len() < 2 || color.a() == 0 {
            return;
        }
        let half_width = (line_width / 2.0).max(0.5);
        let stamp = self.next_stamp();
        for pair in points.windows(2) {
            self.cover_segment(pair[0], pair[1], half_width, color, stamp);
        }
        if closed {
            self.cover_segment(points[points.len() - 1], points[0], half_width, color, stamp);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let Some((x0, x1)) = Self::span(center.x - radius, center.x + radius, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(center.y - radius, center.y + radius, self.height) else {
            return;
        };
        let r_sq = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let (dx, dy) = (f64::from(x) + 0.5 - center.x, f64::from(y) + 0.5 - center.y);
                if dx * dx + dy * dy <= r_sq {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn draw_glyph(&mut self, glyph: char, origin: Point, size: f64, color: Rgba) {
        let mask = glyph_mask(glyph);
        let cell = size / 3.0;
        let top = origin.y - size;
        for row in 0..3u16 {
            for col in 0..3u16 {
                let bit = 8 - (row * 3 + col);
                if mask & (1 << bit) == 0 {
                    continue;
                }
                self.fill_rect(
                    origin.x + f64::from(col) * cell,
                    top + f64::from(row) * cell,
                    cell,
                    cell,
                    color,
                );
            }
        }
    }

    fn shift_strip(&mut self, y: f64, height: f64, dx: f64) {
        let Some((y0, y1)) = Self::span(y, y + height, self.height) else {
            return;
        };
        let shift = dx.round() as i64;
        if shift == 0 {
            return;
        }
        let w = self.width as usize;
        for row in y0..y1 {
            let start = row as usize * w;
            let source = self.pixels[start..start + w].to_vec();
            for (x, pixel) in source.into_iter().enumerate() {
                let target = x as i64 + shift;
                if (0..w as i64).contains(&target) {
                    self.pixels[start + target as usize] = pixel;
                }
            }
        }
    }
}
