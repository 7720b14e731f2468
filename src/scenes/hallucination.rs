//! The hallucination field: drifting particles, rotating outlines with
//! chromatic ghosts, a noisy waveform and strip glitches.

use super::Scene;
use super::shapes::ShapeKind;
use crate::core::constants::glitch_constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::core::{Hsla, Rgba, TAU};
use crate::entropy::RandomSource;
use crate::surface::{Point, Surface, Transform, reference_scale};
use serde::{Deserialize, Serialize};

const SHAPE_COUNT: usize = 5;
const PARTICLE_COUNT: usize = 30;
const GREEN_HUE: f64 = 140.0;
const MAGENTA_HUE: f64 = 300.0;

/// Controls of the hallucination field. Lucidity here is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HallucinationParams {
    /// `[0, 100]`
    pub lucidity: f64,
    /// `[0, 1]`, scales particle and waveform opacity.
    pub confidence: f64,
    /// `[0, 100]`
    pub noise_gain: f64,
    /// `[0, 5]`, scales shape distortion.
    pub error_amplification: f64,
    pub feedback_loop: bool,
}

impl Default for HallucinationParams {
    fn default() -> Self {
        Self {
            lucidity: 75.0,
            confidence: 0.65,
            noise_gain: 25.0,
            error_amplification: 1.5,
            feedback_loop: false,
        }
    }
}

impl HallucinationParams {
    /// Copy with every control pulled into its slider range.
    pub fn clamped(self) -> Self {
        let clamp = |v: f64, hi: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, hi) };
        Self {
            lucidity: clamp(self.lucidity, 100.0),
            confidence: clamp(self.confidence, 1.0),
            noise_gain: clamp(self.noise_gain, 100.0),
            error_amplification: clamp(self.error_amplification, 5.0),
            ..self
        }
    }
}

/// A drifting dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub size: f64,
    pub alpha: f64,
    pub hue: f64,
}

/// A rotating outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldShape {
    pub position: Point,
    pub size: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub kind: ShapeKind,
    pub alpha: f64,
    pub hue: f64,
    pub distortion: f64,
}

/// Paints the hallucination field. Shapes and particles are physical state:
/// they keep moving across frames and are re-rolled on `reset`.
#[derive(Debug, Clone, Default)]
pub struct HallucinationScene {
    shapes: Vec<FieldShape>,
    particles: Vec<Particle>,
}

impl HallucinationScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[FieldShape] {
        &self.shapes
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

fn pick_hue(rng: &mut dyn RandomSource) -> f64 {
    if rng.next_unit() > 0.5 { GREEN_HUE } else { MAGENTA_HUE }
}

impl Scene for HallucinationScene {
    type Params = HallucinationParams;

    fn reset(&mut self, width: u32, height: u32, rng: &mut dyn RandomSource) {
        let k = reference_scale(width, height, FIELD_WIDTH, FIELD_HEIGHT);
        let (w, h) = (f64::from(width), f64::from(height));

        self.shapes = (0..SHAPE_COUNT)
            .map(|_| FieldShape {
                position: Point::new(rng.next_range(50.0, 650.0) * k, rng.next_range(50.0, 450.0) * k),
                size: rng.next_range(40.0, 120.0) * k,
                rotation: rng.next_unit() * TAU,
                rotation_speed: rng.next_centered() * 0.02,
                kind: ShapeKind::ALL[rng.next_index(ShapeKind::ALL.len())],
                alpha: rng.next_range(0.3, 0.6),
                hue: pick_hue(rng),
                distortion: 0.0,
            })
            .collect();

        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                position: Point::new(rng.next_unit() * w, rng.next_unit() * h),
                velocity: Point::new(rng.next_centered() * 2.0 * k, rng.next_centered() * 2.0 * k),
                size: rng.next_range(1.0, 4.0) * k,
                alpha: rng.next_range(0.2, 1.0),
                hue: pick_hue(rng),
            })
            .collect();
    }

    fn draw(&mut self, params: &HallucinationParams, frame: u64, surface: &mut dyn Surface, rng: &mut dyn RandomSource) {
        let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));
        let k = reference_scale(surface.width(), surface.height(), FIELD_WIDTH, FIELD_HEIGHT);
        let f = frame as f64;
        let instability = (100.0 - params.lucidity) / 100.0;
        let chaos = if params.feedback_loop { 1.5 } else { 0.5 };
        let noise = params.noise_gain / 100.0;

        surface.fill(Rgba::with_alpha(0, 0, 0, 0.1 + instability * 0.2));

        if noise > 0.1 {
            let speck = Rgba::with_alpha(0, 255, 100, noise * 0.05);
            for _ in 0..20 {
                let (x, y) = (rng.next_unit() * w, rng.next_unit() * h);
                surface.fill_rect(x, y, 2.0, 2.0, speck);
            }
        }

        for p in self.particles.iter_mut() {
            p.position.x += p.velocity.x * (1.0 + chaos * 0.5);
            p.position.y += p.velocity.y * (1.0 + chaos * 0.5);

            if params.feedback_loop {
                p.velocity.x += rng.next_centered() * 0.5 * k;
                p.velocity.y += rng.next_centered() * 0.5 * k;
            }

            if p.position.x < 0.0 || p.position.x > w {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > h {
                p.velocity.y = -p.velocity.y;
            }
            p.position.x = p.position.x.clamp(0.0, w);
            p.position.y = p.position.y.clamp(0.0, h);

            let color = Hsla::new(p.hue, 100.0, 60.0, p.alpha * params.confidence);
            surface.fill_circle(p.position, p.size, color.to_rgba());
        }

        for shape in self.shapes.iter_mut() {
            shape.rotation += shape.rotation_speed * (1.0 + chaos);
            shape.distortion = instability * params.error_amplification * (f * 0.05).sin();
            // reference coordinates
            let (rx, ry) = (shape.position.x / k, shape.position.y / k);

            let transform = Transform::translation(shape.position.x, shape.position.y)
                .rotate(shape.rotation)
                .translate(
                    (f * 0.03 + rx).sin() * shape.distortion * 10.0 * k,
                    (f * 0.03 + ry).cos() * shape.distortion * 10.0 * k,
                );
            let mut stroke = |offset: Point, color: Hsla| {
                let outline: Vec<Point> = shape
                    .kind
                    .outline(shape.size, offset)
                    .into_iter()
                    .map(|p| transform.apply(p))
                    .collect();
                surface.stroke_polyline(&outline, true, color.to_rgba(), 2.0 * k);
            };

            if params.feedback_loop {
                let ghost = 2.0 * k;
                stroke(Point::new(-ghost, -ghost), Hsla::new(0.0, 100.0, 50.0, shape.alpha * 0.3));
                stroke(Point::new(ghost, ghost), Hsla::new(180.0, 100.0, 50.0, shape.alpha * 0.3));
            }
            stroke(Point::default(), Hsla::new(shape.hue, 100.0, 60.0, shape.alpha));
        }

        let step = (5.0 * k).max(1.0);
        let mut wave = Vec::with_capacity((w / step) as usize + 1);
        let mut x = 0.0;
        while x < w {
            let rx = x / k;
            let y = h / 2.0
                + ((rx * 0.02 + f * 0.05).sin() * 30.0 * (1.0 + instability)
                    + (rx * 0.05 + f * 0.03).sin() * 20.0 * chaos
                    + rng.next_centered() * noise * 20.0)
                    * k;
            wave.push(Point::new(x, y));
            x += step;
        }
        let wave_color = Hsla::new(GREEN_HUE, 100.0, 60.0, params.confidence * 0.8);
        surface.stroke_polyline(&wave, false, wave_color.to_rgba(), 2.0 * k);

        if params.feedback_loop && rng.next_unit() > 0.9 {
            let y = rng.next_unit() * h;
            let strip = rng.next_range(10.0, 60.0) * k;
            let dx = rng.next_centered() * 20.0 * k;
            surface.shift_strip(y, strip, dx);
        }
    }
}
