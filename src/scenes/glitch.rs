//! The glitch-preview scene: nested rotating hexagons, a sine waveform, an
//! optional glyph-noise overlay and an occasional strip glitch.

use super::Scene;
use super::shapes::regular_polygon;
use crate::core::constants::glitch_constants::{DEFAULT_GLITCH_PROBABILITY, PREVIEW_HEIGHT, PREVIEW_WIDTH};
use crate::core::{GLYPH_PALETTE, Hsla, MAX_FRACTAL_DEPTH, ParameterSet, Rgba};
use crate::entropy::RandomSource;
use crate::surface::{Point, Surface, Transform, reference_scale};

/// One layer per possible depth.
pub const LAYER_COUNT: usize = MAX_FRACTAL_DEPTH as usize;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Layer {
    rotation: f64,
    rotation_speed: f64,
}

/// Paints the preview visual for a `ParameterSet`.
#[derive(Debug, Clone, PartialEq)]
pub struct GlitchScene {
    layers: Vec<Layer>,
    glitch_probability: f64,
}

impl GlitchScene {
    pub fn new() -> Self {
        Self::with_glitch_probability(DEFAULT_GLITCH_PROBABILITY)
    }

    /// Scene whose strip glitch fires with `probability` per frame (clamped to `[0, 1]`)
    /// while the feedback loop is engaged.
    pub fn with_glitch_probability(probability: f64) -> Self {
        Self {
            layers: initial_layers(),
            glitch_probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn glitch_probability(&self) -> f64 {
        self.glitch_probability
    }

    /// Accumulated rotation of layer `index`, in radians.
    pub fn layer_rotation(&self, index: usize) -> Option<f64> {
        self.layers.get(index).map(|layer| layer.rotation)
    }
}

impl Default for GlitchScene {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_layers() -> Vec<Layer> {
    (0..LAYER_COUNT)
        .map(|i| Layer {
            rotation: 0.0,
            rotation_speed: (i + 1) as f64 * 0.01,
        })
        .collect()
}

impl Scene for GlitchScene {
    type Params = ParameterSet;

    fn reset(&mut self, _width: u32, _height: u32, _rng: &mut dyn RandomSource) {
        self.layers = initial_layers();
    }

    fn draw(&mut self, params: &ParameterSet, frame: u64, surface: &mut dyn Surface, rng: &mut dyn RandomSource) {
        let (width, height) = (f64::from(surface.width()), f64::from(surface.height()));
        let k = reference_scale(surface.width(), surface.height(), PREVIEW_WIDTH, PREVIEW_HEIGHT);
        let f = frame as f64;
        let chaos = params.chaos_factor();
        let stability = params.lucidity;
        let intensity = params.fractal_intensity();
        let base_hue = params.base_hue();

        // 1. trailing fade
        surface.fill(Rgba::with_alpha(0, 0, 30, 0.2 + chaos * 0.3));

        // 2. nested hexagons
        let distort = (1.0 - stability) * 20.0 * chaos * k;
        for i in 0..usize::from(params.fractalization_depth) {
            let wobble_x = 1.0 + (f * 0.03 + i as f64).sin() * intensity * 0.3;
            let wobble_y = 1.0 + (f * 0.03 + i as f64).cos() * intensity * 0.3;
            let layer = &mut self.layers[i % LAYER_COUNT];
            let transform = Transform::translation(width / 2.0, height / 2.0)
                .rotate(layer.rotation)
                .scale(1.0 - i as f64 * 0.1)
                .translate((f * 0.05).sin() * distort, (f * 0.05).cos() * distort);

            let radius = (40.0 + i as f64 * 10.0) * k;
            let outline: Vec<Point> = regular_polygon(6, radius * wobble_x, radius * wobble_y, Point::default())
                .into_iter()
                .map(|p| transform.apply(p))
                .collect();
            let color = Hsla::new((base_hue + i as f64 * 40.0) % 360.0, 80.0, 60.0, 0.3 + stability * 0.4);
            surface.stroke_polyline(&outline, true, color.to_rgba(), 2.0 * k * transform.linear_scale());

            layer.rotation += layer.rotation_speed * (1.0 + chaos);
        }

        // 3. waveform
        let step = (3.0 * k).max(1.0);
        let mut wave = Vec::with_capacity((width / step) as usize + 1);
        let mut x = 0.0;
        while x < width {
            let rx = x / k;
            let y = height / 2.0
                + ((rx * 0.05 + f * 0.05).sin() * 15.0 * (1.0 + chaos)
                    + (rx * 0.1 + f * 0.03).sin() * 10.0 * intensity)
                    * k;
            wave.push(Point::new(x, y));
            x += step;
        }
        let wave_color = Hsla::new(base_hue, 100.0, 60.0, stability * 0.8);
        surface.stroke_polyline(&wave, false, wave_color.to_rgba(), 1.5 * k);

        // 4. glyph noise; a cell is skipped with probability `lucidity`
        if let Some(spacing) = params.ascii_overlay_mode.cell_spacing() {
            let spacing = (spacing * k).max(1.0);
            let glyph_color = Hsla::new(base_hue, 100.0, 70.0, params.ascii_overlay_mode.glyph_alpha()).to_rgba();
            let mut y = 0.0;
            while y < height {
                let mut x = 0.0;
                while x < width {
                    if rng.next_unit() > stability {
                        let glyph = GLYPH_PALETTE[rng.next_index(GLYPH_PALETTE.len())];
                        surface.draw_glyph(glyph, Point::new(x, y), 10.0 * k, glyph_color);
                    }
                    x += spacing;
                }
                y += spacing;
            }
        }

        // 5. strip glitch
        if params.feedback_loop && rng.next_unit() > 1.0 - self.glitch_probability {
            let y = rng.next_unit() * height;
            let dx = rng.next_centered() * 30.0 * k;
            surface.shift_strip(y, 20.0 * k, dx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AsciiMode;
    use crate::entropy::ScriptedSource;
    use crate::surface::Framebuffer;

    fn preview() -> Framebuffer {
        Framebuffer::new(280, 200).unwrap()
    }

    #[test]
    fn calm_frame_draws_no_randomness() {
        let mut scene = GlitchScene::new();
        let mut rng = ScriptedSource::constant(0.5);
        let mut fb = preview();
        scene.draw(&ParameterSet::default(), 0, &mut fb, &mut rng);

        assert_eq!(rng.draws(), 0);
        assert_eq!(fb.painted_pixels(), 280 * 200);
    }

    #[test]
    fn layers_rotate_faster_under_feedback() {
        let mut calm = GlitchScene::new();
        let mut wild = GlitchScene::new();
        let mut rng = ScriptedSource::constant(0.0);
        let mut fb = preview();

        let params = ParameterSet { fractalization_depth: 2, ..ParameterSet::default() };
        calm.draw(&params, 0, &mut fb, &mut rng);
        wild.draw(&ParameterSet { feedback_loop: true, ..params }, 0, &mut fb, &mut rng);

        assert!((calm.layer_rotation(1).unwrap() - 0.02).abs() < 1e-12);
        assert!((wild.layer_rotation(1).unwrap() - 0.04).abs() < 1e-12);
        // layers beyond the depth stay put
        assert_eq!(calm.layer_rotation(2), Some(0.0));
    }

    #[test]
    fn overlay_draws_one_decision_per_cell() {
        let mut scene = GlitchScene::new();
        // 0.5 never beats lucidity 0.75, so every cell is skipped after one draw
        let mut rng = ScriptedSource::constant(0.5);
        let mut fb = preview();
        let params = ParameterSet { ascii_overlay_mode: AsciiMode::Low, ..ParameterSet::default() };
        scene.draw(&params, 0, &mut fb, &mut rng);

        assert_eq!(rng.draws(), 28 * 20);
    }

    #[test]
    fn overlay_picks_glyphs_when_lucidity_is_low() {
        let mut scene = GlitchScene::new();
        let mut rng = ScriptedSource::constant(0.5);
        let mut fb = preview();
        let params = ParameterSet {
            lucidity: 0.1,
            ascii_overlay_mode: AsciiMode::High,
            ..ParameterSet::default()
        };
        scene.draw(&params, 0, &mut fb, &mut rng);

        // every cell draws twice: the skip decision and the glyph index
        assert_eq!(rng.draws(), 56 * 40 * 2);
    }

    #[test]
    fn glitch_needs_feedback_and_a_high_roll() {
        let params = ParameterSet { feedback_loop: true, ..ParameterSet::default() };

        let mut low_roll = ScriptedSource::constant(0.5);
        GlitchScene::new().draw(&params, 3, &mut preview(), &mut low_roll);
        assert_eq!(low_roll.draws(), 1);

        let mut high_roll = ScriptedSource::new(vec![0.9, 0.25, 0.75]);
        GlitchScene::new().draw(&params, 3, &mut preview(), &mut high_roll);
        assert_eq!(high_roll.draws(), 3);
    }

    #[test]
    fn reset_rewinds_layer_rotation() {
        let mut scene = GlitchScene::new();
        let mut rng = ScriptedSource::constant(0.0);
        let mut fb = preview();
        scene.draw(&ParameterSet::default(), 0, &mut fb, &mut rng);
        assert!(scene.layer_rotation(0).unwrap() > 0.0);

        scene.reset(280, 200, &mut rng);
        assert_eq!(scene.layer_rotation(0), Some(0.0));
    }

    #[test]
    fn glitch_probability_is_clamped() {
        assert_eq!(GlitchScene::with_glitch_probability(4.0).glitch_probability(), 1.0);
        assert_eq!(GlitchScene::default().glitch_probability(), 0.15);
    }
}
