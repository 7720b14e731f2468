// tests/animation_tests.rs

use glitchscope::core::Rgba;
use glitchscope::{
    AnimationLoop, AsciiMode, Framebuffer, GlitchScene, HallucinationParams, HallucinationScene, LoopStatus,
    ManualHost, ParameterSet, Point, ScriptedSource, SeededSource, Surface,
};
use std::cell::Cell;
use std::rc::Rc;

/// Surface that only counts what it is asked to draw.
struct CountingSurface {
    width: u32,
    height: u32,
    fills: Rc<Cell<u64>>,
    strokes: u64,
    glyphs: u64,
    shifts: u64,
}

impl CountingSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fills: Rc::new(Cell::new(0)),
            strokes: 0,
            glyphs: 0,
            shifts: 0,
        }
    }
}

impl Surface for CountingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _color: Rgba) {
        self.fills.set(self.fills.get() + 1);
    }

    fn stroke_polyline(&mut self, _points: &[Point], _closed: bool, _color: Rgba, _line_width: f64) {
        self.strokes += 1;
    }

    fn fill_circle(&mut self, _center: Point, _radius: f64, _color: Rgba) {}

    fn draw_glyph(&mut self, _glyph: char, _origin: Point, _size: f64, _color: Rgba) {
        self.glyphs += 1;
    }

    fn shift_strip(&mut self, _y: f64, _height: f64, _dx: f64) {
        self.shifts += 1;
    }
}

fn preview_loop(seed: u64) -> AnimationLoop<GlitchScene> {
    AnimationLoop::new(GlitchScene::new(), Box::new(SeededSource::new(seed)))
}

#[test]
fn test_frame_counter_increments_by_one_per_draw() {
    let mut surface = CountingSurface::new(280, 200);
    let mut animation = preview_loop(1);
    animation.attach(Some(&surface));

    let params = ParameterSet::default();
    let mut previous = animation.frame();
    for _ in 0..500 {
        animation.tick(&params, &mut surface);
        assert_eq!(animation.frame(), previous + 1);
        previous = animation.frame();
    }
    // one fade fill per frame
    assert_eq!(surface.fills.get(), 500);
}

#[test]
fn test_stopping_yields_zero_further_draws() {
    let mut surface = CountingSurface::new(280, 200);
    let fills = Rc::clone(&surface.fills);
    let mut animation = preview_loop(2);
    animation.attach(Some(&surface));
    let params = ParameterSet::default();

    let drawn = animation.run_frames(&mut ManualHost::new(), &params, &mut surface, 12);
    assert_eq!(drawn, 12);
    let fills_at_teardown = fills.get();

    animation.stop_handle().stop();
    let mut host = ManualHost::new();
    assert_eq!(animation.run_frames(&mut host, &params, &mut surface, 100), 0);
    for _ in 0..100 {
        assert_eq!(animation.tick(&params, &mut surface), LoopStatus::Stopped);
    }

    assert_eq!(fills.get(), fills_at_teardown);
    assert_eq!(animation.frame(), 12);
    assert_eq!(host.callbacks(), 0);
}

#[test]
fn test_missing_surface_never_starts() {
    let mut animation = preview_loop(3);
    let mut surface = CountingSurface::new(280, 200);

    assert_eq!(animation.attach(None), LoopStatus::NotStarted);
    assert_eq!(animation.run_frames(&mut ManualHost::new(), &ParameterSet::default(), &mut surface, 5), 0);
    assert_eq!(surface.fills.get(), 0);
}

#[test]
fn test_depth_controls_layer_strokes() {
    let mut surface = CountingSurface::new(280, 200);
    let mut animation = preview_loop(4);
    animation.attach(Some(&surface));

    let params = ParameterSet { fractalization_depth: 7, ..ParameterSet::default() };
    animation.tick(&params, &mut surface);
    // seven hexagons plus the waveform
    assert_eq!(surface.strokes, 8);
}

#[test]
fn test_overlay_density_follows_mode_and_lucidity() {
    let count_glyphs = |mode: AsciiMode, lucidity: f64| {
        let mut surface = CountingSurface::new(280, 200);
        let mut animation = AnimationLoop::new(GlitchScene::new(), Box::new(ScriptedSource::constant(0.5)));
        animation.attach(Some(&surface));
        let params = ParameterSet { ascii_overlay_mode: mode, lucidity, ..ParameterSet::default() };
        animation.tick(&params, &mut surface);
        surface.glyphs
    };

    assert_eq!(count_glyphs(AsciiMode::Off, 0.0), 0);
    assert_eq!(count_glyphs(AsciiMode::Low, 0.4), 28 * 20);
    assert_eq!(count_glyphs(AsciiMode::High, 0.4), 56 * 40);
    // a roll of 0.5 never beats lucidity 0.8, so every cell is skipped
    assert_eq!(count_glyphs(AsciiMode::High, 0.8), 0);
}

#[test]
fn test_glitch_fires_only_with_feedback() {
    let run = |feedback_loop: bool| {
        let mut surface = CountingSurface::new(280, 200);
        let mut animation = AnimationLoop::new(GlitchScene::new(), Box::new(ScriptedSource::constant(0.95)));
        animation.attach(Some(&surface));
        let params = ParameterSet { feedback_loop, ..ParameterSet::default() };
        animation.run_frames(&mut ManualHost::new(), &params, &mut surface, 10);
        surface.shifts
    };

    assert_eq!(run(false), 0);
    assert_eq!(run(true), 10);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let render = |seed: u64| {
        let mut surface = Framebuffer::new(140, 100).unwrap();
        let mut animation = preview_loop(seed);
        animation.attach(Some(&surface));
        let params = ParameterSet {
            feedback_loop: true,
            lucidity: 0.2,
            ascii_overlay_mode: AsciiMode::High,
            ..ParameterSet::default()
        };
        animation.run_frames(&mut ManualHost::new(), &params, &mut surface, 20);
        surface
    };

    assert_eq!(render(99).pixels(), render(99).pixels());
}

#[test]
fn test_scene_scales_with_surface() {
    let mut small = Framebuffer::new(280, 200).unwrap();
    let mut large = Framebuffer::new(700, 500).unwrap();
    let params = ParameterSet::default();
    for surface in [&mut small, &mut large] {
        let mut animation = preview_loop(5);
        animation.attach(Some(&*surface));
        animation.tick(&params, surface);
        assert_eq!(surface.painted_pixels(), surface.pixels().len());
    }
}

#[test]
fn test_hallucination_field_rerolls_on_reattach() {
    let mut surface = Framebuffer::new(700, 500).unwrap();
    let mut animation = AnimationLoop::new(HallucinationScene::new(), Box::new(SeededSource::new(77)));
    animation.attach(Some(&surface));
    let first_roll: Vec<Point> = animation.scene().shapes().iter().map(|s| s.position).collect();

    animation.run_frames(&mut ManualHost::new(), &HallucinationParams::default(), &mut surface, 15);
    assert_eq!(animation.frame(), 15);
    animation.detach();

    animation.attach(Some(&surface));
    let second_roll: Vec<Point> = animation.scene().shapes().iter().map(|s| s.position).collect();

    assert_eq!(animation.frame(), 0);
    assert_eq!(second_roll.len(), 5);
    assert_ne!(first_roll, second_roll);
}
