// src/scenes/mod.rs

//! Procedural scenes driven by the animation loop.
//!
//! A scene owns whatever per-shape physical state it needs and paints one
//! frame per `draw` call. It never schedules itself; the `AnimationLoop` owns
//! the frame counter and decides when the next frame happens.

mod glitch;
mod hallucination;
mod shapes;

pub use glitch::{GlitchScene, LAYER_COUNT};
pub use hallucination::{FieldShape, HallucinationParams, HallucinationScene, Particle};
pub use shapes::ShapeKind;

use crate::entropy::RandomSource;
use crate::surface::Surface;

/// A per-frame painter with resettable state.
pub trait Scene {
    /// The parameter block read on every frame.
    type Params;

    /// Re-initializes per-shape state for a surface of the given size.
    /// Called whenever the loop (re)attaches to a surface.
    fn reset(&mut self, width: u32, height: u32, rng: &mut dyn RandomSource);

    /// Paints frame number `frame` onto `surface`.
    fn draw(&mut self, params: &Self::Params, frame: u64, surface: &mut dyn Surface, rng: &mut dyn RandomSource);
}
