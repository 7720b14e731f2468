// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod params;
pub mod color;

// Re-export public types for convenient access via `glitchscope::core::TypeName`
pub use error::GlitchError;
pub use params::{
    AsciiMode, ParameterChange, ParameterName, ParameterSet, ParameterValue, clamp_depth,
    clamp_lucidity, wrap_phase,
};
pub use color::{ColorIndicator, Hsla, Rgba};

pub mod constants;
pub use constants::glitch_constants::{GLYPH_PALETTE, MAX_FRACTAL_DEPTH, MIN_FRACTAL_DEPTH, TAU}; // Re-export
