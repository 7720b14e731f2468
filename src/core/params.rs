// src/core/params.rs

use super::constants::glitch_constants::{MAX_FRACTAL_DEPTH, MIN_FRACTAL_DEPTH};
use super::error::GlitchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Density of the character-noise overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AsciiMode {
    /// No overlay.
    #[default]
    Off,
    /// Coarse grid, faint glyphs.
    Low,
    /// Fine grid, bright glyphs.
    High,
}

impl AsciiMode {
    /// Grid spacing in reference pixels, or `None` when the overlay is off.
    pub fn cell_spacing(self) -> Option<f64> {
        match self {
            AsciiMode::Off => None,
            AsciiMode::Low => Some(10.0),
            AsciiMode::High => Some(5.0),
        }
    }

    /// Glyph opacity for this mode.
    pub fn glyph_alpha(self) -> f64 {
        match self {
            AsciiMode::Off => 0.0,
            AsciiMode::Low => 0.3,
            AsciiMode::High => 0.6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AsciiMode::Off => "OFF",
            AsciiMode::Low => "LOW",
            AsciiMode::High => "HIGH",
        }
    }
}

impl fmt::Display for AsciiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AsciiMode {
    type Err = GlitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OFF" => Ok(AsciiMode::Off),
            "LOW" => Ok(AsciiMode::Low),
            "HIGH" => Ok(AsciiMode::High),
            other => Err(GlitchError::InvalidConfig {
                message: format!("unknown ascii overlay mode '{}'", other),
            }),
        }
    }
}

/// The current values of all user-adjustable visual controls.
///
/// Fields are plain data: range limits are applied by the clamping helpers
/// (used by `ParameterStore`) rather than by the type itself, so the
/// classifier and the scenes read whatever they are handed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    /// Self-oscillation toggle. Forces the `chaos` state when engaged.
    pub feedback_loop: bool,
    /// Signal clarity in `[0, 1]`.
    pub lucidity: f64,
    /// Number of nested polygon layers in `[1, 9]`.
    pub fractalization_depth: u8,
    /// Base hue in degrees, `[0, 360)`.
    pub color_phase_degrees: u16,
    /// Character-noise overlay density.
    pub ascii_overlay_mode: AsciiMode,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            feedback_loop: false,
            lucidity: 0.75,
            fractalization_depth: 3,
            color_phase_degrees: 180,
            ascii_overlay_mode: AsciiMode::Off,
        }
    }
}

impl ParameterSet {
    /// Returns a copy with every field pulled back into its declared range.
    pub fn clamped(self) -> Self {
        Self {
            lucidity: clamp_lucidity(self.lucidity),
            fractalization_depth: clamp_depth(i64::from(self.fractalization_depth)),
            color_phase_degrees: wrap_phase(i64::from(self.color_phase_degrees)),
            ..self
        }
    }

    /// The feedback flag as a number: `1.0` when engaged, `0.0` otherwise.
    pub fn chaos_factor(&self) -> f64 {
        if self.feedback_loop { 1.0 } else { 0.0 }
    }

    /// Depth normalized against the deepest setting.
    pub fn fractal_intensity(&self) -> f64 {
        f64::from(self.fractalization_depth) / f64::from(MAX_FRACTAL_DEPTH)
    }

    /// Base hue in degrees; inverted by half a turn while the feedback loop runs.
    pub fn base_hue(&self) -> f64 {
        let phase = f64::from(self.color_phase_degrees);
        if self.feedback_loop {
            (phase + 180.0) % 360.0
        } else {
            phase
        }
    }
}

/// Clamps lucidity into `[0, 1]`. NaN collapses to `0`.
pub fn clamp_lucidity(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Clamps a depth request into `[1, 9]`.
pub fn clamp_depth(value: i64) -> u8 {
    value.clamp(i64::from(MIN_FRACTAL_DEPTH), i64::from(MAX_FRACTAL_DEPTH)) as u8
}

/// Reduces any angle in degrees into `[0, 360)`.
pub fn wrap_phase(value: i64) -> u16 {
    value.rem_euclid(360) as u16
}

/// Names of the controls, as announced on the notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterName {
    FeedbackLoop,
    Lucidity,
    FractalDepth,
    ColorPhase,
    AsciiMode,
}

impl ParameterName {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterName::FeedbackLoop => "feedback-loop",
            ParameterName::Lucidity => "lucidity",
            ParameterName::FractalDepth => "fractal-depth",
            ParameterName::ColorPhase => "color-phase",
            ParameterName::AsciiMode => "ascii-mode",
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loosely typed value carried by a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Flag(bool),
    Scalar(f64),
    Integer(i64),
    Mode(AsciiMode),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Flag(flag) => write!(f, "{}", flag),
            ParameterValue::Scalar(value) => write!(f, "{:.2}", value),
            ParameterValue::Integer(value) => write!(f, "{}", value),
            ParameterValue::Mode(mode) => write!(f, "{}", mode),
        }
    }
}

/// A single control mutation as delivered by an input handler, before clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    FeedbackLoop(bool),
    Lucidity(f64),
    FractalDepth(i64),
    ColorPhase(i64),
    AsciiMode(AsciiMode),
}

impl ParameterChange {
    /// The control this change targets.
    pub fn name(&self) -> ParameterName {
        match self {
            ParameterChange::FeedbackLoop(_) => ParameterName::FeedbackLoop,
            ParameterChange::Lucidity(_) => ParameterName::Lucidity,
            ParameterChange::FractalDepth(_) => ParameterName::FractalDepth,
            ParameterChange::ColorPhase(_) => ParameterName::ColorPhase,
            ParameterChange::AsciiMode(_) => ParameterName::AsciiMode,
        }
    }

    /// Writes the clamped value into `params` and returns what was stored.
    pub(crate) fn apply_to(self, params: &mut ParameterSet) -> ParameterValue {
        match self {
            ParameterChange::FeedbackLoop(flag) => {
                params.feedback_loop = flag;
                ParameterValue::Flag(flag)
            }
            ParameterChange::Lucidity(value) => {
                params.lucidity = clamp_lucidity(value);
                ParameterValue::Scalar(params.lucidity)
            }
            ParameterChange::FractalDepth(value) => {
                params.fractalization_depth = clamp_depth(value);
                ParameterValue::Integer(i64::from(params.fractalization_depth))
            }
            ParameterChange::ColorPhase(value) => {
                params.color_phase_degrees = wrap_phase(value);
                ParameterValue::Integer(i64::from(params.color_phase_degrees))
            }
            ParameterChange::AsciiMode(mode) => {
                params.ascii_overlay_mode = mode;
                ParameterValue::Mode(mode)
            }
        }
    }
}
