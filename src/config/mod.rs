// src/config/mod.rs

//! Panel configuration.

use crate::core::constants::glitch_constants::{DEFAULT_GLITCH_PROBABILITY, PREVIEW_HEIGHT, PREVIEW_WIDTH};
use crate::core::{GlitchError, ParameterSet};
use serde::{Deserialize, Serialize};

/// Settings for a `GlitchPanel` and the loops it spawns.
///
/// Every field has a default, so `{}` is a valid configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelConfig {
    /// Parameters the panel boots with.
    pub initial: ParameterSet,
    /// Drawing surface width in pixels.
    pub width: u32,
    /// Drawing surface height in pixels.
    pub height: u32,
    /// Per-frame strip-glitch chance while the feedback loop runs.
    pub glitch_probability: f64,
    /// Seed for reproducible visuals. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial: ParameterSet::default(),
            width: PREVIEW_WIDTH as u32,
            height: PREVIEW_HEIGHT as u32,
            glitch_probability: DEFAULT_GLITCH_PROBABILITY,
            seed: None,
        }
    }
}

impl PanelConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self, GlitchError> {
        let config: PanelConfig =
            serde_json::from_str(source).map_err(|e| GlitchError::InvalidConfig { message: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks surface dimensions and the glitch probability.
    pub fn validate(&self) -> Result<(), GlitchError> {
        if self.width == 0 || self.height == 0 {
            return Err(GlitchError::InvalidDimensions { width: self.width, height: self.height });
        }
        if !(0.0..=1.0).contains(&self.glitch_probability) {
            return Err(GlitchError::InvalidConfig {
                message: format!("glitch probability {} is outside [0, 1]", self.glitch_probability),
            });
        }
        Ok(())
    }
}
