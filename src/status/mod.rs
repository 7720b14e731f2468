// src/status/mod.rs

//! Rotating status readout with an occasional character-corruption glitch.

use crate::entropy::RandomSource;
use std::time::Duration;

/// Messages the status line rotates through. `{confidence}` is replaced by the
/// current confidence as a whole percentage.
pub const STATUS_MESSAGES: [&str; 10] = [
    "interpreting self-noise…",
    "signal confidence: {confidence}%",
    "hallucination stable",
    "observer feedback corrupted",
    "pattern recognition nominal",
    "recursive loop detected",
    "sensory drift: minimal",
    "reality anchor holding",
    "perception matrix synchronized",
    "delusion threshold: acceptable",
];

/// Picks a message uniformly and fills in the confidence placeholder.
pub fn next_message(confidence: f64, rng: &mut dyn RandomSource) -> String {
    let template = STATUS_MESSAGES[rng.next_index(STATUS_MESSAGES.len())];
    let percent = (confidence * 100.0).floor().max(0.0) as u64;
    template.replace("{confidence}", &percent.to_string())
}

/// Replaces each character with probability 0.3 by a random printable ASCII
/// character (`!` through `~`).
pub fn glitch_text(text: &str, rng: &mut dyn RandomSource) -> String {
    text.chars()
        .map(|c| {
            if rng.next_unit() > 0.7 {
                char::from(33 + rng.next_index(94) as u8)
            } else {
                c
            }
        })
        .collect()
}

/// Time between message rotations.
pub fn rotation_interval(feedback_loop: bool) -> Duration {
    if feedback_loop { Duration::from_secs(2) } else { Duration::from_secs(4) }
}

/// Current message plus whether it is mid-glitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    message: String,
    glitching: bool,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            message: STATUS_MESSAGES[0].to_string(),
            glitching: false,
        }
    }

    /// Advances to the next message. With the feedback loop engaged a glitch
    /// burst starts with probability 0.3.
    pub fn rotate(&mut self, feedback_loop: bool, confidence: f64, rng: &mut dyn RandomSource) {
        self.message = next_message(confidence, rng);
        self.glitching = feedback_loop && rng.next_unit() > 0.7;
    }

    /// Ends a glitch burst.
    pub fn settle(&mut self) {
        self.glitching = false;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_glitching(&self) -> bool {
        self.glitching
    }

    /// Text to display right now: the message, corrupted while glitching.
    pub fn render(&self, rng: &mut dyn RandomSource) -> String {
        if self.glitching {
            glitch_text(&self.message, rng)
        } else {
            self.message.clone()
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
