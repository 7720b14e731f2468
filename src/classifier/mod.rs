// src/classifier/mod.rs

//! Maps a `ParameterSet` onto one of three discrete system states.
//!
//! The rule table is evaluated in a fixed order and the first match wins.
//! The clauses overlap (`feedback_loop` with high lucidity satisfies both the
//! chaos and the stable clause), so the order is part of the contract.

use crate::core::ParameterSet;
use serde::Serialize;
use std::fmt;

/// Lucidity strictly below this forces `Chaos`.
pub const CHAOS_LUCIDITY_BELOW: f64 = 0.3;
/// Lucidity strictly above this, with the feedback loop off, yields `Stable`.
pub const STABLE_LUCIDITY_ABOVE: f64 = 0.6;
/// Depth strictly above this forces `Chaos`.
pub const CHAOS_DEPTH_ABOVE: u8 = 6;

/// Derived label for the current parameters. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemState {
    Stable,
    Transition,
    Chaos,
}

impl SystemState {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemState::Stable => "stable",
            SystemState::Transition => "transition",
            SystemState::Chaos => "chaos",
        }
    }

    /// Upper-case label for status readouts.
    pub fn label(self) -> &'static str {
        match self {
            SystemState::Stable => "STABLE",
            SystemState::Transition => "TRANSITION",
            SystemState::Chaos => "CHAOS",
        }
    }

    /// CSS class of the status LED for web hosts.
    pub fn led_class(self) -> &'static str {
        match self {
            SystemState::Stable => "led-stable",
            SystemState::Transition => "led-transition",
            SystemState::Chaos => "led-chaos",
        }
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `params`. Pure: no state, no randomness, no side effects.
///
/// 1. feedback engaged, lucidity below 0.3 or depth above 6 → `Chaos`
/// 2. feedback off and lucidity above 0.6 → `Stable`
/// 3. anything else → `Transition`
pub fn classify(params: &ParameterSet) -> SystemState {
    if params.feedback_loop
        || params.lucidity < CHAOS_LUCIDITY_BELOW
        || params.fractalization_depth > CHAOS_DEPTH_ABOVE
    {
        SystemState::Chaos
    } else if !params.feedback_loop && params.lucidity > STABLE_LUCIDITY_ABOVE {
        SystemState::Stable
    } else {
        SystemState::Transition
    }
}
