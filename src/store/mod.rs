// src/store/mod.rs

//! Explicitly owned parameter state.
//!
//! The store is the only writer of the `ParameterSet`. Every mutation is
//! clamped on the way in, so readers (classifier, scenes) can trust the ranges
//! without validating.

use crate::broadcast::ParameterUpdate;
use crate::core::{ParameterChange, ParameterSet};
use tracing::trace;

/// Holds the current `ParameterSet` and a generation counter that changes
/// whenever the whole set is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    params: ParameterSet,
    generation: u64,
}

impl ParameterStore {
    /// Creates a store seeded with `initial` (clamped).
    pub fn new(initial: ParameterSet) -> Self {
        Self {
            params: initial.clamped(),
            generation: 0,
        }
    }

    /// Read-only view of the current parameters.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Copy of the current parameters.
    pub fn snapshot(&self) -> ParameterSet {
        self.params
    }

    /// Incremented by every `replace`; single-field mutations leave it untouched.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies one control mutation and describes it for the broadcast hook.
    pub fn apply(&mut self, change: ParameterChange) -> ParameterUpdate {
        let value = change.apply_to(&mut self.params);
        trace!(parameter = change.name().as_str(), value = %value, "parameter stored");
        ParameterUpdate::now(change.name(), value, self.params)
    }

    /// Replaces the whole set from scratch (clamped) and starts a new generation.
    pub fn replace(&mut self, params: ParameterSet) {
        self.params = params.clamped();
        self.generation += 1;
        trace!(generation = self.generation, "parameter set replaced");
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(ParameterSet::default())
    }
}
