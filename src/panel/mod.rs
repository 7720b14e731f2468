// src/panel/mod.rs

//! The glitch control panel: parameter store, system-state classifier,
//! broadcast hook and color indicator behind one owner.
//!
//! Control flow for a single mutation is: clamp and store, reclassify,
//! broadcast. A listener therefore always observes the post-mutation snapshot
//! and `system_state()` already reflects it.

use crate::animation::AnimationLoop;
use crate::broadcast::{Broadcaster, ListenerId, ParameterUpdate};
use crate::classifier::{SystemState, classify};
use crate::config::PanelConfig;
use crate::core::{AsciiMode, ColorIndicator, GlitchError, ParameterChange, ParameterSet};
use crate::entropy::{RandomSource, SeededSource};
use crate::scenes::GlitchScene;
use crate::store::ParameterStore;
use crate::surface::Framebuffer;
use tracing::debug;

/// Owner of the live parameters for one UI session.
#[derive(Debug)]
pub struct GlitchPanel {
    config: PanelConfig,
    store: ParameterStore,
    state: SystemState,
    broadcaster: Broadcaster,
}

impl GlitchPanel {
    /// Builds a panel from a validated configuration.
    pub fn new(config: PanelConfig) -> Result<Self, GlitchError> {
        config.validate()?;
        let store = ParameterStore::new(config.initial);
        let state = classify(store.params());
        Ok(Self {
            config,
            store,
            state,
            broadcaster: Broadcaster::new(),
        })
    }

    pub fn set_feedback_loop(&mut self, engaged: bool) -> SystemState {
        self.apply(ParameterChange::FeedbackLoop(engaged))
    }

    pub fn set_lucidity(&mut self, lucidity: f64) -> SystemState {
        self.apply(ParameterChange::Lucidity(lucidity))
    }

    pub fn set_fractalization_depth(&mut self, depth: i64) -> SystemState {
        self.apply(ParameterChange::FractalDepth(depth))
    }

    pub fn set_color_phase(&mut self, degrees: i64) -> SystemState {
        self.apply(ParameterChange::ColorPhase(degrees))
    }

    pub fn set_ascii_mode(&mut self, mode: AsciiMode) -> SystemState {
        self.apply(ParameterChange::AsciiMode(mode))
    }

    /// Applies one control mutation: store, reclassify, broadcast.
    pub fn apply(&mut self, change: ParameterChange) -> SystemState {
        let update = self.store.apply(change);
        self.reclassify();
        self.broadcaster.emit(&update);
        self.state
    }

    /// Replaces every parameter at once. Attached loops restart on their next
    /// `sync_generation`. Bulk replacement is not broadcast.
    pub fn set_state(&mut self, params: ParameterSet) -> SystemState {
        self.store.replace(params);
        self.reclassify();
        self.state
    }

    /// Snapshot of the current parameters.
    pub fn get_state(&self) -> ParameterSet {
        self.store.snapshot()
    }

    pub fn params(&self) -> &ParameterSet {
        self.store.params()
    }

    pub fn system_state(&self) -> SystemState {
        self.state
    }

    /// Gradient and glow for the color-phase readout.
    pub fn color_indicator(&self) -> ColorIndicator {
        ColorIndicator::for_phase(self.store.params().color_phase_degrees)
    }

    /// Generation of the parameter set; see `ParameterStore::generation`.
    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    /// Registers a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ParameterUpdate) + 'static,
    {
        self.broadcaster.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.broadcaster.unsubscribe(id)
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// A framebuffer sized per the configuration.
    pub fn framebuffer(&self) -> Result<Framebuffer, GlitchError> {
        Framebuffer::new(self.config.width, self.config.height)
    }

    /// A fresh, unattached preview loop using the configured seed and glitch chance.
    pub fn preview_loop(&self) -> AnimationLoop<GlitchScene> {
        let rng: Box<dyn RandomSource> = match self.config.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(SeededSource::from_os()),
        };
        AnimationLoop::new(GlitchScene::with_glitch_probability(self.config.glitch_probability), rng)
    }

    fn reclassify(&mut self) {
        let next = classify(self.store.params());
        if next != self.state {
            debug!(from = self.state.as_str(), to = next.as_str(), "system state changed");
        }
        self.state = next;
    }
}

impl Default for GlitchPanel {
    fn default() -> Self {
        let config = PanelConfig::default();
        let store = ParameterStore::new(config.initial);
        Self {
            state: classify(store.params()),
            config,
            store,
            broadcaster: Broadcaster::new(),
        }
    }
}
