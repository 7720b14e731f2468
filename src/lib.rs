// src/lib.rs

//! `glitchscope` - Parameter-driven glitch visuals
//!
//! This library models the control panel of a decorative "quantum neural
//! network" display: a handful of user controls, a classifier that labels the
//! system `stable`, `transition` or `chaos`, a per-frame procedural renderer,
//! and a hook that announces every control change to optional listeners.

pub mod core;
pub mod classifier;
pub mod store;
pub mod broadcast;
pub mod entropy;
pub mod surface;
pub mod scenes;
pub mod animation;
pub mod panel;
pub mod status;
pub mod phase_cube;
pub mod config;

// Re-export the most common types for easier top-level use
pub use crate::core::{AsciiMode, ColorIndicator, GlitchError, Hsla, ParameterChange, ParameterName, ParameterSet, ParameterValue, Rgba};
pub use classifier::{SystemState, classify};
pub use store::ParameterStore;
pub use broadcast::{Broadcaster, ListenerId, ParameterUpdate};
pub use entropy::{RandomSource, ScriptedSource, SeededSource};
pub use surface::{Framebuffer, Point, Surface};
pub use scenes::{GlitchScene, HallucinationParams, HallucinationScene, Scene};
pub use animation::{AnimationLoop, FrameHost, LoopStatus, ManualHost, PacedHost, StopHandle};
pub use panel::GlitchPanel;
pub use status::StatusLine;
pub use phase_cube::{PhaseCube, PhaseCubeConfig};
pub use config::PanelConfig;

// Example 1: Classifying and broadcasting control changes
// Every setter clamps, reclassifies, then notifies listeners with the
// post-mutation snapshot.
/// ```
/// use glitchscope::{GlitchPanel, PanelConfig, SystemState, GlitchError};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let mut panel = GlitchPanel::new(PanelConfig::default())?;
/// assert_eq!(panel.system_state(), SystemState::Stable);
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// panel.subscribe(move |update| sink.borrow_mut().push(update.to_string()));
///
/// // Lucidity is clamped into [0, 1] before anything else sees it.
/// assert_eq!(panel.set_lucidity(-2.0), SystemState::Chaos);
/// assert_eq!(panel.set_lucidity(0.45), SystemState::Transition);
/// // Feedback wins over high lucidity.
/// panel.set_lucidity(0.9);
/// assert_eq!(panel.set_feedback_loop(true), SystemState::Chaos);
///
/// assert_eq!(seen.borrow()[0], "lucidity:0.00");
/// assert_eq!(seen.borrow().len(), 4);
/// # Ok::<(), GlitchError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Driving the preview animation into a framebuffer
// A seeded source makes the frames reproducible.
/// ```
/// use glitchscope::{AnimationLoop, Framebuffer, GlitchScene, LoopStatus, ManualHost, ParameterSet, SeededSource, GlitchError};
///
/// let mut surface = Framebuffer::new(280, 200)?;
/// let mut animation = AnimationLoop::new(GlitchScene::new(), Box::new(SeededSource::new(42)));
///
/// assert_eq!(animation.attach(Some(&surface)), LoopStatus::Running);
/// let params = ParameterSet { feedback_loop: true, ..ParameterSet::default() };
/// let drawn = animation.run_frames(&mut ManualHost::new(), &params, &mut surface, 30);
///
/// assert_eq!(drawn, 30);
/// assert_eq!(animation.frame(), 30);
///
/// animation.detach();
/// assert_eq!(animation.tick(&params, &mut surface), LoopStatus::Stopped);
/// assert_eq!(animation.frame(), 30);
/// # Ok::<(), GlitchError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
