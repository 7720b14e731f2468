// src/animation/mod.rs

//! The per-frame redraw loop.
//!
//! The loop is a cooperative, single-threaded task: each `tick` paints at most
//! one frame and, unless the loop was stopped in the meantime, requests the
//! next one. Stopping is nothing more than declining to request another frame,
//! so a torn-down view never receives a late draw.

mod host;

pub use host::{FrameHost, ManualHost, PacedHost};

use crate::entropy::RandomSource;
use crate::scenes::Scene;
use crate::surface::Surface;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Lifecycle of an `AnimationLoop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopStatus {
    /// Never attached, or attach found no drawing surface.
    NotStarted,
    /// Attached and requesting frames.
    Running,
    /// Torn down; no further frames will be drawn until re-attached.
    Stopped,
}

impl fmt::Display for LoopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopStatus::NotStarted => write!(f, "not-started"),
            LoopStatus::Running => write!(f, "running"),
            LoopStatus::Stopped => write!(f, "stopped"),
        }
    }
}

/// Shared cancellation flag. Cloning yields another handle to the same flag,
/// so the owner of a view can stop a loop it does not own.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }

    fn rearm(&self) {
        self.0.set(false);
    }
}

/// Drives one `Scene` against one surface.
///
/// Each loop owns its frame counter, its scene state and its random source;
/// nothing is shared between loops.
pub struct AnimationLoop<S: Scene> {
    scene: S,
    rng: Box<dyn RandomSource>,
    frame: u64,
    status: LoopStatus,
    frame_requested: bool,
    stop: StopHandle,
    generation: u64,
}

impl<S: Scene> AnimationLoop<S> {
    pub fn new(scene: S, rng: Box<dyn RandomSource>) -> Self {
        Self {
            scene,
            rng,
            frame: 0,
            status: LoopStatus::NotStarted,
            frame_requested: false,
            stop: StopHandle::new(),
            generation: 0,
        }
    }

    /// Attaches to a drawing surface and requests the first frame.
    ///
    /// With no surface the loop simply does not start: the status becomes
    /// `NotStarted` and nothing is raised to the caller. Attaching again after
    /// a teardown restarts from frame zero with fresh scene state.
    pub fn attach(&mut self, surface: Option<&dyn Surface>) -> LoopStatus {
        match surface {
            None => {
                debug!("drawing surface unavailable; animation loop not started");
                self.status = LoopStatus::NotStarted;
                self.frame_requested = false;
            }
            Some(surface) => {
                self.restart(surface.width(), surface.height());
            }
        }
        self.status
    }

    /// Paints one frame if one was requested, then requests the next unless stopped.
    pub fn tick(&mut self, params: &S::Params, surface: &mut dyn Surface) -> LoopStatus {
        if self.status == LoopStatus::Running && self.stop.is_stopped() {
            self.halt();
        }
        if self.status != LoopStatus::Running || !self.frame_requested {
            return self.status;
        }

        self.frame_requested = false;
        self.scene.draw(params, self.frame, surface, self.rng.as_mut());
        self.frame += 1;
        trace!(frame = self.frame, "frame drawn");

        if self.stop.is_stopped() {
            self.halt();
        } else {
            self.frame_requested = true;
        }
        self.status
    }

    /// Runs up to `max_frames` frames, waiting on `host` before each one.
    /// Returns the number of frames actually drawn.
    pub fn run_frames<H: FrameHost>(
        &mut self,
        host: &mut H,
        params: &S::Params,
        surface: &mut dyn Surface,
        max_frames: u64,
    ) -> u64 {
        let mut drawn = 0;
        while drawn < max_frames && self.status == LoopStatus::Running && self.frame_requested && !self.stop.is_stopped()
        {
            host.next_frame();
            let before = self.frame;
            self.tick(params, surface);
            if self.frame == before {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Restarts when the owning parameter set was replaced from scratch.
    /// Returns `true` if a restart happened.
    pub fn sync_generation(&mut self, generation: u64, surface: &dyn Surface) -> bool {
        if generation == self.generation {
            return false;
        }
        self.generation = generation;
        if self.status == LoopStatus::Running {
            self.restart(surface.width(), surface.height());
            return true;
        }
        false
    }

    /// Tears the loop down; no further frames are drawn.
    pub fn detach(&mut self) {
        self.stop.stop();
        self.halt();
    }

    /// Handle that stops this loop from outside.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Frames completed since the last (re)start.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn status(&self) -> LoopStatus {
        self.status
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    fn restart(&mut self, width: u32, height: u32) {
        self.frame = 0;
        self.scene.reset(width, height, self.rng.as_mut());
        self.stop.rearm();
        self.status = LoopStatus::Running;
        self.frame_requested = true;
        debug!(width, height, "animation loop started");
    }

    fn halt(&mut self) {
        if self.status == LoopStatus::Running {
            debug!(frames = self.frame, "animation loop stopped");
        }
        self.status = LoopStatus::Stopped;
        self.frame_requested = false;
    }
}

impl<S: Scene + fmt::Debug> fmt::Debug for AnimationLoop<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationLoop")
            .field("scene", &self.scene)
            .field("frame", &self.frame)
            .field("status", &self.status)
            .field("frame_requested", &self.frame_requested)
            .finish()
    }
}
