//! Frame hosts: the stand-ins for a display's per-refresh callback.

use std::time::Duration;
use web_time::Instant;

/// Something that decides when the next frame may be painted.
///
/// `next_frame` returns once the host is ready for another frame. It runs
/// outside the animation loop, so a host may sleep here; the loop itself
/// never blocks.
pub trait FrameHost {
    fn next_frame(&mut self);
}

/// Host that fires immediately and counts how often it was asked.
#[derive(Debug, Clone, Default)]
pub struct ManualHost {
    callbacks: u64,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refresh callbacks delivered so far.
    pub fn callbacks(&self) -> u64 {
        self.callbacks
    }
}

impl FrameHost for ManualHost {
    fn next_frame(&mut self) {
        self.callbacks += 1;
    }
}

/// Host that paces frames to a fixed refresh interval.
#[derive(Debug, Clone)]
pub struct PacedHost {
    interval: Duration,
    last: Option<Instant>,
}

impl PacedHost {
    /// Paces to `interval` between frames.
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// Paces to `hz` frames per second. Zero falls back to 60.
    pub fn with_rate(hz: u32) -> Self {
        let hz = if hz == 0 { 60 } else { hz };
        Self::new(Duration::from_secs_f64(1.0 / f64::from(hz)))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for PacedHost {
    fn default() -> Self {
        Self::with_rate(60)
    }
}

impl FrameHost for PacedHost {
    fn next_frame(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}
