//! Explicit frame scheduler state.
//!
//! The platform (requestAnimationFrame on web) only asks this loop whether it
//! should keep going; the loop itself never touches the platform. That keeps
//! shutdown deterministic and lets tests drive frames without a display.

use crate::compositor::{FrameCompositor, FrameReport, RenderTarget};
use crate::error::Result;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Created, no frame requested yet.
    Idle,
    Running,
    /// Torn down. Terminal.
    Stopped,
}

/// Monotonic time since mount, the timestamp fed to each frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Shared run flag plus frame counter. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct FrameLoop {
    state: Rc<Cell<LoopState>>,
    frames: Rc<Cell<u64>>,
    skipped: Rc<Cell<u64>>,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(LoopState::Idle)),
            frames: Rc::new(Cell::new(0)),
            skipped: Rc::new(Cell::new(0)),
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state.get()
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    pub fn skipped(&self) -> u64 {
        self.skipped.get()
    }

    /// Move `Idle -> Running`. Returns true when the caller must request the
    /// first frame; false if already running or stopped.
    pub fn start(&self) -> bool {
        if self.state.get() != LoopState::Idle {
            return false;
        }
        self.state.set(LoopState::Running);
        log::info!("[loop] started");
        true
    }

    /// Checked before every frame and before every reschedule.
    #[inline]
    pub fn should_continue(&self) -> bool {
        self.state.get() == LoopState::Running
    }

    pub fn stop(&self) {
        if self.state.replace(LoopState::Stopped) != LoopState::Stopped {
            log::info!(
                "[loop] stopped after {} frames ({} skipped)",
                self.frames.get(),
                self.skipped.get()
            );
        }
    }

    /// A resize restarts an idle loop. Returns true when the caller must
    /// request a frame.
    pub fn on_resize(&self) -> bool {
        self.start()
    }

    /// Render one frame if the loop is running and the surface is available.
    ///
    /// An unavailable surface skips this tick only; the caller still
    /// reschedules, so the next refresh tries again.
    pub fn tick<T: RenderTarget + ?Sized>(
        &self,
        compositor: &mut FrameCompositor,
        target: Result<&mut T>,
        now: Duration,
    ) -> Option<FrameReport> {
        if !self.should_continue() {
            return None;
        }
        match target {
            Ok(t) => {
                let report = compositor.render_frame(t, now);
                self.frames.set(self.frames.get() + 1);
                Some(report)
            }
            Err(e) => {
                self.skipped.set(self.skipped.get() + 1);
                log::debug!("[loop] frame skipped: {}", e);
                None
            }
        }
    }

    /// Drive up to `max_frames` frames back to back, with `now_for(i)`
    /// supplying each timestamp. Stops early once the loop is stopped.
    pub fn run_for<T: RenderTarget + ?Sized>(
        &self,
        max_frames: u64,
        compositor: &mut FrameCompositor,
        target: &mut T,
        mut now_for: impl FnMut(u64) -> Duration,
        mut on_report: impl FnMut(u64, FrameReport),
    ) {
        for i in 0..max_frames {
            if !self.should_continue() {
                break;
            }
            if let Some(r) = self.tick(compositor, Ok(&mut *target), now_for(i)) {
                on_report(i, r);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_one_shot_and_stop_is_terminal() {
        let l = FrameLoop::new();
        assert_eq!(l.state(), LoopState::Idle);
        assert!(l.start());
        assert!(!l.start());
        l.stop();
        assert_eq!(l.state(), LoopState::Stopped);
        assert!(!l.on_resize());
        assert!(!l.should_continue());
    }

    #[test]
    fn resize_starts_an_idle_loop() {
        let l = FrameLoop::new();
        assert!(l.on_resize());
        assert!(l.should_continue());
        assert!(!l.on_resize());
    }

    #[test]
    fn clones_share_state() {
        let a = FrameLoop::new();
        let b = a.clone();
        a.start();
        b.stop();
        assert_eq!(a.state(), LoopState::Stopped);
    }
}
