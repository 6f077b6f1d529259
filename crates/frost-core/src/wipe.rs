//! Decides whether and where the fingertip erases frost this frame.

use crate::config::WipeParams;
use crate::fog::mirror_to_pixels;
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

/// Erase centres for one frame: the wipe point, plus its mirror in symmetry mode.
pub type EraseTargets = SmallVec<[Vec2; 2]>;

/// Presence gate plus exponential smoothing of the fingertip.
#[derive(Debug, Default)]
pub struct WipeController {
    params: WipeParams,
    presence_since: Option<Duration>,
    smoothed: Option<Vec2>,
}

impl WipeController {
    pub fn new(params: WipeParams) -> Self {
        Self {
            params,
            presence_since: None,
            smoothed: None,
        }
    }

    pub fn presence_since(&self) -> Option<Duration> {
        self.presence_since
    }

    pub fn smoothed(&self) -> Option<Vec2> {
        self.smoothed
    }

    /// Advance one frame.
    ///
    /// `fingertip` is the raw normalized point (or `None` when no hand),
    /// `now` the frame timestamp on a monotonic clock.
    pub fn update(
        &mut self,
        fingertip: Option<Vec2>,
        now: Duration,
        viewport: Vec2,
        symmetry: bool,
    ) -> EraseTargets {
        let mut out = EraseTargets::new();
        let Some(tip) = fingertip else {
            self.presence_since = None;
            self.smoothed = None;
            return out;
        };
        let since = *self.presence_since.get_or_insert(now);
        let held = now.saturating_sub(since);
        if held < Duration::from_millis(self.params.presence_delay_ms) {
            return out;
        }

        let target = mirror_to_pixels(tip, viewport);
        let k = self.params.smoothing;
        let s = match self.smoothed {
            Some(prev) => prev + (target - prev) * k,
            None => target,
        };
        self.smoothed = Some(s);

        out.push(s);
        if symmetry {
            out.push(Vec2::new(viewport.x - s.x, s.y));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Vec2 = Vec2::new(800.0, 600.0);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_gated_sample_is_unsmoothed() {
        let mut w = WipeController::default();
        let tip = Some(Vec2::new(0.25, 0.5));
        assert!(w.update(tip, ms(0), VIEW, false).is_empty());
        let out = w.update(tip, ms(1000), VIEW, false);
        assert_eq!(out.as_slice(), &[Vec2::new(600.0, 300.0)]);
    }

    #[test]
    fn smoothing_moves_fifteen_percent_per_frame() {
        let mut w = WipeController::default();
        w.update(Some(Vec2::new(0.5, 0.5)), ms(0), VIEW, false);
        w.update(Some(Vec2::new(0.5, 0.5)), ms(1000), VIEW, false);
        let out = w.update(Some(Vec2::new(0.0, 0.5)), ms(1016), VIEW, false);
        // 400 -> 800 target, one step of 0.15
        assert!((out[0].x - 460.0).abs() < 1e-3);
    }

    #[test]
    fn absence_discards_timer_and_smoothing() {
        let mut w = WipeController::default();
        let tip = Some(Vec2::new(0.5, 0.5));
        w.update(tip, ms(0), VIEW, false);
        w.update(tip, ms(1200), VIEW, false);
        assert!(w.smoothed().is_some());
        w.update(None, ms(1216), VIEW, false);
        assert_eq!(w.presence_since(), None);
        assert_eq!(w.smoothed(), None);
    }

    #[test]
    fn symmetry_adds_mirrored_partner() {
        let mut w = WipeController::default();
        let tip = Some(Vec2::new(0.75, 0.25));
        w.update(tip, ms(0), VIEW, true);
        let out = w.update(tip, ms(1000), VIEW, true);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], Vec2::new(200.0, 150.0));
        assert_eq!(out[1], Vec2::new(600.0, 150.0));
    }
}
