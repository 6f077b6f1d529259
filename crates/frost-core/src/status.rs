//! Read-only values shown in the status UI.

use crate::controls::Controls;
use crate::gesture::{effective_intensity, GestureState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Status {
    /// Effective breath intensity (manual override included), 0..=100.
    pub breath_percent: u8,
    pub hand_detected: bool,
    pub symmetry: bool,
}

impl Status {
    pub fn capture(gestures: &GestureState, controls: &Controls) -> Self {
        let intensity = effective_intensity(gestures.breath_intensity, controls.manual_breath());
        Self {
            breath_percent: (intensity.clamp(0.0, 1.0) * 100.0).round() as u8,
            hand_detected: gestures.hand_present,
            symmetry: controls.symmetry(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_and_includes_manual_override() {
        let controls = Controls::new();
        let g = GestureState {
            breath_intensity: 0.456,
            ..GestureState::default()
        };
        assert_eq!(Status::capture(&g, &controls).breath_percent, 46);
        controls.set_manual_breath(true);
        assert_eq!(Status::capture(&g, &controls).breath_percent, 80);
    }

    #[test]
    fn hand_and_symmetry_flags_pass_through() {
        let controls = Controls::new();
        controls.set_symmetry(true);
        let g = GestureState {
            hand_present: true,
            ..GestureState::default()
        };
        let s = Status::capture(&g, &controls);
        assert!(s.hand_detected && s.symmetry);
    }
}
