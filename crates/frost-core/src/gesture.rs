//! Turns raw tracker results into the gesture snapshot the renderer reads.
//!
//! Hand and face results arrive independently. Each callback updates only
//! its own fields of the snapshot and republishes the whole snapshot.

use crate::constants::*;
use crate::landmarks::{FaceResult, HandPose, HandResult, LipPair};
use crate::observation::ObservationSlot;
use glam::Vec2;

/// Latest gesture-derived signals, in normalized image space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// 0..1 mouth-opening signal; 0 whenever no face is tracked.
    pub breath_intensity: f32,
    /// Last known mouth centre. Kept (stale) when the face is lost.
    pub mouth_point: Vec2,
    /// Index fingertip, `None` while no hand is tracked.
    pub fingertip: Option<Vec2>,
    pub hand_present: bool,
    pub peace_sign: bool,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            breath_intensity: 0.0,
            mouth_point: Vec2::new(0.5, 0.5),
            fingertip: None,
            hand_present: false,
            peace_sign: false,
        }
    }
}

/// Map inner-lip distance to breath intensity.
#[inline]
pub fn breath_intensity_from_distance(distance: f32) -> f32 {
    ((distance - BREATH_DISTANCE_OFFSET) * BREATH_DISTANCE_GAIN).clamp(0.0, 1.0)
}

/// Index and middle extended, ring and pinky curled (smaller y is higher).
#[inline]
pub fn is_peace_sign(pose: &HandPose) -> bool {
    pose.index_tip.y < pose.index_pip.y
        && pose.middle_tip.y < pose.middle_pip.y
        && pose.ring_tip.y > pose.ring_pip.y
        && pose.pinky_tip.y > pose.pinky_pip.y
}

/// Intensity fed to the fog surface once the held manual override is applied.
#[inline]
pub fn effective_intensity(tracked: f32, manual_active: bool) -> f32 {
    let manual = if manual_active {
        MANUAL_BREATH_INTENSITY
    } else {
        0.0
    };
    tracked.max(manual)
}

/// Writer side of the gesture snapshot. Owned by the tracker bridge.
pub struct GestureAdapter {
    state: GestureState,
    slot: ObservationSlot<GestureState>,
}

impl GestureAdapter {
    pub fn new(slot: ObservationSlot<GestureState>) -> Self {
        Self {
            state: slot.latest(),
            slot,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn on_hand_result(&mut self, result: &HandResult) {
        let pose = result.hands.first().and_then(|set| {
            HandPose::from_landmarks(set)
                .map_err(|e| log::warn!("[tracker] dropping hand: {}", e))
                .ok()
        });
        match pose {
            Some(pose) => {
                if !self.state.hand_present {
                    log::info!("[tracker] hand acquired");
                }
                self.state.hand_present = true;
                self.state.fingertip = Some(pose.index_tip);
                self.state.peace_sign = is_peace_sign(&pose);
            }
            None => {
                if self.state.hand_present {
                    log::info!("[tracker] hand lost");
                }
                self.state.hand_present = false;
                self.state.fingertip = None;
                self.state.peace_sign = false;
            }
        }
        self.slot.publish(self.state);
    }

    pub fn on_face_result(&mut self, result: &FaceResult) {
        let lips = result.faces.first().and_then(|set| {
            LipPair::from_landmarks(set)
                .map_err(|e| log::warn!("[tracker] dropping face: {}", e))
                .ok()
        });
        match lips {
            Some(lips) => {
                self.state.breath_intensity = breath_intensity_from_distance(lips.opening());
                self.state.mouth_point = lips.midpoint();
            }
            // Snap to zero; the mouth point is left where it was.
            None => self.state.breath_intensity = 0.0,
        }
        self.slot.publish(self.state);
    }
}
