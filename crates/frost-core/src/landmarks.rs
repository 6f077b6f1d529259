//! Narrow landmark contract between the external tracker and the gesture logic.
//!
//! The tracker reports an ordered list of points per detected hand or face.
//! Only a handful of indices matter here, so the adapter works on an
//! index -> point map and validates the indices it needs up front.

use crate::constants::*;
use crate::error::{FrostError, Result};
use fnv::FnvHashMap;
use glam::Vec2;

/// Normalized image-space points keyed by tracker landmark index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkSet {
    points: FnvHashMap<usize, Vec2>,
}

impl LandmarkSet {
    /// Build from the tracker's ordered list; position in the list is the index.
    pub fn from_ordered(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            points: points.into_iter().enumerate().collect(),
        }
    }

    pub fn from_indexed(points: impl IntoIterator<Item = (usize, Vec2)>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn require(&self, source_kind: &'static str, index: usize) -> Result<Vec2> {
        let p = self
            .get(index)
            .ok_or(FrostError::MissingLandmark { source_kind, index })?;
        if !p.is_finite() {
            return Err(FrostError::MalformedPayload(format!(
                "{source_kind} landmark {index} is not finite"
            )));
        }
        Ok(p)
    }
}

/// Zero or more hands from one tracker callback.
#[derive(Clone, Debug, Default)]
pub struct HandResult {
    pub hands: Vec<LandmarkSet>,
}

/// Zero or one face from one tracker callback (extra faces are ignored).
#[derive(Clone, Debug, Default)]
pub struct FaceResult {
    pub faces: Vec<LandmarkSet>,
}

/// Tip and second-joint positions of the four non-thumb fingers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPose {
    pub index_tip: Vec2,
    pub index_pip: Vec2,
    pub middle_tip: Vec2,
    pub middle_pip: Vec2,
    pub ring_tip: Vec2,
    pub ring_pip: Vec2,
    pub pinky_tip: Vec2,
    pub pinky_pip: Vec2,
}

impl HandPose {
    pub fn from_landmarks(set: &LandmarkSet) -> Result<Self> {
        const KIND: &str = "hand";
        Ok(Self {
            index_tip: set.require(KIND, INDEX_TIP)?,
            index_pip: set.require(KIND, INDEX_PIP)?,
            middle_tip: set.require(KIND, MIDDLE_TIP)?,
            middle_pip: set.require(KIND, MIDDLE_PIP)?,
            ring_tip: set.require(KIND, RING_TIP)?,
            ring_pip: set.require(KIND, RING_PIP)?,
            pinky_tip: set.require(KIND, PINKY_TIP)?,
            pinky_pip: set.require(KIND, PINKY_PIP)?,
        })
    }
}

/// The two inner lip points used for breath and mouth position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LipPair {
    pub upper: Vec2,
    pub lower: Vec2,
}

impl LipPair {
    pub fn from_landmarks(set: &LandmarkSet) -> Result<Self> {
        const KIND: &str = "face";
        Ok(Self {
            upper: set.require(KIND, UPPER_INNER_LIP)?,
            lower: set.require(KIND, LOWER_INNER_LIP)?,
        })
    }

    #[inline]
    pub fn opening(&self) -> f32 {
        self.upper.distance(self.lower)
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.upper + self.lower) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hand() -> LandmarkSet {
        LandmarkSet::from_ordered((0..21).map(|i| Vec2::new(i as f32 * 0.01, 0.5)))
    }

    #[test]
    fn ordered_points_keep_their_index() {
        let set = full_hand();
        assert_eq!(set.len(), 21);
        assert_eq!(set.get(8), Some(Vec2::new(0.08, 0.5)));
        assert_eq!(set.get(21), None);
    }

    #[test]
    fn hand_pose_requires_all_finger_joints() {
        assert!(HandPose::from_landmarks(&full_hand()).is_ok());
        let partial = LandmarkSet::from_ordered((0..15).map(|_| Vec2::splat(0.5)));
        assert_eq!(
            HandPose::from_landmarks(&partial),
            Err(FrostError::MissingLandmark {
                source_kind: "hand",
                index: 16
            })
        );
    }

    #[test]
    fn lip_pair_rejects_non_finite_points() {
        let set = LandmarkSet::from_indexed([(13, Vec2::new(f32::NAN, 0.1)), (14, Vec2::ZERO)]);
        assert!(matches!(
            LipPair::from_landmarks(&set),
            Err(FrostError::MalformedPayload(_))
        ));
    }

    #[test]
    fn lip_pair_opening_and_midpoint() {
        let set =
            LandmarkSet::from_indexed([(13, Vec2::new(0.5, 0.60)), (14, Vec2::new(0.5, 0.64))]);
        let lips = LipPair::from_landmarks(&set).unwrap();
        assert!((lips.opening() - 0.04).abs() < 1e-6);
        assert!((lips.midpoint() - Vec2::new(0.5, 0.62)).length() < 1e-6);
    }
}
