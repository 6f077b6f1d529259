mod support;

use frost_core::*;
use glam::Vec2;
use support::*;

#[test]
fn peace_sign_needs_two_up_and_two_curled() {
    let mut r = rig(64, 64);
    r.adapter
        .on_hand_result(&hand_with_fingers([0.3, 0.4, 0.3, 0.4, 0.5, 0.4, 0.5, 0.4]));
    assert!(r.slot.latest().peace_sign);

    r.adapter
        .on_hand_result(&hand_with_fingers([0.3, 0.4, 0.3, 0.4, 0.3, 0.4, 0.5, 0.4]));
    assert!(!r.slot.latest().peace_sign);
}

#[test]
fn peace_flag_clears_when_hand_is_lost() {
    let mut r = rig(64, 64);
    r.adapter
        .on_hand_result(&hand_with_fingers([0.3, 0.4, 0.3, 0.4, 0.5, 0.4, 0.5, 0.4]));
    r.adapter.on_hand_result(&HandResult::default());
    let s = r.slot.latest();
    assert!(!s.peace_sign);
    assert!(!s.hand_present);
    assert_eq!(s.fingertip, None);
}

#[test]
fn incomplete_hand_counts_as_absent() {
    let mut r = rig(64, 64);
    r.adapter.on_hand_result(&hand_at(Vec2::new(0.2, 0.2)));
    let partial = HandResult {
        hands: vec![LandmarkSet::from_ordered(
            (0..9).map(|_| Vec2::splat(0.1)),
        )],
    };
    r.adapter.on_hand_result(&partial);
    assert_eq!(r.slot.latest().fingertip, None);
}

#[test]
fn breath_is_monotonic_over_the_mapped_domain() {
    let mut prev = -1.0;
    for i in 0..=67 {
        let d = 0.01 + i as f32 * 0.001;
        let b = breath_intensity_from_distance(d);
        assert!(b >= prev, "breath decreased at distance {d}");
        assert!((0.0..=1.0).contains(&b));
        prev = b;
    }
}

#[test]
fn adapter_maps_lip_opening_to_intensity() {
    let mut r = rig(64, 64);
    r.adapter.on_face_result(&face_with_opening(0.04));
    assert!((r.slot.latest().breath_intensity - 0.45).abs() < 1e-3);
    r.adapter.on_face_result(&face_with_opening(0.2));
    assert_eq!(r.slot.latest().breath_intensity, 1.0);
}
