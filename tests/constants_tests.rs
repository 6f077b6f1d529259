// Host-side checks on the DOM hooks and key bindings.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [
        CANVAS_ID,
        VIDEO_ID,
        BREATH_METER_ID,
        HAND_STATUS_ID,
        SYMMETRY_BUTTON_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "id {a:?} must not contain spaces");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn breath_key_does_not_collide_with_symmetry_keys() {
    assert!(!SYMMETRY_KEYS.contains(&MANUAL_BREATH_KEY));
}

#[test]
fn fallback_fill_is_a_hex_colour() {
    assert!(BACKDROP_FALLBACK_FILL.starts_with('#'));
    assert_eq!(BACKDROP_FALLBACK_FILL.len(), 7);
}
