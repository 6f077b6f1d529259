// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod keymap {
    include!("../src/events/keymap.rs");
}

use keymap::*;

#[test]
fn space_is_the_held_breath_key() {
    assert_eq!(key_action(" "), Some(KeyAction::ManualBreath));
}

#[test]
fn m_toggles_symmetry_in_either_case() {
    assert_eq!(key_action("m"), Some(KeyAction::ToggleSymmetry));
    assert_eq!(key_action("M"), Some(KeyAction::ToggleSymmetry));
}

#[test]
fn unrelated_keys_do_nothing() {
    for key in ["", "Space", "Enter", "n", "h", "ArrowUp", "  "] {
        assert_eq!(key_action(key), None, "key {key:?} should be unbound");
    }
}
