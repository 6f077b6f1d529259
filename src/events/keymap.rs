use crate::constants::{MANUAL_BREATH_KEY, SYMMETRY_KEYS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Active while the key is held.
    ManualBreath,
    /// Fires once per press.
    ToggleSymmetry,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    if key == MANUAL_BREATH_KEY {
        return Some(KeyAction::ManualBreath);
    }
    if SYMMETRY_KEYS.contains(&key) {
        return Some(KeyAction::ToggleSymmetry);
    }
    None
}
