// Text shown by the status overlay. Pure so it can be tested on the host.

#[inline]
pub fn breath_label(percent: u8) -> String {
    format!("Breath: {}%", percent.min(100))
}

#[inline]
pub fn hand_label(detected: bool) -> &'static str {
    if detected {
        "Hand: detected"
    } else {
        "Hand: none"
    }
}

#[inline]
pub fn symmetry_label(on: bool) -> &'static str {
    if on {
        "Symmetry: on"
    } else {
        "Symmetry: off"
    }
}
