use crate::constants::{ACTIVE_CLASS, BREATH_METER_ID, HAND_STATUS_ID, SYMMETRY_BUTTON_ID};
use crate::status_text;
use frost_core::Status;
use web_sys as web;

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        // Avoid touching the DOM when nothing changed
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}

/// Refresh the status line and the symmetry button state.
pub fn update_status(document: &web::Document, status: &Status) {
    set_text(
        document,
        BREATH_METER_ID,
        &status_text::breath_label(status.breath_percent),
    );
    set_text(
        document,
        HAND_STATUS_ID,
        status_text::hand_label(status.hand_detected),
    );
    set_text(
        document,
        SYMMETRY_BUTTON_ID,
        status_text::symmetry_label(status.symmetry),
    );
    if let Some(el) = document.get_element_by_id(SYMMETRY_BUTTON_ID) {
        let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, status.symmetry);
    }
}
