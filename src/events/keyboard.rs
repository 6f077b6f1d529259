use super::keymap::{key_action, KeyAction};
use crate::dom;
use crate::listeners::ListenerSet;
use frost_core::Controls;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, controls: &Controls) {
    match key_action(&ev.key()) {
        Some(KeyAction::ManualBreath) => {
            controls.set_manual_breath(true);
            ev.prevent_default();
        }
        Some(KeyAction::ToggleSymmetry) => {
            // Auto-repeat would flip the mode on every repeat tick
            if !ev.repeat() {
                controls.toggle_symmetry();
            }
        }
        None => {}
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, controls: &Controls) {
    if key_action(&ev.key()) == Some(KeyAction::ManualBreath) {
        controls.set_manual_breath(false);
        ev.prevent_default();
    }
}

/// Wire window-level keydown/keyup to the shared controls.
pub fn wire_keyboard(controls: Rc<Controls>, listeners: &mut ListenerSet) {
    let Some(window) = web::window() else {
        return;
    };

    let down_controls = controls.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &down_controls);
    }) as Box<dyn FnMut(_)>);
    dom::listen(listeners, &window, "keydown", keydown);

    let up_controls = controls.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &up_controls);
    }) as Box<dyn FnMut(_)>);
    dom::listen(listeners, &window, "keyup", keyup);

    // Releasing the key outside the page never fires keyup
    let blur = Closure::wrap(Box::new(move || {
        controls.set_manual_breath(false);
    }) as Box<dyn FnMut()>);
    dom::listen(listeners, &window, "blur", blur);
}
