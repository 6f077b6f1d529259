//! User-driven toggles shared between UI wiring and the compositor.

use std::cell::Cell;

/// Held and toggled inputs that do not come from the tracker.
///
/// Shared as `Rc<Controls>`; all fields are `Cell`s so UI callbacks and the
/// render step can both hold a reference without borrow juggling.
#[derive(Debug, Default)]
pub struct Controls {
    symmetry: Cell<bool>,
    manual_breath: Cell<bool>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn symmetry(&self) -> bool {
        self.symmetry.get()
    }

    /// Flip symmetry mode and return the new value.
    pub fn toggle_symmetry(&self) -> bool {
        let next = !self.symmetry.get();
        self.symmetry.set(next);
        log::info!("[controls] symmetry={}", next);
        next
    }

    pub fn set_symmetry(&self, on: bool) {
        self.symmetry.set(on);
    }

    #[inline]
    pub fn manual_breath(&self) -> bool {
        self.manual_breath.get()
    }

    pub fn set_manual_breath(&self, active: bool) {
        if self.manual_breath.replace(active) != active {
            log::debug!("[controls] manual_breath={}", active);
        }
    }
}
