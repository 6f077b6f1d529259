//! Page event registrations owned by one mount.

/// Undo actions for registered listeners. Dropping the set runs them, so a
/// torn-down mount leaves nothing attached to the page.
#[derive(Default)]
pub struct ListenerSet {
    detach: Vec<Box<dyn FnOnce()>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, detach: impl FnOnce() + 'static) {
        self.detach.push(Box::new(detach));
    }

    pub fn len(&self) -> usize {
        self.detach.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detach.is_empty()
    }

    /// Run every detach action, newest first. Returns how many ran.
    pub fn detach_all(&mut self) -> usize {
        let n = self.detach.len();
        while let Some(detach) = self.detach.pop() {
            detach();
        }
        n
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach_all();
    }
}
