//! Single-slot "latest observation" cell.
//!
//! Tracker callbacks publish whole snapshots; the render step reads whatever
//! was published last. Older values are overwritten, never queued.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
pub struct ObservationSlot<T: Copy> {
    cell: Rc<Cell<T>>,
}

impl<T: Copy> Clone for ObservationSlot<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: Copy> ObservationSlot<T> {
    pub fn new(initial: T) -> Self {
        Self {
            cell: Rc::new(Cell::new(initial)),
        }
    }

    #[inline]
    pub fn publish(&self, value: T) {
        self.cell.set(value);
    }

    #[inline]
    pub fn latest(&self) -> T {
        self.cell.get()
    }
}

impl<T: Copy + Default> Default for ObservationSlot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
