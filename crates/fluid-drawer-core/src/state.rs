use std::cell::RefCell;
use std::rc::Rc;

/// Writable shared value cell.
///
/// Hosts re-read the drawer scene every frame, so there is no
/// invalidation plumbing here: a write is visible on the next read.
pub struct MutableState<T> {
    value: Rc<RefCell<T>>,
}

impl<T: Clone> MutableState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn set_value(&self, value: T) {
        *self.value.borrow_mut() = value;
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Read-only view sharing the same cell.
    pub fn as_state(&self) -> State<T> {
        State {
            value: self.value.clone(),
        }
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    value: Rc<RefCell<T>>,
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}
