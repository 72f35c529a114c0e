use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::Result;
use crate::runtime::{Instance, current_instance, remember};

/// A write request understood by [`StateSetter::dispatch`].
pub enum Update<T> {
    /// Store this value as-is.
    Replace(Rc<T>),
    /// Compute the next value from the latest stored one.
    Map(Box<dyn FnOnce(&Rc<T>) -> Rc<T>>),
}

struct StateCell<T> {
    current: RefCell<Rc<T>>,
}

/// Handle for writing a `use_state` slot. Cloneable; outlives renders.
pub struct StateSetter<T> {
    cell: Rc<StateCell<T>>,
    instance: Weak<Instance>,
}

impl<T> Clone for StateSetter<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            instance: self.instance.clone(),
        }
    }
}

/// The runtime's state primitive. Returns the value stored for this render
/// and a setter for it. Change detection is by `Rc` identity: replacing the
/// value with the same `Rc` does not schedule a render.
pub fn use_state<T: 'static>(init: impl FnOnce() -> T) -> Result<(Rc<T>, StateSetter<T>)> {
    let instance = current_instance()?;
    let cell = remember(|| StateCell {
        current: RefCell::new(Rc::new(init())),
    })?;
    let current = cell.current.borrow().clone();
    Ok((
        current,
        StateSetter {
            cell,
            instance: Rc::downgrade(&instance),
        },
    ))
}

impl<T: 'static> StateSetter<T> {
    /// Applies `update` and marks the owning component dirty. Returns whether
    /// a render was requested.
    pub fn dispatch(&self, update: Update<T>) -> bool {
        let Some(instance) = self.instance.upgrade().filter(|i| i.is_mounted()) else {
            log::warn!("state update on an unmounted component was ignored");
            return false;
        };

        let prev = self.cell.current.borrow().clone();
        let next = match update {
            Update::Replace(next) => next,
            Update::Map(f) => f(&prev),
        };

        if Rc::ptr_eq(&prev, &next) {
            log::debug!(
                "component {}: state unchanged, render skipped",
                instance.id()
            );
            return false;
        }

        *self.cell.current.borrow_mut() = next;
        instance.request_render();
        log::trace!("component {}: state replaced", instance.id());
        true
    }

    pub fn replace(&self, next: Rc<T>) -> bool {
        self.dispatch(Update::Replace(next))
    }

    pub fn set(&self, next: T) -> bool {
        self.replace(Rc::new(next))
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T + 'static) -> bool {
        self.dispatch(Update::Map(Box::new(move |prev: &Rc<T>| {
            Rc::new(f(prev.as_ref()))
        })))
    }

    /// The latest stored value, including writes not yet rendered.
    #[cfg(test)]
    pub(crate) fn peek(&self) -> Rc<T> {
        self.cell.current.borrow().clone()
    }
}
