use std::cell::RefCell;
use std::rc::Rc;

/// Teardown callbacks owned by a component instance.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.inner.disposers.borrow().len()
    }

    /// Runs every registered disposer in registration order. Disposers added
    /// while disposing are run too.
    pub fn dispose(&self) {
        loop {
            let disposers = std::mem::take(&mut *self.inner.disposers.borrow_mut());
            if disposers.is_empty() {
                break;
            }
            for disposer in disposers {
                disposer();
            }
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
