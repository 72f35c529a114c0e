use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{HookError, Result};
use crate::scope::Scope;

thread_local! {
    // Stack of instances currently rendering; nested mounts push on top.
    static RENDERING: RefCell<Vec<Rc<Instance>>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(1) };
}

/// One mounted component: its hook slots, render bookkeeping and teardown scope.
pub(crate) struct Instance {
    id: u64,
    slots: RefCell<Vec<Box<dyn Any>>>,
    cursor: Cell<usize>,
    dirty: Cell<bool>,
    mounted: Cell<bool>,
    renders: Cell<u64>,
    scope: Scope,
}

impl Instance {
    fn new() -> Rc<Self> {
        let id = NEXT_ID.with(|n| {
            let id = n.get();
            n.set(id + 1);
            id
        });
        Rc::new(Self {
            id,
            slots: RefCell::new(Vec::new()),
            cursor: Cell::new(0),
            dirty: Cell::new(false),
            mounted: Cell::new(true),
            renders: Cell::new(0),
            scope: Scope::new(),
        })
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Marks the instance for re-rendering on the next `Component::flush`.
    pub(crate) fn request_render(&self) {
        if self.mounted.get() {
            self.dirty.set(true);
        }
    }
}

pub(crate) fn current_instance() -> Result<Rc<Instance>> {
    RENDERING
        .with(|r| r.borrow().last().cloned())
        .ok_or(HookError::OutsideRender)
}

/// Makes an instance current for the duration of one render.
struct ComposeGuard {
    instance: Rc<Instance>,
}

impl ComposeGuard {
    fn begin(instance: Rc<Instance>) -> Self {
        instance.cursor.set(0);
        instance.dirty.set(false);
        instance.renders.set(instance.renders.get() + 1);
        RENDERING.with(|r| r.borrow_mut().push(instance.clone()));
        ComposeGuard { instance }
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        RENDERING.with(|r| {
            let popped = r.borrow_mut().pop();
            debug_assert!(popped.is_some_and(|i| Rc::ptr_eq(&i, &self.instance)));
        });
    }
}

// Placeholder for a slot whose init has not returned yet.
struct Reserved;

/// Slot-based remember. The Nth call during a render always refers to the Nth
/// stored value; `init` only runs when the slot is created.
///
/// `init` must not call hooks itself.
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Result<Rc<T>> {
    let instance = current_instance()?;
    let cursor = instance.cursor.get();
    instance.cursor.set(cursor + 1);

    {
        let mut slots = instance.slots.borrow_mut();
        match slots.get(cursor) {
            Some(slot) => {
                if let Some(rc) = slot.downcast_ref::<Rc<T>>() {
                    return Ok(rc.clone());
                }
                if slot.is::<Reserved>() {
                    log::debug!(
                        "remember: component {} slot {} retrying an init that panicked",
                        instance.id,
                        cursor
                    );
                } else {
                    log::warn!(
                        "remember: component {} slot {} type changed; replacing. \
                         Hooks must be called in the same order on every render.",
                        instance.id,
                        cursor
                    );
                }
            }
            // reserve the slot so a panicking init leaves the table aligned
            None => slots.push(Box::new(Reserved)),
        }
    }

    let rc: Rc<T> = Rc::new(init());
    instance.slots.borrow_mut()[cursor] = Box::new(rc.clone());
    Ok(rc)
}

/// Registers `f` to run when the current component unmounts. Only the first
/// render's callback is kept.
pub fn use_unmount(f: impl FnOnce() + 'static) -> Result<()> {
    let instance = current_instance()?;
    let installed = remember(|| Cell::new(false))?;
    if !installed.replace(true) {
        instance.scope.add_disposer(f);
    }
    Ok(())
}

/// A mounted component instance together with its render function.
///
/// Writes through state setters only mark the component dirty; the owner
/// decides when to call [`Component::flush`].
pub struct Component<R> {
    instance: Rc<Instance>,
    render: Box<dyn FnMut() -> R>,
}

impl<R> Component<R> {
    /// Creates a new instance and performs its first render.
    pub fn mount(render: impl FnMut() -> R + 'static) -> (Self, R) {
        let instance = Instance::new();
        log::debug!("mounting component {}", instance.id);
        let mut component = Component {
            instance,
            render: Box::new(render),
        };
        let output = component.run();
        (component, output)
    }

    fn run(&mut self) -> R {
        let _guard = ComposeGuard::begin(self.instance.clone());
        log::trace!(
            "rendering component {} (pass {})",
            self.instance.id,
            self.instance.renders.get()
        );
        (self.render)()
    }

    /// Renders unconditionally.
    pub fn render(&mut self) -> Result<R> {
        if !self.instance.is_mounted() {
            return Err(HookError::Unmounted(self.instance.id));
        }
        Ok(self.run())
    }

    /// Renders only if a state write has been requested since the last render.
    pub fn flush(&mut self) -> Option<R> {
        if self.is_dirty() {
            Some(self.run())
        } else {
            None
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.instance.is_mounted() && self.instance.dirty.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.instance.is_mounted()
    }

    pub fn render_count(&self) -> u64 {
        self.instance.renders.get()
    }

    pub fn id(&self) -> u64 {
        self.instance.id
    }

    /// Runs unmount callbacks and drops every hook slot. Later state writes
    /// are ignored. Calling this twice is a no-op.
    pub fn unmount(&mut self) {
        if !self.instance.mounted.replace(false) {
            return;
        }
        log::debug!("unmounting component {}", self.instance.id);
        self.instance.dirty.set(false);
        self.instance.scope.dispose();
        let slots = std::mem::take(&mut *self.instance.slots.borrow_mut());
        drop(slots);
    }
}

impl<R> Drop for Component<R> {
    fn drop(&mut self) {
        self.unmount();
    }
}
