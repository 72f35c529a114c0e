use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use mutable_state_runtime::{Result, StateSetter, use_state};

use crate::action::{InitialState, SetStateAction};

// One-field record handed to the runtime. Every write allocates a new one,
// so the runtime's identity check always sees a change.
struct Wrapped<S> {
    state: S,
}

/// The state observed by one render. Dereferences to `S`.
pub struct StateValue<S>(Rc<Wrapped<S>>);

impl<S> StateValue<S> {
    pub fn get(&self) -> S
    where
        S: Clone,
    {
        self.0.state.clone()
    }

    /// True when both handles come from the same write.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<S> Deref for StateValue<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0.state
    }
}

impl<S> Clone for StateValue<S> {
    fn clone(&self) -> Self {
        StateValue(self.0.clone())
    }
}

impl<S: fmt::Debug> fmt::Debug for StateValue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0.state, f)
    }
}

impl<S: fmt::Display> fmt::Display for StateValue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.state, f)
    }
}

/// Setter returned by [`use_mutable_state`].
///
/// Updaters run immediately against the value this setter's render observed,
/// not against writes made since. Two updaters dispatched from the same
/// render therefore both see the same previous value, and the last one wins.
pub struct SetState<S> {
    observed: Rc<Wrapped<S>>,
    host: StateSetter<Wrapped<S>>,
}

impl<S> Clone for SetState<S> {
    fn clone(&self) -> Self {
        Self {
            observed: self.observed.clone(),
            host: self.host.clone(),
        }
    }
}

impl<S: 'static> SetState<S> {
    pub fn dispatch(&self, action: impl Into<SetStateAction<S>>) {
        let next = action.into().apply(&self.observed.state);
        self.commit(next);
    }

    pub fn set(&self, value: S) {
        self.commit(value);
    }

    pub fn update(&self, f: impl FnOnce(&S) -> S) {
        let next = f(&self.observed.state);
        self.commit(next);
    }

    fn commit(&self, next: S) {
        if !self.host.replace(Rc::new(Wrapped { state: next })) {
            log::debug!("use_mutable_state: write dropped by the runtime");
        }
    }
}

/// State hook whose setter always replaces the stored value.
///
/// `init` is a zero-argument closure, run once on the first render, or an
/// [`InitialState::value`] stored as-is. The returned setter accepts a value or
/// [`SetStateAction::update`]. Each write is wrapped in a fresh record before
/// it reaches the runtime, so every write schedules a render and a
/// function-typed `S` is stored rather than invoked.
pub fn use_mutable_state<S: 'static>(
    init: impl Into<InitialState<S>>,
) -> Result<(StateValue<S>, SetState<S>)> {
    let init = init.into();
    let (wrapped, host) = use_state(move || Wrapped {
        state: init.resolve(),
    })?;
    Ok((
        StateValue(wrapped.clone()),
        SetState {
            observed: wrapped,
            host,
        },
    ))
}
