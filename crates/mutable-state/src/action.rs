use std::fmt;

/// How `use_mutable_state` obtains its first value.
///
/// A zero-argument closure converts into `InitialState::Lazy` and runs once,
/// on the first render. Plain values go through [`InitialState::value`].
///
/// Known gap: a closure is always taken as an initializer, so a state whose
/// type is itself a closure cannot be seeded by passing that closure. Wrap
/// it in `InitialState::value` (or return it from an initializer) instead.
pub enum InitialState<S> {
    Value(S),
    Lazy(Box<dyn FnOnce() -> S>),
}

impl<S> InitialState<S> {
    pub fn value(value: S) -> Self {
        InitialState::Value(value)
    }

    pub fn lazy(init: impl FnOnce() -> S + 'static) -> Self {
        InitialState::Lazy(Box::new(init))
    }

    pub(crate) fn resolve(self) -> S {
        match self {
            InitialState::Value(value) => value,
            InitialState::Lazy(init) => init(),
        }
    }
}

impl<S, F> From<F> for InitialState<S>
where
    F: FnOnce() -> S + 'static,
{
    fn from(init: F) -> Self {
        InitialState::Lazy(Box::new(init))
    }
}

impl<S: fmt::Debug> fmt::Debug for InitialState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialState::Value(value) => f.debug_tuple("Value").field(value).finish(),
            InitialState::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// A write passed to [`SetState::dispatch`](crate::SetState::dispatch).
pub enum SetStateAction<S> {
    /// The next state, stored as-is.
    Value(S),
    /// Computes the next state from the previous one.
    Update(Box<dyn FnOnce(&S) -> S>),
}

impl<S> SetStateAction<S> {
    pub fn update(f: impl FnOnce(&S) -> S + 'static) -> Self {
        SetStateAction::Update(Box::new(f))
    }

    pub(crate) fn apply(self, prev: &S) -> S {
        match self {
            SetStateAction::Value(next) => next,
            SetStateAction::Update(f) => f(prev),
        }
    }
}

impl<S> From<S> for SetStateAction<S> {
    fn from(value: S) -> Self {
        SetStateAction::Value(value)
    }
}

impl<S: fmt::Debug> fmt::Debug for SetStateAction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetStateAction::Value(value) => f.debug_tuple("Value").field(value).finish(),
            SetStateAction::Update(_) => f.write_str("Update(..)"),
        }
    }
}
