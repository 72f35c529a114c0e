use thiserror::Error;

/// Failures defined by the runtime itself. Panics raised by user code are
/// never caught or converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("hooks can only be called while a component is rendering")]
    OutsideRender,
    #[error("component {0} has been unmounted")]
    Unmounted(u64),
}

pub type Result<T, E = HookError> = std::result::Result<T, E>;
