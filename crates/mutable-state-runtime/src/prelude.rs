pub use crate::error::{HookError, Result};
pub use crate::runtime::{Component, remember, use_unmount};
pub use crate::scope::Scope;
pub use crate::state::{StateSetter, Update, use_state};
