//! # Components, slots and state
//!
//! A deliberately small component runtime. It owns everything about a piece
//! of UI state except its meaning:
//!
//! - `Component` — a mounted instance plus its render function.
//! - `remember` — order-based storage bound to the instance.
//! - `use_state` — the state primitive: a value plus a setter that schedules
//!   a re-render.
//! - `use_unmount` — teardown callbacks.
//!
//! ## Rendering
//!
//! ```rust
//! use mutable_state_runtime::prelude::*;
//!
//! let (mut counter, first) = Component::mount(|| {
//!     let (count, set_count) = use_state(|| 0).unwrap();
//!     (*count, set_count)
//! });
//!
//! let (value, set_count) = first;
//! assert_eq!(value, 0);
//!
//! set_count.update(|c| c + 1);
//! assert!(counter.is_dirty());
//!
//! let (value, _) = counter.flush().unwrap();
//! assert_eq!(value, 1);
//! ```
//!
//! Hooks are order-based: the Nth hook call in a render always refers to the
//! Nth slot. Calling a hook outside of a render returns
//! [`HookError::OutsideRender`].
//!
//! ## Change detection
//!
//! `use_state` stores its value behind an `Rc` and compares by identity. A
//! write that hands back the stored `Rc` bails out; anything else marks the
//! component dirty, and the owner re-renders it with `Component::flush`.
//! Nothing is re-rendered implicitly.
//!
//! ## Teardown
//!
//! `Component::unmount` (or dropping the component) runs the callbacks
//! registered with `use_unmount`, drops every slot and turns later writes
//! into logged no-ops.

pub mod error;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod state;
mod tests;

pub use error::*;
pub use runtime::{Component, remember, use_unmount};
pub use scope::Scope;
pub use state::*;
