//! # use_mutable_state
//!
//! A state hook for `mutable-state-runtime` components whose writes always
//! *replace* the stored value.
//!
//! ```rust
//! use mutable_state::{SetStateAction, use_mutable_state};
//! use mutable_state_runtime::Component;
//!
//! let (mut counter, (count, set_count)) =
//!     Component::mount(|| use_mutable_state(|| 0).unwrap());
//! assert_eq!(*count, 0);
//!
//! set_count.set(5);
//! let (count, set_count) = counter.flush().unwrap();
//! assert_eq!(*count, 5);
//!
//! set_count.dispatch(SetStateAction::update(|prev: &i32| prev + 1));
//! let (count, _) = counter.flush().unwrap();
//! assert_eq!(*count, 6);
//! ```
//!
//! The value lives inside a one-field record and every write stores a new
//! record. Two things follow:
//!
//! - every write schedules a render, even when the new value equals the old;
//! - a function-typed state is stored as data. `set(f)` keeps `f`, it never
//!   calls it.
//!
//! Initial values work the other way round. A closure passed to
//! `use_mutable_state` is an initializer and runs exactly once, on the first
//! render; a plain value is passed with [`InitialState::value`]. A state whose
//! type is itself a closure therefore has to be seeded through
//! `InitialState::value` or returned from an initializer.

pub mod action;
pub mod hook;

pub use action::{InitialState, SetStateAction};
pub use hook::{SetState, StateValue, use_mutable_state};
pub use mutable_state_runtime::{HookError, Result};
