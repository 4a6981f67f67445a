//! Core store types and logic.
//!
//! This module contains the pure functional core of the store:
//! - Action definitions via the `Action` trait
//! - Reducers computing the next state from an action
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy. The `store` module is
//! the shell that holds state and notifies listeners.

mod action;
mod reducer;

pub use action::Action;
pub use reducer::Reducer;
