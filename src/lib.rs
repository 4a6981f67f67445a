//! Reducto: a minimal predictable state container
//!
//! Reducto follows the "pure core, imperative shell" philosophy. State
//! transitions live in a pure reducer; the store is the thin shell that
//! holds the current state and tells listeners when it changed.
//!
//! # Core Concepts
//!
//! - **Action**: tagged value describing an intended transition
//! - **Reducer**: pure function computing the next state from an action
//! - **Store**: one state cell, one reducer and an ordered list of listeners
//! - **Subscription**: handle that removes a listener again
//!
//! # Example
//!
//! ```rust
//! use reducto::{action_enum, Reducer, Store};
//!
//! action_enum! {
//!     enum CounterAction {
//!         Increment => "INCREMENT",
//!         Decrement => "DECREMENT",
//!         IncrementBy { amount: i64 } => "INCREMENT_BY",
//!     }
//! }
//!
//! let store = Store::new(
//!     Reducer::new(|count: &i64, action: &CounterAction| match action {
//!         CounterAction::Increment => count + 1,
//!         CounterAction::Decrement => count - 1,
//!         CounterAction::IncrementBy { amount } => count + amount,
//!     }),
//!     0,
//! );
//!
//! store.dispatch(CounterAction::Increment).unwrap();
//! store.dispatch(CounterAction::IncrementBy { amount: 3 }).unwrap();
//! store.dispatch(CounterAction::Decrement).unwrap();
//! assert_eq!(*store.get_state(), 3);
//! ```

pub mod builder;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use self::core::{Action, Reducer};
pub use store::{
    ListenerError, ListenerId, Store, StoreError, StoreMetadata, Subscription, WeakStore,
};
