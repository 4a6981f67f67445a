//! The store: the imperative shell around the pure core.
//!
//! A store holds the current state, runs the reducer on every dispatched
//! action and notifies listeners afterwards.
//!
//! # Key Concepts
//!
//! - **Store**: shared handle to one state cell, one reducer and its listeners
//! - **WeakStore**: non-owning handle that listeners capture to read state
//! - **Subscription**: capability that removes one listener registration
//! - **StoreError**: why a dispatch did not complete
//!
//! Dispatch is synchronous. Reducer failures abort before anything is
//! committed; listener failures are fail-fast after the commit.

mod error;
mod metadata;
#[allow(clippy::module_inception)]
mod store;
mod subscription;
mod sync;

pub use error::{ListenerError, StoreError};
pub use metadata::StoreMetadata;
pub use store::{Store, WeakStore};
pub use subscription::{ListenerId, Subscription};
