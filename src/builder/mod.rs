//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder and a declaration macro for
//! creating stores and actions with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;
