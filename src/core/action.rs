//! Core Action trait for store actions.
//!
//! Actions are tagged values describing an intended state transition.
//! They carry data only; interpreting them is the reducer's job.

use std::fmt::Debug;

/// Trait for actions dispatched to a store.
///
/// Actions are usually enums: one variant per recognised kind, each carrying
/// only the payload fields it needs. The store never inspects the payload; it
/// only reads the tag for diagnostics.
///
/// # Required Traits
///
/// - `Debug`: actions must be debuggable for diagnostics
/// - `Send` + `Sync`: stores can be shared between threads
///
/// # Example
///
/// ```rust
/// use reducto::core::Action;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
///     IncrementBy { amount: i64 },
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Decrement => "DECREMENT",
///             Self::IncrementBy { .. } => "INCREMENT_BY",
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::IncrementBy { amount: 3 }.kind(), "INCREMENT_BY");
/// ```
pub trait Action: Debug + Send + Sync {
    /// The discriminating tag of this action.
    ///
    /// Used for logging and error messages. Two actions of the same variant
    /// must return the same tag regardless of payload.
    fn kind(&self) -> &str;
}
