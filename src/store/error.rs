//! Dispatch error types.

use thiserror::Error;

/// Error reported by a fallible listener.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while dispatching an action.
///
/// `E` is the reducer's error type (`Infallible` for plain reducers).
#[derive(Debug, Error)]
pub enum StoreError<E> {
    /// The reducer rejected the action. State was left unchanged and no
    /// listener was notified.
    #[error("Reducer rejected action '{action}': {source}")]
    Reducer {
        action: String,
        #[source]
        source: E,
    },

    /// A listener failed. The transition was committed; listeners after
    /// `position` were not notified for this dispatch.
    #[error("Listener at position {position} failed after action '{action}': {source}")]
    Listener {
        action: String,
        position: usize,
        #[source]
        source: ListenerError,
    },

    /// `dispatch` was called from a listener while the same store was
    /// already dispatching on this thread. Nothing was applied.
    #[error("Action '{action}' dispatched from inside a listener of the same store")]
    ReentrantDispatch { action: String },
}

impl<E> StoreError<E> {
    /// Tag of the action the failed dispatch carried.
    pub fn action(&self) -> &str {
        match self {
            Self::Reducer { action, .. }
            | Self::Listener { action, .. }
            | Self::ReentrantDispatch { action } => action,
        }
    }

    /// Whether the state transition was committed before the failure.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Listener { .. })
    }
}
