//! Listener registrations and the handles that remove them.

use crate::store::error::ListenerError;
use crate::store::sync::{read, write};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};
use tracing::trace;

/// Type-erased listener as stored by the store.
pub(crate) type Listener = Arc<dyn Fn() -> Result<(), ListenerError> + Send + Sync>;

/// Identifier of a single listener registration.
///
/// Registering the same closure twice yields two distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Ordered listener registrations of one store.
pub(crate) struct ListenerList {
    entries: RwLock<Vec<(ListenerId, Listener)>>,
    next_id: AtomicU64,
}

impl ListenerList {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub(crate) fn push(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        write(&self.entries).push((id, listener));
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut entries = write(&self.entries);
        match entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Copy of the registrations in order, so listeners run without the
    /// list locked and may subscribe or unsubscribe themselves.
    pub(crate) fn snapshot(&self) -> Vec<(ListenerId, Listener)> {
        read(&self.entries).clone()
    }

    pub(crate) fn len(&self) -> usize {
        read(&self.entries).len()
    }
}

/// Capability to remove one listener registration.
///
/// Returned by [`Store::subscribe`](crate::store::Store::subscribe). Dropping
/// the handle does not remove the listener; call [`unsubscribe`](Self::unsubscribe).
pub struct Subscription {
    id: ListenerId,
    listeners: Weak<ListenerList>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, listeners: &Arc<ListenerList>) -> Self {
        Self {
            id,
            listeners: Arc::downgrade(listeners),
        }
    }

    /// Identifier of the registration this handle controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the listener from its store.
    ///
    /// Returns `false` if the registration was already gone or the store has
    /// been dropped. A dispatch already notifying listeners is not affected.
    pub fn unsubscribe(self) -> bool {
        let removed = self
            .listeners
            .upgrade()
            .is_some_and(|listeners| listeners.remove(self.id));
        trace!(listener = %self.id, removed, "unsubscribe");
        removed
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
