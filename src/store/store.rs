//! The store: a single state cell driven by a reducer.

use crate::core::{Action, Reducer};
use crate::store::error::{ListenerError, StoreError};
use crate::store::metadata::StoreMetadata;
use crate::store::subscription::{Listener, ListenerList, Subscription};
use crate::store::sync::{lock, read, write};
use std::convert::Infallible;
use std::sync::{Arc, Mutex, RwLock, Weak};
use std::thread::{self, ThreadId};
use tracing::{debug, trace, warn};

/// Current state plus its bookkeeping, swapped together on commit.
struct Committed<S> {
    state: Arc<S>,
    metadata: StoreMetadata,
}

struct Inner<S, A, E> {
    reducer: Reducer<S, A, E>,
    committed: RwLock<Committed<S>>,
    listeners: Arc<ListenerList>,
    label: String,
    // Serializes dispatches across threads.
    gate: Mutex<()>,
    // Thread currently inside `dispatch`, to reject re-entry from listeners.
    dispatching: Mutex<Option<ThreadId>>,
}

/// Predictable state container.
///
/// A store owns one current state, one reducer fixed at construction and an
/// ordered list of listeners. The only way to change the state is
/// [`dispatch`](Self::dispatch), so the current state is always the left fold
/// of the reducer over the initial state and every committed action.
///
/// Cloning a store is cheap and yields another handle to the same container.
/// A listener that reads state should capture a [`WeakStore`] from
/// [`downgrade`](Self::downgrade): a `Store` clone held by one of its own
/// listeners keeps the container alive after every other handle is gone.
///
/// # Listener failures
///
/// Notification is fail-fast: the first listener that returns an error (or
/// panics) stops the loop for that dispatch and the error reaches the caller.
/// The transition itself stays committed.
///
/// # Example
///
/// ```rust
/// use reducto::core::{Action, Reducer};
/// use reducto::store::Store;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Decrement => "DECREMENT",
///         }
///     }
/// }
///
/// let store = Store::new(
///     Reducer::new(|count: &i64, action: &CounterAction| match action {
///         CounterAction::Increment => count + 1,
///         CounterAction::Decrement => count - 1,
///     }),
///     0,
/// );
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let seen = Arc::clone(&calls);
/// let subscription = store.subscribe(move || {
///     seen.fetch_add(1, Ordering::SeqCst);
/// });
///
/// store.dispatch(CounterAction::Increment).unwrap();
/// store.dispatch(CounterAction::Increment).unwrap();
/// assert_eq!(*store.get_state(), 2);
///
/// subscription.unsubscribe();
/// store.dispatch(CounterAction::Decrement).unwrap();
/// assert_eq!(*store.get_state(), 1);
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
pub struct Store<S, A, E = Infallible> {
    inner: Arc<Inner<S, A, E>>,
}

impl<S, A, E> Store<S, A, E>
where
    S: Send + Sync + 'static,
    A: Action,
{
    /// Create a store whose current state is `initial`.
    pub fn new(reducer: Reducer<S, A, E>, initial: S) -> Self {
        Self::with_metadata(reducer, initial, StoreMetadata::new(None))
    }

    pub(crate) fn with_metadata(
        reducer: Reducer<S, A, E>,
        initial: S,
        metadata: StoreMetadata,
    ) -> Self {
        let label = metadata.label();
        debug!(store = %label, "store created");
        Self {
            inner: Arc::new(Inner {
                reducer,
                committed: RwLock::new(Committed {
                    state: Arc::new(initial),
                    metadata,
                }),
                listeners: Arc::new(ListenerList::new()),
                label,
                gate: Mutex::new(()),
                dispatching: Mutex::new(None),
            }),
        }
    }

    /// Apply `action` and notify every listener in subscription order.
    ///
    /// The new state replaces the old one even when the reducer returned an
    /// equal value. If the reducer fails, the state is left untouched and no
    /// listener runs. Dispatches on one store never interleave; a dispatch
    /// issued by a listener of the same store on the dispatching thread is
    /// rejected with [`StoreError::ReentrantDispatch`].
    pub fn dispatch(&self, action: A) -> Result<(), StoreError<E>> {
        let inner = &*self.inner;
        let this_thread = thread::current().id();

        if *lock(&inner.dispatching) == Some(this_thread) {
            warn!(store = %inner.label, action = action.kind(), "re-entrant dispatch rejected");
            return Err(StoreError::ReentrantDispatch {
                action: action.kind().to_string(),
            });
        }

        let _gate = lock(&inner.gate);
        let _owner = DispatchOwner::claim(&inner.dispatching, this_thread);

        let current = Arc::clone(&read(&inner.committed).state);
        let next = match inner.reducer.reduce(&current, &action) {
            Ok(next) => next,
            Err(source) => {
                warn!(store = %inner.label, action = action.kind(), "reducer rejected action");
                return Err(StoreError::Reducer {
                    action: action.kind().to_string(),
                    source,
                });
            }
        };

        let sequence = {
            let mut committed = write(&inner.committed);
            committed.state = Arc::new(next);
            committed.metadata.record_commit()
        };
        debug!(store = %inner.label, action = action.kind(), sequence, "state committed");

        for (position, (id, listener)) in inner.listeners.snapshot().into_iter().enumerate() {
            trace!(store = %inner.label, listener = %id, position, "notifying listener");
            if let Err(source) = listener() {
                warn!(
                    store = %inner.label,
                    action = action.kind(),
                    listener = %id,
                    position,
                    error = %source,
                    "listener failed, remaining listeners skipped"
                );
                return Err(StoreError::Listener {
                    action: action.kind().to_string(),
                    position,
                    source,
                });
            }
        }

        Ok(())
    }

    /// Register a listener, invoked after every committed transition.
    ///
    /// The same closure may be registered more than once; each registration
    /// is notified separately.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.register(Arc::new(move || {
            listener();
            Ok(())
        }))
    }

    /// Register a listener that can fail.
    ///
    /// An error stops notification for the current dispatch and is returned
    /// from [`dispatch`](Self::dispatch) as [`StoreError::Listener`].
    pub fn try_subscribe<F, LE>(&self, listener: F) -> Subscription
    where
        F: Fn() -> Result<(), LE> + Send + Sync + 'static,
        LE: Into<ListenerError>,
    {
        self.register(Arc::new(move || listener().map_err(Into::into)))
    }

    pub(crate) fn register(&self, listener: Listener) -> Subscription {
        let id = self.inner.listeners.push(listener);
        trace!(store = %self.inner.label, listener = %id, "subscribed");
        Subscription::new(id, &self.inner.listeners)
    }

    /// Shared handle to the current state.
    ///
    /// Calls with no dispatch in between return the same allocation.
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&read(&self.inner.committed).state)
    }

    /// Number of active listener registrations.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Snapshot of the store's bookkeeping.
    pub fn metadata(&self) -> StoreMetadata {
        read(&self.inner.committed).metadata.clone()
    }

    /// Non-owning handle to this store.
    pub fn downgrade(&self) -> WeakStore<S, A, E> {
        WeakStore {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl<S, A, E> Clone for Store<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Non-owning handle to a [`Store`], for use inside its listeners.
///
/// # Example
///
/// ```rust
/// use reducto::{action_enum, Reducer, Store};
///
/// action_enum! {
///     enum Tick {
///         Tick => "TICK",
///     }
/// }
///
/// let store = Store::new(Reducer::new(|n: &u32, _: &Tick| n + 1), 0);
/// let weak = store.downgrade();
/// store.subscribe(move || {
///     if let Some(store) = weak.upgrade() {
///         println!("ticks: {}", store.get_state());
///     }
/// });
///
/// store.dispatch(Tick::Tick).unwrap();
/// ```
pub struct WeakStore<S, A, E = Infallible> {
    inner: Weak<Inner<S, A, E>>,
}

impl<S, A, E> WeakStore<S, A, E> {
    /// Owning handle, or `None` once every `Store` handle has been dropped.
    pub fn upgrade(&self) -> Option<Store<S, A, E>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<S, A, E> Clone for WeakStore<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

/// Marks the current thread as dispatching until dropped, including on unwind.
struct DispatchOwner<'a> {
    slot: &'a Mutex<Option<ThreadId>>,
}

impl<'a> DispatchOwner<'a> {
    fn claim(slot: &'a Mutex<Option<ThreadId>>, thread: ThreadId) -> Self {
        *lock(slot) = Some(thread);
        Self { slot }
    }
}

impl Drop for DispatchOwner<'_> {
    fn drop(&mut self) {
        *lock(self.slot) = None;
    }
}
