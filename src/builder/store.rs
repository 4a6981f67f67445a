//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{Action, Reducer};
use crate::store::{Store, StoreMetadata};
use std::convert::Infallible;
use std::sync::Arc;

type PermanentListener = Arc<dyn Fn() + Send + Sync>;

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```
/// use reducto::builder::StoreBuilder;
/// use reducto::core::Reducer;
/// use reducto::action_enum;
///
/// action_enum! {
///     enum Toggle {
///         Flip => "FLIP",
///     }
/// }
///
/// let store = StoreBuilder::new()
///     .name("switch")
///     .reducer(Reducer::new(|on: &bool, _: &Toggle| !on))
///     .initial(false)
///     .build()
///     .unwrap();
///
/// store.dispatch(Toggle::Flip).unwrap();
/// assert!(*store.get_state());
/// assert_eq!(store.metadata().name.as_deref(), Some("switch"));
/// ```
pub struct StoreBuilder<S, A, E = Infallible> {
    name: Option<String>,
    reducer: Option<Reducer<S, A, E>>,
    initial: Option<S>,
    listeners: Vec<PermanentListener>,
}

impl<S, A, E> StoreBuilder<S, A, E>
where
    S: Send + Sync + 'static,
    A: Action,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            reducer: None,
            initial: None,
            listeners: Vec::new(),
        }
    }

    /// Name the store for logs and metadata (optional).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the reducer (required).
    pub fn reducer(mut self, reducer: Reducer<S, A, E>) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a listener that stays registered for the store's lifetime.
    ///
    /// Listeners added here are notified before any added later with
    /// [`Store::subscribe`].
    pub fn listener<F>(mut self, listener: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<S, A, E>, BuildError> {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let store = Store::with_metadata(reducer, initial, StoreMetadata::new(self.name));
        for listener in self.listeners {
            store.subscribe(move || listener());
        }

        Ok(store)
    }
}

impl<S, A, E> Default for StoreBuilder<S, A, E>
where
    S: Send + Sync + 'static,
    A: Action,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestAction {
        Increment,
        Decrement,
    }

    impl Action for TestAction {
        fn kind(&self) -> &str {
            match self {
                Self::Increment => "INCREMENT",
                Self::Decrement => "DECREMENT",
            }
        }
    }

    fn counter() -> Reducer<i32, TestAction> {
        Reducer::new(|count: &i32, action: &TestAction| match action {
            TestAction::Increment => count + 1,
            TestAction::Decrement => count - 1,
        })
    }

    #[test]
    fn builder_requires_reducer() {
        let result = StoreBuilder::<i32, TestAction>::new().initial(0).build();

        assert!(matches!(result, Err(BuildError::MissingReducer)));
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = StoreBuilder::new().reducer(counter()).build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn fluent_api_builds_store() {
        let store = StoreBuilder::new()
            .reducer(counter())
            .initial(10)
            .build()
            .unwrap();

        assert_eq!(*store.get_state(), 10);
        assert_eq!(store.listener_count(), 0);
        assert!(store.metadata().name.is_none());
    }

    #[test]
    fn name_is_recorded_in_metadata() {
        let store = StoreBuilder::new()
            .name("counter")
            .reducer(counter())
            .initial(0)
            .build()
            .unwrap();

        let metadata = store.metadata();
        assert_eq!(metadata.name.as_deref(), Some("counter"));
        assert_eq!(metadata.label(), "counter");
    }

    #[test]
    fn builder_listeners_are_registered_first() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let builder_order = Arc::clone(&order);

        let store = StoreBuilder::new()
            .reducer(counter())
            .initial(0)
            .listener(move || builder_order.lock().unwrap().push("builder"))
            .build()
            .unwrap();

        let later_order = Arc::clone(&order);
        store.subscribe(move || later_order.lock().unwrap().push("subscribed"));

        store.dispatch(TestAction::Increment).unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["builder", "subscribed"]);
    }

    #[test]
    fn builder_listeners_fire_on_every_dispatch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        let store = StoreBuilder::new()
            .reducer(counter())
            .initial(0)
            .listener(move || {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        store.dispatch(TestAction::Increment).unwrap();
        store.dispatch(TestAction::Decrement).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*store.get_state(), 0);
    }
}
