//! Property-based tests for the store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use reducto::{action_enum, Reducer, Store};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

action_enum! {
    enum CounterAction {
        Increment => "INCREMENT",
        Decrement => "DECREMENT",
        IncrementBy { amount: i64 } => "INCREMENT_BY",
        Reset => "RESET",
        Ignored => "IGNORED",
    }
}

fn counter_reducer() -> Reducer<i64, CounterAction> {
    Reducer::new(|count: &i64, action: &CounterAction| match action {
        CounterAction::Increment => count + 1,
        CounterAction::Decrement => count - 1,
        CounterAction::IncrementBy { amount } => count + amount,
        CounterAction::Reset => 0,
        _ => *count,
    })
}

fn arbitrary_action() -> impl Strategy<Value = CounterAction> {
    prop_oneof![
        Just(CounterAction::Increment),
        Just(CounterAction::Decrement),
        (-1_000i64..1_000).prop_map(|amount| CounterAction::IncrementBy { amount }),
        Just(CounterAction::Reset),
        Just(CounterAction::Ignored),
    ]
}

proptest! {
    #[test]
    fn state_is_left_fold_of_dispatched_actions(
        initial in -1_000i64..1_000,
        actions in prop::collection::vec(arbitrary_action(), 0..50)
    ) {
        let store = Store::new(counter_reducer(), initial);
        for action in &actions {
            store.dispatch(action.clone()).unwrap();
        }

        let expected = counter_reducer().fold(initial, &actions).unwrap();
        prop_assert_eq!(*store.get_state(), expected);
        prop_assert_eq!(store.metadata().dispatch_count, actions.len() as u64);
    }

    #[test]
    fn ignored_action_is_identity(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let store = Store::new(counter_reducer(), 0);
        for action in actions {
            store.dispatch(action).unwrap();
        }

        let before = *store.get_state();
        store.dispatch(CounterAction::Ignored).unwrap();
        prop_assert_eq!(*store.get_state(), before);
    }

    #[test]
    fn get_state_is_stable_without_dispatch(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let store = Store::new(counter_reducer(), 0);
        for action in actions {
            store.dispatch(action).unwrap();
        }

        let first = store.get_state();
        let second = store.get_state();
        prop_assert!(Arc::ptr_eq(&first, &second));
        prop_assert_eq!(*first, *second);
    }

    #[test]
    fn every_listener_runs_once_per_dispatch_in_order(
        listeners in 1usize..6,
        actions in prop::collection::vec(arbitrary_action(), 1..10)
    ) {
        let store = Store::new(counter_reducer(), 0);
        let log = Arc::new(Mutex::new(Vec::new()));

        for index in 0..listeners {
            let log = Arc::clone(&log);
            store.subscribe(move || log.lock().unwrap().push(index));
        }

        for action in &actions {
            store.dispatch(action.clone()).unwrap();
        }

        let expected: Vec<usize> = (0..actions.len()).flat_map(|_| 0..listeners).collect();
        prop_assert_eq!(&*log.lock().unwrap(), &expected);
    }

    #[test]
    fn unsubscribe_only_affects_later_dispatches(
        before in 0usize..10,
        after in 0usize..10
    ) {
        let store = Store::new(counter_reducer(), 0);
        let calls = Arc::new(AtomicUsize::new(0));
        let subscription = {
            let calls = Arc::clone(&calls);
            store.subscribe(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        for _ in 0..before {
            store.dispatch(CounterAction::Increment).unwrap();
        }
        prop_assert!(subscription.unsubscribe());
        for _ in 0..after {
            store.dispatch(CounterAction::Increment).unwrap();
        }

        prop_assert_eq!(calls.load(Ordering::SeqCst), before);
        prop_assert_eq!(*store.get_state(), (before + after) as i64);
    }
}
