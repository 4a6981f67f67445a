//! Counter Store
//!
//! This example demonstrates the smallest useful store.
//!
//! Key concepts:
//! - Actions declared with the `action_enum!` macro
//! - A pure reducer with an identity arm
//! - A listener that reads state through a weak store handle
//! - Removing a listener with its subscription handle
//!
//! Run with: cargo run --example counter

use reducto::{action_enum, Reducer, Store};
use tracing::Level;

action_enum! {
    enum CounterAction {
        Increment => "INCREMENT",
        Decrement => "DECREMENT",
        IncrementBy { amount: i64 } => "INCREMENT_BY",
        Noop => "NOOP",
    }
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("=== Counter Store Example ===\n");

    let store = Store::new(
        Reducer::new(|count: &i64, action: &CounterAction| match action {
            CounterAction::Increment => count + 1,
            CounterAction::Decrement => count - 1,
            CounterAction::IncrementBy { amount } => count + amount,
            _ => *count,
        }),
        0,
    );

    let weak = store.downgrade();
    let logger = store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            println!("state is now {}", store.get_state());
        }
    });

    let actions = [
        CounterAction::Increment,
        CounterAction::IncrementBy { amount: 3 },
        CounterAction::Decrement,
    ];
    for action in actions {
        println!("dispatching {action:?}");
        if let Err(err) = store.dispatch(action) {
            eprintln!("dispatch failed: {err}");
        }
    }

    logger.unsubscribe();
    if let Err(err) = store.dispatch(CounterAction::Noop) {
        eprintln!("dispatch failed: {err}");
    }

    println!("\nFinal state: {}", store.get_state());
    println!("Committed transitions: {}", store.metadata().dispatch_count);

    println!("\n=== Example Complete ===");
}
