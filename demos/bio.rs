//! Profile Store
//!
//! This example demonstrates a store over a composite state.
//!
//! Key concepts:
//! - Reducers return a new state built from the old one
//! - Actions carry only the fields they need
//! - A named store configured through `StoreBuilder`
//!
//! Run with: cargo run --example bio

use reducto::{action_enum, Reducer, StoreBuilder};
use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
struct Profile {
    num: i64,
    name: String,
    age: Option<u32>,
}

action_enum! {
    enum ProfileAction {
        UpdateBio { name: String, age: u32 } => "UPDATE_BIO",
        IncrementNum { incrementer: i64 } => "INCREMENT_NUM",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("=== Profile Store Example ===\n");

    let store = StoreBuilder::new()
        .name("profile")
        .reducer(Reducer::new(|profile: &Profile, action: &ProfileAction| {
            match action {
                ProfileAction::UpdateBio { name, age } => Profile {
                    name: name.clone(),
                    age: Some(*age),
                    ..profile.clone()
                },
                ProfileAction::IncrementNum { incrementer } => Profile {
                    num: profile.num + incrementer,
                    ..profile.clone()
                },
            }
        }))
        .initial(Profile::default())
        .build()?;

    let weak = store.downgrade();
    store.subscribe(move || {
        let Some(store) = weak.upgrade() else {
            return;
        };
        match serde_json::to_string(&*store.get_state()) {
            Ok(json) => println!("state is now {json}"),
            Err(err) => eprintln!("could not render state: {err}"),
        }
    });

    store.dispatch(ProfileAction::UpdateBio {
        name: "Zak".to_string(),
        age: 17,
    })?;
    store.dispatch(ProfileAction::IncrementNum { incrementer: 5 })?;

    println!("\nFinal state: {:?}", store.get_state());
    println!("Metadata: {}", serde_json::to_string_pretty(&store.metadata())?);

    println!("\n=== Example Complete ===");
    Ok(())
}
