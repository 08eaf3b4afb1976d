//! Users collection example binary
//!
//! Drives one tracked `users` resource through its full lifecycle the
//! way a container wired to a real transport would: dispatch lifecycle
//! events in order, read the collection state back between dispatches.

use cruddy_rust_collection::{
    CollectionAction, CollectionConfig, CollectionEnvironment, CollectionReducer, CollectionState,
    ItemRef, MonotonicCids,
};
use cruddy_rust_core::environment::SystemClock;
use cruddy_rust_core::reducer::Reducer;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Debug)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn user(id: u32, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn send(
    reducer: &CollectionReducer<User, u32>,
    env: &CollectionEnvironment,
    state: &mut CollectionState<User>,
    action: CollectionAction<User, u32>,
) {
    let _ = reducer.reduce(state, action, env);
}

fn print_collection(state: &CollectionState<User>) {
    println!(
        "status={} creating={} updating={} deleting={}",
        state.status, state.creating, state.updating, state.deleting
    );
    for item in &state.items {
        println!(
            "  {} [{}] {} <{}>",
            item.cid, item.status, item.data.name, item.data.email
        );
    }
    for failure in &state.failed_creations {
        println!("  failed: {} ({})", failure.data.name, failure.error);
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users=info,cruddy_rust_collection=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Users Collection Example ===\n");

    let reducer = CollectionReducer::new(CollectionConfig::new().unique_by(|u: &User| Some(u.id)));
    let env = CollectionEnvironment::new(Arc::new(MonotonicCids::new()), Arc::new(SystemClock));
    let mut state = CollectionState::new();

    tracing::info!("collection ready");

    println!(">>> Fetching users");
    send(&reducer, &env, &mut state, CollectionAction::FetchStart);
    send(
        &reducer,
        &env,
        &mut state,
        CollectionAction::FetchSuccess {
            items: vec![
                user(1, "Ada Lovelace", "ada@example.com"),
                user(2, "Brian Kernighan", "bwk@example.com"),
                user(3, "Grace Hopper", "grace@example.com"),
            ],
        },
    );
    print_collection(&state);

    println!("\n>>> Creating a user");
    send(
        &reducer,
        &env,
        &mut state,
        CollectionAction::CreateStart {
            items: vec![user(4, "Dennis Ritchie", "dmr@example.com")],
        },
    );
    send(
        &reducer,
        &env,
        &mut state,
        CollectionAction::CreateSuccess {
            items: vec![user(4, "Dennis Ritchie", "dmr@example.com")],
        },
    );
    print_collection(&state);

    println!("\n>>> Updating Brian's email");
    send(
        &reducer,
        &env,
        &mut state,
        CollectionAction::UpdateStart {
            targets: Some(vec![ItemRef::Key(2)]),
        },
    );
    send(
        &reducer,
        &env,
        &mut state,
        CollectionAction::UpdateSuccess {
            targets: Some(vec![ItemRef::Data(user(
                2,
                "Brian Kernighan",
                "brian@example.com",
            ))]),
        },
    );
    print_collection(&state);

    println!("\n>>> Deleting Ada");
    send(
        &reducer,
        &env,
        &mut state,
        CollectionAction::DeleteStart {
            targets: vec![ItemRef::Key(1)],
        },
    );
    send(
        &reducer,
        &env,
        &mut state,
        CollectionAction::DeleteSuccess {
            targets: vec![ItemRef::Key(1)],
        },
    );
    print_collection(&state);

    println!("\n>>> A creation that fails remotely");
    send(
        &reducer,
        &env,
        &mut state,
        CollectionAction::CreateFailed {
            error: "email already taken".to_string(),
            items: vec![user(5, "Eve Duplicate", "grace@example.com")],
        },
    );
    print_collection(&state);

    println!("\n>>> Emptying the collection");
    send(&reducer, &env, &mut state, CollectionAction::Empty);
    print_collection(&state);

    println!("\n=== Demo Complete ===");
}
