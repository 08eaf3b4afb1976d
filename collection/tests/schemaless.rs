//! Collections over schemaless payloads.
//!
//! The reducer is generic over the record type; these tests exercise it
//! with dynamic JSON values keyed by a field lookup, the shape a thin
//! transport layer hands over before any typed decoding.

use cruddy_rust_collection::{
    CollectionAction, CollectionConfig, CollectionEnvironment, CollectionReducer, CollectionState,
    ItemRef,
};
use cruddy_rust_core::reducer::Reducer;
use cruddy_rust_testing::mocks::test_environment;
use serde_json::{Value, json};

struct Collection {
    reducer: CollectionReducer<Value, i64>,
    env: CollectionEnvironment,
    state: CollectionState<Value>,
}

impl Collection {
    fn new() -> Self {
        Self {
            reducer: CollectionReducer::new(
                CollectionConfig::new().unique_by(|v: &Value| v.get("id").and_then(Value::as_i64)),
            ),
            env: test_environment(),
            state: CollectionState::new(),
        }
    }

    fn send(&mut self, action: CollectionAction<Value, i64>) {
        let _ = self.reducer.reduce(&mut self.state, action, &self.env);
    }
}

#[test]
fn json_records_dedup_by_field() {
    let mut c = Collection::new();
    c.send(CollectionAction::FetchSuccess {
        items: vec![json!({"id": 1, "newOne": false})],
    });
    c.send(CollectionAction::FetchSuccess {
        items: vec![json!({"id": 1, "newOne": true})],
    });
    assert_eq!(c.state.len(), 1);
    assert_eq!(c.state.items[0].data["newOne"], json!(true));
}

#[test]
fn records_missing_the_field_never_collapse() {
    let mut c = Collection::new();
    c.send(CollectionAction::FetchSuccess {
        items: vec![json!({"name": "no id"}), json!({"name": "no id"})],
    });
    assert_eq!(c.state.len(), 2);
}

#[test]
fn update_success_replaces_json_payloads() {
    let mut c = Collection::new();
    c.send(CollectionAction::CreateSuccess {
        items: vec![json!({"id": 7, "draft": true})],
    });
    c.send(CollectionAction::UpdateSuccess {
        targets: Some(vec![ItemRef::Data(json!({"id": 7, "draft": false}))]),
    });
    assert_eq!(c.state.items[0].data, json!({"id": 7, "draft": false}));
}
