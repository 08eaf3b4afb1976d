//! Property-based tests for collection invariants.

use cruddy_rust_collection::{
    CollectionAction, CollectionConfig, CollectionEnvironment, CollectionReducer, CollectionState,
    ItemRef, ItemStatus,
};
use cruddy_rust_core::reducer::Reducer;
use cruddy_rust_testing::mocks::test_environment;
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
struct Rec {
    id: u32,
    tag: String,
}

fn keyed() -> (CollectionReducer<Rec, u32>, CollectionEnvironment) {
    (
        CollectionReducer::new(CollectionConfig::new().unique_by(|r: &Rec| Some(r.id))),
        test_environment(),
    )
}

fn batch() -> impl Strategy<Value = Vec<Rec>> {
    prop::collection::vec(
        (0_u32..16, "[a-z]{1,6}").prop_map(|(id, tag)| Rec { id, tag }),
        0..12,
    )
}

/// First-occurrence order of ids within a batch.
fn first_occurrence_ids(batch: &[Rec]) -> Vec<u32> {
    let mut seen = HashSet::new();
    batch
        .iter()
        .map(|r| r.id)
        .filter(|id| seen.insert(*id))
        .collect()
}

proptest! {
    #[test]
    fn fetch_keeps_one_item_per_distinct_key_in_order(batch in batch()) {
        let (reducer, env) = keyed();
        let mut state = CollectionState::new();
        let _ = reducer.reduce(
            &mut state,
            CollectionAction::FetchSuccess { items: batch.clone() },
            &env,
        );

        let actual: Vec<u32> = state.items.iter().map(|i| i.data.id).collect();
        prop_assert_eq!(actual, first_occurrence_ids(&batch));
    }

    #[test]
    fn cids_are_unique_and_stable_across_fetches(first in batch(), second in batch()) {
        let (reducer, env) = keyed();
        let mut state = CollectionState::new();
        let _ = reducer.reduce(
            &mut state,
            CollectionAction::FetchSuccess { items: first },
            &env,
        );
        let before: Vec<(u32, _)> =
            state.items.iter().map(|i| (i.data.id, i.cid)).collect();

        let _ = reducer.reduce(
            &mut state,
            CollectionAction::FetchSuccess { items: second },
            &env,
        );

        let cids: HashSet<_> = state.items.iter().map(|i| i.cid).collect();
        prop_assert_eq!(cids.len(), state.len());

        // Fetches never remove records, so every previously tracked id
        // must still carry the cid it was assigned first.
        for (id, cid) in before {
            let item = state.find(|r| r.id == id);
            prop_assert_eq!(item.map(|i| i.cid), Some(cid));
        }
    }

    #[test]
    fn broadcast_update_touches_every_item(batch in batch()) {
        let (reducer, env) = keyed();
        let mut state = CollectionState::new();
        let _ = reducer.reduce(
            &mut state,
            CollectionAction::FetchSuccess { items: batch },
            &env,
        );
        let _ = reducer.reduce(
            &mut state,
            CollectionAction::UpdateStart { targets: None },
            &env,
        );
        prop_assert!(state.items.iter().all(|i| i.status == ItemStatus::Updating));

        let _ = reducer.reduce(
            &mut state,
            CollectionAction::UpdateSuccess { targets: None },
            &env,
        );
        prop_assert!(state.items.iter().all(|i| i.status == ItemStatus::Success));
    }

    #[test]
    fn delete_removes_exactly_the_keyed_items(batch in batch()) {
        let (reducer, env) = keyed();
        let mut state = CollectionState::new();
        let _ = reducer.reduce(
            &mut state,
            CollectionAction::FetchSuccess { items: batch.clone() },
            &env,
        );

        let targets: Vec<ItemRef<Rec, u32>> = batch
            .iter()
            .filter(|r| r.id % 2 == 0)
            .map(|r| ItemRef::Key(r.id))
            .collect();
        let _ = reducer.reduce(
            &mut state,
            CollectionAction::DeleteSuccess { targets },
            &env,
        );

        let expected: Vec<u32> = first_occurrence_ids(&batch)
            .into_iter()
            .filter(|id| id % 2 == 1)
            .collect();
        let actual: Vec<u32> = state.items.iter().map(|i| i.data.id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn unkeyed_collections_grow_by_raw_count(batch in batch()) {
        let reducer: CollectionReducer<Rec, u32> = CollectionReducer::default();
        let env = test_environment();
        let mut state = CollectionState::new();
        let _ = reducer.reduce(
            &mut state,
            CollectionAction::FetchSuccess { items: batch.clone() },
            &env,
        );
        let _ = reducer.reduce(
            &mut state,
            CollectionAction::FetchSuccess { items: batch.clone() },
            &env,
        );
        prop_assert_eq!(state.len(), batch.len() * 2);
    }
}
