//! The collection lifecycle reducer.
//!
//! [`CollectionReducer`] is the factory product: configured once per
//! resource type, it maps `(CollectionState, CollectionAction)` to the
//! next state. It is a pure, synchronous state machine; every reduction
//! returns [`Effect::None`].

use crate::actions::{CollectionAction, ItemRef};
use crate::cid::CidAllocator;
use crate::item::{ItemStatus, TrackedItem};
use crate::merge::merge;
use crate::state::{CollectionState, FailedCreation, OperationStatus};
use cruddy_rust_core::environment::Clock;
use cruddy_rust_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Extracts the uniqueness key from a record.
///
/// Returning `None` opts the record out of key-based identity: it never
/// matches or collapses with anything and is tracked purely by cid.
pub type KeyFn<T, K> = Arc<dyn Fn(&T) -> Option<K> + Send + Sync>;

/// Construction-time configuration for one collection.
pub struct CollectionConfig<T, K> {
    unique_by: Option<KeyFn<T, K>>,
}

impl<T, K> CollectionConfig<T, K> {
    /// Configuration with no uniqueness key: identity is tracked purely
    /// by internally allocated cid.
    #[must_use]
    pub const fn new() -> Self {
        Self { unique_by: None }
    }

    /// Configures the uniqueness key used to deduplicate and match
    /// records across lifecycle events.
    #[must_use]
    pub fn unique_by<F>(mut self, key_of: F) -> Self
    where
        F: Fn(&T) -> Option<K> + Send + Sync + 'static,
    {
        self.unique_by = Some(Arc::new(key_of));
        self
    }

    pub(crate) fn key_fn(&self) -> Option<&(dyn Fn(&T) -> Option<K> + Send + Sync)> {
        self.unique_by.as_deref()
    }
}

impl<T, K: PartialEq> CollectionConfig<T, K> {
    fn key_of(&self, data: &T) -> Option<K> {
        self.unique_by.as_ref().and_then(|f| f(data))
    }

    /// Whether `target` selects `item`: by uniqueness key when the
    /// target carries data or a bare key, by cid when it carries a
    /// tracked envelope. Raw data never matches on an unconfigured
    /// collection; there is no cid to fall back to.
    pub(crate) fn matches(&self, target: &ItemRef<T, K>, item: &TrackedItem<T>) -> bool {
        match target {
            ItemRef::Data(data) => match (self.key_of(data), self.key_of(&item.data)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            ItemRef::Key(key) => self.key_of(&item.data).as_ref() == Some(key),
            ItemRef::Tracked(tracked) => tracked.cid == item.cid,
        }
    }
}

impl<T, K> Default for CollectionConfig<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Clone for CollectionConfig<T, K> {
    fn clone(&self) -> Self {
        Self {
            unique_by: self.unique_by.clone(),
        }
    }
}

impl<T, K> std::fmt::Debug for CollectionConfig<T, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionConfig")
            .field("unique_by", &self.unique_by.is_some())
            .finish()
    }
}

/// Environment dependencies for the collection reducer.
#[derive(Clone)]
pub struct CollectionEnvironment {
    /// Allocator for internal identifiers
    pub cids: Arc<dyn CidAllocator>,
    /// Clock for stamping failure records
    pub clock: Arc<dyn Clock>,
}

impl CollectionEnvironment {
    /// Creates a new `CollectionEnvironment`.
    #[must_use]
    pub fn new(cids: Arc<dyn CidAllocator>, clock: Arc<dyn Clock>) -> Self {
        Self { cids, clock }
    }
}

/// Reducer for one tracked CRUD resource collection.
pub struct CollectionReducer<T, K> {
    config: CollectionConfig<T, K>,
}

impl<T, K> CollectionReducer<T, K> {
    /// Creates a reducer from its configuration.
    #[must_use]
    pub const fn new(config: CollectionConfig<T, K>) -> Self {
        Self { config }
    }
}

impl<T, K> Default for CollectionReducer<T, K> {
    fn default() -> Self {
        Self::new(CollectionConfig::new())
    }
}

impl<T, K> Clone for CollectionReducer<T, K> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
        }
    }
}

impl<T, K> std::fmt::Debug for CollectionReducer<T, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionReducer")
            .field("config", &self.config)
            .finish()
    }
}

impl<T, K> CollectionReducer<T, K>
where
    T: Clone,
    K: PartialEq,
{
    /// Merges an incoming batch into the item list and normalizes every
    /// resulting entry: fresh records get a cid and land at Success,
    /// refreshed records keep their cid and move to Success, untouched
    /// records pass through unchanged.
    fn merge_into(
        &self,
        state: &mut CollectionState<T>,
        incoming: Vec<T>,
        env: &CollectionEnvironment,
    ) {
        let existing = std::mem::take(&mut state.items);
        state.items = merge(existing, incoming, self.config.key_fn())
            .into_iter()
            .map(|entry| match entry.tracked {
                Some((cid, status)) => {
                    let status = if entry.from_event {
                        ItemStatus::Success
                    } else {
                        status
                    };
                    TrackedItem::new(cid, entry.data, status)
                },
                None => TrackedItem::new(env.cids.next(), entry.data, ItemStatus::Success),
            })
            .collect();
    }

    /// Applies a status-only transition to the targeted items, or to
    /// every item when `targets` is `None` (broadcast).
    fn mark_targets(
        &self,
        items: &mut [TrackedItem<T>],
        targets: Option<&[ItemRef<T, K>]>,
        status: ItemStatus,
    ) {
        let Some(targets) = targets else {
            for item in items.iter_mut() {
                item.status = status;
            }
            return;
        };
        let mut matched = 0_usize;
        for item in items.iter_mut() {
            if targets.iter().any(|t| self.config.matches(t, item)) {
                item.status = status;
                matched += 1;
            }
        }
        if matched == 0 && !targets.is_empty() {
            tracing::warn!(status = %status, "no tracked item matched the event targets");
        }
    }

    /// Applies update results: matched items take the target's
    /// replacement data (when it carries any) and settle at Success.
    /// With no targets, every item settles at Success, data unchanged.
    fn settle_updates(&self, items: &mut [TrackedItem<T>], targets: Option<&[ItemRef<T, K>]>) {
        let Some(targets) = targets else {
            for item in items.iter_mut() {
                item.status = ItemStatus::Success;
            }
            return;
        };
        let mut matched = 0_usize;
        for item in items.iter_mut() {
            if let Some(target) = targets.iter().find(|t| self.config.matches(t, item)) {
                if let Some(data) = target.replacement() {
                    item.data = data.clone();
                }
                item.status = ItemStatus::Success;
                matched += 1;
            }
        }
        if matched == 0 && !targets.is_empty() {
            tracing::warn!("update success matched no tracked item");
        }
    }

    /// Drops every item selected by the targets.
    fn remove_targets(&self, items: &mut Vec<TrackedItem<T>>, targets: &[ItemRef<T, K>]) {
        let before = items.len();
        items.retain(|item| !targets.iter().any(|t| self.config.matches(t, item)));
        let removed = before - items.len();
        if removed == 0 && !targets.is_empty() {
            tracing::warn!("delete success matched no tracked item");
        } else {
            tracing::debug!(removed, "removed deleted items");
        }
    }
}

impl<T, K> Reducer for CollectionReducer<T, K>
where
    T: Clone,
    K: PartialEq,
{
    type State = CollectionState<T>;
    type Action = CollectionAction<T, K>;
    type Environment = CollectionEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(action = action.kind(), "reducing collection action");
        match action {
            CollectionAction::FetchStart => {
                state.status = OperationStatus::Pending;
                state.error = None;
                // Items are untouched; nothing per-item reacts to a
                // fetch starting.
            },
            CollectionAction::FetchSuccess { items } => {
                state.status = OperationStatus::Success;
                state.error = None;
                self.merge_into(state, items, env);
            },
            CollectionAction::FetchError { error } => {
                state.status = OperationStatus::Error;
                state.error = Some(error);
                // Stale-but-present data is preserved.
            },
            CollectionAction::CreateStart { items: _ } => {
                // Optimistic creation is not implemented; the payload is
                // carried for transport fidelity only.
                state.creating = OperationStatus::Pending;
            },
            CollectionAction::CreateSuccess { items } => {
                state.creating = OperationStatus::Success;
                self.merge_into(state, items, env);
            },
            CollectionAction::CreateFailed { error, items } => {
                state.creating = OperationStatus::Error;
                let failed_at = env.clock.now();
                state
                    .failed_creations
                    .extend(items.into_iter().map(|data| FailedCreation {
                        error: error.clone(),
                        data,
                        failed_at,
                    }));
            },
            CollectionAction::UpdateStart { targets } => {
                state.updating = OperationStatus::Pending;
                self.mark_targets(&mut state.items, targets.as_deref(), ItemStatus::Updating);
            },
            CollectionAction::UpdateSuccess { targets } => {
                state.updating = OperationStatus::Success;
                self.settle_updates(&mut state.items, targets.as_deref());
            },
            CollectionAction::DeleteStart { targets } => {
                state.deleting = OperationStatus::Pending;
                self.mark_targets(&mut state.items, Some(targets.as_slice()), ItemStatus::Deleting);
            },
            CollectionAction::DeleteSuccess { targets } => {
                state.deleting = OperationStatus::Success;
                self.remove_targets(&mut state.items, &targets);
            },
            CollectionAction::Empty => {
                // Clears items only; failed creations stay until the
                // caller rebuilds the state.
                state.items.clear();
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}

