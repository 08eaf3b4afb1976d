//! Collection state.
//!
//! The full state value exposed to the surrounding container. It is only
//! ever changed by reducing a [`CollectionAction`](crate::CollectionAction)
//! and is replaced wholesale on each event.

use crate::cid::Cid;
use crate::item::TrackedItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of one operation track (fetch, create, update, delete).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    /// The operation was started and has not resolved
    Pending,
    /// The last operation on this track succeeded (also the idle state)
    Success,
    /// The last operation on this track failed
    Error,
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// A record that failed creation, kept for the caller to inspect.
///
/// Never removed or retried by the collection itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailedCreation<T> {
    /// The transport-supplied error
    pub error: String,
    /// The payload that failed to be created
    pub data: T,
    /// When the failure was recorded
    pub failed_at: DateTime<Utc>,
}

/// State of one tracked CRUD resource collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionState<T> {
    /// Fetch lifecycle status
    pub status: OperationStatus,
    /// Last fetch error; cleared on the next fetch attempt
    pub error: Option<String>,
    /// Tracked items, in insertion order
    pub items: Vec<TrackedItem<T>>,
    /// Create lifecycle status
    pub creating: OperationStatus,
    /// Update lifecycle status
    pub updating: OperationStatus,
    /// Delete lifecycle status
    pub deleting: OperationStatus,
    /// Records whose creation failed, with their errors
    pub failed_creations: Vec<FailedCreation<T>>,
}

impl<T> CollectionState<T> {
    /// An idle, empty collection.
    ///
    /// Every track starts at [`OperationStatus::Success`], mirroring an
    /// idle-by-default resource.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: OperationStatus::Success,
            error: None,
            items: Vec::new(),
            creating: OperationStatus::Success,
            updating: OperationStatus::Success,
            deleting: OperationStatus::Success,
            failed_creations: Vec::new(),
        }
    }

    /// Number of tracked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by its cid.
    #[must_use]
    pub fn get(&self, cid: Cid) -> Option<&TrackedItem<T>> {
        self.items.iter().find(|item| item.cid == cid)
    }

    /// Finds the first item whose data matches the predicate.
    pub fn find<P>(&self, mut predicate: P) -> Option<&TrackedItem<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(&item.data))
    }
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemStatus;

    #[test]
    fn fresh_state_is_idle() {
        let state: CollectionState<String> = CollectionState::new();
        assert_eq!(state.status, OperationStatus::Success);
        assert_eq!(state.error, None);
        assert!(state.is_empty());
        assert_eq!(state.creating, OperationStatus::Success);
        assert_eq!(state.updating, OperationStatus::Success);
        assert_eq!(state.deleting, OperationStatus::Success);
        assert!(state.failed_creations.is_empty());
    }

    #[test]
    fn get_finds_by_cid() {
        let mut state: CollectionState<i32> = CollectionState::new();
        state.items.push(TrackedItem::new(
            Cid::from_raw(3),
            10,
            ItemStatus::Success,
        ));
        assert_eq!(state.get(Cid::from_raw(3)).map(|i| i.data), Some(10));
        assert!(state.get(Cid::from_raw(4)).is_none());
    }

    #[test]
    fn find_matches_on_data() {
        let mut state: CollectionState<i32> = CollectionState::new();
        state
            .items
            .push(TrackedItem::new(Cid::from_raw(1), 5, ItemStatus::Success));
        state
            .items
            .push(TrackedItem::new(Cid::from_raw(2), 6, ItemStatus::Success));
        assert_eq!(state.find(|d| *d > 5).map(|i| i.cid), Some(Cid::from_raw(2)));
    }
}
