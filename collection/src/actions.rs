//! Lifecycle actions.
//!
//! Actions are the discrete notifications a transport layer delivers to
//! the collection reducer: one per fetch/create/update/delete phase
//! transition, plus a collection-clearing request. The enum replaces any
//! string-based event naming; the reducer dispatches on variants alone.

use crate::item::TrackedItem;
use serde::{Deserialize, Serialize};

/// Reference to one or more tracked items, as carried by update and
/// delete events.
///
/// A single polymorphic shape covers everything a transport may know
/// about the records it touched: the full record, just its uniqueness
/// key, or a previously observed envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemRef<T, K> {
    /// A raw record. Matched by the configured uniqueness key extracted
    /// from it; also supplies replacement data on update success.
    Data(T),
    /// A bare uniqueness key. Matches status transitions and deletes;
    /// carries no replacement data.
    Key(K),
    /// A tracked envelope. Matched by cid, so it works even for
    /// collections with no configured uniqueness key; its data is the
    /// replacement payload on update success.
    Tracked(TrackedItem<T>),
}

impl<T, K> ItemRef<T, K> {
    /// The replacement payload this reference carries, if any.
    #[must_use]
    pub const fn replacement(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Key(_) => None,
            Self::Tracked(item) => Some(&item.data),
        }
    }
}

/// One lifecycle event for a tracked collection.
///
/// `T` is the application-defined record type; `K` is the uniqueness key
/// type produced by the configured extractor (unused by collections
/// tracking identity purely by cid).
///
/// Update events with `targets: None` broadcast to every tracked item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CollectionAction<T, K> {
    /// A fetch of the resource started
    FetchStart,
    /// A fetch resolved with a batch of records
    FetchSuccess {
        /// Records returned by the fetch
        items: Vec<T>,
    },
    /// A fetch failed
    FetchError {
        /// Transport-supplied error value
        error: String,
    },
    /// Creation of records started.
    ///
    /// The payload is carried for transport fidelity but not applied:
    /// optimistic creation is not implemented.
    CreateStart {
        /// Records whose creation started
        items: Vec<T>,
    },
    /// Records were created remotely
    CreateSuccess {
        /// The created records
        items: Vec<T>,
    },
    /// Creation of records failed
    CreateFailed {
        /// Transport-supplied error value
        error: String,
        /// The records that failed creation
        items: Vec<T>,
    },
    /// Updates started for the referenced items (all items if `None`)
    UpdateStart {
        /// Items being updated; `None` broadcasts to the whole collection
        targets: Option<Vec<ItemRef<T, K>>>,
    },
    /// Updates resolved for the referenced items (all items if `None`)
    UpdateSuccess {
        /// Updated items with replacement data; `None` broadcasts a
        /// status-only transition to the whole collection
        targets: Option<Vec<ItemRef<T, K>>>,
    },
    /// Deletes started for the referenced items
    DeleteStart {
        /// Items being deleted
        targets: Vec<ItemRef<T, K>>,
    },
    /// Deletes resolved; the referenced items leave the collection
    DeleteSuccess {
        /// Items to remove
        targets: Vec<ItemRef<T, K>>,
    },
    /// Clear the item list
    Empty,
}

impl<T, K> CollectionAction<T, K> {
    /// Stable name of the event kind, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchStart => "fetch_start",
            Self::FetchSuccess { .. } => "fetch_success",
            Self::FetchError { .. } => "fetch_error",
            Self::CreateStart { .. } => "create_start",
            Self::CreateSuccess { .. } => "create_success",
            Self::CreateFailed { .. } => "create_failed",
            Self::UpdateStart { .. } => "update_start",
            Self::UpdateSuccess { .. } => "update_success",
            Self::DeleteStart { .. } => "delete_start",
            Self::DeleteSuccess { .. } => "delete_success",
            Self::Empty => "empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cid::Cid;
    use crate::item::ItemStatus;

    #[test]
    fn replacement_payloads() {
        let by_data: ItemRef<i32, i32> = ItemRef::Data(7);
        assert_eq!(by_data.replacement(), Some(&7));

        let by_key: ItemRef<i32, i32> = ItemRef::Key(7);
        assert_eq!(by_key.replacement(), None);

        let by_envelope: ItemRef<i32, i32> =
            ItemRef::Tracked(TrackedItem::new(Cid::from_raw(1), 9, ItemStatus::Success));
        assert_eq!(by_envelope.replacement(), Some(&9));
    }

    #[test]
    fn kinds_are_stable() {
        let action: CollectionAction<i32, i32> = CollectionAction::FetchStart;
        assert_eq!(action.kind(), "fetch_start");
        let action: CollectionAction<i32, i32> = CollectionAction::Empty;
        assert_eq!(action.kind(), "empty");
    }
}
