//! Tracked-item envelopes.
//!
//! A collection never stores raw records directly. Each record is wrapped
//! in a [`TrackedItem`] carrying the internally allocated [`Cid`] and the
//! record's per-item lifecycle status.

use crate::cid::Cid;
use serde::{Deserialize, Serialize};

/// Per-item lifecycle status.
///
/// Set when the item is first normalized and replaced on every later
/// lifecycle event that targets the item. A "start" status with no
/// matching later event stays set indefinitely; no timeout applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Awaiting the outcome of the operation that introduced the item
    Pending,
    /// At rest; the last operation touching the item succeeded
    Success,
    /// The last operation touching the item failed
    Error,
    /// An update for the item is in flight
    Updating,
    /// A delete for the item is in flight
    Deleting,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
            Self::Updating => "updating",
            Self::Deleting => "deleting",
        };
        f.write_str(s)
    }
}

/// Envelope holding one tracked record.
///
/// Owned exclusively by its collection: created on first observation of
/// a raw record, replaced wholesale on every lifecycle event referencing
/// it, dropped on successful delete or collection clear.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackedItem<T> {
    /// Internally allocated identifier; stable for the record's lifetime
    pub cid: Cid,
    /// The application-defined record
    pub data: T,
    /// Per-item lifecycle status
    pub status: ItemStatus,
}

impl<T> TrackedItem<T> {
    /// Wraps a record in an envelope.
    #[must_use]
    pub const fn new(cid: Cid, data: T, status: ItemStatus) -> Self {
        Self { cid, data, status }
    }
}
