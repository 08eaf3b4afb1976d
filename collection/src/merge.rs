//! Collection merge engine.
//!
//! Combines the existing item list with an incoming batch of raw records,
//! deduplicating by the configured uniqueness key. For any duplicate key
//! the later entry's data wins while the earlier entry's position is
//! kept, so a repeated fetch/create updates a record in place.

use crate::cid::Cid;
use crate::item::{ItemStatus, TrackedItem};

/// One entry of a merged sequence, prior to normalization.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MergeEntry<T> {
    /// Bookkeeping carried over from a pre-existing envelope; `None` for
    /// a record observed for the first time.
    pub tracked: Option<(Cid, ItemStatus)>,
    /// The record, post-replacement.
    pub data: T,
    /// Whether the incoming batch supplied (or re-supplied) `data`. The
    /// reducer treats these entries as the event's matched set.
    pub from_event: bool,
}

impl<T> MergeEntry<T> {
    fn existing(item: TrackedItem<T>) -> Self {
        Self {
            tracked: Some((item.cid, item.status)),
            data: item.data,
            from_event: false,
        }
    }

    const fn incoming(data: T) -> Self {
        Self {
            tracked: None,
            data,
            from_event: true,
        }
    }
}

/// Merges `incoming` raw records into the `existing` envelope sequence.
///
/// Existing entries keep their original positions; records new to the
/// collection land at the tail in the order supplied. With no key
/// extractor there is no deduplication at all, and a record whose key
/// extracts to `None` never collapses with anything.
pub(crate) fn merge<T, K, F>(
    existing: Vec<TrackedItem<T>>,
    incoming: Vec<T>,
    key_of: Option<&F>,
) -> Vec<MergeEntry<T>>
where
    K: PartialEq,
    F: Fn(&T) -> Option<K> + ?Sized,
{
    let mut merged: Vec<MergeEntry<T>> = Vec::with_capacity(existing.len() + incoming.len());
    // Collections are UI-sized; linear key lookup beats a Hash bound on K.
    let mut seen: Vec<(K, usize)> = Vec::new();

    let entries = existing
        .into_iter()
        .map(MergeEntry::existing)
        .chain(incoming.into_iter().map(MergeEntry::incoming));

    for entry in entries {
        let Some(key) = key_of.and_then(|f| f(&entry.data)) else {
            merged.push(entry);
            continue;
        };
        let slot = seen
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|&(_, index)| merged.get_mut(index));
        match slot {
            Some(earlier) => {
                // Later data wins; the first occurrence keeps its
                // position and (when tracked) its cid.
                earlier.data = entry.data;
                earlier.from_event = earlier.from_event || entry.from_event;
            },
            None => {
                seen.push((key, merged.len()));
                merged.push(entry);
            },
        }
    }

    merged
}
