//! Internal collection identifiers.
//!
//! Every record tracked by a collection carries a cid, allocated exactly
//! once when the record is first observed. Cids never change for a given
//! logical record and are never reused within an allocator's lifetime.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier allocated to a tracked record.
///
/// Distinct from any application-level identity: a collection configured
/// without a uniqueness key relies on cids alone to tell records apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cid(u64);

impl Cid {
    /// Creates a cid from its raw value.
    ///
    /// Intended for deserialization and tests; live collections receive
    /// cids from a [`CidAllocator`].
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Cid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocates cids for newly observed records.
///
/// Implementations must hand out a value distinct from every previously
/// allocated one for as long as the allocator lives. Monotonicity is
/// sufficient; cryptographic strength is not required.
pub trait CidAllocator: Send + Sync {
    /// Allocates the next cid.
    fn next(&self) -> Cid;
}

/// Monotonic counter allocator.
///
/// Starts at 1 and increments per allocation. Relaxed ordering suffices:
/// allocation is the only write and callers never order other memory
/// operations against it.
#[derive(Debug, Default)]
pub struct MonotonicCids {
    next: AtomicU64,
}

impl MonotonicCids {
    /// Creates an allocator whose first cid is `#1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl CidAllocator for MonotonicCids {
    fn next(&self) -> Cid {
        Cid(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_cids_never_repeat() {
        let cids = MonotonicCids::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(cids.next()));
        }
    }

    #[test]
    fn monotonic_cids_start_at_one() {
        let cids = MonotonicCids::new();
        assert_eq!(cids.next(), Cid::from_raw(1));
        assert_eq!(cids.next(), Cid::from_raw(2));
    }

    #[test]
    fn cid_display() {
        assert_eq!(Cid::from_raw(42).to_string(), "#42");
    }
}
