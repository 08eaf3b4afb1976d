//! # Cruddy Rust Testing
//!
//! Testing utilities and helpers for the Cruddy Rust architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A ready-made collection test environment
//! - Assertion helpers for reducers
//!
//! ## Example
//!
//! ```ignore
//! use cruddy_rust_testing::{mocks::test_environment, ReducerTest};
//!
//! ReducerTest::new(reducer)
//!     .with_env(test_environment())
//!     .given_state(CollectionState::new())
//!     .when_action(CollectionAction::FetchStart)
//!     .then_state(|state| assert_eq!(state.status, OperationStatus::Pending))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use cruddy_rust_core::environment::Clock;


pub use mocks::test_clock;
pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use cruddy_rust_collection::{CollectionEnvironment, MonotonicCids};
    use std::sync::Arc;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use cruddy_rust_testing::mocks::FixedClock;
    /// use cruddy_rust_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Collection environment for tests: a fresh monotonic cid allocator
    /// (first cid `#1`) and the fixed [`test_clock`].
    #[must_use]
    pub fn test_environment() -> CollectionEnvironment {
        CollectionEnvironment::new(Arc::new(MonotonicCids::new()), Arc::new(test_clock()))
    }
}
