//! # Cruddy Rust Collection
//!
//! A reducer factory for collections of remotely-sourced entities.
//!
//! One [`CollectionReducer`] instance tracks one CRUD resource type: the
//! item list itself plus fetch/create/update/delete lifecycle status and
//! error capture. The surrounding container dispatches
//! [`CollectionAction`] values (delivered by whatever transport issues
//! the underlying requests) and reads back [`CollectionState`].
//!
//! Records are matched across events by an optional application-defined
//! uniqueness key ([`CollectionConfig::unique_by`]) and by an internally
//! allocated [`Cid`] that never changes once assigned.
//!
//! ## Example
//!
//! ```
//! use cruddy_rust_collection::{
//!     CollectionAction, CollectionConfig, CollectionEnvironment, CollectionReducer,
//!     CollectionState, MonotonicCids,
//! };
//! use cruddy_rust_core::{environment::SystemClock, reducer::Reducer};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let reducer = CollectionReducer::new(
//!     CollectionConfig::new().unique_by(|u: &User| Some(u.id)),
//! );
//! let env = CollectionEnvironment::new(
//!     Arc::new(MonotonicCids::new()),
//!     Arc::new(SystemClock),
//! );
//! let mut state = CollectionState::new();
//!
//! reducer.reduce(
//!     &mut state,
//!     CollectionAction::FetchSuccess {
//!         items: vec![User { id: 1, name: "Ada".to_string() }],
//!     },
//!     &env,
//! );
//!
//! assert_eq!(state.len(), 1);
//! ```

pub mod actions;
pub mod cid;
pub mod item;
mod merge;
pub mod reducer;
pub mod state;

pub use actions::{CollectionAction, ItemRef};
pub use cid::{Cid, CidAllocator, MonotonicCids};
pub use item::{ItemStatus, TrackedItem};
pub use reducer::{CollectionConfig, CollectionEnvironment, CollectionReducer, KeyFn};
pub use state::{CollectionState, FailedCreation, OperationStatus};
