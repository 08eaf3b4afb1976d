//! # Cruddy Rust Core
//!
//! Core traits and types for the Cruddy Rust architecture.
//!
//! This crate provides the fundamental abstractions for building
//! collection-oriented, functional state management: a pure [`Reducer`]
//! over owned state, [`Effect`] descriptions for work the surrounding
//! runtime may perform, and dependency-injection traits in
//! [`environment`].
//!
//! ## Core Concepts
//!
//! - **State**: owned domain state for a feature
//! - **Action**: all possible inputs to a reducer (lifecycle events)
//! - **Reducer**: pure function `(State, Action, Environment) → Effects`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional core, imperative shell
//! - Unidirectional data flow
//! - Explicit effects (no hidden I/O)
//! - Dependency injection via Environment
//!
//! ## Example
//!
//! ```
//! use cruddy_rust_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct FlagState {
//!     raised: bool,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum FlagAction {
//!     Raise,
//!     Lower,
//! }
//!
//! struct FlagReducer;
//!
//! impl Reducer for FlagReducer {
//!     type State = FlagState;
//!     type Action = FlagAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Self::State,
//!         action: Self::Action,
//!         _env: &Self::Environment,
//!     ) -> SmallVec<[Effect<Self::Action>; 4]> {
//!         state.raised = matches!(action, FlagAction::Raise);
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

pub mod effect;
pub mod environment;
pub mod reducer;

pub use effect::Effect;
pub use reducer::Reducer;

// Reducers return effects inline for the common small case.
pub use smallvec::{SmallVec, smallvec};
