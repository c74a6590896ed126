//! Retrace: undo and redo for reducer-driven state.
//!
//! Retrace wraps an existing deterministic reducer — any pure function
//! `(action, previous state) -> new state` — so that the resulting state
//! carries its own history: every recorded change can be undone, redone,
//! rewound wholesale, or selectively left out of the record. The base
//! reducer is never modified; it does not even know the history exists.
//!
//! # Core Concepts
//!
//! - **Snapshot**: the wrapped state type; each history entry is a full copy
//! - **HistoryState**: the `past` / `present` / `future` composite
//! - **HistoryAction**: `Undo`, `Redo`, `UndoAll`, `ClearPast`,
//!   `ClearFuture`, plus `Forward` for everything the base reducer handles
//! - **Filter**: an optional predicate that lets an action change state
//!   without earning an undo checkpoint
//! - **Store**: an optional imperative shell that threads the state for you
//!
//! The core is pure: state goes in, state comes out, and nothing ever
//! fails — exhausted history makes undo and redo silent no-ops.
//!
//! # Example
//!
//! ```rust
//! use retrace::{undoable, HistoryAction};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum CounterAction {
//!     Increase,
//!     Decrease,
//! }
//!
//! let counter = undoable(|action: Option<&CounterAction>, state: Option<&i64>| {
//!     let current = state.copied().unwrap_or(0);
//!     match action {
//!         Some(CounterAction::Increase) => current + 1,
//!         Some(CounterAction::Decrease) => current - 1,
//!         None => current,
//!     }
//! });
//!
//! // First dispatch seeds the history from the reducer.
//! let state = counter.reduce(HistoryAction::Forward(CounterAction::Increase), None);
//! assert_eq!(*state.present(), 1);
//! assert_eq!(state.past()[0], 0);
//!
//! let state = counter.reduce(HistoryAction::Undo, Some(state));
//! assert_eq!(*state.present(), 0);
//!
//! let state = counter.reduce(HistoryAction::Redo, Some(state));
//! assert_eq!(*state.present(), 1);
//! ```

pub mod core;
pub mod store;

// Re-export commonly used types
pub use crate::core::{undoable, Filter, HistoryAction, HistoryState, Snapshot, Undoable};
pub use crate::store::{Store, StoreError, SubscriptionToken};
