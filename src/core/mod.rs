//! The pure functional core of the history transformer.
//!
//! This module contains everything with no side effects:
//! - The `Snapshot` constraint on wrapped state types
//! - The `HistoryAction` vocabulary
//! - The `HistoryState` past/present/future composite
//! - Filter predicates for selective recording
//! - The `Undoable` transformer itself
//!
//! State is threaded explicitly, value in and value out; the imperative
//! shell lives in [`crate::store`].

mod action;
mod filter;
mod history;
mod snapshot;
mod undoable;

pub use action::HistoryAction;
pub use filter::Filter;
pub use history::HistoryState;
pub use snapshot::Snapshot;
pub use undoable::{undoable, Undoable};
