//! The past/present/future composite state.
//!
//! A `HistoryState` wraps a snapshot value together with two stacks of
//! full-copy history entries. All operations are pure: they consume the
//! value and return the successor, leaving state threading to the caller.

use super::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A snapshot value together with its recorded history.
///
/// `past` is ordered most-recent-first: index 0 is the state that held
/// immediately before `present`. `future` is ordered nearest-first: index 0
/// is the state that becomes `present` on the next redo. Reading the whole
/// chronology oldest-to-newest therefore means walking `past` from the back,
/// then `present`, then `future` from the front.
///
/// Both stacks grow without bound; callers needing bounded memory must trim
/// on their side.
///
/// # Example
///
/// ```rust
/// use retrace::HistoryState;
///
/// let state = HistoryState::new(0i64);
/// assert_eq!(*state.present(), 0);
/// assert!(!state.can_undo());
///
/// let state = state.record(1).record(2);
/// assert_eq!(*state.present(), 2);
/// assert_eq!(state.past()[0], 1);
/// assert_eq!(state.past()[1], 0);
///
/// let state = state.undo();
/// assert_eq!(*state.present(), 1);
/// assert_eq!(state.future()[0], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryState<T: Snapshot> {
    past: VecDeque<T>,
    present: T,
    future: VecDeque<T>,
}

impl<T: Snapshot> HistoryState<T> {
    /// Wrap a present value with empty history.
    pub fn new(present: T) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
        }
    }

    /// Assemble a history from explicit parts.
    ///
    /// `past` most-recent-first, `future` nearest-first, matching the
    /// ordering of [`past()`](Self::past) and [`future()`](Self::future).
    /// Chiefly useful for seeding tests and restoring inspected state.
    pub fn from_parts(past: Vec<T>, present: T, future: Vec<T>) -> Self {
        Self {
            past: past.into(),
            present,
            future: future.into(),
        }
    }

    /// The current value of the wrapped state.
    pub fn present(&self) -> &T {
        &self.present
    }

    /// Recorded entries, most recent first.
    pub fn past(&self) -> &VecDeque<T> {
        &self.past
    }

    /// Undone entries, nearest future first.
    pub fn future(&self) -> &VecDeque<T> {
        &self.future
    }

    /// Whether an undo would change anything.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo would change anything.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Step back to the most recent past entry.
    ///
    /// The old `present` moves to the front of `future`. Identity when
    /// `past` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::HistoryState;
    ///
    /// let state = HistoryState::new(0i64).record(1);
    /// let state = state.undo();
    /// assert_eq!(*state.present(), 0);
    /// assert!(state.past().is_empty());
    /// assert_eq!(state.future()[0], 1);
    ///
    /// // Undo with no past is identity.
    /// let state = state.undo();
    /// assert_eq!(*state.present(), 0);
    /// ```
    pub fn undo(mut self) -> Self {
        if let Some(previous) = self.past.pop_front() {
            let displaced = std::mem::replace(&mut self.present, previous);
            self.future.push_front(displaced);
        }
        self
    }

    /// Step forward to the nearest future entry.
    ///
    /// The old `present` moves to the front of `past`. Identity when
    /// `future` is empty.
    pub fn redo(mut self) -> Self {
        if let Some(next) = self.future.pop_front() {
            let displaced = std::mem::replace(&mut self.present, next);
            self.past.push_front(displaced);
        }
        self
    }

    /// Rewind to the oldest recorded entry.
    ///
    /// Equivalent to undoing until `past` is empty: every snapshot newer
    /// than the oldest one ends up in `future`, ahead of anything `future`
    /// already held, so redoing step by step replays the same chronology.
    /// Identity when `past` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::HistoryState;
    ///
    /// let state = HistoryState::new(0i64).record(1).record(2).record(3);
    /// let state = state.undo_all();
    /// assert_eq!(*state.present(), 0);
    /// assert!(state.past().is_empty());
    /// assert_eq!(state.future(), &[1, 2, 3]);
    /// ```
    pub fn undo_all(mut self) -> Self {
        while self.can_undo() {
            self = self.undo();
        }
        self
    }

    /// Drop all past entries. `present` and `future` are untouched.
    pub fn clear_past(mut self) -> Self {
        self.past.clear();
        self
    }

    /// Drop all future entries. `past` and `present` are untouched.
    pub fn clear_future(mut self) -> Self {
        self.future.clear();
        self
    }

    /// Make `next` the present and record the old present as a checkpoint.
    ///
    /// The old `present` is pushed onto the front of `past` and `future` is
    /// discarded: recording forks the history, and the undone branch is
    /// gone.
    pub fn record(mut self, next: T) -> Self {
        let displaced = std::mem::replace(&mut self.present, next);
        self.past.push_front(displaced);
        self.future.clear();
        self
    }

    /// Make `next` the present without recording a checkpoint.
    ///
    /// `past` and `future` are untouched: the change is absorbed into the
    /// current present, and a later undo skips over it.
    pub fn absorb(mut self, next: T) -> Self {
        self.present = next;
        self
    }
}
