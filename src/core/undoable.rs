//! The history-tracking state transformer.
//!
//! Wraps a base reducer so that the composite state gains undo, redo, and
//! selective history recording, without touching the base reducer's own
//! transition logic.

use super::action::HistoryAction;
use super::filter::Filter;
use super::history::HistoryState;
use super::snapshot::Snapshot;

/// A reducer lifted to operate on [`HistoryState`].
///
/// The base reducer is a pure function `(action, previous) -> next` where
/// both arguments are optional references:
///
/// - `(None, None)` is the seeding call, made once when no composite state
///   exists yet. The absent action is inert by construction; the reducer
///   must return its initial value and apply no normal action handling.
/// - `(Some(&action), Some(&present))` is every ordinary invocation.
///
/// The produced composite reducer is total: every action yields a valid
/// `HistoryState`, with exhausted-history control actions degrading to
/// identity rather than failing.
///
/// # Example
///
/// ```rust
/// use retrace::{undoable, HistoryAction};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum CounterAction {
///     Increase,
///     Decrease,
/// }
///
/// let counter = undoable(|action: Option<&CounterAction>, state: Option<&i64>| {
///     let current = state.copied().unwrap_or(0);
///     match action {
///         Some(CounterAction::Increase) => current + 1,
///         Some(CounterAction::Decrease) => current - 1,
///         None => current,
///     }
/// });
///
/// let state = counter.reduce(HistoryAction::Forward(CounterAction::Increase), None);
/// assert_eq!(*state.present(), 1);
/// assert_eq!(state.past()[0], 0);
///
/// let state = counter.reduce(HistoryAction::Undo, Some(state));
/// assert_eq!(*state.present(), 0);
/// assert_eq!(state.future()[0], 1);
///
/// let state = counter.reduce(HistoryAction::Redo, Some(state));
/// assert_eq!(*state.present(), 1);
/// ```
pub struct Undoable<T: Snapshot, A, R>
where
    R: Fn(Option<&A>, Option<&T>) -> T,
{
    reducer: R,
    filter: Option<Filter<T, A>>,
}

/// Lift a base reducer into an [`Undoable`] with no filter.
///
/// Equivalent to [`Undoable::new`]; reads better at call sites that chain
/// straight into [`reduce`](Undoable::reduce).
pub fn undoable<T, A, R>(reducer: R) -> Undoable<T, A, R>
where
    T: Snapshot,
    R: Fn(Option<&A>, Option<&T>) -> T,
{
    Undoable::new(reducer)
}

impl<T, A, R> Undoable<T, A, R>
where
    T: Snapshot,
    R: Fn(Option<&A>, Option<&T>) -> T,
{
    /// Wrap a base reducer. All state changes will be recorded.
    pub fn new(reducer: R) -> Self {
        Self {
            reducer,
            filter: None,
        }
    }

    /// Attach a recording filter.
    ///
    /// Actions the filter rejects still change `present`, but leave `past`
    /// and `future` alone — no checkpoint, no discarded future.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::{undoable, Filter, HistoryAction};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// enum Action {
    ///     Set(i64),
    ///     Preview(i64),
    /// }
    ///
    /// let reducer = undoable(|action: Option<&Action>, state: Option<&i64>| {
    ///     match action {
    ///         Some(Action::Set(n)) | Some(Action::Preview(n)) => *n,
    ///         None => *state.unwrap_or(&0),
    ///     }
    /// })
    /// .with_filter(Filter::new(|action: &Action, _candidate: &i64, _state| {
    ///     !matches!(action, Action::Preview(_))
    /// }));
    ///
    /// let state = reducer.reduce(HistoryAction::Forward(Action::Preview(5)), None);
    /// assert_eq!(*state.present(), 5);
    /// assert!(state.past().is_empty()); // previewed, not recorded
    /// ```
    pub fn with_filter(mut self, filter: Filter<T, A>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// The composite state a fresh dispatch chain starts from: empty stacks
    /// around the base reducer's seed value.
    pub fn initial_state(&self) -> HistoryState<T> {
        HistoryState::new((self.reducer)(None, None))
    }

    /// Apply one action to the composite state.
    ///
    /// An absent `state` is seeded via [`initial_state`](Self::initial_state)
    /// before the action is processed, so the very first dispatch may itself
    /// be an undo (a no-op) or a recorded change.
    ///
    /// Control actions manipulate the history directly. Forwarded actions go
    /// to the base reducer; output equal to the current present is dropped
    /// on the floor, output rejected by the filter is absorbed into
    /// `present`, and everything else records a checkpoint and discards any
    /// undone future.
    pub fn reduce(
        &self,
        action: HistoryAction<A>,
        state: Option<HistoryState<T>>,
    ) -> HistoryState<T> {
        let state = state.unwrap_or_else(|| self.initial_state());

        match action {
            HistoryAction::Undo => state.undo(),
            HistoryAction::Redo => state.redo(),
            HistoryAction::UndoAll => state.undo_all(),
            HistoryAction::ClearPast => state.clear_past(),
            HistoryAction::ClearFuture => state.clear_future(),
            HistoryAction::Forward(action) => {
                let candidate = (self.reducer)(Some(&action), Some(state.present()));
                if candidate == *state.present() {
                    // The action had no effect; don't disturb the history.
                    return state;
                }
                match &self.filter {
                    Some(filter) if !filter.allows(&action, &candidate, &state) => {
                        state.absorb(candidate)
                    }
                    _ => state.record(candidate),
                }
            }
        }
    }
}
