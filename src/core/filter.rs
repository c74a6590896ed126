//! Filter predicates for selective history recording.
//!
//! A filter decides, per action, whether a state change earns an undo
//! checkpoint or is absorbed silently into the current present.

use super::history::HistoryState;
use super::snapshot::Snapshot;

/// Pure predicate deciding whether a state-changing action is recorded.
///
/// The transformer consults the filter only for forwarded actions whose
/// reducer output actually differs from the current present. Returning
/// `true` records a checkpoint; returning `false` applies the change to
/// `present` without touching `past` or `future`.
///
/// Arguments, in order: the action, the candidate new present the base
/// reducer produced, and the history state as it stands *before* the
/// present is updated — so `state.present()` is still the value the action
/// is about to replace.
///
/// Filters must be pure and side-effect-free. That is a documented
/// contract, not an enforced one.
///
/// # Example
///
/// ```rust
/// use retrace::Filter;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum EditorAction {
///     Type(char),
///     SaveDraft,
/// }
///
/// // Record keystrokes, absorb autosaves.
/// let filter = Filter::new(|action: &EditorAction, _candidate: &String, _state| {
///     !matches!(action, EditorAction::SaveDraft)
/// });
///
/// let state = retrace::HistoryState::new(String::new());
/// assert!(filter.allows(&EditorAction::Type('a'), &"a".to_string(), &state));
/// assert!(!filter.allows(&EditorAction::SaveDraft, &"a".to_string(), &state));
/// ```
pub struct Filter<T: Snapshot, A> {
    predicate: Box<dyn Fn(&A, &T, &HistoryState<T>) -> bool + Send + Sync>,
}

impl<T: Snapshot, A> Filter<T, A> {
    /// Create a filter from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&A, &T, &HistoryState<T>) -> bool + Send + Sync + 'static,
    {
        Filter {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the filter for an action and its candidate new present.
    ///
    /// `state` is the history before the present is updated.
    pub fn allows(&self, action: &A, candidate: &T, state: &HistoryState<T>) -> bool {
        (self.predicate)(action, candidate, state)
    }
}
